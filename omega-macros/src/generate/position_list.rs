use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use super::lit;
use crate::Arities;

/// Const parameters `I0, I1, ...` naming the positions of an explicit list.
pub fn position_params(len: usize) -> Vec<Ident> {
    (0..len).map(|i| format_ident!("I{}", i)).collect()
}

/// `(Idx<I0>, Idx<I1>,)`
pub fn explicit_list_type(params: &[Ident]) -> TokenStream {
    quote!((#(crate::index::Idx<#params>,)*))
}

/// `PositionList` for explicit lists of every length up to the largest arity. The empty list is
/// written out by hand next to the trait.
pub fn generate(arities: &Arities) -> TokenStream {
    (1..=arities.max)
        .map(|len| {
            let params = position_params(len);
            let list = explicit_list_type(&params);
            let len = lit(len);
            quote! {
                impl<#(const #params: usize,)*> crate::index::PositionList for #list {
                    const LEN: usize = #len;

                    fn position(k: usize) -> Option<usize> {
                        [#(#params),*].get(k).copied()
                    }
                }
            }
        })
        .collect()
}
