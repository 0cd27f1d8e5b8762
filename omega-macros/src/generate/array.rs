use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::lit;
use crate::index::exclusive;
use crate::Arities;

/// `IntoTuple` for `[T; N]` and `&[T; N]`: the array is destructured along the positions
/// `0..N` and reassembled as a tuple.
pub fn generate(arities: &Arities) -> TokenStream {
    arities
        .iter()
        .map(|len| {
            let bindings: Vec<_> = exclusive(0, len)
                .into_iter()
                .map(|position| format_ident!("x{}", position))
                .collect();
            let owned = bindings.iter().map(|_| quote!(T));
            let shared = bindings.iter().map(|_| quote!(&'a T));
            let len = lit(len);
            quote! {
                impl<T> crate::array::IntoTuple for [T; #len] {
                    type Output = (#(#owned,)*);

                    #[inline]
                    fn into_tuple(self) -> Self::Output {
                        let [#(#bindings),*] = self;
                        (#(#bindings,)*)
                    }
                }

                impl<'a, T> crate::array::IntoTuple for &'a [T; #len] {
                    type Output = (#(#shared,)*);

                    #[inline]
                    fn into_tuple(self) -> Self::Output {
                        let [#(#bindings),*] = self;
                        (#(#bindings,)*)
                    }
                }
            }
        })
        .collect()
}
