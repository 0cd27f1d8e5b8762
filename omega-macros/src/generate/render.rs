use proc_macro2::TokenStream;
use quote::quote;

use super::{tuple_type, type_params};
use crate::Arities;

/// `Render` for tuples of one element or more whose elements are all `Display`. The empty tuple
/// is written out by hand next to the trait.
pub fn generate(arities: &Arities) -> TokenStream {
    arities
        .iter()
        .filter(|&arity| arity > 0)
        .map(|arity| {
            let params = type_params(arity);
            let self_type = tuple_type(arity);
            let first = syn::Index::from(0);
            let rest = (1..arity).map(syn::Index::from);
            quote! {
                impl<#(#params,)*> crate::display::Render for #self_type
                where
                    #(#params: ::core::fmt::Display,)*
                {
                    fn render<W: ::core::fmt::Write>(&self, out: &mut W) -> ::core::fmt::Result {
                        out.write_char('<')?;
                        write!(out, "{}", self.#first)?;
                        #(
                            out.write_str(", ")?;
                            write!(out, "{}", self.#rest)?;
                        )*
                        out.write_char('>')
                    }
                }
            }
        })
        .collect()
}
