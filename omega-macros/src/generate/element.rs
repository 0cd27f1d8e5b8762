use proc_macro2::TokenStream;
use quote::quote;

use super::{lit, tuple_type, type_params};
use crate::Arities;

/// `Tuple` and every in-range `Element<I>` for each arity.
pub fn generate(arities: &Arities) -> TokenStream {
    arities
        .iter()
        .map(|arity| {
            let params = type_params(arity);
            let self_type = tuple_type(arity);
            let len = lit(arity);
            let elements = params.iter().enumerate().map(|(index, param)| {
                let position = lit(index);
                let member = syn::Index::from(index);
                quote! {
                    impl<#(#params,)*> crate::tuple::Element<#position> for #self_type {
                        type Output = #param;

                        #[inline]
                        fn element(&self) -> &#param {
                            &self.#member
                        }

                        #[inline]
                        fn element_mut(&mut self) -> &mut #param {
                            &mut self.#member
                        }

                        #[inline]
                        fn into_element(self) -> #param {
                            self.#member
                        }
                    }
                }
            });
            quote! {
                impl<#(#params,)*> crate::tuple::Tuple for #self_type {
                    const ARITY: usize = #len;
                }

                #(#elements)*
            }
        })
        .collect()
}
