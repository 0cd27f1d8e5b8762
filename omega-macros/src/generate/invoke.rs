use proc_macro2::TokenStream;
use quote::quote;

use super::Receiver;
use crate::Arities;

/// `Invoke<F>` for every receiver: the callable takes one parameter per element, in order, as
/// the receiver hands them out.
pub fn generate(arities: &Arities) -> TokenStream {
    let mut output = TokenStream::new();
    for arity in arities.iter() {
        for receiver in Receiver::ALL {
            let generics = receiver.generics(arity, quote!(F, R));
            let self_type = receiver.self_type(arity);
            let params = (0..arity).map(|index| receiver.element_type(index));
            let args = (0..arity).map(|index| receiver.element_expr(index));
            output.extend(quote! {
                impl #generics crate::invoke::Invoke<F> for #self_type
                where
                    F: FnOnce(#(#params),*) -> R,
                {
                    type Output = R;

                    #[inline]
                    fn invoke(self, f: F) -> R {
                        f(#(#args),*)
                    }
                }
            });
        }
    }
    output
}
