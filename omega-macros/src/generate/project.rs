use proc_macro2::TokenStream;
use quote::quote;
use zip_clone::ZipClone as _;

use super::position_list::{explicit_list_type, position_params};
use super::{lit, tuple_type, Receiver};
use crate::index::Direction;
use crate::Arities;

/// `Project` for every receiver and every range, explicit list and empty list a tuple of each
/// arity can be projected through.
pub fn generate(arities: &Arities) -> TokenStream {
    let mut output = TokenStream::new();
    for arity in arities.iter() {
        for receiver in Receiver::ALL {
            output.extend(empty_list(receiver, arity));
            output.extend(ranges(receiver, arity));
        }
        // Explicit lists may repeat a position, so they cannot lend the same element mutably
        // twice. Only owned (cloning) and shared receivers are covered.
        if arity > 0 {
            for len in 1..=arities.max {
                output.extend(owned_explicit_list(arity, len));
                output.extend(shared_explicit_list(arity, len));
            }
        }
    }
    output
}

fn empty_list(receiver: Receiver, arity: usize) -> TokenStream {
    let generics = receiver.generics(arity, TokenStream::new());
    let self_type = receiver.self_type(arity);
    quote! {
        impl #generics crate::project::Project<()> for #self_type {
            type Output = ();

            #[inline]
            fn project(self, _: ()) {}
        }
    }
}

fn ranges(receiver: Receiver, arity: usize) -> TokenStream {
    let generics = receiver.generics(arity, TokenStream::new());
    let self_type = receiver.self_type(arity);
    Direction::ALL
        .into_iter()
        .flat_map(|direction| direction.bounds(arity).map(move |bounds| (direction, bounds)))
        .zip_clone((generics, self_type))
        .map(|((direction, (begin, end)), (generics, self_type))| {
            let positions = direction.positions(begin, end);
            let marker = direction.marker();
            let (begin, end) = (lit(begin), lit(end));
            let output = receiver.selection_type(&positions);
            let selection = receiver.selection_expr(&positions);
            quote! {
                impl #generics crate::project::Project<crate::index::#marker<#begin, #end>>
                    for #self_type
                {
                    type Output = #output;

                    #[inline]
                    fn project(self, _: crate::index::#marker<#begin, #end>) -> #output {
                        #selection
                    }
                }
            }
        })
        .collect()
}

fn owned_explicit_list(arity: usize, len: usize) -> TokenStream {
    let params = position_params(len);
    let generics = Receiver::Owned.generics(arity, quote!(#(const #params: usize,)*));
    let self_type = tuple_type(arity);
    let list = explicit_list_type(&params);
    let output = quote!((#(<#self_type as crate::tuple::Element<#params>>::Output,)*));
    quote! {
        impl #generics crate::project::Project<#list> for #self_type
        where
            #(
                #self_type: crate::tuple::Element<#params>,
                <#self_type as crate::tuple::Element<#params>>::Output: Clone,
            )*
        {
            type Output = #output;

            #[inline]
            fn project(self, _: #list) -> #output {
                (#(
                    Clone::clone(crate::tuple::Element::<#params>::element(&self)),
                )*)
            }
        }
    }
}

fn shared_explicit_list(arity: usize, len: usize) -> TokenStream {
    let params = position_params(len);
    let generics = Receiver::Shared.generics(arity, quote!(#(const #params: usize,)*));
    let tuple = tuple_type(arity);
    let self_type = Receiver::Shared.self_type(arity);
    let list = explicit_list_type(&params);
    let output = quote!((#(&'a <#tuple as crate::tuple::Element<#params>>::Output,)*));
    quote! {
        impl #generics crate::project::Project<#list> for #self_type
        where
            #(
                #tuple: crate::tuple::Element<#params>,
                <#tuple as crate::tuple::Element<#params>>::Output: 'a,
            )*
        {
            type Output = #output;

            #[inline]
            fn project(self, _: #list) -> #output {
                (#(crate::tuple::Element::<#params>::element(self),)*)
            }
        }
    }
}
