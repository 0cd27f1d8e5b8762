use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

use super::{lit, Receiver};
use crate::Arities;

/// Position list an accessor delegates to, as `(type, value)` tokens.
fn range(direction: &str, begin: usize, end: usize) -> (TokenStream, TokenStream) {
    let marker = Ident::new(direction, Span::call_site());
    let (begin, end) = (lit(begin), lit(end));
    (
        quote!(crate::index::#marker<#begin, #end>),
        quote!(crate::index::#marker::<#begin, #end>),
    )
}

fn empty_list() -> (TokenStream, TokenStream) {
    (quote!(()), quote!(()))
}

/// One accessor impl forwarding to `Project` with the given list.
fn delegate(
    receiver: Receiver,
    arity: usize,
    accessor: TokenStream,
    method: &str,
    (list_type, list_value): (TokenStream, TokenStream),
) -> TokenStream {
    let generics = receiver.generics(arity, TokenStream::new());
    let self_type = receiver.self_type(arity);
    let method = Ident::new(method, Span::call_site());
    let output = quote!(<#self_type as crate::project::Project<#list_type>>::Output);
    quote! {
        impl #generics crate::accessor::#accessor for #self_type {
            type Output = #output;

            #[inline]
            fn #method(self) -> #output {
                crate::project::Project::project(self, #list_value)
            }
        }
    }
}

/// `Head`, `Last`, `Tail`, `Reverse`, `Take<K>` and `Skip<K>` for every receiver. `Init` is a
/// blanket impl over `Reverse` and `Tail`.
pub fn generate(arities: &Arities) -> TokenStream {
    let mut output = TokenStream::new();
    for arity in arities.iter() {
        for receiver in Receiver::ALL {
            output.extend(match arity {
                0 => terminal(receiver),
                arity => accessors(receiver, arity),
            });
        }
    }
    output
}

// The empty tuple only reverses, to itself.
fn terminal(receiver: Receiver) -> TokenStream {
    let generics = receiver.generics(0, TokenStream::new());
    let self_type = receiver.self_type(0);
    quote! {
        impl #generics crate::accessor::Reverse for #self_type {
            type Output = ();

            #[inline]
            fn reverse(self) {}
        }
    }
}

fn accessors(receiver: Receiver, arity: usize) -> TokenStream {
    let last = arity - 1;
    let mut output = TokenStream::new();
    output.extend(delegate(
        receiver,
        arity,
        quote!(Head),
        "head",
        range("Ascending", 0, 0),
    ));
    output.extend(delegate(
        receiver,
        arity,
        quote!(Last),
        "last",
        range("Ascending", last, last),
    ));
    // for a 1-tuple this is `Ascending<1, 0>`, the empty range
    output.extend(delegate(
        receiver,
        arity,
        quote!(Tail),
        "tail",
        range("Ascending", 1, last),
    ));
    output.extend(delegate(
        receiver,
        arity,
        quote!(Reverse),
        "reverse",
        range("Descending", last, 0),
    ));
    for count in 0..=arity {
        let list = match count {
            0 => empty_list(),
            count => range("Ascending", 0, count - 1),
        };
        let count_lit = lit(count);
        output.extend(delegate(
            receiver,
            arity,
            quote!(Take<#count_lit>),
            "take",
            list,
        ));
        output.extend(delegate(
            receiver,
            arity,
            quote!(Skip<#count_lit>),
            "skip",
            range("Ascending", count, last),
        ));
    }
    output
}
