//! Token helpers shared by the per-concern generators.

use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};

pub mod accessor;
pub mod array;
pub mod element;
pub mod invoke;
pub mod position_list;
pub mod project;
pub mod render;

/// How a tuple reaches a generated impl.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Receiver {
    /// `(T0, T1)`: elements are moved out.
    Owned,
    /// `&'a (T0, T1)`: elements are lent as `&'a Ti`.
    Shared,
    /// `&'a mut (T0, T1)`: elements are lent as `&'a mut Ti`.
    Exclusive,
}

impl Receiver {
    pub const ALL: [Receiver; 3] = [Receiver::Owned, Receiver::Shared, Receiver::Exclusive];

    /// Generic parameters of an impl over a tuple of `arity` elements, followed by `extra`.
    pub fn generics(self, arity: usize, extra: TokenStream) -> TokenStream {
        let params = type_params(arity);
        match self {
            Receiver::Owned => quote!(<#(#params,)* #extra>),
            Receiver::Shared | Receiver::Exclusive => quote!(<'a, #(#params,)* #extra>),
        }
    }

    pub fn self_type(self, arity: usize) -> TokenStream {
        let tuple = tuple_type(arity);
        match self {
            Receiver::Owned => tuple,
            Receiver::Shared => quote!(&'a #tuple),
            Receiver::Exclusive => quote!(&'a mut #tuple),
        }
    }

    /// Type under which element `index` leaves the receiver.
    pub fn element_type(self, index: usize) -> TokenStream {
        let param = format_ident!("T{}", index);
        match self {
            Receiver::Owned => quote!(#param),
            Receiver::Shared => quote!(&'a #param),
            Receiver::Exclusive => quote!(&'a mut #param),
        }
    }

    /// Expression taking element `index` out of `self`.
    pub fn element_expr(self, index: usize) -> TokenStream {
        let member = syn::Index::from(index);
        match self {
            Receiver::Owned => quote!(self.#member),
            Receiver::Shared => quote!(&self.#member),
            Receiver::Exclusive => quote!(&mut self.#member),
        }
    }

    /// `(A, B,)` built from the element types at `positions`.
    pub fn selection_type(self, positions: &[usize]) -> TokenStream {
        let types = positions.iter().map(|&index| self.element_type(index));
        quote!((#(#types,)*))
    }

    /// `(self.a, self.b,)` built from the elements at `positions`.
    pub fn selection_expr(self, positions: &[usize]) -> TokenStream {
        let exprs = positions.iter().map(|&index| self.element_expr(index));
        quote!((#(#exprs,)*))
    }
}

pub fn type_params(arity: usize) -> Vec<Ident> {
    (0..arity).map(|i| format_ident!("T{}", i)).collect()
}

pub fn tuple_type(arity: usize) -> TokenStream {
    let params = type_params(arity);
    quote!((#(#params,)*))
}

/// An integer literal without a type suffix, for const generic arguments.
pub fn lit(value: usize) -> Literal {
    Literal::usize_unsuffixed(value)
}
