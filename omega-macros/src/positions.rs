use proc_macro2::{TokenStream, TokenTree};
use quote::quote;
use syn::parse::Parser as _;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned as _;
use syn::{Expr, RangeLimits, Token};
use zip_clone::ZipClone as _;

use crate::constant::{evaluate_range, evaluate_usize};
use crate::generate::lit;
use crate::index::{exclusive, inclusive};

enum Position {
    Fixed(usize),
    // not a constant we can fold, e.g. a const generic parameter
    Deferred(Expr),
}

// `omega::positions![3, 2, 1, 6]` reaches us as `$crate; 3, 2, 1, 6`.
pub fn expand(input: TokenStream) -> syn::Result<TokenStream> {
    let mut tokens = input.into_iter();
    let krate = tokens
        .by_ref()
        .take_while(|token| !matches!(token, TokenTree::Punct(punct) if punct.as_char() == ';'))
        .collect::<TokenStream>();
    if krate.is_empty() {
        abort!(krate, "expected the crate path before `;`");
    }
    let items = Punctuated::<Expr, Token![,]>::parse_terminated.parse2(tokens.collect())?;
    let mut positions = Vec::new();
    for item in &items {
        positions.extend(positions_of(item)?);
    }
    let markers = positions
        .into_iter()
        .zip_clone(krate)
        .map(|(position, krate)| match position {
            Position::Fixed(index) => {
                let index = lit(index);
                quote!(#krate::Idx::<#index>)
            }
            Position::Deferred(expr) => quote!(#krate::Idx::<{ #expr }>),
        });
    Ok(quote!((#(#markers,)*)))
}

fn positions_of(item: &Expr) -> syn::Result<Vec<Position>> {
    if let Some(range) = evaluate_range(item) {
        let Some(start) = &range.start else {
            abort!(range, "position range needs a start");
        };
        let Some(end) = &range.end else {
            abort!(range, "position range needs an end");
        };
        let Some(start) = evaluate_usize(start) else {
            abort!(start, "range bounds must be constant positions");
        };
        let Some(end_value) = evaluate_usize(end) else {
            abort!(end, "range bounds must be constant positions");
        };
        let positions = match range.limits {
            RangeLimits::Closed(_) => inclusive(start, end_value),
            RangeLimits::HalfOpen(_) => exclusive(start, end_value),
        };
        return Ok(positions.into_iter().map(Position::Fixed).collect());
    }
    if let Expr::Unary(unary) = item {
        if let syn::UnOp::Neg(_) = unary.op {
            abort!(item, "positions cannot be negative");
        }
    }
    match evaluate_usize(item) {
        Some(index) => Ok(vec![Position::Fixed(index)]),
        None => Ok(vec![Position::Deferred(item.clone())]),
    }
}
