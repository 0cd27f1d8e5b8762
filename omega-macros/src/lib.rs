//! Code generators for the `omega` crate.
//!
//! Rust has no variadic generics, so every tuple trait in `omega` is implemented once per arity.
//! Each `impl_*!` macro here takes the arity range to cover and expands to those impls:
//!
//! ```ignore
//! omega_macros::impl_projections!(0..=12);
//! ```
//!
//! The generated code names `omega`'s items through `crate::`, so the generators are only
//! meaningful when invoked from inside `omega` itself. `positions!` is the one macro meant for
//! users; `omega` re-exports it behind a `macro_rules!` wrapper that supplies its own path.

use proc_macro2::TokenStream;
use syn::spanned::Spanned as _;
use syn::{Expr, RangeLimits};

use crate::constant::{evaluate_range, evaluate_usize};

macro_rules! abort {
    ($spanned:expr, $message:expr) => {
        return Err(syn::Error::new($spanned.span(), $message))
    };
}

mod constant;
mod generate;
mod index;
mod positions;

/// Implements `Tuple` and `Element<I>` for each arity.
#[proc_macro]
pub fn impl_elements(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand_arities(input, generate::element::generate)
}

/// Implements `PositionList` for explicit lists `(Idx<I0>, ...)` up to the largest arity.
#[proc_macro]
pub fn impl_position_lists(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand_arities(input, generate::position_list::generate)
}

/// Implements `Project` for ranges, explicit lists and the empty list.
#[proc_macro]
pub fn impl_projections(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand_arities(input, generate::project::generate)
}

/// Implements the derived accessors on top of `Project`.
#[proc_macro]
pub fn impl_accessors(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand_arities(input, generate::accessor::generate)
}

/// Implements `Invoke<F>` for every receiver.
#[proc_macro]
pub fn impl_invoke(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand_arities(input, generate::invoke::generate)
}

/// Implements `Render` for tuples whose elements are all `Display`.
#[proc_macro]
pub fn impl_render(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand_arities(input, generate::render::generate)
}

/// Implements `IntoTuple` for arrays and array references.
#[proc_macro]
pub fn impl_into_tuple(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand_arities(input, generate::array::generate)
}

/// Builds an explicit position list. Use `omega::positions!` instead.
#[doc(hidden)]
#[proc_macro]
pub fn positions(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    positions::expand(TokenStream::from(input))
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_arities(
    input: proc_macro::TokenStream,
    generate: fn(&Arities) -> TokenStream,
) -> proc_macro::TokenStream {
    Arities::parse(TokenStream::from(input))
        .map(|arities| generate(&arities))
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Inclusive span of tuple sizes to generate impls for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Arities {
    min: usize,
    max: usize,
}

impl Arities {
    fn parse(args: TokenStream) -> syn::Result<Self> {
        // impl_projections!(0..=12)
        let expr = syn::parse2::<Expr>(args)?;
        let Some(range) = evaluate_range(&expr) else {
            abort!(expr, "expected a range of arities");
        };
        let min = match &range.start {
            Some(start) => match evaluate_usize(start) {
                Some(min) => min,
                None => abort!(start, "invalid start"),
            },
            None => 0,
        };
        let Some(end) = &range.end else {
            abort!(range, "range cannot be unbounded at end");
        };
        let Some(end_value) = evaluate_usize(end) else {
            abort!(end, "invalid end");
        };
        let max = match range.limits {
            RangeLimits::HalfOpen(_) => match end_value.checked_sub(1) {
                Some(max) => max,
                None => abort!(end, "invalid end"),
            },
            RangeLimits::Closed(_) => end_value,
        };
        if max < min {
            abort!(range, "nothing to expand");
        }
        Ok(Arities { min, max })
    }

    fn iter(&self) -> std::ops::RangeInclusive<usize> {
        self.min..=self.max
    }
}
