//! Position lists: which source positions fill which result positions.
//!
//! A position list is a zero-sized type whose const parameters spell out the positions, so the
//! list is known before the program runs and every projection through it is checked by the
//! compiler. Because the markers are unit structs, the same path names the type and its only
//! value:
//!
//! ```
//! use omega::{Ascending, Descending, Idx, PositionList};
//!
//! assert_eq!(<Ascending<1, 3>>::positions(), [1, 2, 3]);
//! assert_eq!(<Descending<3, 1>>::positions(), [3, 2, 1]);
//! assert_eq!(<(Idx<3>, Idx<2>, Idx<1>, Idx<6>)>::positions(), [3, 2, 1, 6]);
//! assert!(<()>::positions().is_empty());
//! ```
//!
//! A range whose bounds are out of order for its direction is empty rather than an error:
//!
//! ```
//! use omega::{Ascending, Descending, PositionList};
//!
//! assert_eq!(<Ascending<4, 2>>::LEN, 0);
//! assert_eq!(<Descending<0, 1>>::LEN, 0);
//! ```

/// A single position, the element of explicit lists such as `(Idx<3>, Idx<0>)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Idx<const I: usize>;

impl<const I: usize> Idx<I> {
    pub const POSITION: usize = I;
}

/// The ascending range `[B, B + 1, ..., E]`; empty when `B > E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ascending<const B: usize, const E: usize>;

/// The descending range `[B, B - 1, ..., E]`; empty when `B < E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Descending<const B: usize, const E: usize>;

/// An ordered sequence of positions, known at compile time.
///
/// Implemented for [`Ascending`], [`Descending`], the empty list `()` and explicit lists
/// `(Idx<I0>, ..., Idx<In>)` of up to twelve positions.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a position list",
    note = "use `Ascending<B, E>`, `Descending<B, E>`, `()` or a tuple of `Idx<I>` built with `positions!`"
)]
pub trait PositionList {
    /// Number of positions, which is also the arity of a projection through this list.
    const LEN: usize;

    /// Position `k` of the list, or `None` past its end.
    fn position(k: usize) -> Option<usize>;

    /// Every position, in list order.
    fn positions() -> Vec<usize> {
        (0..Self::LEN).filter_map(Self::position).collect()
    }
}

impl<const B: usize, const E: usize> PositionList for Ascending<B, E> {
    const LEN: usize = if B <= E { E - B + 1 } else { 0 };

    fn position(k: usize) -> Option<usize> {
        (k < Self::LEN).then(|| B + k)
    }
}

impl<const B: usize, const E: usize> PositionList for Descending<B, E> {
    const LEN: usize = if B >= E { B - E + 1 } else { 0 };

    fn position(k: usize) -> Option<usize> {
        (k < Self::LEN).then(|| B - k)
    }
}

impl PositionList for () {
    const LEN: usize = 0;

    fn position(_: usize) -> Option<usize> {
        None
    }
}

omega_macros::impl_position_lists!(0..=12);
