//! Compile-time tuple projections.
//!
//! A *position list* is a zero-sized type naming a sequence of tuple positions. Projecting a
//! tuple through a position list builds a new tuple from the selected elements, in list order.
//! Every position is checked against the tuple's arity by the type checker, so a projection that
//! compiles cannot go out of bounds.
//!
//! ```
//! use omega::{positions, project, Ascending, Descending, Show};
//!
//! let t = (5, 6, 7, "yuppi!", 8, 9, 10.5);
//!
//! assert_eq!(project(t, Ascending::<1, 3>), (6, 7, "yuppi!"));
//! assert_eq!(project(t, Descending::<5, 1>), (9, 8, "yuppi!", 7, 6));
//! assert_eq!(project(t, positions![3, 2, 1, 6]), ("yuppi!", 7, 6, 10.5));
//! assert_eq!(project(t, positions![1..=3]), project(t, Ascending::<1, 3>));
//!
//! assert_eq!(Show(&t).to_string(), "<5, 6, 7, yuppi!, 8, 9, 10.5>");
//! ```
//!
//! The fixed accessors in [`accessor`] (`head`, `tail`, `take`, ...) are projections through
//! well-known position lists. [`invoke()`] spreads a tuple into the arguments of a call, and
//! [`array_to_tuple`] turns `[T; N]` into an `N`-tuple.
//!
//! Tuples of up to [`MAX_ARITY`] elements are supported.

pub mod accessor;
pub mod array;
pub mod display;
pub mod index;
pub mod invoke;
pub mod project;
pub mod tuple;

pub use accessor::{
    drop, head, init, last, reverse, tail, take, Head, Init, Last, Reverse, Skip, Tail, Take,
};
pub use array::{array_to_tuple, IntoTuple};
pub use display::{render, show, Render, Show};
pub use index::{Ascending, Descending, Idx, PositionList};
pub use invoke::{invoke, Invoke};
pub use project::{project, Project};
pub use tuple::{Element, Tuple};

/// The largest tuple arity with generated implementations.
pub const MAX_ARITY: usize = 12;

#[doc(hidden)]
pub mod __private {
    pub use omega_macros::positions;
}

/// Builds an explicit position list.
///
/// Each item is a constant position, an inclusive range `B..=E` or a half-open range `B..E`.
/// An inclusive range counts down when `B > E`; a half-open range always counts up. Any other
/// expression is taken as a constant position evaluated by the compiler, such as a const
/// generic parameter.
///
/// ```
/// use omega::{positions, Idx, PositionList};
///
/// let list = positions![0, 5..=3, 1..3];
/// assert_eq!(list, (Idx::<0>, Idx::<5>, Idx::<4>, Idx::<3>, Idx::<1>, Idx::<2>));
///
/// fn pair<const N: usize>() -> (Idx<N>, Idx<N>) {
///     positions![N, N]
/// }
/// assert_eq!(pair::<2>(), (Idx::<2>, Idx::<2>));
/// assert_eq!(<(Idx<2>, Idx<2>)>::positions(), [2, 2]);
/// ```
///
/// Negative positions are rejected:
///
/// ```compile_fail
/// let list = omega::positions![-1];
/// ```
#[macro_export]
macro_rules! positions {
    ($($item:tt)*) => {
        $crate::__private::positions!($crate; $($item)*)
    };
}
