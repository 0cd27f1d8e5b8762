//! Projection: a new tuple whose element `k` is the source element at position `k` of a
//! position list.
//!
//! How the source is handed over decides what the result holds:
//!
//! * by value, range projections move the selected elements out; explicit lists clone them,
//!   since an explicit list may name the same position twice;
//! * through `&'a`, every projection lends `&'a` references into the source;
//! * through `&'a mut`, range projections lend `&'a mut` references into the source. Explicit
//!   lists are not available here, because a repeated position would borrow one element
//!   mutably twice.
//!
//! ```
//! use omega::{positions, project, Ascending, Descending};
//!
//! let t = (5, 6, 7, "yuppi!", 8, 9, 10.5);
//! assert_eq!(project(t, Ascending::<1, 3>), (6, 7, "yuppi!"));
//! assert_eq!(project(t, Descending::<5, 1>), (9, 8, "yuppi!", 7, 6));
//! assert_eq!(project(t, positions![3, 2, 1, 6]), ("yuppi!", 7, 6, 10.5));
//!
//! let mut u = (1, String::from("a"), 2);
//! let (first, middle) = project(&mut u, Ascending::<0, 1>);
//! *first += 10;
//! middle.push('b');
//! assert_eq!(u, (11, String::from("ab"), 2));
//! ```

use crate::index::PositionList;

/// Builds the tuple selected by the position list `L`.
///
/// Positions at or past the tuple's arity are rejected at compile time:
///
/// ```compile_fail
/// use omega::{project, Ascending};
///
/// project((1, 2, 3), Ascending::<1, 3>);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be projected through `{L}`",
    note = "every position must be below the tuple's arity",
    note = "through `&mut` only `Ascending`, `Descending` and `()` are available"
)]
pub trait Project<L: PositionList> {
    type Output;

    fn project(self, positions: L) -> Self::Output;
}

pub fn project<T, L>(tuple: T, positions: L) -> T::Output
where
    T: Project<L>,
    L: PositionList,
{
    tuple.project(positions)
}

omega_macros::impl_projections!(0..=12);
