//! `head`, `last`, `tail`, `init`, `reverse`, `take` and `drop`, each a projection through a
//! fixed position list.
//!
//! | accessor      | positions                             |
//! |---------------|---------------------------------------|
//! | `head`        | `Ascending<0, 0>`                     |
//! | `last`        | `Ascending<N - 1, N - 1>`             |
//! | `tail`        | `Ascending<1, N - 1>`                 |
//! | `reverse`     | `Descending<N - 1, 0>`                |
//! | `init`        | `reverse(tail(reverse(t)))`           |
//! | `take::<K>`   | `()` for `K == 0`, else `Ascending<0, K - 1>` |
//! | `drop::<K>`   | `Ascending<K, N - 1>`                 |
//!
//! Like [`project`](crate::project()), every accessor accepts a tuple by value, by `&` or by
//! `&mut` and preserves that access in its result.
//!
//! ```
//! use omega::{drop, head, init, last, reverse, tail, take};
//!
//! let t = (5, 6, 7, "yuppi!", 8, 9, 10.5);
//! assert_eq!(head(t), (5,));
//! assert_eq!(tail(t), (6, 7, "yuppi!", 8, 9, 10.5));
//! assert_eq!(take::<2, _>(t), (5, 6));
//! assert_eq!(drop::<2, _>(t), (7, "yuppi!", 8, 9, 10.5));
//!
//! let r = reverse(("hello", 3.14, 42));
//! assert_eq!(r, (42, 3.14, "hello"));
//! assert_eq!(last(r), ("hello",));
//! assert_eq!(init(r), (42, 3.14));
//!
//! // a 1-tuple has an empty tail
//! assert_eq!(tail((1,)), ());
//! ```
//!
//! The empty tuple has no head, last element, tail or init, and nothing can be taken from or
//! dropped from it:
//!
//! ```compile_fail
//! omega::head(());
//! ```
//!
//! ```compile_fail
//! omega::take::<3, _>((1, 2));
//! ```

#[diagnostic::on_unimplemented(
    message = "`{Self}` has no first element",
    note = "`head` needs a tuple of one to twelve elements"
)]
pub trait Head {
    type Output;

    fn head(self) -> Self::Output;
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` has no last element",
    note = "`last` needs a tuple of one to twelve elements"
)]
pub trait Last {
    type Output;

    fn last(self) -> Self::Output;
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` has no tail",
    note = "`tail` needs a tuple of one to twelve elements"
)]
pub trait Tail {
    type Output;

    fn tail(self) -> Self::Output;
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` has no init",
    note = "`init` needs a tuple of one to twelve elements"
)]
pub trait Init {
    type Output;

    fn init(self) -> Self::Output;
}

#[diagnostic::on_unimplemented(message = "`{Self}` cannot be reversed")]
pub trait Reverse {
    type Output;

    fn reverse(self) -> Self::Output;
}

/// The first `N` elements. Call through [`take`] or `Take::<N>::take`.
#[diagnostic::on_unimplemented(
    message = "cannot take {N} elements from `{Self}`",
    note = "`take::<N>` needs a non-empty tuple of at least `N` elements"
)]
pub trait Take<const N: usize> {
    type Output;

    fn take(self) -> Self::Output;
}

/// Everything after the first `N` elements. Call through [`drop`] or `Skip::<N>::skip`.
#[diagnostic::on_unimplemented(
    message = "cannot drop {N} elements from `{Self}`",
    note = "`drop::<N>` needs a non-empty tuple of at least `N` elements"
)]
pub trait Skip<const N: usize> {
    type Output;

    fn skip(self) -> Self::Output;
}

impl<T> Init for T
where
    T: Reverse,
    <T as Reverse>::Output: Tail,
    <<T as Reverse>::Output as Tail>::Output: Reverse,
{
    type Output = <<<T as Reverse>::Output as Tail>::Output as Reverse>::Output;

    #[inline]
    fn init(self) -> <Self as Init>::Output {
        Reverse::reverse(Tail::tail(Reverse::reverse(self)))
    }
}

pub fn head<T: Head>(tuple: T) -> T::Output {
    tuple.head()
}

pub fn last<T: Last>(tuple: T) -> T::Output {
    tuple.last()
}

pub fn tail<T: Tail>(tuple: T) -> T::Output {
    tuple.tail()
}

pub fn init<T: Init>(tuple: T) -> T::Output {
    tuple.init()
}

pub fn reverse<T: Reverse>(tuple: T) -> T::Output {
    tuple.reverse()
}

pub fn take<const N: usize, T: Take<N>>(tuple: T) -> T::Output {
    tuple.take()
}

pub fn drop<const N: usize, T: Skip<N>>(tuple: T) -> T::Output {
    tuple.skip()
}

omega_macros::impl_accessors!(0..=12);
