//! Fixed-size arrays as tuples.

/// Converts `[T; N]` into an `N`-tuple, or `&[T; N]` into an `N`-tuple of references.
pub trait IntoTuple {
    type Output;

    fn into_tuple(self) -> Self::Output;
}

/// ```
/// let words = ["wood", "world!"];
/// assert_eq!(omega::array_to_tuple(words), ("wood", "world!"));
/// assert_eq!(omega::array_to_tuple(&[1, 2, 3]), (&1, &2, &3));
/// ```
pub fn array_to_tuple<A: IntoTuple>(array: A) -> A::Output {
    array.into_tuple()
}

omega_macros::impl_into_tuple!(0..=12);
