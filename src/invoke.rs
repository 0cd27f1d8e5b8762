//! Calling a function with a tuple's elements as its arguments.

/// Expands a tuple into the arguments of a call to `F`.
///
/// The callable takes one parameter per element, in tuple order. By value the elements are
/// moved into the call; through `&` or `&mut` the call receives references to them.
///
/// ```
/// use omega::invoke;
///
/// let print = |a: i32, b: i32, n: &str| format!("a={}, b={}, n={}", a, b, n);
/// assert_eq!(invoke(print, (6, 7, "yuppi!")), "a=6, b=7, n=yuppi!");
///
/// let mut counters = (1, 10);
/// invoke(|a: &mut i32, b: &mut i32| std::mem::swap(a, b), &mut counters);
/// assert_eq!(counters, (10, 1));
/// ```
///
/// An arity or type mismatch does not compile:
///
/// ```compile_fail
/// omega::invoke(|a: i32, b: i32| a + b, (1, 2, 3));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be unpacked into a call to `{F}`",
    note = "the callable must take exactly one parameter per tuple element, in order"
)]
pub trait Invoke<F> {
    type Output;

    fn invoke(self, f: F) -> Self::Output;
}

pub fn invoke<F, T>(f: F, tuple: T) -> T::Output
where
    T: Invoke<F>,
{
    tuple.invoke(f)
}

omega_macros::impl_invoke!(0..=12);
