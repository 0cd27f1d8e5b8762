//! Typed access to the elements of a tuple by position.

/// A tuple of up to twelve elements.
pub trait Tuple {
    const ARITY: usize;
}

/// Element `I` of a tuple.
///
/// Only implemented for `I` below the tuple's arity, so an out-of-range position is rejected by
/// the compiler:
///
/// ```
/// use omega::Element;
///
/// let mut t = (5, "yuppi!", 10.5);
/// assert_eq!(*Element::<1>::element(&t), "yuppi!");
/// *Element::<0>::element_mut(&mut t) += 1;
/// assert_eq!(Element::<0>::into_element(t), 6);
/// ```
///
/// ```compile_fail
/// use omega::Element;
///
/// let t = (5, "yuppi!", 10.5);
/// Element::<3>::element(&t);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no element at position {I}",
    label = "position {I} is out of range for this tuple"
)]
pub trait Element<const I: usize>: Tuple {
    type Output;

    fn element(&self) -> &Self::Output;

    fn element_mut(&mut self) -> &mut Self::Output;

    fn into_element(self) -> Self::Output;
}

omega_macros::impl_elements!(0..=12);
