mod array {
    pub trait IntoTuple {
        type Output;
        fn into_tuple(self) -> Self::Output;
    }
}
impl<T> crate::array::IntoTuple for [T; 2] {
    type Output = (T, T);
    #[inline]
    fn into_tuple(self) -> Self::Output {
        let [x0, x1] = self;
        (x0, x1)
    }
}
impl<'a, T> crate::array::IntoTuple for &'a [T; 2] {
    type Output = (&'a T, &'a T);
    #[inline]
    fn into_tuple(self) -> Self::Output {
        let [x0, x1] = self;
        (x0, x1)
    }
}
