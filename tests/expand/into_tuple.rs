mod array {
    pub trait IntoTuple {
        type Output;

        fn into_tuple(self) -> Self::Output;
    }
}

omega_macros::impl_into_tuple!(2..=2);
