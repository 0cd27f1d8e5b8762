use omega::Idx;
pub fn picked() -> (Idx<3>, Idx<2>, Idx<1>, Idx<6>) {
    (omega::Idx::<3>, omega::Idx::<2>, omega::Idx::<1>, omega::Idx::<6>)
}
pub fn walked() -> (Idx<5>, Idx<4>, Idx<3>, Idx<0>, Idx<1>) {
    (omega::Idx::<5>, omega::Idx::<4>, omega::Idx::<3>, omega::Idx::<0>, omega::Idx::<1>)
}
