use omega::Idx;

pub fn picked() -> (Idx<3>, Idx<2>, Idx<1>, Idx<6>) {
    omega::__private::positions!(omega; 3, 2, 1, 6)
}

pub fn walked() -> (Idx<5>, Idx<4>, Idx<3>, Idx<0>, Idx<1>) {
    omega::__private::positions!(omega; 5..=3, 0..2)
}
