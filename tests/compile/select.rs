use omega::{positions, Ascending, Head, Idx, Project, Tail};

pub type Swapped<T> = <T as Project<(Idx<1>, Idx<0>)>>::Output;

/// The first two elements of any tuple that has them, in swapped order.
pub fn swap_pair<T>(tuple: T) -> Swapped<T>
where
    T: Project<(Idx<1>, Idx<0>)>,
{
    omega::project(tuple, positions![1, 0])
}

pub fn split_first<T>(tuple: T) -> (<T as Head>::Output, <T as Tail>::Output)
where
    T: Head + Tail + Clone,
{
    (omega::head(tuple.clone()), omega::tail(tuple))
}

// Bounds are chosen by the caller; the impl exists only when they fit the tuple.
pub fn window<const B: usize, const E: usize, T>(tuple: T) -> T::Output
where
    T: Project<Ascending<B, E>>,
{
    omega::project(tuple, Ascending::<B, E>)
}

// Const generic positions fall through `positions!` unevaluated.
pub fn twice<const N: usize, T>(tuple: T) -> T::Output
where
    T: Project<(Idx<N>, Idx<N>)>,
{
    omega::project(tuple, positions![N, N])
}
