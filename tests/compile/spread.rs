use omega::{Invoke, Render};

pub fn labelled<T: Render>(label: &str, tuple: &T) -> String {
    format!("{label} = {}", omega::Show(tuple))
}

pub fn call_with<T, F, R>(tuple: T, f: F) -> R
where
    T: Invoke<F, Output = R>,
{
    omega::invoke(f, tuple)
}
