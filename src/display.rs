//! Human-readable rendering of tuples as `<e0, e1, ...>`.

use core::fmt;

/// Writes a tuple as `<e0, e1, ..., en>` using each element's `Display`; `()` becomes `<>`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be rendered",
    note = "every element must implement `Display`"
)]
pub trait Render {
    fn render<W: fmt::Write>(&self, out: &mut W) -> fmt::Result;
}

impl Render for () {
    fn render<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str("<>")
    }
}

/// `Display` adapter for any renderable tuple.
///
/// ```
/// use omega::Show;
///
/// let t = (5, 6, 7, "yuppi!", 8, 9, 10.5);
/// assert_eq!(format!("t = {}", Show(&t)), "t = <5, 6, 7, yuppi!, 8, 9, 10.5>");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Show<'a, T: ?Sized>(pub &'a T);

impl<T: Render + ?Sized> fmt::Display for Show<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

/// Writes `tuple` to `out`.
pub fn show<W, T>(out: &mut W, tuple: &T) -> fmt::Result
where
    W: fmt::Write,
    T: Render + ?Sized,
{
    tuple.render(out)
}

/// Renders `tuple` into a new string, or the error of the first element whose `Display` fails.
///
/// ```
/// assert_eq!(omega::render(&()).as_deref(), Ok("<>"));
/// assert_eq!(omega::render(&(1,)).as_deref(), Ok("<1>"));
/// assert_eq!(omega::render(&(1, 2)).as_deref(), Ok("<1, 2>"));
/// ```
pub fn render<T: Render + ?Sized>(tuple: &T) -> Result<String, fmt::Error> {
    let mut text = String::new();
    tuple.render(&mut text)?;
    Ok(text)
}

omega_macros::impl_render!(0..=12);
