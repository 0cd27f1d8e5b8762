//! Position lists computed while expanding.
//!
//! These mirror the type-level lists in `omega::index`: every impl the generators emit for
//! `Ascending<B, E>` or `Descending<B, E>` selects exactly the positions returned here.

use proc_macro2::{Ident, Span};

/// Direction a contiguous range is walked in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Ascending, Direction::Descending];

    /// Positions between `begin` and `end`, both included. A range whose bounds are out of
    /// order for this direction is empty.
    pub fn positions(self, begin: usize, end: usize) -> Vec<usize> {
        match self {
            Direction::Ascending => ascending(begin, end),
            Direction::Descending => descending(begin, end),
        }
    }

    /// Every `(begin, end)` pair a tuple of `arity` elements implements a projection for.
    ///
    /// In-order bounds must address existing elements. Out-of-order bounds select nothing, but
    /// the bound that would be visited first may still only go one past the last element, so
    /// that `Ascending<N, N - 1>` (dropping everything) exists while `Ascending<N + 1, N>` does
    /// not.
    pub fn bounds(self, arity: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..arity).flat_map(move |inner| {
            (0..=arity).map(move |outer| match self {
                Direction::Ascending => (outer, inner),
                Direction::Descending => (inner, outer),
            })
        })
    }

    /// Name of the marker type in `omega::index`.
    pub fn marker(self) -> Ident {
        match self {
            Direction::Ascending => Ident::new("Ascending", Span::call_site()),
            Direction::Descending => Ident::new("Descending", Span::call_site()),
        }
    }
}

// Walk one step at a time until the current position is `end`. Equality, not `<`/`>`, ends the
// walk so the same loop serves both directions.
fn walk(begin: usize, end: usize, step: fn(usize) -> usize) -> Vec<usize> {
    let mut positions = vec![begin];
    let mut current = begin;
    while current != end {
        current = step(current);
        positions.push(current);
    }
    positions
}

/// `[begin, begin + 1, ..., end]`, or nothing when `begin > end`.
pub fn ascending(begin: usize, end: usize) -> Vec<usize> {
    if begin > end {
        return Vec::new();
    }
    walk(begin, end, |i| i + 1)
}

/// `[begin, begin - 1, ..., end]`, or nothing when `begin < end`.
pub fn descending(begin: usize, end: usize) -> Vec<usize> {
    if begin < end {
        return Vec::new();
    }
    walk(begin, end, |i| i - 1)
}

/// `begin..=end` walked in whichever direction reaches `end`. Never empty.
pub fn inclusive(begin: usize, end: usize) -> Vec<usize> {
    if begin <= end {
        ascending(begin, end)
    } else {
        descending(begin, end)
    }
}

/// `begin..end`, ascending only.
pub fn exclusive(begin: usize, end: usize) -> Vec<usize> {
    match end.checked_sub(1) {
        Some(last) if begin < end => ascending(begin, last),
        _ => Vec::new(),
    }
}
