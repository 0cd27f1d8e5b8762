// Generic code written against omega's traits. These must compile for the tests in
// `tests/test.rs` to run at all.

pub mod select;
pub mod spread;
