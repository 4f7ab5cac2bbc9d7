//! CLI command implementations.

pub mod check;
pub mod compose;
pub mod emit;
pub mod kinds;
