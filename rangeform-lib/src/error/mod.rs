//! Error types

mod field;
mod issue;

pub use field::*;
pub use issue::*;
