//! Typed models

mod field;
mod record;
mod value;

pub use field::*;
pub use record::*;
pub use value::*;
