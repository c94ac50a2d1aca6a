//! Manifest parsing, field schema and validation

mod parser;
mod schema;
mod validate;

pub use parser::*;
pub use schema::*;
pub use validate::*;
