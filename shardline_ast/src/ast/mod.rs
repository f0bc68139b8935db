//! Clause and expression nodes composed by statements.

mod expr;
mod index;
mod table;

pub use expr::*;
pub use index::*;
pub use table::*;
