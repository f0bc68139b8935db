//! Statement tree of the shardline proxy and its restoration back to SQL.
//!
//! Trees are produced by the parser, never modified afterwards, and restored
//! once per backend target through the [`Restorer`] contract.

pub mod ast;
pub mod restore;
pub mod statement;

pub use ast::*;
pub use restore::*;
pub use statement::*;
