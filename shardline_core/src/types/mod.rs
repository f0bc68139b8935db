mod flag;
mod index;
mod sql_type;

pub use flag::*;
pub use index::*;
pub use sql_type::*;
