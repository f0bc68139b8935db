//! The restoration contract shared by every node of the statement tree.
//!
//! A node appends its canonical SQL text to a caller-owned buffer and records
//! the ordinal of every placeholder it emits, left to right. Restoring never
//! touches the tree, so one tree can be rendered once per shard target,
//! concurrently, with independent buffers.

use std::fmt::Debug;

use shardline_core::{RestoreFlag, Result, SQLType};
use tracing::{debug, error, instrument};

/// Turns a node back into SQL text.
pub trait Restorer {
    /// Appends this node's SQL to `sb`, pushing placeholder ordinals onto
    /// `args`. On error `sb` may contain a truncated prefix.
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: &mut Vec<usize>) -> Result<()>;

    /// Number of placeholders `restore` emits. Determined by the shape of
    /// the node, never by the values it holds.
    fn cnt_params(&self) -> usize {
        0
    }
}

/// A top-level statement.
pub trait Statement: Restorer + Debug + Send + Sync {
    fn mode(&self) -> SQLType;
}

/// Output of one restoration pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Restored {
    pub sql: String,
    pub args: Vec<usize>,
}

/// Restores `stmt` into a fresh buffer and placeholder accumulator.
///
/// The partial buffer is dropped when a node fails.
#[instrument(skip_all, fields(mode = %stmt.mode()))]
pub fn restore_statement(stmt: &dyn Statement, flag: RestoreFlag) -> Result<Restored> {
    let mut sql = String::new();
    let mut args = Vec::with_capacity(stmt.cnt_params());
    if let Err(e) = stmt.restore(flag, &mut sql, &mut args) {
        error!("Restore failed: {}", e);
        return Err(e);
    }
    debug!(params = args.len(), "Restored statement: {}", sql);
    Ok(Restored { sql, args })
}

/// Writes an identifier, backquoted when the flags ask for it.
pub fn write_id(sb: &mut String, flag: RestoreFlag, id: &str) {
    if !flag.contains(RestoreFlag::NAME_BACK_QUOTES) {
        sb.push_str(id);
        return;
    }
    sb.push('`');
    for c in id.chars() {
        if c == '`' {
            sb.push('`');
        }
        sb.push(c);
    }
    sb.push('`');
}

/// Writes a quoted string literal.
pub fn write_string(sb: &mut String, flag: RestoreFlag, s: &str) {
    let quote = flag.string_quote();
    let backslash = flag.contains(RestoreFlag::STRING_ESCAPE_BACKSLASH);
    sb.push(quote);
    for c in s.chars() {
        if c == quote {
            sb.push(if backslash { '\\' } else { quote });
        } else if c == '\\' && backslash {
            sb.push('\\');
        }
        sb.push(c);
    }
    sb.push(quote);
}

/// Restores `items` separated by `sep`, stopping at the first failure.
pub(crate) fn restore_joined<R: Restorer>(
    items: &[R],
    sep: &str,
    flag: RestoreFlag,
    sb: &mut String,
    args: &mut Vec<usize>,
) -> Result<()> {
    for (i, item) in items.iter().enumerate() {
        if i != 0 {
            sb.push_str(sep);
        }
        item.restore(flag, sb, args)?;
    }
    Ok(())
}

impl<R: Restorer + ?Sized> Restorer for Box<R> {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: &mut Vec<usize>) -> Result<()> {
        (**self).restore(flag, sb, args)
    }

    fn cnt_params(&self) -> usize {
        (**self).cnt_params()
    }
}
