//! shardline - statement restoration for a sharding SQL proxy
//!
//! Parsed statements are kept as typed trees and rendered back into SQL
//! text once per backend target. This crate ties the tree
//! ([`shardline_ast`]) and its vocabularies ([`shardline_core`]) to
//! configuration, logging and a small command line driver.

pub mod config;
mod error;
pub mod prelude;

use std::path::Path;

pub use config::RestoreConfig;
pub use error::{Error, Result};
pub use shardline_ast::*;
pub use shardline_core::*;
pub use strum;
use tracing::instrument;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `default_level`. Events go to stderr so restored
/// SQL on stdout stays clean. Installing twice is a no-op.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Read a JSON encoded [`StatementNode`].
#[instrument(skip_all)]
pub fn load_statement(path: impl AsRef<Path>) -> Result<StatementNode> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Restore a statement read from `path` with `flags`.
pub fn restore_file(path: impl AsRef<Path>, flags: RestoreFlag) -> Result<Restored> {
    let stmt = load_statement(path)?;
    Ok(restore_statement(&stmt, flags)?)
}
