//! CREATE INDEX statement.
//!
//! ```text
//! CREATE [UNIQUE | FULLTEXT | SPATIAL] INDEX index_name
//!     ON tbl_name (key_part, ...)
//!     [index_option ...]
//!     [algorithm_option | lock_option] ...
//! ```
//!
//! # Example
//!
//! ```rust
//! use shardline_ast::*;
//! use shardline_core::{IndexKeyType, RestoreFlag};
//!
//! let stmt = CreateIndexStatement::new("idx_a")
//!     .key_type(IndexKeyType::Unique)
//!     .table("t1")
//!     .key(IndexPartSpec::column("colA"));
//! let restored = restore_statement(&stmt, RestoreFlag::empty()).unwrap();
//! assert_eq!(restored.sql, "CREATE UNIQUE INDEX idx_a ON t1 (colA)");
//! ```

use serde::{Deserialize, Serialize};
use shardline_core::{IndexKeyType, RestoreFlag, Result, SQLType};

use crate::ast::{IndexLockAndAlgorithm, IndexOption, IndexPartSpec, TableName};
use crate::restore::{restore_joined, Restorer, Statement};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateIndexStatement {
    pub index_name: String,
    #[serde(default)]
    pub table: TableName,
    #[serde(default)]
    pub key_type: IndexKeyType,
    #[serde(default)]
    pub keys: Vec<IndexPartSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_option: Option<IndexOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_alg: Option<IndexLockAndAlgorithm>,
}

impl CreateIndexStatement {
    pub fn new(index_name: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
            ..Default::default()
        }
    }

    pub fn table(mut self, table: impl Into<TableName>) -> Self {
        self.table = table.into();
        self
    }

    pub fn key_type(mut self, key_type: IndexKeyType) -> Self {
        self.key_type = key_type;
        self
    }

    /// Appends a key part.
    pub fn key(mut self, key: IndexPartSpec) -> Self {
        self.keys.push(key);
        self
    }

    pub fn index_option(mut self, option: IndexOption) -> Self {
        self.index_option = Some(option);
        self
    }

    pub fn lock_alg(mut self, lock_alg: IndexLockAndAlgorithm) -> Self {
        self.lock_alg = Some(lock_alg);
        self
    }
}

impl Restorer for CreateIndexStatement {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: &mut Vec<usize>) -> Result<()> {
        sb.push_str("CREATE ");
        sb.push_str(self.key_type.keyword());
        sb.push_str("INDEX ");
        sb.push_str(&self.index_name);

        // Without a table the remaining clauses are dropped, populated or not.
        if self.table.is_empty() {
            return Ok(());
        }

        sb.push_str(" ON ");
        self.table.restore(flag, sb, args)?;

        sb.push_str(" (");
        restore_joined(&self.keys, ", ", flag, sb, args)?;
        sb.push(')');

        if let Some(option) = &self.index_option {
            sb.push(' ');
            option.restore(flag, sb, args)?;
        }

        if let Some(lock_alg) = &self.lock_alg {
            sb.push(' ');
            lock_alg.restore(flag, sb, args)?;
        }

        Ok(())
    }

    fn cnt_params(&self) -> usize {
        0
    }
}

impl Statement for CreateIndexStatement {
    fn mode(&self) -> SQLType {
        SQLType::CreateIndex
    }
}
