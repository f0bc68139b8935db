//! DROP INDEX statement.

use serde::{Deserialize, Serialize};
use shardline_core::{RestoreFlag, Result, SQLType};

use crate::ast::{IndexLockAndAlgorithm, TableName};
use crate::restore::{Restorer, Statement};

/// `DROP INDEX [IF EXISTS] index_name ON tbl_name [algorithm_option | lock_option]`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropIndexStatement {
    #[serde(default)]
    pub if_exists: bool,
    pub index_name: String,
    #[serde(default)]
    pub table: TableName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_alg: Option<IndexLockAndAlgorithm>,
}

impl DropIndexStatement {
    pub fn new(index_name: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
            ..Default::default()
        }
    }

    pub fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }

    pub fn table(mut self, table: impl Into<TableName>) -> Self {
        self.table = table.into();
        self
    }

    pub fn lock_alg(mut self, lock_alg: IndexLockAndAlgorithm) -> Self {
        self.lock_alg = Some(lock_alg);
        self
    }
}

impl Restorer for DropIndexStatement {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: &mut Vec<usize>) -> Result<()> {
        sb.push_str("DROP INDEX ");
        if self.if_exists {
            sb.push_str("IF EXISTS ");
        }
        sb.push_str(&self.index_name);

        if self.table.is_empty() {
            return Ok(());
        }

        sb.push_str(" ON ");
        self.table.restore(flag, sb, args)?;

        if let Some(lock_alg) = &self.lock_alg {
            sb.push(' ');
            lock_alg.restore(flag, sb, args)?;
        }
        Ok(())
    }
}

impl Statement for DropIndexStatement {
    fn mode(&self) -> SQLType {
        SQLType::DropIndex
    }
}
