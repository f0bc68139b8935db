mod create_index;
mod drop_index;
mod show_index;

pub use create_index::*;
pub use drop_index::*;
pub use show_index::*;

use serde::{Deserialize, Serialize};
use shardline_core::{RestoreFlag, Result, SQLType};

use crate::restore::{Restorer, Statement};

/// Shorthand for constructing index statements
#[derive(Debug, Clone)]
pub struct Index;

impl Index {
    /// CREATE INDEX statement [`CreateIndexStatement`]
    pub fn create(name: impl Into<String>) -> CreateIndexStatement {
        CreateIndexStatement::new(name)
    }

    /// DROP INDEX statement [`DropIndexStatement`]
    pub fn drop(name: impl Into<String>) -> DropIndexStatement {
        DropIndexStatement::new(name)
    }

    /// SHOW INDEX statement [`ShowIndexStatement`]
    pub fn show(table: &str) -> ShowIndexStatement {
        ShowIndexStatement::new(table)
    }
}

/// Serializable envelope over every concrete statement, tagged by `kind`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatementNode {
    CreateIndex(CreateIndexStatement),
    DropIndex(DropIndexStatement),
    ShowIndex(ShowIndexStatement),
}

impl StatementNode {
    pub fn as_statement(&self) -> &dyn Statement {
        match self {
            StatementNode::CreateIndex(stmt) => stmt,
            StatementNode::DropIndex(stmt) => stmt,
            StatementNode::ShowIndex(stmt) => stmt,
        }
    }
}

impl Restorer for StatementNode {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: &mut Vec<usize>) -> Result<()> {
        self.as_statement().restore(flag, sb, args)
    }

    fn cnt_params(&self) -> usize {
        self.as_statement().cnt_params()
    }
}

impl Statement for StatementNode {
    fn mode(&self) -> SQLType {
        self.as_statement().mode()
    }
}

impl From<CreateIndexStatement> for StatementNode {
    fn from(value: CreateIndexStatement) -> Self {
        StatementNode::CreateIndex(value)
    }
}

impl From<DropIndexStatement> for StatementNode {
    fn from(value: DropIndexStatement) -> Self {
        StatementNode::DropIndex(value)
    }
}

impl From<ShowIndexStatement> for StatementNode {
    fn from(value: ShowIndexStatement) -> Self {
        StatementNode::ShowIndex(value)
    }
}
