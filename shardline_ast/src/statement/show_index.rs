//! SHOW INDEX statement.

use serde::{Deserialize, Serialize};
use shardline_core::{RestoreFlag, Result, SQLType};

use crate::ast::{ExpressionNode, TableName};
use crate::restore::{write_id, write_string, Restorer, Statement};

/// Filter appended to a SHOW statement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowFilter {
    Like(String),
    Where(ExpressionNode),
}

impl Restorer for ShowFilter {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: &mut Vec<usize>) -> Result<()> {
        match self {
            ShowFilter::Like(pattern) => {
                sb.push_str("LIKE ");
                write_string(sb, flag, pattern);
                Ok(())
            }
            ShowFilter::Where(expr) => {
                sb.push_str("WHERE ");
                expr.restore(flag, sb, args)
            }
        }
    }

    fn cnt_params(&self) -> usize {
        match self {
            ShowFilter::Like(_) => 0,
            ShowFilter::Where(expr) => expr.cnt_params(),
        }
    }
}

/// `SHOW INDEX FROM tbl_name [FROM db_name] [LIKE 'pattern' | WHERE expr]`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowIndexStatement {
    pub table: TableName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<ShowFilter>,
}

impl ShowIndexStatement {
    pub fn new(table: impl Into<TableName>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn filter(mut self, filter: ShowFilter) -> Self {
        self.filter = Some(filter);
        self
    }
}

impl Restorer for ShowIndexStatement {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: &mut Vec<usize>) -> Result<()> {
        sb.push_str("SHOW INDEX FROM ");
        self.table.restore(flag, sb, args)?;

        if let Some(database) = &self.database {
            sb.push_str(" FROM ");
            write_id(sb, flag, database);
        }

        if let Some(filter) = &self.filter {
            sb.push(' ');
            filter.restore(flag, sb, args)?;
        }
        Ok(())
    }

    fn cnt_params(&self) -> usize {
        self.filter.as_ref().map_or(0, Restorer::cnt_params)
    }
}

impl Statement for ShowIndexStatement {
    fn mode(&self) -> SQLType {
        SQLType::ShowIndex
    }
}
