use serde::{Deserialize, Serialize};
use shardline_core::{RestoreError, RestoreFlag, Result};

use crate::restore::{write_id, Restorer};

/// Qualified table reference, `[schema.]table`.
///
/// A reference with no parts stands for "no table supplied"; callers check
/// [`TableName::is_empty`] before restoring it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableName(pub Vec<String>);

impl TableName {
    pub fn new(table: impl Into<String>) -> Self {
        TableName(vec![table.into()])
    }

    pub fn qualified(schema: impl Into<String>, table: impl Into<String>) -> Self {
        TableName(vec![schema.into(), table.into()])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last part of the reference.
    pub fn suffix(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Schema qualifier, if any.
    pub fn prefix(&self) -> Option<&str> {
        if self.0.len() > 1 {
            self.0.first().map(String::as_str)
        } else {
            None
        }
    }
}

/// Splits on the first `.` only, so `db.t.v` is table `t.v` in schema `db`.
impl From<&str> for TableName {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            return TableName::default();
        }
        TableName(value.splitn(2, '.').map(str::to_string).collect())
    }
}

impl Restorer for TableName {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, _args: &mut Vec<usize>) -> Result<()> {
        if self.is_empty() {
            return Err(RestoreError::EmptyIdentifier { what: "table" });
        }
        for (i, part) in self.0.iter().enumerate() {
            if part.is_empty() {
                return Err(RestoreError::EmptyIdentifier { what: "table" });
            }
            if i != 0 {
                sb.push('.');
            }
            write_id(sb, flag, part);
        }
        Ok(())
    }
}

/// Column reference, optionally qualified by table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    pub name: String,
}

impl ColumnName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }
}

impl Restorer for ColumnName {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, _args: &mut Vec<usize>) -> Result<()> {
        if self.name.is_empty() {
            return Err(RestoreError::EmptyIdentifier { what: "column" });
        }
        if let Some(table) = &self.table {
            write_id(sb, flag, table);
            sb.push('.');
        }
        write_id(sb, flag, &self.name);
        Ok(())
    }
}
