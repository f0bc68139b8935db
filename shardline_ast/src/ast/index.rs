//! Clause nodes shared by index DDL.

use serde::{Deserialize, Serialize};
use shardline_core::{
    AlgorithmType, IndexType, IndexVisibility, LockType, RestoreError, RestoreFlag, Result, SortOrder,
};

use super::{ColumnName, ExpressionNode};
use crate::restore::{write_string, Restorer};

/// What one key part indexes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexPartTarget {
    /// `col` or the prefix form `col(length)`.
    Column {
        column: ColumnName,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        length: Option<u64>,
    },
    /// Functional key part, always parenthesized. Placeholders are not
    /// allowed inside it.
    Expr(ExpressionNode),
}

/// One element of the key-part list of an index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexPartSpec {
    pub target: IndexPartTarget,
    #[serde(default)]
    pub order: SortOrder,
}

impl IndexPartSpec {
    pub fn column(name: impl Into<String>) -> Self {
        Self {
            target: IndexPartTarget::Column {
                column: ColumnName::new(name),
                length: None,
            },
            order: SortOrder::Unspecified,
        }
    }

    pub fn expr(expr: ExpressionNode) -> Self {
        Self {
            target: IndexPartTarget::Expr(expr),
            order: SortOrder::Unspecified,
        }
    }

    /// Index only the first `length` characters of a column part.
    pub fn length(mut self, length: u64) -> Self {
        if let IndexPartTarget::Column { length: l, .. } = &mut self.target {
            *l = Some(length);
        }
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }
}

impl Restorer for IndexPartSpec {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, args: &mut Vec<usize>) -> Result<()> {
        match &self.target {
            IndexPartTarget::Column { column, length } => {
                column.restore(flag, sb, args)?;
                if let Some(length) = length {
                    sb.push_str(&format!("({})", length));
                }
            }
            IndexPartTarget::Expr(expr) => {
                if expr.cnt_params() > 0 {
                    return Err(RestoreError::Unsupported(
                        "placeholder in index key part".to_string(),
                    ));
                }
                sb.push('(');
                expr.restore(flag, sb, args)?;
                sb.push(')');
            }
        }
        if self.order != SortOrder::Unspecified {
            sb.push(' ');
            sb.push_str(&self.order.to_string());
        }
        Ok(())
    }

    fn cnt_params(&self) -> usize {
        0
    }
}

/// Trailing index options, rendered space-separated in a fixed order.
///
/// ```text
/// KEY_BLOCK_SIZE [=] value | index_type | WITH PARSER parser_name
///   | COMMENT 'string' | {VISIBLE | INVISIBLE}
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_block_size: Option<u64>,
    pub tp: IndexType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub visibility: IndexVisibility,
}

impl IndexOption {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn key_block_size(mut self, size: u64) -> Self {
        self.key_block_size = Some(size);
        self
    }

    pub fn using(mut self, tp: IndexType) -> Self {
        self.tp = tp;
        self
    }

    pub fn parser(mut self, name: impl Into<String>) -> Self {
        self.parser_name = Some(name.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn visibility(mut self, visibility: IndexVisibility) -> Self {
        self.visibility = visibility;
        self
    }
}

impl Restorer for IndexOption {
    fn restore(&self, flag: RestoreFlag, sb: &mut String, _args: &mut Vec<usize>) -> Result<()> {
        let mut has_prev = false;
        let mut sep = |sb: &mut String| {
            if has_prev {
                sb.push(' ');
            }
            has_prev = true;
        };

        if let Some(size) = self.key_block_size {
            sep(sb);
            sb.push_str(&format!("KEY_BLOCK_SIZE={}", size));
        }
        if !self.tp.is_invalid() {
            sep(sb);
            sb.push_str("USING ");
            sb.push_str(&self.tp.to_string());
        }
        if let Some(parser) = self.parser_name.as_deref().filter(|p| !p.is_empty()) {
            sep(sb);
            sb.push_str("WITH PARSER ");
            sb.push_str(parser);
        }
        if let Some(comment) = &self.comment {
            sep(sb);
            sb.push_str("COMMENT ");
            write_string(sb, flag, comment);
        }
        if self.visibility != IndexVisibility::Default {
            sep(sb);
            sb.push_str(&self.visibility.to_string());
        }
        Ok(())
    }
}

/// `ALGORITHM = ... LOCK = ...` tail of an index DDL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexLockAndAlgorithm {
    pub lock_tp: LockType,
    pub algorithm_tp: AlgorithmType,
}

impl IndexLockAndAlgorithm {
    pub fn new(lock_tp: LockType, algorithm_tp: AlgorithmType) -> Self {
        Self {
            lock_tp,
            algorithm_tp,
        }
    }
}

impl Restorer for IndexLockAndAlgorithm {
    fn restore(&self, _flag: RestoreFlag, sb: &mut String, _args: &mut Vec<usize>) -> Result<()> {
        let mut has_prev = false;
        if self.algorithm_tp != AlgorithmType::Default {
            sb.push_str("ALGORITHM = ");
            sb.push_str(&self.algorithm_tp.to_string());
            has_prev = true;
        }
        if !matches!(self.lock_tp, LockType::Default | LockType::Unspecified) {
            if has_prev {
                sb.push(' ');
            }
            sb.push_str("LOCK = ");
            sb.push_str(&self.lock_tp.to_string());
        }
        Ok(())
    }
}
