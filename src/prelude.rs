pub use super::config::RestoreConfig;
pub use super::{Error, Result};
pub use shardline_ast::{
    restore_statement, ColumnName, CreateIndexStatement, DropIndexStatement, ExpressionNode, Index,
    IndexLockAndAlgorithm, IndexOption, IndexPartSpec, Restored, Restorer, ShowFilter,
    ShowIndexStatement, Statement, StatementNode, TableName,
};
// Vocabularies
pub use shardline_core::{
    AlgorithmType, IndexKeyType, IndexType, IndexVisibility, LockType, RestoreFlag, SQLType,
    SortOrder,
};
