use thiserror::Error;

/// Failure raised by a node whose sub-tree cannot be turned into SQL.
///
/// When a restore returns one of these the output buffer of that call may
/// hold a partial prefix and must be discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error("cannot restore empty {what} identifier")]
    EmptyIdentifier { what: &'static str },

    #[error("cannot restore function call without a name")]
    EmptyFunctionName,

    #[error("unsupported node: {0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, RestoreError>;
