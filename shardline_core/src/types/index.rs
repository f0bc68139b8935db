//! Keyword vocabularies used by index DDL.
//!
//! Every enumeration carries an explicit "unspecified" variant so that the
//! absence of a keyword is a value of its own instead of an accident of
//! default-initialization. Conversions from numeric codes never fail: an
//! unknown code degrades to the fallback variant of the vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use strum::EnumIter;

/// Qualifier placed between `CREATE` and `INDEX`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum IndexKeyType {
    #[default]
    Unspecified,
    Unique,
    Spatial,
    FullText,
}

impl IndexKeyType {
    /// Keyword prefix including its trailing space, empty when unspecified.
    pub fn keyword(&self) -> &'static str {
        match self {
            IndexKeyType::Unspecified => "",
            IndexKeyType::Unique => "UNIQUE ",
            IndexKeyType::Spatial => "SPATIAL ",
            IndexKeyType::FullText => "FULLTEXT ",
        }
    }
}

impl From<u8> for IndexKeyType {
    fn from(code: u8) -> Self {
        match code {
            1 => IndexKeyType::Unique,
            2 => IndexKeyType::Spatial,
            3 => IndexKeyType::FullText,
            _ => IndexKeyType::Unspecified,
        }
    }
}

impl Display for IndexKeyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Storage structure of an index, e.g. `USING {BTREE | HASH}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum IndexType {
    #[default]
    Invalid,
    Btree,
    Hash,
}

impl IndexType {
    pub fn is_invalid(&self) -> bool {
        matches!(self, IndexType::Invalid)
    }
}

impl From<u8> for IndexType {
    fn from(code: u8) -> Self {
        match code {
            1 => IndexType::Btree,
            2 => IndexType::Hash,
            _ => IndexType::Invalid,
        }
    }
}

impl Display for IndexType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            IndexType::Btree => write!(f, "BTREE"),
            IndexType::Hash => write!(f, "HASH"),
            IndexType::Invalid => write!(f, ""),
        }
    }
}

/// Concurrency mode requested while the index is built: `LOCK = ...`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum LockType {
    #[default]
    Unspecified,
    None,
    Default,
    Shared,
    Exclusive,
}

impl From<u8> for LockType {
    fn from(code: u8) -> Self {
        match code {
            1 => LockType::None,
            2 => LockType::Default,
            3 => LockType::Shared,
            4 => LockType::Exclusive,
            _ => LockType::Unspecified,
        }
    }
}

impl Display for LockType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LockType::None => write!(f, "NONE"),
            LockType::Default => write!(f, "DEFAULT"),
            LockType::Shared => write!(f, "SHARED"),
            LockType::Exclusive => write!(f, "EXCLUSIVE"),
            LockType::Unspecified => write!(f, ""),
        }
    }
}

/// Implementation algorithm of the DDL: `ALGORITHM = ...`.
///
/// The default variant and every unrecognized code share the spelling
/// `DEFAULT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmType {
    #[default]
    Default,
    Copy,
    Inplace,
    Instant,
}

impl From<u8> for AlgorithmType {
    fn from(code: u8) -> Self {
        match code {
            1 => AlgorithmType::Copy,
            2 => AlgorithmType::Inplace,
            3 => AlgorithmType::Instant,
            _ => AlgorithmType::Default,
        }
    }
}

impl Display for AlgorithmType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmType::Copy => write!(f, "COPY"),
            AlgorithmType::Inplace => write!(f, "INPLACE"),
            AlgorithmType::Instant => write!(f, "INSTANT"),
            AlgorithmType::Default => write!(f, "DEFAULT"),
        }
    }
}

/// `VISIBLE` / `INVISIBLE` index option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum IndexVisibility {
    #[default]
    Default,
    Visible,
    Invisible,
}

impl Display for IndexVisibility {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            IndexVisibility::Visible => write!(f, "VISIBLE"),
            IndexVisibility::Invisible => write!(f, "INVISIBLE"),
            IndexVisibility::Default => write!(f, ""),
        }
    }
}

/// Sort direction of one index key part.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Unspecified,
    Asc,
    Desc,
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
            SortOrder::Unspecified => write!(f, ""),
        }
    }
}
