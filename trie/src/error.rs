use std::fmt;

use thiserror::Error;

/// Calls that are only legal in one of the two trie states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Remove,
    Sequence,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Insert => write!(f, "insert"),
            Operation::Remove => write!(f, "remove"),
            Operation::Sequence => write!(f, "read a sequence"),
        }
    }
}

/// Invalid state: the call order was wrong, not the data.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieError {
    #[error("cannot {0} after compression")]
    Compressed(Operation),
    #[error("cannot {0} before compression")]
    NotCompressed(Operation),
}

pub type Result<T> = std::result::Result<T, TrieError>;
