use thiserror::Error;

use crate::pivot::PivotStrategy;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("invalid list size {0}: size must not be negative")]
    InvalidSize(i64),

    #[error("missing {0}")]
    NullInput(&'static str),

    #[error("unknown pivot strategy {0:?}")]
    UnknownStrategy(String),

    #[error("invalid command: {0}")]
    InvalidCommand(String),

    #[error("{strategy} produced a different ordering than the other strategies")]
    Diverged { strategy: PivotStrategy },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SortError>;
