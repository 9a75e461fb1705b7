use std::fmt::Display;

/// Which index of the rating matrix was out of bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    User,
    Movie,
}

impl Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexKind::User => write!(f, "user"),
            IndexKind::Movie => write!(f, "movie"),
        }
    }
}

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Parse error at line {line}, column {column}: invalid rating {value:?}")]
    Parse {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("Index out of range: {kind} {index} (count {len})")]
    OutOfRange {
        kind: IndexKind,
        index: usize,
        len: usize,
    },

    #[error("Dimension mismatch: expected length {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub(crate) fn user_out_of_range(index: usize, len: usize) -> Self {
        AppError::OutOfRange {
            kind: IndexKind::User,
            index,
            len,
        }
    }

    pub(crate) fn movie_out_of_range(index: usize, len: usize) -> Self {
        AppError::OutOfRange {
            kind: IndexKind::Movie,
            index,
            len,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
