use std::fmt::{self, Display};

/// Errors produced by model constructors and parsing routines.
#[derive(Debug)]
pub enum ModelError {
    InvalidId(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidId(raw) => {
                write!(f, "invalid catalog id: {raw:?}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
