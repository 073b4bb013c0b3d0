use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("Invalid date format: '{0}' (expected YYYY MM DD)")]
    InvalidDate(String),

    #[error("Description cannot be empty")]
    EmptyDescription,
}

pub type Result<T> = std::result::Result<T, TodoError>;
