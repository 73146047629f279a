// src/error/types.rs
use crate::domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    NotFound(String),

    /// Store misuse: adding an entity that already has an id, updating one that has none.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// The three outcomes a caller at the boundary has to tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Unexpected,
}

impl AppError {
    pub fn not_found(entity: &str, id: i64) -> Self {
        AppError::NotFound(format!("{} with id {} not found", entity, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Domain(DomainError::Validation(message.into()))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Domain(_) => ErrorKind::Validation,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::InvalidArgument(_) | AppError::Storage(_) => ErrorKind::Unexpected,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(AppError::validation("bad").kind(), ErrorKind::Validation);
        assert_eq!(
            AppError::Domain(DomainError::InvalidStateTransition("done".into())).kind(),
            ErrorKind::Validation
        );
        assert_eq!(AppError::not_found("film", 3).kind(), ErrorKind::NotFound);
        assert_eq!(
            AppError::InvalidArgument("id set".into()).kind(),
            ErrorKind::Unexpected
        );
        assert_eq!(AppError::Storage("poisoned".into()).kind(), ErrorKind::Unexpected);
    }

    #[test]
    fn test_messages_pass_through() {
        assert_eq!(AppError::validation("email already used").to_string(), "email already used");
        assert_eq!(AppError::not_found("user", 7).to_string(), "user with id 7 not found");
    }
}
