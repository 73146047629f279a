// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod film;
pub mod friendship;
pub mod user;

// ============================================================================
// IDENTIFIERS
// ============================================================================

/// Film identifiers are positive and assigned by the store.
pub type FilmId = i64;

/// User identifiers are positive and assigned by the store.
pub type UserId = i64;

pub type FriendshipId = i64;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Film Domain
pub use film::{
    validate_film_update, validate_new_film, Film, FilmFields, FilmUpdate, Genre, MpaRating,
    NewFilm, CINEMA_BIRTHDAY, MAX_DESCRIPTION_LENGTH,
};

// User Domain
pub use user::{
    email_clashes, validate_new_user, validate_user_update, NewUser, User, UserFields,
    UserUpdate,
};

// Friendship Domain
pub use friendship::{validate_friendship, Friendship, FriendshipStatus};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules; the message is shown to callers verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InvalidStateTransition(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
