// src/lib.rs
// FilmHub - in-memory film catalogue with likes and friendships
//
// Architecture:
// - Domain-centric: validation rules and state transitions live in `domain`
// - Repositories are dumb keyed stores behind traits
// - Services orchestrate domain + repositories
// - Application layer: DTOs, commands and the HTTP boundary

// ============================================================================
// CORE
// ============================================================================

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod config;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_film_update,
    validate_friendship,
    validate_new_film,
    validate_new_user,
    validate_user_update,
    // Film
    Film,
    FilmFields,
    FilmId,
    FilmUpdate,
    // Friendship
    Friendship,
    FriendshipId,
    FriendshipStatus,
    Genre,
    MpaRating,
    NewFilm,
    NewUser,
    // User
    User,
    UserFields,
    UserId,
    UserUpdate,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult, ErrorKind};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    FilmRepository,
    FriendshipRepository,
    InMemoryFilmRepository,
    InMemoryFriendshipRepository,
    InMemoryStore,
    InMemoryUserRepository,
    UserRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{FilmService, FriendshipService, UserService, DEFAULT_POPULAR_COUNT};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;
pub use application::commands;
pub use application::dto;
pub use config::ServerConfig;
