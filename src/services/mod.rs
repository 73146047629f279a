// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod film_service;
pub mod friendship_service;
pub mod user_service;

#[cfg(test)]
mod friendship_service_tests;

pub use film_service::{FilmService, DEFAULT_POPULAR_COUNT};
pub use friendship_service::FriendshipService;
pub use user_service::UserService;
