// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB keyed stores
// - NO business logic
// - NO invariant enforcement, except uniqueness checks that must be atomic:
//   those take their rule from the domain and run under the store's write lock
// - NO cross-repository calls

pub mod film_repository;
pub mod friendship_repository;
pub mod memory;
pub mod user_repository;

pub use film_repository::{FilmRepository, InMemoryFilmRepository};
pub use friendship_repository::{FriendshipRepository, InMemoryFriendshipRepository};
pub use memory::{InMemoryStore, StoredEntity};
pub use user_repository::{InMemoryUserRepository, UserRepository};

#[cfg(test)]
pub use film_repository::MockFilmRepository;
#[cfg(test)]
pub use friendship_repository::MockFriendshipRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
