// src/application/state.rs

use std::sync::Arc;

use crate::repositories::{
    InMemoryFilmRepository, InMemoryFriendshipRepository, InMemoryUserRepository,
};
use crate::services::{FilmService, FriendshipService, UserService};

/// Application state shared by every request handler.
/// All fields are Arc-wrapped; cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    pub film_service: Arc<FilmService>,
    pub user_service: Arc<UserService>,
    pub friendship_service: Arc<FriendshipService>,
}

impl AppState {
    pub fn new(
        film_service: Arc<FilmService>,
        user_service: Arc<UserService>,
        friendship_service: Arc<FriendshipService>,
    ) -> Self {
        Self {
            film_service,
            user_service,
            friendship_service,
        }
    }

    /// Wire all services over fresh in-memory stores.
    /// The user store and the friendship ledger are shared between services.
    pub fn in_memory() -> Self {
        let film_repo = Arc::new(InMemoryFilmRepository::new());
        let user_repo = Arc::new(InMemoryUserRepository::new());
        let friendship_repo = Arc::new(InMemoryFriendshipRepository::new());

        Self::new(
            Arc::new(FilmService::new(film_repo, user_repo.clone())),
            Arc::new(UserService::new(user_repo.clone(), friendship_repo.clone())),
            Arc::new(FriendshipService::new(friendship_repo, user_repo)),
        )
    }
}
