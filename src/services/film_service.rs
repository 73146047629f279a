// src/services/film_service.rs
use log::{info, warn};
use std::sync::Arc;

use crate::domain::film::{validate_film_update, validate_new_film, Film, FilmUpdate, NewFilm};
use crate::domain::{FilmId, UserId};
use crate::error::{AppError, AppResult};
use crate::repositories::{FilmRepository, UserRepository};

/// Number of films returned by `popular_films` when the caller gives no usable count
pub const DEFAULT_POPULAR_COUNT: usize = 10;

pub struct FilmService {
    film_repo: Arc<dyn FilmRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl FilmService {
    pub fn new(film_repo: Arc<dyn FilmRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            film_repo,
            user_repo,
        }
    }

    pub fn list_films(&self) -> AppResult<Vec<Film>> {
        self.film_repo.find_all()
    }

    pub fn get_film(&self, film_id: FilmId) -> AppResult<Film> {
        self.film_repo.get_by_id(film_id)
    }

    pub fn add_film(&self, request: NewFilm) -> AppResult<Film> {
        info!("add_film - adding film '{}'", request.name);
        let fields = validate_new_film(&request).map_err(|e| {
            warn!("add_film - rejected '{}': {}", request.name, e);
            AppError::Domain(e)
        })?;

        let film = self.film_repo.add(Film::new(fields))?;
        info!("add_film - film {:?} '{}' added", film.id, film.name);
        Ok(film)
    }

    /// Replaces name, description, release date, duration, genres and rating.
    /// The id and the likes set are left as they are.
    pub fn update_film(&self, request: FilmUpdate) -> AppResult<Film> {
        info!("update_film - updating film {}", request.id);
        let fields = validate_film_update(&request).map_err(|e| {
            warn!("update_film - rejected film {}: {}", request.id, e);
            AppError::Domain(e)
        })?;

        let mut film = self.film_repo.get_by_id(request.id)?;
        film.apply(fields);
        let film = self.film_repo.update(film)?;

        info!("update_film - film {} '{}' updated", request.id, film.name);
        Ok(film)
    }

    pub fn add_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<Film> {
        info!("add_like - user {} likes film {}", user_id, film_id);
        let mut film = self.film_repo.get_by_id(film_id)?;
        self.user_repo.get_by_id(user_id)?;

        if !film.add_like(user_id) {
            warn!("add_like - user {} already liked film {}", user_id, film_id);
            return Err(AppError::validation(format!(
                "user {} already liked film {}",
                user_id, film_id
            )));
        }

        self.film_repo.update(film)
    }

    pub fn remove_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<Film> {
        info!("remove_like - user {} unlikes film {}", user_id, film_id);
        let mut film = self.film_repo.get_by_id(film_id)?;
        self.user_repo.get_by_id(user_id)?;

        if !film.remove_like(user_id) {
            warn!("remove_like - user {} has not liked film {}", user_id, film_id);
            return Err(AppError::validation(format!(
                "user {} has not liked film {}",
                user_id, film_id
            )));
        }

        self.film_repo.update(film)
    }

    /// Films ordered by like count, most liked first. Ties keep store order.
    /// A missing or non-positive `count` means `DEFAULT_POPULAR_COUNT`.
    pub fn popular_films(&self, count: Option<i64>) -> AppResult<Vec<Film>> {
        let limit = match count {
            Some(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
            _ => DEFAULT_POPULAR_COUNT,
        };

        let mut films = self.film_repo.find_all()?;
        films.sort_by(|a, b| b.likes_count().cmp(&a.likes_count()));
        films.truncate(limit);

        info!("popular_films - returning {} films", films.len());
        Ok(films)
    }
}
