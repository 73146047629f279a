// src/repositories/film_repository.rs

use crate::domain::{Film, FilmId};
use crate::error::AppResult;
use crate::repositories::memory::{InMemoryStore, StoredEntity};

#[cfg_attr(test, mockall::automock)]
pub trait FilmRepository: Send + Sync {
    fn find_all(&self) -> AppResult<Vec<Film>>;
    fn get_by_id(&self, id: FilmId) -> AppResult<Film>;
    fn add(&self, film: Film) -> AppResult<Film>;
    fn update(&self, film: Film) -> AppResult<Film>;
}

impl StoredEntity for Film {
    const KIND: &'static str = "film";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

#[derive(Debug, Default)]
pub struct InMemoryFilmRepository {
    store: InMemoryStore<Film>,
}

impl InMemoryFilmRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FilmRepository for InMemoryFilmRepository {
    fn find_all(&self) -> AppResult<Vec<Film>> {
        self.store.find_all()
    }

    fn get_by_id(&self, id: FilmId) -> AppResult<Film> {
        self.store.get_by_id(id)
    }

    fn add(&self, film: Film) -> AppResult<Film> {
        self.store.add(film)
    }

    fn update(&self, film: Film) -> AppResult<Film> {
        self.store.update(film)
    }
}
