// src/application/commands/film_commands.rs
//
// Film Command Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic

use crate::application::{
    dto::*,
    error_handling::{ErrorResponse, ToErrorResponse},
    state::AppState,
};
use crate::domain::{FilmId, FilmUpdate, NewFilm, UserId};

/// List all films
pub fn list_films(state: &AppState) -> Result<Vec<FilmDto>, ErrorResponse> {
    let films = state.film_service.list_films().to_error_response()?;
    Ok(films.into_iter().map(FilmDto::from).collect())
}

/// Get a single film by id
pub fn get_film(state: &AppState, film_id: FilmId) -> Result<FilmDto, ErrorResponse> {
    let film = state.film_service.get_film(film_id).to_error_response()?;
    Ok(FilmDto::from(film))
}

/// Create a new film
pub fn create_film(state: &AppState, dto: CreateFilmDto) -> Result<FilmDto, ErrorResponse> {
    if dto.id.is_some() {
        return Err(ErrorResponse::validation("id must not be set on create"));
    }

    let request = NewFilm {
        name: dto.name,
        description: dto.description,
        release_date: dto.release_date,
        duration: dto.duration,
        genres: dto.genres,
        mpa: dto.mpa,
    };

    let film = state.film_service.add_film(request).to_error_response()?;
    Ok(FilmDto::from(film))
}

/// Replace the fields of an existing film
pub fn update_film(state: &AppState, dto: UpdateFilmDto) -> Result<FilmDto, ErrorResponse> {
    let id = dto
        .id
        .ok_or_else(|| ErrorResponse::validation("id is required for update"))?;

    let request = FilmUpdate {
        id,
        name: dto.name,
        description: dto.description,
        release_date: dto.release_date,
        duration: dto.duration,
        genres: dto.genres,
        mpa: dto.mpa,
    };

    let film = state.film_service.update_film(request).to_error_response()?;
    Ok(FilmDto::from(film))
}

pub fn like_film(
    state: &AppState,
    film_id: FilmId,
    user_id: UserId,
) -> Result<FilmDto, ErrorResponse> {
    let film = state
        .film_service
        .add_like(film_id, user_id)
        .to_error_response()?;
    Ok(FilmDto::from(film))
}

pub fn unlike_film(
    state: &AppState,
    film_id: FilmId,
    user_id: UserId,
) -> Result<FilmDto, ErrorResponse> {
    let film = state
        .film_service
        .remove_like(film_id, user_id)
        .to_error_response()?;
    Ok(FilmDto::from(film))
}

/// Most liked films first
pub fn popular_films(state: &AppState, query: PopularQuery) -> Result<Vec<FilmDto>, ErrorResponse> {
    let films = state
        .film_service
        .popular_films(query.count)
        .to_error_response()?;
    Ok(films.into_iter().map(FilmDto::from).collect())
}
