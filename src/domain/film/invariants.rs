use chrono::NaiveDate;

use super::entity::{FilmFields, FilmUpdate, Genre, MpaRating, NewFilm};
use crate::domain::{DomainError, DomainResult};

/// Earliest permissible release date: the first public film screening
pub const CINEMA_BIRTHDAY: NaiveDate = match NaiveDate::from_ymd_opt(1895, 12, 28) {
    Some(date) => date,
    None => panic!("invalid cinema birthday"),
};

pub const MAX_DESCRIPTION_LENGTH: usize = 200;

/// Validates a film creation request and returns the fields to store
pub fn validate_new_film(film: &NewFilm) -> DomainResult<FilmFields> {
    check_fields(
        &film.name,
        film.description.as_deref(),
        film.release_date,
        film.duration,
        &film.genres,
        film.mpa,
    )
}

/// Validates a film update request and returns the replacement fields.
/// The id itself is resolved by the caller against the store.
pub fn validate_film_update(update: &FilmUpdate) -> DomainResult<FilmFields> {
    check_fields(
        &update.name,
        update.description.as_deref(),
        update.release_date,
        update.duration,
        &update.genres,
        update.mpa,
    )
}

fn check_fields(
    name: &str,
    description: Option<&str>,
    release_date: Option<NaiveDate>,
    duration: Option<i32>,
    genres: &[Genre],
    mpa: Option<MpaRating>,
) -> DomainResult<FilmFields> {
    validate_name(name)?;
    validate_description(description)?;
    let release_date = validate_release_date(release_date)?;
    let duration = validate_duration(duration)?;

    Ok(FilmFields {
        name: name.to_string(),
        description: description.map(str::to_string),
        release_date,
        duration,
        genres: genres.iter().copied().collect(),
        mpa,
    })
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("film name cannot be blank"));
    }
    Ok(())
}

/// Length is counted in characters, not bytes
fn validate_description(description: Option<&str>) -> DomainResult<()> {
    if let Some(text) = description {
        if text.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(DomainError::validation(format!(
                "description cannot exceed {} characters",
                MAX_DESCRIPTION_LENGTH
            )));
        }
    }
    Ok(())
}

/// The cinema birthday itself is accepted
fn validate_release_date(release_date: Option<NaiveDate>) -> DomainResult<NaiveDate> {
    let date = release_date.ok_or_else(|| DomainError::validation("release date is required"))?;
    if date < CINEMA_BIRTHDAY {
        return Err(DomainError::validation("release date before cinema birthday"));
    }
    Ok(date)
}

fn validate_duration(duration: Option<i32>) -> DomainResult<u32> {
    match duration {
        Some(minutes) if minutes > 0 => Ok(minutes as u32),
        _ => Err(DomainError::validation("duration must be positive")),
    }
}

/// Film invariants:
///
/// 1. Identity is assigned once by the store and never changes
/// 2. Name cannot be blank
/// 3. Description is at most 200 characters
/// 4. Release date is on or after 1895-12-28
/// 5. Duration is a positive number of minutes
/// 6. A user appears at most once in the likes set
