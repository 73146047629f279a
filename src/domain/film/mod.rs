pub mod entity;
pub mod invariants;

pub use entity::{Film, FilmFields, FilmUpdate, Genre, MpaRating, NewFilm};
pub use invariants::{
    validate_film_update, validate_new_film, CINEMA_BIRTHDAY, MAX_DESCRIPTION_LENGTH,
};
