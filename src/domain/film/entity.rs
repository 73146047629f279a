use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::{FilmId, UserId};

/// A catalogued film and the set of users who liked it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    /// Assigned by the store on creation, never changed afterwards
    pub id: Option<FilmId>,

    pub name: String,

    pub description: Option<String>,

    pub release_date: NaiveDate,

    /// Running time in minutes
    pub duration: u32,

    pub genres: BTreeSet<Genre>,

    pub mpa: Option<MpaRating>,

    /// Users who liked this film. Only the like operations touch it.
    likes: BTreeSet<UserId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Comedy,
    Drama,
    Cartoon,
    Thriller,
    Documentary,
    Action,
}

/// Motion Picture Association rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MpaRating {
    #[serde(rename = "G")]
    G,
    #[serde(rename = "PG")]
    Pg,
    #[serde(rename = "PG-13")]
    Pg13,
    #[serde(rename = "R")]
    R,
    #[serde(rename = "NC-17")]
    Nc17,
}

/// The mutable part of a film, as produced by validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmFields {
    pub name: String,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    pub duration: u32,
    pub genres: BTreeSet<Genre>,
    pub mpa: Option<MpaRating>,
}

/// Caller input for creating a film. Nothing here is trusted until validated.
#[derive(Debug, Clone, Default)]
pub struct NewFilm {
    pub name: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub duration: Option<i32>,
    pub genres: Vec<Genre>,
    pub mpa: Option<MpaRating>,
}

/// Caller input for replacing the mutable fields of an existing film
#[derive(Debug, Clone, Default)]
pub struct FilmUpdate {
    pub id: FilmId,
    pub name: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub duration: Option<i32>,
    pub genres: Vec<Genre>,
    pub mpa: Option<MpaRating>,
}

impl Film {
    /// Create a film without an id; the store assigns one on insert
    pub fn new(fields: FilmFields) -> Self {
        Self {
            id: None,
            name: fields.name,
            description: fields.description,
            release_date: fields.release_date,
            duration: fields.duration,
            genres: fields.genres,
            mpa: fields.mpa,
            likes: BTreeSet::new(),
        }
    }

    /// Overwrite the mutable fields. Identity and likes are preserved.
    pub fn apply(&mut self, fields: FilmFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.release_date = fields.release_date;
        self.duration = fields.duration;
        self.genres = fields.genres;
        self.mpa = fields.mpa;
    }

    pub fn has_like(&self, user_id: UserId) -> bool {
        self.likes.contains(&user_id)
    }

    pub fn likes_count(&self) -> usize {
        self.likes.len()
    }

    /// Returns false if the user had already liked the film
    pub fn add_like(&mut self, user_id: UserId) -> bool {
        self.likes.insert(user_id)
    }

    /// Returns false if the user had not liked the film
    pub fn remove_like(&mut self, user_id: UserId) -> bool {
        self.likes.remove(&user_id)
    }
}
