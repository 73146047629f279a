// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are the JSON shape seen by HTTP clients (camelCase, dates as YYYY-MM-DD)
// - DTOs NEVER enforce domain rules; every field is optional or defaulted so the
//   domain validators report what is missing
// - Outgoing DTOs are built FROM domain entities, incoming ones are turned into
//   domain requests by the command handlers

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Film, FilmId, Friendship, FriendshipId, FriendshipStatus, Genre, MpaRating, User, UserId,
};

// ============================================================================
// FILM DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmDto {
    pub id: Option<FilmId>,
    pub name: String,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    pub duration: u32,
    pub genres: Vec<Genre>,
    pub mpa: Option<MpaRating>,
    pub likes_count: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilmDto {
    /// Must be absent; the store assigns ids
    pub id: Option<FilmId>,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub duration: Option<i32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub mpa: Option<MpaRating>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFilmDto {
    pub id: Option<FilmId>,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub duration: Option<i32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub mpa: Option<MpaRating>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PopularQuery {
    pub count: Option<i64>,
}

// ============================================================================
// USER DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Option<UserId>,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub id: Option<UserId>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub login: String,
    pub name: Option<String>,
    pub birthday: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub id: Option<UserId>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub login: String,
    pub name: Option<String>,
    pub birthday: Option<NaiveDate>,
}

// ============================================================================
// FRIENDSHIP DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendshipDto {
    pub id: Option<FriendshipId>,
    pub user_id: UserId,
    pub friend_id: UserId,
    pub status: FriendshipStatus,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /friendships/requests`: `user_id` asks `friend_id`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendshipRequestDto {
    pub user_id: UserId,
    pub friend_id: UserId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmFriendshipQuery {
    pub confirming_user_id: UserId,
    pub other_user_id: UserId,
}

// ============================================================================
// CONVERSIONS (domain → DTO only)
// ============================================================================

impl From<Film> for FilmDto {
    fn from(film: Film) -> Self {
        Self {
            likes_count: film.likes_count(),
            id: film.id,
            name: film.name,
            description: film.description,
            release_date: film.release_date,
            duration: film.duration,
            genres: film.genres.into_iter().collect(),
            mpa: film.mpa,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            login: user.login,
            name: user.name,
            birthday: user.birthday,
        }
    }
}

impl From<Friendship> for FriendshipDto {
    fn from(friendship: Friendship) -> Self {
        Self {
            id: friendship.id,
            user_id: friendship.requester_id,
            friend_id: friendship.recipient_id,
            status: friendship.status,
            created_at: friendship.created_at,
        }
    }
}
