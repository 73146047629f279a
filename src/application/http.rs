// src/application/http.rs
//
// HTTP routes over the command handlers.
// Extractor rejections (bad JSON, non-numeric ids, bad query strings) are
// reported as validation errors in the same ErrorResponse shape.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};

use crate::application::{commands, dto::*, error_handling::ErrorResponse, state::AppState};
use crate::domain::{FilmId, UserId};

type ApiResult<T> = Result<Json<T>, ErrorResponse>;

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl From<JsonRejection> for ErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        ErrorResponse::validation(rejection.body_text())
    }
}

impl From<PathRejection> for ErrorResponse {
    fn from(rejection: PathRejection) -> Self {
        ErrorResponse::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ErrorResponse {
    fn from(rejection: QueryRejection) -> Self {
        ErrorResponse::validation(rejection.body_text())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/films", get(list_films).post(create_film).put(update_film))
        .route("/films/popular", get(popular_films))
        .route("/films/{id}", get(get_film))
        .route("/films/{id}/like/{user_id}", put(like_film).delete(unlike_film))
        .route("/users", get(list_users).post(create_user).put(update_user))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/friends", get(list_friends))
        .route(
            "/users/{id}/friends/{friend_id}",
            put(add_friend).delete(remove_friend),
        )
        .route("/users/{id}/friends/common/{other_id}", get(common_friends))
        .route("/friendships/requests", post(send_friend_request))
        .route("/friendships/confirm", put(confirm_friend_request))
        .with_state(state)
}

// ============================================================================
// FILMS
// ============================================================================

async fn list_films(State(state): State<AppState>) -> ApiResult<Vec<FilmDto>> {
    commands::list_films(&state).map(Json)
}

async fn get_film(
    State(state): State<AppState>,
    id: Result<Path<FilmId>, PathRejection>,
) -> ApiResult<FilmDto> {
    let Path(id) = id?;
    commands::get_film(&state, id).map(Json)
}

async fn create_film(
    State(state): State<AppState>,
    payload: Result<Json<CreateFilmDto>, JsonRejection>,
) -> ApiResult<FilmDto> {
    let Json(dto) = payload?;
    commands::create_film(&state, dto).map(Json)
}

async fn update_film(
    State(state): State<AppState>,
    payload: Result<Json<UpdateFilmDto>, JsonRejection>,
) -> ApiResult<FilmDto> {
    let Json(dto) = payload?;
    commands::update_film(&state, dto).map(Json)
}

async fn like_film(
    State(state): State<AppState>,
    ids: Result<Path<(FilmId, UserId)>, PathRejection>,
) -> ApiResult<FilmDto> {
    let Path((film_id, user_id)) = ids?;
    commands::like_film(&state, film_id, user_id).map(Json)
}

async fn unlike_film(
    State(state): State<AppState>,
    ids: Result<Path<(FilmId, UserId)>, PathRejection>,
) -> ApiResult<FilmDto> {
    let Path((film_id, user_id)) = ids?;
    commands::unlike_film(&state, film_id, user_id).map(Json)
}

async fn popular_films(
    State(state): State<AppState>,
    query: Result<Query<PopularQuery>, QueryRejection>,
) -> ApiResult<Vec<FilmDto>> {
    let Query(query) = query?;
    commands::popular_films(&state, query).map(Json)
}

// ============================================================================
// USERS
// ============================================================================

async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserDto>> {
    commands::list_users(&state).map(Json)
}

async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<UserId>, PathRejection>,
) -> ApiResult<UserDto> {
    let Path(id) = id?;
    commands::get_user(&state, id).map(Json)
}

async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> ApiResult<UserDto> {
    let Json(dto) = payload?;
    commands::create_user(&state, dto).map(Json)
}

async fn update_user(
    State(state): State<AppState>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> ApiResult<UserDto> {
    let Json(dto) = payload?;
    commands::update_user(&state, dto).map(Json)
}

async fn add_friend(
    State(state): State<AppState>,
    ids: Result<Path<(UserId, UserId)>, PathRejection>,
) -> ApiResult<UserDto> {
    let Path((user_id, friend_id)) = ids?;
    commands::add_friend(&state, user_id, friend_id).map(Json)
}

async fn remove_friend(
    State(state): State<AppState>,
    ids: Result<Path<(UserId, UserId)>, PathRejection>,
) -> ApiResult<UserDto> {
    let Path((user_id, friend_id)) = ids?;
    commands::remove_friend(&state, user_id, friend_id).map(Json)
}

async fn list_friends(
    State(state): State<AppState>,
    id: Result<Path<UserId>, PathRejection>,
) -> ApiResult<Vec<UserDto>> {
    let Path(id) = id?;
    commands::list_friends(&state, id).map(Json)
}

async fn common_friends(
    State(state): State<AppState>,
    ids: Result<Path<(UserId, UserId)>, PathRejection>,
) -> ApiResult<Vec<UserDto>> {
    let Path((user_id, other_id)) = ids?;
    commands::common_friends(&state, user_id, other_id).map(Json)
}

// ============================================================================
// FRIENDSHIPS
// ============================================================================

async fn send_friend_request(
    State(state): State<AppState>,
    payload: Result<Json<FriendshipRequestDto>, JsonRejection>,
) -> ApiResult<FriendshipDto> {
    let Json(dto) = payload?;
    commands::send_friend_request(&state, dto).map(Json)
}

async fn confirm_friend_request(
    State(state): State<AppState>,
    query: Result<Query<ConfirmFriendshipQuery>, QueryRejection>,
) -> ApiResult<FriendshipDto> {
    let Query(query) = query?;
    commands::confirm_friend_request(&state, query).map(Json)
}
