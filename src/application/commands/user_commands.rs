// src/application/commands/user_commands.rs
//
// User Command Handlers

use crate::application::{
    dto::*,
    error_handling::{ErrorResponse, ToErrorResponse},
    state::AppState,
};
use crate::domain::{NewUser, User, UserId, UserUpdate};

fn to_dtos(users: Vec<User>) -> Vec<UserDto> {
    users.into_iter().map(UserDto::from).collect()
}

/// List all users
pub fn list_users(state: &AppState) -> Result<Vec<UserDto>, ErrorResponse> {
    let users = state.user_service.list_users().to_error_response()?;
    Ok(to_dtos(users))
}

/// Get a single user by id
pub fn get_user(state: &AppState, user_id: UserId) -> Result<UserDto, ErrorResponse> {
    let user = state.user_service.get_user(user_id).to_error_response()?;
    Ok(UserDto::from(user))
}

/// Register a new user
pub fn create_user(state: &AppState, dto: CreateUserDto) -> Result<UserDto, ErrorResponse> {
    if dto.id.is_some() {
        return Err(ErrorResponse::validation("id must not be set on create"));
    }

    let request = NewUser {
        email: dto.email,
        login: dto.login,
        name: dto.name,
        birthday: dto.birthday,
    };

    let user = state.user_service.add_user(request).to_error_response()?;
    Ok(UserDto::from(user))
}

pub fn update_user(state: &AppState, dto: UpdateUserDto) -> Result<UserDto, ErrorResponse> {
    let id = dto
        .id
        .ok_or_else(|| ErrorResponse::validation("id is required for update"))?;

    let request = UserUpdate {
        id,
        email: dto.email,
        login: dto.login,
        name: dto.name,
        birthday: dto.birthday,
    };

    let user = state.user_service.update_user(request).to_error_response()?;
    Ok(UserDto::from(user))
}

pub fn add_friend(
    state: &AppState,
    user_id: UserId,
    friend_id: UserId,
) -> Result<UserDto, ErrorResponse> {
    let user = state
        .user_service
        .add_friend(user_id, friend_id)
        .to_error_response()?;
    Ok(UserDto::from(user))
}

pub fn remove_friend(
    state: &AppState,
    user_id: UserId,
    friend_id: UserId,
) -> Result<UserDto, ErrorResponse> {
    let user = state
        .user_service
        .remove_friend(user_id, friend_id)
        .to_error_response()?;
    Ok(UserDto::from(user))
}

pub fn list_friends(state: &AppState, user_id: UserId) -> Result<Vec<UserDto>, ErrorResponse> {
    let friends = state.user_service.friends(user_id).to_error_response()?;
    Ok(to_dtos(friends))
}

pub fn common_friends(
    state: &AppState,
    user_id: UserId,
    other_id: UserId,
) -> Result<Vec<UserDto>, ErrorResponse> {
    let friends = state
        .user_service
        .common_friends(user_id, other_id)
        .to_error_response()?;
    Ok(to_dtos(friends))
}
