// src/application/commands/friendship_commands.rs
//
// Friendship Command Handlers

use crate::application::{
    dto::*,
    error_handling::{ErrorResponse, ToErrorResponse},
    state::AppState,
};

/// `dto.user_id` asks `dto.friend_id` to become friends
pub fn send_friend_request(
    state: &AppState,
    dto: FriendshipRequestDto,
) -> Result<FriendshipDto, ErrorResponse> {
    let friendship = state
        .friendship_service
        .send_request(dto.user_id, dto.friend_id)
        .to_error_response()?;
    Ok(FriendshipDto::from(friendship))
}

pub fn confirm_friend_request(
    state: &AppState,
    query: ConfirmFriendshipQuery,
) -> Result<FriendshipDto, ErrorResponse> {
    let friendship = state
        .friendship_service
        .confirm_request(query.confirming_user_id, query.other_user_id)
        .to_error_response()?;
    Ok(FriendshipDto::from(friendship))
}
