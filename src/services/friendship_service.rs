// src/services/friendship_service.rs
//
// Request/confirm lifecycle over the friendship ledger

use log::{info, warn};
use std::sync::Arc;

use crate::domain::{validate_friendship, Friendship, UserId};
use crate::error::{AppError, AppResult};
use crate::repositories::{FriendshipRepository, UserRepository};

pub struct FriendshipService {
    friendship_repo: Arc<dyn FriendshipRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl FriendshipService {
    pub fn new(
        friendship_repo: Arc<dyn FriendshipRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            friendship_repo,
            user_repo,
        }
    }

    /// Open a pending request from `sender_id` to `receiver_id`.
    /// Any existing record for the pair blocks a new one, whatever its status.
    pub fn send_request(&self, sender_id: UserId, receiver_id: UserId) -> AppResult<Friendship> {
        info!("send_request - {} asks {}", sender_id, receiver_id);
        self.user_repo.get_by_id(sender_id)?;
        self.user_repo.get_by_id(receiver_id)?;

        let request = Friendship::request(sender_id, receiver_id);
        validate_friendship(&request)?;

        let saved = self
            .friendship_repo
            .insert_if_pair_free(request)?
            .ok_or_else(|| {
                warn!(
                    "send_request - record between {} and {} already exists",
                    sender_id, receiver_id
                );
                AppError::validation("request already exists")
            })?;

        info!(
            "send_request - request {:?} from {} to {} saved",
            saved.id, sender_id, receiver_id
        );
        Ok(saved)
    }

    /// Accept the request between the two users on behalf of `confirming_user_id`,
    /// who must be its recipient.
    pub fn confirm_request(
        &self,
        confirming_user_id: UserId,
        other_user_id: UserId,
    ) -> AppResult<Friendship> {
        info!(
            "confirm_request - {} confirms friendship with {}",
            confirming_user_id, other_user_id
        );
        let mut friendship = self
            .friendship_repo
            .find_by_users(confirming_user_id, other_user_id)?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "friendship request between {} and {} not found",
                    confirming_user_id, other_user_id
                ))
            })?;

        friendship.confirm(confirming_user_id).map_err(|e| {
            warn!(
                "confirm_request - {} cannot confirm (requester {}, recipient {}, {}): {}",
                confirming_user_id,
                friendship.requester_id,
                friendship.recipient_id,
                friendship.status,
                e
            );
            AppError::Domain(e)
        })?;

        let saved = self.friendship_repo.save(friendship)?;
        info!(
            "confirm_request - friendship between {} and {} confirmed",
            other_user_id, confirming_user_id
        );
        Ok(saved)
    }

    /// Ids of users with a confirmed friendship with `user_id`, ascending
    pub fn friend_ids(&self, user_id: UserId) -> AppResult<Vec<UserId>> {
        self.user_repo.get_by_id(user_id)?;
        confirmed_friend_ids(self.friendship_repo.as_ref(), user_id)
    }
}

/// Counterparties of every confirmed record involving `user_id`, ascending
pub(crate) fn confirmed_friend_ids(
    friendship_repo: &dyn FriendshipRepository,
    user_id: UserId,
) -> AppResult<Vec<UserId>> {
    let mut ids: Vec<UserId> = friendship_repo
        .find_by_user_id(user_id)?
        .into_iter()
        .filter(Friendship::is_confirmed)
        .filter_map(|friendship| friendship.counterparty(user_id))
        .collect();
    ids.sort_unstable();
    Ok(ids)
}
