// src/services/user_service.rs
//
// User registry and the direct friend operations.
// Friend lists are read from the friendship ledger, never stored on the user.

use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;

use crate::domain::{
    validate_friendship, validate_new_user, validate_user_update, Friendship, FriendshipStatus,
    NewUser, User, UserId, UserUpdate,
};
use crate::error::{AppError, AppResult};
use crate::repositories::{FriendshipRepository, UserRepository};
use crate::services::friendship_service::confirmed_friend_ids;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    friendship_repo: Arc<dyn FriendshipRepository>,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        friendship_repo: Arc<dyn FriendshipRepository>,
    ) -> Self {
        Self {
            user_repo,
            friendship_repo,
        }
    }

    pub fn list_users(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_all()
    }

    pub fn get_user(&self, user_id: UserId) -> AppResult<User> {
        self.user_repo.get_by_id(user_id)
    }

    pub fn add_user(&self, request: NewUser) -> AppResult<User> {
        info!("add_user - registering '{}'", request.login);
        let fields = validate_new_user(&request, Utc::now().date_naive()).map_err(|e| {
            warn!("add_user - rejected '{}': {}", request.login, e);
            AppError::Domain(e)
        })?;

        let user = self
            .user_repo
            .add_if_email_free(User::new(fields))?
            .ok_or_else(|| email_taken(&request.login))?;
        info!("add_user - user {:?} '{}' registered", user.id, user.login);
        Ok(user)
    }

    /// Overwrites login, email, name and birthday of an existing user.
    /// Email uniqueness is only re-checked when the address changes.
    pub fn update_user(&self, request: UserUpdate) -> AppResult<User> {
        info!("update_user - updating user {}", request.id);
        let mut user = self.user_repo.get_by_id(request.id)?;

        let fields = validate_user_update(&request, Utc::now().date_naive()).map_err(|e| {
            warn!("update_user - rejected user {}: {}", request.id, e);
            AppError::Domain(e)
        })?;

        let email_changed = fields.email != user.email;
        user.apply(fields);
        let user = if email_changed {
            self.user_repo
                .update_if_email_free(user)?
                .ok_or_else(|| email_taken(&request.login))?
        } else {
            self.user_repo.update(user)?
        };
        info!("update_user - user {} updated", request.id);
        Ok(user)
    }

    /// Makes `user_id` and `friend_id` friends right away.
    /// A pending request between them is upgraded instead of duplicated.
    pub fn add_friend(&self, user_id: UserId, friend_id: UserId) -> AppResult<User> {
        info!("add_friend - {} and {}", user_id, friend_id);
        let user = self.user_repo.get_by_id(user_id)?;
        self.user_repo.get_by_id(friend_id)?;

        let friendship = Friendship::established(user_id, friend_id);
        validate_friendship(&friendship)?;

        // A record for the pair may appear between the lookup and the insert;
        // then look again and upgrade or reject it.
        loop {
            match self.friendship_repo.find_by_users(user_id, friend_id)? {
                Some(existing) if existing.is_confirmed() => {
                    warn!("add_friend - {} and {} are already friends", user_id, friend_id);
                    return Err(AppError::validation(format!(
                        "users {} and {} are already friends",
                        user_id, friend_id
                    )));
                }
                Some(mut pending) => {
                    pending.establish();
                    self.friendship_repo.save(pending)?;
                    break;
                }
                None => {
                    if self
                        .friendship_repo
                        .insert_if_pair_free(friendship.clone())?
                        .is_some()
                    {
                        break;
                    }
                }
            }
        }

        info!("add_friend - {} and {} are now friends", user_id, friend_id);
        Ok(user)
    }

    /// Ends the friendship between the two users.
    /// Users who are not friends are left alone and `user_id` is returned as is.
    pub fn remove_friend(&self, user_id: UserId, friend_id: UserId) -> AppResult<User> {
        info!("remove_friend - {} and {}", user_id, friend_id);
        let user = self.user_repo.get_by_id(user_id)?;
        self.user_repo.get_by_id(friend_id)?;

        match self.friendship_repo.find_by_users(user_id, friend_id)? {
            Some(Friendship {
                id: Some(id),
                status: FriendshipStatus::Confirmed,
                ..
            }) => {
                self.friendship_repo.remove(id)?;
                info!("remove_friend - {} and {} are no longer friends", user_id, friend_id);
            }
            _ => {
                info!("remove_friend - {} and {} were not friends", user_id, friend_id);
            }
        }

        Ok(user)
    }

    pub fn friends(&self, user_id: UserId) -> AppResult<Vec<User>> {
        self.user_repo.get_by_id(user_id)?;
        confirmed_friend_ids(self.friendship_repo.as_ref(), user_id)?
            .into_iter()
            .map(|id| self.user_repo.get_by_id(id))
            .collect()
    }

    /// Users who are friends with both, ascending by id
    pub fn common_friends(&self, user_id: UserId, other_id: UserId) -> AppResult<Vec<User>> {
        self.user_repo.get_by_id(user_id)?;
        self.user_repo.get_by_id(other_id)?;

        let mine = confirmed_friend_ids(self.friendship_repo.as_ref(), user_id)?;
        let theirs = confirmed_friend_ids(self.friendship_repo.as_ref(), other_id)?;

        mine.into_iter()
            .filter(|id| theirs.binary_search(id).is_ok())
            .map(|id| self.user_repo.get_by_id(id))
            .collect()
    }
}

fn email_taken(login: &str) -> AppError {
    warn!("'{}' rejected, email already used", login);
    AppError::validation("email already used")
}
