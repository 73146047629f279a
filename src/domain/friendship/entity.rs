use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult, FriendshipId, UserId};

/// One entry of the friendship ledger.
/// There is at most one record per unordered pair of users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friendship {
    pub id: Option<FriendshipId>,

    /// The user who sent the request
    pub requester_id: UserId,

    /// The user who has to confirm it
    pub recipient_id: UserId,

    pub status: FriendshipStatus,

    pub created_at: DateTime<Utc>,
}

/// Pending → Confirmed, nothing else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FriendshipStatus {
    Pending,
    Confirmed,
}

impl Friendship {
    /// A fresh pending request from `requester_id` to `recipient_id`
    pub fn request(requester_id: UserId, recipient_id: UserId) -> Self {
        Self {
            id: None,
            requester_id,
            recipient_id,
            status: FriendshipStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// A friendship established directly, without a confirmation step
    pub fn established(user_id: UserId, friend_id: UserId) -> Self {
        Self {
            status: FriendshipStatus::Confirmed,
            ..Self::request(user_id, friend_id)
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == FriendshipStatus::Confirmed
    }

    pub fn involves(&self, user_id: UserId) -> bool {
        self.requester_id == user_id || self.recipient_id == user_id
    }

    /// True if this record is the one for the unordered pair {a, b}
    pub fn connects(&self, a: UserId, b: UserId) -> bool {
        (self.requester_id == a && self.recipient_id == b)
            || (self.requester_id == b && self.recipient_id == a)
    }

    /// The other side of the friendship, if `user_id` is part of it
    pub fn counterparty(&self, user_id: UserId) -> Option<UserId> {
        if self.requester_id == user_id {
            Some(self.recipient_id)
        } else if self.recipient_id == user_id {
            Some(self.requester_id)
        } else {
            None
        }
    }

    /// Recipient accepts the request.
    /// A confirmed record cannot be confirmed again, and the requester cannot
    /// confirm their own request.
    pub fn confirm(&mut self, confirming_user_id: UserId) -> DomainResult<()> {
        if self.is_confirmed() {
            return Err(DomainError::InvalidStateTransition(
                "request already processed".to_string(),
            ));
        }
        if self.recipient_id != confirming_user_id {
            return Err(DomainError::InvalidStateTransition(
                "only the recipient can confirm a friendship request".to_string(),
            ));
        }
        self.status = FriendshipStatus::Confirmed;
        Ok(())
    }

    /// Confirm a pending record regardless of who asks. Used when a friendship
    /// is added directly while a request is still open.
    pub fn establish(&mut self) {
        self.status = FriendshipStatus::Confirmed;
    }
}

impl std::fmt::Display for FriendshipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FriendshipStatus::Pending => write!(f, "PENDING"),
            FriendshipStatus::Confirmed => write!(f, "CONFIRMED"),
        }
    }
}
