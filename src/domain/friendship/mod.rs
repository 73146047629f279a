//! Friendship Ledger Invariants:
//!
//! 1. At most one record exists per unordered pair of users
//! 2. A user cannot befriend themselves
//! 3. Records start Pending (request) or Confirmed (direct add)
//! 4. Only the recipient moves a record from Pending to Confirmed
//! 5. Confirmed is terminal; the record may only be removed

pub mod entity;

pub use entity::{Friendship, FriendshipStatus};

use crate::domain::{DomainError, DomainResult};

/// Validates Friendship invariants that do not need the rest of the ledger
pub fn validate_friendship(friendship: &Friendship) -> DomainResult<()> {
    if friendship.requester_id == friendship.recipient_id {
        return Err(DomainError::validation("user cannot befriend themselves"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_friendship_fails() {
        let err = validate_friendship(&Friendship::request(4, 4)).unwrap_err();
        assert_eq!(err.to_string(), "user cannot befriend themselves");
    }

    #[test]
    fn test_recipient_confirms() {
        let mut friendship = Friendship::request(1, 2);
        assert_eq!(friendship.status, FriendshipStatus::Pending);
        friendship.confirm(2).unwrap();
        assert!(friendship.is_confirmed());
    }

    #[test]
    fn test_requester_cannot_confirm() {
        let mut friendship = Friendship::request(1, 2);
        let err = friendship.confirm(1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "only the recipient can confirm a friendship request"
        );
        assert_eq!(friendship.status, FriendshipStatus::Pending);
    }

    #[test]
    fn test_confirmed_is_terminal() {
        let mut friendship = Friendship::established(1, 2);
        let err = friendship.confirm(2).unwrap_err();
        assert_eq!(err.to_string(), "request already processed");
    }

    #[test]
    fn test_pair_is_unordered() {
        let friendship = Friendship::request(1, 2);
        assert!(friendship.connects(1, 2));
        assert!(friendship.connects(2, 1));
        assert!(!friendship.connects(1, 3));
        assert_eq!(friendship.counterparty(2), Some(1));
        assert_eq!(friendship.counterparty(3), None);
        assert!(friendship.involves(1));
        assert!(!friendship.involves(3));
    }
}
