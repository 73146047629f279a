// src/repositories/friendship_repository.rs
//
// Friendship ledger persistence. Lookups by pair are unordered.

use crate::domain::{Friendship, FriendshipId, UserId};
use crate::error::AppResult;
use crate::repositories::memory::{InMemoryStore, StoredEntity};

#[cfg_attr(test, mockall::automock)]
pub trait FriendshipRepository: Send + Sync {
    /// Insert when the record has no id yet, overwrite otherwise
    fn save(&self, friendship: Friendship) -> AppResult<Friendship>;
    /// Insert a new record unless one already exists for the same pair,
    /// in either direction. `None` when the pair is taken.
    fn insert_if_pair_free(&self, friendship: Friendship) -> AppResult<Option<Friendship>>;
    fn find_by_users(&self, a: UserId, b: UserId) -> AppResult<Option<Friendship>>;
    fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Friendship>>;
    fn remove(&self, id: FriendshipId) -> AppResult<()>;
}

impl StoredEntity for Friendship {
    const KIND: &'static str = "friendship";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

#[derive(Debug, Default)]
pub struct InMemoryFriendshipRepository {
    store: InMemoryStore<Friendship>,
}

impl InMemoryFriendshipRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FriendshipRepository for InMemoryFriendshipRepository {
    fn save(&self, friendship: Friendship) -> AppResult<Friendship> {
        match friendship.id {
            None => self.store.add(friendship),
            Some(_) => self.store.update(friendship),
        }
    }

    fn insert_if_pair_free(&self, friendship: Friendship) -> AppResult<Option<Friendship>> {
        let (a, b) = (friendship.requester_id, friendship.recipient_id);
        self.store
            .add_unless(friendship, |existing| existing.connects(a, b))
    }

    fn find_by_users(&self, a: UserId, b: UserId) -> AppResult<Option<Friendship>> {
        Ok(self
            .store
            .find_all()?
            .into_iter()
            .find(|friendship| friendship.connects(a, b)))
    }

    fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Friendship>> {
        Ok(self
            .store
            .find_all()?
            .into_iter()
            .filter(|friendship| friendship.involves(user_id))
            .collect())
    }

    fn remove(&self, id: FriendshipId) -> AppResult<()> {
        self.store.remove(id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_assigns_then_overwrites() {
        let repo = InMemoryFriendshipRepository::new();
        let mut saved = repo.save(Friendship::request(1, 2)).unwrap();
        assert_eq!(saved.id, Some(1));

        saved.confirm(2).unwrap();
        repo.save(saved).unwrap();

        let all = repo.find_by_user_id(1).unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_confirmed());
    }

    #[test]
    fn test_find_by_users_ignores_order() {
        let repo = InMemoryFriendshipRepository::new();
        repo.save(Friendship::request(1, 2)).unwrap();
        repo.save(Friendship::request(3, 1)).unwrap();

        assert!(repo.find_by_users(2, 1).unwrap().is_some());
        assert!(repo.find_by_users(1, 3).unwrap().is_some());
        assert!(repo.find_by_users(2, 3).unwrap().is_none());
        assert_eq!(repo.find_by_user_id(1).unwrap().len(), 2);
    }

    #[test]
    fn test_insert_if_pair_free() {
        let repo = InMemoryFriendshipRepository::new();
        let first = repo.insert_if_pair_free(Friendship::request(1, 2)).unwrap();
        assert_eq!(first.unwrap().id, Some(1));

        assert!(repo
            .insert_if_pair_free(Friendship::request(2, 1))
            .unwrap()
            .is_none());
        assert!(repo
            .insert_if_pair_free(Friendship::established(1, 3))
            .unwrap()
            .is_some());
        assert_eq!(repo.find_by_user_id(1).unwrap().len(), 2);
    }

    #[test]
    fn test_remove() {
        let repo = InMemoryFriendshipRepository::new();
        let saved = repo.save(Friendship::established(1, 2)).unwrap();
        repo.remove(saved.id.unwrap()).unwrap();
        assert!(repo.find_by_users(1, 2).unwrap().is_none());
    }
}
