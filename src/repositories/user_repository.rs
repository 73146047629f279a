// src/repositories/user_repository.rs

use crate::domain::{email_clashes, User, UserId};
use crate::error::AppResult;
use crate::repositories::memory::{InMemoryStore, StoredEntity};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn find_all(&self) -> AppResult<Vec<User>>;
    fn get_by_id(&self, id: UserId) -> AppResult<User>;
    fn add(&self, user: User) -> AppResult<User>;
    fn update(&self, user: User) -> AppResult<User>;

    /// Insert unless another user already has the email. `None` on a clash.
    fn add_if_email_free(&self, user: User) -> AppResult<Option<User>>;

    /// Overwrite unless another user already has the email. `None` on a clash.
    fn update_if_email_free(&self, user: User) -> AppResult<Option<User>>;
}

impl StoredEntity for User {
    const KIND: &'static str = "user";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: InMemoryStore<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_all(&self) -> AppResult<Vec<User>> {
        self.store.find_all()
    }

    fn get_by_id(&self, id: UserId) -> AppResult<User> {
        self.store.get_by_id(id)
    }

    fn add(&self, user: User) -> AppResult<User> {
        self.store.add(user)
    }

    fn update(&self, user: User) -> AppResult<User> {
        self.store.update(user)
    }

    fn add_if_email_free(&self, user: User) -> AppResult<Option<User>> {
        let email = user.email.clone();
        self.store
            .add_unless(user, |existing| email_clashes(&email, None, existing))
    }

    fn update_if_email_free(&self, user: User) -> AppResult<Option<User>> {
        let (email, owner) = (user.email.clone(), user.id);
        self.store
            .update_unless(user, |existing| email_clashes(&email, owner, existing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn user(login: &str, email: &str) -> User {
        User {
            id: None,
            email: email.to_string(),
            login: login.to_string(),
            name: login.to_string(),
            birthday: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_add_if_email_free() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.add_if_email_free(user("a", "a@ya.ru")).unwrap().is_some());
        assert!(repo.add_if_email_free(user("b", "A@YA.ru")).unwrap().is_none());
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_update_if_email_free_ignores_own_record() {
        let repo = InMemoryUserRepository::new();
        let mut first = repo.add(user("a", "a@ya.ru")).unwrap();
        repo.add(user("b", "b@ya.ru")).unwrap();

        first.login = "renamed".to_string();
        assert!(repo.update_if_email_free(first.clone()).unwrap().is_some());

        first.email = "B@ya.ru".to_string();
        assert!(repo.update_if_email_free(first).unwrap().is_none());
        assert_eq!(repo.get_by_id(1).unwrap().email, "a@ya.ru");
    }
}
