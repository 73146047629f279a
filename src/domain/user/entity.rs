use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// A registered user.
/// Friends are not stored here; they are derived from the friendship ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store on creation, never changed afterwards
    pub id: Option<UserId>,

    /// Unique across users, compared case-insensitively
    pub email: String,

    pub login: String,

    /// Display name, falls back to the login
    pub name: String,

    pub birthday: NaiveDate,
}

/// Validated user fields, ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
}

/// Caller input for registering a user
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub email: String,
    pub login: String,
    pub name: Option<String>,
    pub birthday: Option<NaiveDate>,
}

/// Caller input for replacing the fields of an existing user
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub id: UserId,
    pub email: String,
    pub login: String,
    pub name: Option<String>,
    pub birthday: Option<NaiveDate>,
}

impl User {
    pub fn new(fields: UserFields) -> Self {
        Self {
            id: None,
            email: fields.email,
            login: fields.login,
            name: fields.name,
            birthday: fields.birthday,
        }
    }

    /// Overwrite everything but the identity
    pub fn apply(&mut self, fields: UserFields) {
        self.email = fields.email;
        self.login = fields.login;
        self.name = fields.name;
        self.birthday = fields.birthday;
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.login)
    }
}
