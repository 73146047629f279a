use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

use super::entity::{NewUser, User, UserFields, UserUpdate};
use crate::domain::{DomainError, DomainResult, UserId};

static LOGIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+$").expect("login pattern compiles"));

/// Validates a registration request.
/// `today` is the reference date for the birthday check.
pub fn validate_new_user(user: &NewUser, today: NaiveDate) -> DomainResult<UserFields> {
    check_fields(
        &user.email,
        &user.login,
        user.name.as_deref(),
        user.birthday,
        today,
    )
}

/// Validates an update request. Email uniqueness is checked separately by the
/// caller, and only when the email actually changes.
pub fn validate_user_update(update: &UserUpdate, today: NaiveDate) -> DomainResult<UserFields> {
    check_fields(
        &update.email,
        &update.login,
        update.name.as_deref(),
        update.birthday,
        today,
    )
}

/// True if `other` is not `owner` and already uses `email` (case-insensitive).
/// Stores evaluate this against every user while holding their write lock.
pub fn email_clashes(email: &str, owner: Option<UserId>, other: &User) -> bool {
    if owner.is_some() && other.id == owner {
        return false;
    }
    other.email.to_lowercase() == email.to_lowercase()
}

fn check_fields(
    email: &str,
    login: &str,
    name: Option<&str>,
    birthday: Option<NaiveDate>,
    today: NaiveDate,
) -> DomainResult<UserFields> {
    validate_login(login)?;
    validate_email(email)?;
    let birthday = validate_birthday(birthday, today)?;

    Ok(UserFields {
        email: email.to_string(),
        login: login.to_string(),
        name: display_name(name, login),
        birthday,
    })
}

fn validate_login(login: &str) -> DomainResult<()> {
    if login.trim().is_empty() {
        return Err(DomainError::validation("login cannot be blank"));
    }
    if !LOGIN_PATTERN.is_match(login) {
        return Err(DomainError::validation("login cannot contain whitespace"));
    }
    Ok(())
}

fn validate_email(email: &str) -> DomainResult<()> {
    if email.trim().is_empty() {
        return Err(DomainError::validation("email cannot be blank"));
    }
    if !email.contains('@') {
        return Err(DomainError::validation("email must contain @"));
    }
    Ok(())
}

fn validate_birthday(birthday: Option<NaiveDate>, today: NaiveDate) -> DomainResult<NaiveDate> {
    let date = birthday.ok_or_else(|| DomainError::validation("birthday is required"))?;
    if date > today {
        return Err(DomainError::validation("birthday cannot be in the future"));
    }
    Ok(date)
}

fn display_name(name: Option<&str>, login: &str) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => login.to_string(),
    }
}
