pub mod entity;
pub mod invariants;

pub use entity::{NewUser, User, UserFields, UserUpdate};
pub use invariants::{email_clashes, validate_new_user, validate_user_update};
