// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the HTTP layer and services
// - Commands accept DTOs, return DTOs
// - Commands convert AppError into ErrorResponse
// - Commands NEVER contain business logic

pub mod film_commands;
pub mod friendship_commands;
pub mod user_commands;

pub use film_commands::*;
pub use friendship_commands::*;
pub use user_commands::*;
