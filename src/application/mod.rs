// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between HTTP clients and the services
// - Translates between DTOs and domain requests
// - Maps AppError into ErrorResponse with an HTTP status

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod http;
pub mod state;

pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use http::router;
pub use state::AppState;
