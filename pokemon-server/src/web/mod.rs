//! Web layer for the Pokémon lookup API.
//!
//! Provides `GET /pokemon/{name}` and a health check.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
