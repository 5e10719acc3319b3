//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::lookup::{LookupError, PokemonProvider};
use crate::store::PokemonStore;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<S, P>(state: AppState<S, P>) -> Router
where
    S: PokemonStore + Send + Sync + 'static,
    P: PokemonProvider + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/pokemon", get(missing_name))
        .route("/pokemon/", get(missing_name))
        .route("/pokemon/:name", get(get_pokemon::<S, P>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Look up a Pokémon by name.
async fn get_pokemon<S, P>(
    State(state): State<AppState<S, P>>,
    Path(name): Path<String>,
) -> Result<Json<PokemonDto>, AppError>
where
    S: PokemonStore + Send + Sync + 'static,
    P: PokemonProvider + Send + Sync + 'static,
{
    let dto = state.lookup.lookup(&name).await?;
    Ok(Json(dto))
}

/// `/pokemon/` with no name segment.
async fn missing_name() -> AppError {
    AppError::BadRequest {
        message: "invalid Pokémon name: must not be empty".to_string(),
    }
}

/// Body message for upstream parse failures.
const UPSTREAM_PARSE_MESSAGE: &str = "unexpected response from upstream";

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<LookupError> for AppError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::InvalidArgument(e) => AppError::BadRequest {
                message: e.to_string(),
            },
            LookupError::NotFound { .. } => AppError::NotFound {
                message: "Pokémon not found".to_string(),
            },
            LookupError::UpstreamParse(_) => {
                // Upstream body snippets stay in the log, not the response.
                error!(error = %e, "upstream response rejected");
                AppError::BadGateway {
                    message: UPSTREAM_PARSE_MESSAGE.to_string(),
                }
            }
            LookupError::Store(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
