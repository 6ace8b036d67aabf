//! HTTP surface for desk-bot.
//!
//! A single `POST /ask` endpoint plus a liveness probe, with a
//! wide-open CORS policy. Malformed request bodies are rejected by the `Json`
//! extractor before the handler runs; provider failures surface as plain 500s.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, instrument};

use crate::{
    base::types::{AskRequest, AskResponse, Err, Void},
    runtime::Runtime,
    support,
};

/// Error wrapper that turns any `anyhow` error into a 500 response.
pub struct AppError(Err);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Request failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", self.0)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Err>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[derive(Serialize)]
struct Health {
    status: String,
}

async fn health() -> Json<Health> {
    Json(Health { status: "desk-bot is working!".to_string() })
}

/// `POST /ask` handler.
#[instrument(skip_all)]
async fn ask(State(runtime): State<Runtime>, Json(query): Json<AskRequest>) -> Result<Json<AskResponse>, AppError> {
    let response = support::handler::handle_ask(&query, &runtime.store, &runtime.llm, &runtime.config).await?;

    Ok(Json(response))
}

/// Build the application router.
pub fn router(runtime: Runtime) -> Router {
    // Any origin, any method, any header.
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new().route("/health", get(health)).route("/ask", post(ask)).layer(cors).with_state(runtime)
}

/// Bind the configured address and serve requests until shutdown.
pub async fn serve(runtime: Runtime) -> Void {
    let listen_addr = runtime.config.listen_addr.clone();
    let app = router(runtime);

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    info!("Listening on {}.", listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
