//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::services::ServeDir;

use crate::agencies::AgencyProvider;
use crate::domain::Configuration;

use super::dto::{ConfigForm, ErrorResponse};
use super::state::AppState;
use super::store::ConfigStore;
use super::templates::IndexTemplate;

/// Create the admin router.
///
/// `public_dir` is the path to the static assets directory, served under
/// `/public`.
pub fn create_router<S, P>(state: AppState<S, P>, public_dir: &str) -> Router
where
    S: ConfigStore + 'static,
    P: AgencyProvider + 'static,
{
    Router::new()
        .route("/", get(index_page::<S, P>).post(update_config::<S, P>))
        .route("/api/config", get(get_config::<S, P>))
        .route("/health", get(health))
        .nest_service("/public", ServeDir::new(public_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Configuration page.
async fn index_page<S, P>(State(state): State<AppState<S, P>>) -> Result<Html<String>, AppError>
where
    S: ConfigStore + 'static,
    P: AgencyProvider + 'static,
{
    let config = state.store.get().map_err(|e| AppError::Internal {
        message: format!("Failed to get config: {e}"),
    })?;

    render_index(&state, &config).await
}

/// Save the submitted configuration and redisplay the page.
async fn update_config<S, P>(
    State(state): State<AppState<S, P>>,
    Form(form): Form<ConfigForm>,
) -> Result<Html<String>, AppError>
where
    S: ConfigStore + 'static,
    P: AgencyProvider + 'static,
{
    let config = form.to_configuration().ok_or_else(|| AppError::BadRequest {
        message: "Agency must be provided.".into(),
    })?;

    state.store.put(&config).map_err(|e| AppError::Internal {
        message: format!("Failed to save config: {e}"),
    })?;

    tracing::info!(
        agency = %config.agency,
        stops = config.stop_ids.len(),
        "configuration updated"
    );

    render_index(&state, &config).await
}

/// Current configuration as JSON, polled by the driver.
async fn get_config<S, P>(
    State(state): State<AppState<S, P>>,
) -> Result<Json<Configuration>, AppError>
where
    S: ConfigStore + 'static,
    P: AgencyProvider + 'static,
{
    let config = state.store.get().map_err(|e| AppError::Internal {
        message: format!("Failed to get config: {e}"),
    })?;

    Ok(Json(config))
}

async fn render_index<S, P>(
    state: &AppState<S, P>,
    config: &Configuration,
) -> Result<Html<String>, AppError>
where
    P: AgencyProvider,
{
    let agencies = state.agencies.get().await;

    let html = IndexTemplate::new(config, &agencies)
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {e}"),
        })?;

    Ok(Html(html))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                tracing::warn!(%message, "bad request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                tracing::error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
