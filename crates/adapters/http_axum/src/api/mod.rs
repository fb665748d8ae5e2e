//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod scripts;

use axum::Router;
use axum::routing::{get, post};

use scriptdeck_app::ports::ScriptRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: ScriptRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/scripts", get(scripts::list::<R>))
        .route("/scripts/reload", post(scripts::reload::<R>))
        .route("/scripts/{index}/run", post(scripts::run::<R>))
}
