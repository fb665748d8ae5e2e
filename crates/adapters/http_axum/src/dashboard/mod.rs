//! Server-side rendered HTML dashboard (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod scripts;

mod render;

use axum::Router;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};

use scriptdeck_app::ports::ScriptRepository;
use scriptdeck_domain::error::ScriptDeckError;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: ScriptRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(scripts::list::<R>))
        .route("/scripts/reload", post(scripts::reload::<R>))
        .route("/scripts/{index}/run", post(scripts::run::<R>))
}

/// Maps [`ScriptDeckError`] to an HTML error page with appropriate status.
pub struct DashboardError(ScriptDeckError);

impl From<ScriptDeckError> for DashboardError {
    fn from(err: ScriptDeckError) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = crate::error::status_and_message(&self.0);
        let page = render::error_page(&message);
        (status, Html(page)).into_response()
    }
}
