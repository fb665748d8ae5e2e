//! Dashboard pages for the script catalog.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use scriptdeck_app::ports::ScriptRepository;

use super::{DashboardError, render};
use crate::state::AppState;

/// Response from the reload form handler (PRG pattern).
pub enum ReloadResponse {
    Redirect(Redirect),
}

impl IntoResponse for ReloadResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
        }
    }
}

/// `GET /` — the script list, one row per catalog entry.
pub async fn list<R>(State(state): State<AppState<R>>) -> Html<String>
where
    R: ScriptRepository + Send + Sync + 'static,
{
    let scripts = state.script_service.scripts().await;
    Html(render::list_page(&scripts))
}

/// `POST /scripts/{index}/run` — run the script at the given row and show
/// the result.
///
/// A run mutates nothing, so the result renders directly instead of
/// redirecting.
pub async fn run<R>(
    State(state): State<AppState<R>>,
    Path(index): Path<usize>,
) -> Result<Html<String>, DashboardError>
where
    R: ScriptRepository + Send + Sync + 'static,
{
    let report = state.script_service.run_at(index).await?;
    Ok(Html(render::run_result_page(&report)))
}

/// `POST /scripts/reload` — refetch the catalog and redirect to the list.
pub async fn reload<R>(
    State(state): State<AppState<R>>,
) -> Result<ReloadResponse, DashboardError>
where
    R: ScriptRepository + Send + Sync + 'static,
{
    state.script_service.load().await?;
    Ok(ReloadResponse::Redirect(Redirect::to("/")))
}
