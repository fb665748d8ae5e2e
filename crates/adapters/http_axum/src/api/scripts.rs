//! JSON REST handlers for scripts.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use scriptdeck_app::ports::ScriptRepository;
use scriptdeck_domain::outcome::{RunOutcome, RunReport};
use scriptdeck_domain::script::AutomationScript;
use scriptdeck_domain::time::Timestamp;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for a completed run.
#[derive(Serialize)]
pub struct RunReportBody {
    pub name: String,
    pub outcome: RunOutcome,
    pub message: String,
    pub finished_at: Timestamp,
}

impl From<RunReport> for RunReportBody {
    fn from(report: RunReport) -> Self {
        let message = report.message();
        Self {
            name: report.script.name,
            outcome: report.outcome,
            message,
            finished_at: report.finished_at,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<AutomationScript>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the reload endpoint.
pub enum ReloadResponse {
    Ok(Json<Vec<AutomationScript>>),
}

impl IntoResponse for ReloadResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the run endpoint.
pub enum RunResponse {
    Ok(Json<RunReportBody>),
}

impl IntoResponse for RunResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/scripts` — the currently loaded catalog.
pub async fn list<R>(State(state): State<AppState<R>>) -> ListResponse
where
    R: ScriptRepository + Send + Sync + 'static,
{
    let scripts = state.script_service.scripts().await;
    ListResponse::Ok(Json(scripts))
}

/// `POST /api/scripts/reload` — refetch the catalog, return the new sequence.
pub async fn reload<R>(State(state): State<AppState<R>>) -> Result<ReloadResponse, ApiError>
where
    R: ScriptRepository + Send + Sync + 'static,
{
    state.script_service.load().await?;
    let scripts = state.script_service.scripts().await;
    Ok(ReloadResponse::Ok(Json(scripts)))
}

/// `POST /api/scripts/{index}/run` — run the script at the given row.
pub async fn run<R>(
    State(state): State<AppState<R>>,
    Path(index): Path<usize>,
) -> Result<RunResponse, ApiError>
where
    R: ScriptRepository + Send + Sync + 'static,
{
    let report = state.script_service.run_at(index).await?;
    Ok(RunResponse::Ok(Json(RunReportBody::from(report))))
}
