use super::payload::{ActionResult, DataResult, VersionInfo};
use crate::calendar::{Collector, MonthReport};
use crate::request::{parse_flag, parse_requested_date, resolve_developer_list};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Local;
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

const LOG_TARGET: &str = "    routes";

/// Everything the handlers share.
#[derive(Debug)]
pub struct AppState {
    pub collector: Collector,
    pub roster: Vec<String>,
}

/// Query string of the month endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct MonthParams {
    #[serde(default)]
    pub devs: String,

    #[serde(default, deserialize_with = "lenient_flag")]
    pub force: bool,
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw).ok_or_else(|| D::Error::invalid_value(Unexpected::Str(&raw), &"a boolean such as true, false, 1 or 0"))
}

/// Build the service's routes.
///
/// - `GET /` health check
/// - `GET /version` crate version
/// - `GET /{date}?devs=a,b&force=true` a team's contributions for the month containing `date`
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/version", get(version))
        .route("/:date", get(month_data))
        .with_state(state)
}

async fn health_check() -> Json<ActionResult> {
    Json(ActionResult::ok())
}

async fn version() -> Json<DataResult<VersionInfo>> {
    Json(DataResult::data(VersionInfo {
        version: env!("CARGO_PKG_VERSION"),
    }))
}

async fn month_data(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
    params: Result<Query<MonthParams>, QueryRejection>,
) -> (StatusCode, Json<DataResult<MonthReport>>) {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => {
            log::warn!(target: LOG_TARGET, "Rejected month request query: {rejection}");
            return (rejection.status(), Json(DataResult::failure(rejection.body_text())));
        }
    };

    let date = parse_requested_date(&date, Local::now().date_naive());
    let developers = resolve_developer_list(&params.devs, &state.roster);

    log::debug!(target: LOG_TARGET, "Month request for {date}: {developers:?} (force: {})", params.force);

    match state.collector.month_report(date, &developers, params.force).await {
        Ok(report) => (StatusCode::OK, Json(DataResult::data(report))),
        Err(e) => {
            let status = if e.is_invalid_request() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::BAD_GATEWAY
            };

            log::warn!(target: LOG_TARGET, "Month request for {date} failed: {e}");
            (status, Json(DataResult::failure(e.to_string())))
        }
    }
}
