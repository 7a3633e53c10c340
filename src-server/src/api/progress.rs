use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use supercoach_core::progress::ProgressSummary;
use supercoach_core::utils::dates::parse_calendar_day;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProgressQuery {
    #[serde(rename = "date")]
    reference_date: Option<String>,
    months_back: Option<u32>,
}

/// Dashboard figures as of a reference date
/// Query params:
///   date: YYYY-MM-DD format (optional, defaults to today)
///   monthsBack: histogram window (optional, defaults to SC_DEFAULT_MONTHS_BACK)
async fn get_progress_summary(
    Query(query): Query<ProgressQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ProgressSummary>> {
    let reference_date = match query.reference_date.as_deref() {
        Some(date) => parse_calendar_day(date)?,
        None => chrono::Local::now().date_naive(),
    };
    let months_back = query.months_back.unwrap_or(state.default_months_back);

    let summary = state
        .progress_service
        .get_progress_summary(reference_date, months_back)?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/progress/summary", get(get_progress_summary))
}
