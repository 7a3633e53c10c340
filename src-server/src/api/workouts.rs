use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use supercoach_core::documents::{ImportSummary, WorkoutDocument};
use supercoach_core::workouts::{NewWorkoutRecord, WorkoutRecord};

async fn get_workouts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<WorkoutRecord>>> {
    let workouts = state.workout_service.get_workouts()?;
    Ok(Json(workouts))
}

async fn get_workout(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<WorkoutRecord>> {
    let workout = state.workout_service.get_workout(&id)?;
    Ok(Json(workout))
}

async fn log_workout(
    State(state): State<Arc<AppState>>,
    Json(workout): Json<NewWorkoutRecord>,
) -> ApiResult<(StatusCode, Json<WorkoutRecord>)> {
    let w = state.workout_service.log_workout(workout).await?;
    Ok((StatusCode::CREATED, Json(w)))
}

async fn delete_workout(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.workout_service.delete_workout(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Bulk load of stored documents. Malformed entries are reported, not fatal.
async fn import_workouts(
    State(state): State<Arc<AppState>>,
    Json(documents): Json<Vec<WorkoutDocument>>,
) -> ApiResult<Json<ImportSummary>> {
    if documents.is_empty() {
        return Err(ApiError::BadRequest("No workouts to import".to_string()));
    }
    let summary = state.workout_service.import_workouts(documents).await?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/workouts", get(get_workouts).post(log_workout))
        .route("/workouts/import", post(import_workouts))
        .route("/workouts/:id", get(get_workout).delete(delete_workout))
}
