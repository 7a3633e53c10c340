use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use supercoach_core::documents::{GoalDocument, ImportSummary};
use supercoach_core::goals::{GoalRecord, NewGoal};

async fn get_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<GoalRecord>>> {
    let goals = state.goal_service.get_goals()?;
    Ok(Json(goals))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(goal): Json<NewGoal>,
) -> ApiResult<(StatusCode, Json<GoalRecord>)> {
    let g = state.goal_service.create_goal(goal).await?;
    Ok((StatusCode::CREATED, Json(g)))
}

async fn update_goal(
    State(state): State<Arc<AppState>>,
    Json(goal): Json<GoalRecord>,
) -> ApiResult<Json<GoalRecord>> {
    let g = state.goal_service.update_goal(goal).await?;
    Ok(Json(g))
}

async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.goal_service.delete_goal(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Flips `isAchieved`. Marking achieved also raises the current value to the target.
async fn toggle_achieved(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<GoalRecord>> {
    let g = state.goal_service.toggle_achieved(id).await?;
    Ok(Json(g))
}

async fn import_goals(
    State(state): State<Arc<AppState>>,
    Json(documents): Json<Vec<GoalDocument>>,
) -> ApiResult<Json<ImportSummary>> {
    if documents.is_empty() {
        return Err(ApiError::BadRequest("No goals to import".to_string()));
    }
    let summary = state.goal_service.import_goals(documents).await?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(get_goals).post(create_goal).put(update_goal))
        .route("/goals/import", post(import_goals))
        .route("/goals/:id", delete(delete_goal))
        .route("/goals/:id/toggle-achieved", post(toggle_achieved))
}
