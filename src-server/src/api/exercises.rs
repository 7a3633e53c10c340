use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, Query},
    routing::get,
    Json, Router,
};
use supercoach_core::errors::Error as CoreError;
use supercoach_core::exercises::{find_exercises, get_exercise, Exercise, ExerciseFilter};

async fn list_exercises(Query(filter): Query<ExerciseFilter>) -> ApiResult<Json<Vec<Exercise>>> {
    Ok(Json(find_exercises(&filter)))
}

async fn get_exercise_by_id(Path(id): Path<String>) -> ApiResult<Json<Exercise>> {
    let exercise = get_exercise(&id)
        .cloned()
        .ok_or_else(|| CoreError::NotFound(format!("Exercise '{}' not found", id)))?;
    Ok(Json(exercise))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/exercises", get(list_exercises))
        .route("/exercises/:id", get(get_exercise_by_id))
}
