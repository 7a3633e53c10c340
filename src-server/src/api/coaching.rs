use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{routing::post, Json, Router};
use supercoach_core::coaching::{
    CoachingPrompt, FeedbackRequest, WorkoutFeedbackInput, WorkoutPlanRequest,
};

async fn feedback_prompt(Json(request): Json<FeedbackRequest>) -> ApiResult<Json<CoachingPrompt>> {
    Ok(Json(request.feedback_prompt()?))
}

/// Same as `/coaching/feedback-prompt`, rendering the log text from a structured workout.
async fn workout_feedback_prompt(
    Json(input): Json<WorkoutFeedbackInput>,
) -> ApiResult<Json<CoachingPrompt>> {
    let request = input.into_request()?;
    Ok(Json(request.feedback_prompt()?))
}

async fn workout_plan_prompt(
    Json(request): Json<WorkoutPlanRequest>,
) -> ApiResult<Json<CoachingPrompt>> {
    Ok(Json(request.workout_plan_prompt()?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/coaching/feedback-prompt", post(feedback_prompt))
        .route(
            "/coaching/workout-feedback-prompt",
            post(workout_feedback_prompt),
        )
        .route("/coaching/workout-plan-prompt", post(workout_plan_prompt))
}
