use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use supercoach_server::{api::app_router, build_state, config::Config};
use tower::ServiceExt;

async fn test_app(seed_demo: bool) -> Router {
    let config = Config {
        seed_demo,
        ..Config::default()
    };
    let state = build_state(&config).await.unwrap();
    app_router(state, &config)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, value)
}

#[tokio::test]
async fn healthz_works() {
    let app = test_app(false).await;
    let response = app
        .oneshot(Request::builder().uri("/api/v1/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn progress_summary_over_demo_data() {
    let app = test_app(true).await;
    let (status, body) = send(
        &app,
        "GET",
        "/api/v1/progress/summary?date=2024-05-31&monthsBack=3",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["referenceDate"], "2024-05-31");
    assert_eq!(body["totalWorkouts"], 5);
    assert_eq!(body["longestStreak"], 2);

    let months: Vec<_> = body["monthlyFrequency"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| (m["month"].as_str().unwrap().to_string(), m["workouts"].as_u64().unwrap()))
        .collect();
    assert_eq!(
        months,
        vec![("Mar".to_string(), 0), ("Apr".to_string(), 3), ("May".to_string(), 2)]
    );

    assert_eq!(
        body["goalStatus"],
        json!({ "completed": 1, "inProgress": 1, "pending": 2 })
    );
    assert_eq!(body["weightTrendSufficient"], true);
    assert_eq!(body["currentWeight"], 80.1);
}

#[tokio::test]
async fn progress_summary_rejects_bad_parameters() {
    let app = test_app(false).await;

    let (status, body) = send(&app, "GET", "/api/v1/progress/summary?date=31/05/2024", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let (status, _) = send(&app, "GET", "/api/v1/progress/summary?monthsBack=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn goal_lifecycle() {
    let app = test_app(false).await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/v1/goals",
        Some(json!({
            "description": "Squat 120kg",
            "metricKind": "lift_pr",
            "targetValue": 120,
            "currentValue": 100,
            "unit": "kg"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["isAchieved"], false);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, toggled) = send(
        &app,
        "POST",
        &format!("/api/v1/goals/{}/toggle-achieved", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["isAchieved"], true);
    assert_eq!(toggled["currentValue"], 120.0);

    let mut edit = toggled.clone();
    edit["currentValue"] = json!(110);
    let (status, updated) = send(&app, "PUT", "/api/v1/goals", Some(edit)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["isAchieved"], false);

    let (status, _) = send(&app, "DELETE", &format!("/api/v1/goals/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "DELETE", &format!("/api/v1/goals/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn duplicate_ids_conflict() {
    let app = test_app(false).await;
    let goal = json!({
        "id": "g1",
        "description": "Bench 100kg",
        "metricKind": "lift_pr",
        "targetValue": 100,
        "currentValue": 80
    });

    let (status, _) = send(&app, "POST", "/api/v1/goals", Some(goal.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/api/v1/goals", Some(goal)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 409);

    let workout = json!({
        "id": "w1",
        "date": "2024-06-01",
        "exercises": [{ "exerciseId": "2", "sets": [{ "reps": 5 }] }]
    });
    let (status, _) = send(&app, "POST", "/api/v1/workouts", Some(workout.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(&app, "POST", "/api/v1/workouts", Some(workout)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, goals) = send(&app, "GET", "/api/v1/goals", None).await;
    assert_eq!(goals.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn workout_logging_and_lookup() {
    let app = test_app(false).await;

    let (status, logged) = send(
        &app,
        "POST",
        "/api/v1/workouts",
        Some(json!({
            "date": "2024-06-01",
            "exercises": [{ "exerciseId": "6", "sets": [{ "reps": 5, "weight": 120, "rpe": 8 }] }],
            "overallRPE": 8,
            "durationMinutes": 40
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(logged["exercises"][0]["exerciseName"], "Deadlift");

    let id = logged["id"].as_str().unwrap();
    let (status, fetched) = send(&app, "GET", &format!("/api/v1/workouts/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, logged);

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/workouts",
        Some(json!({ "date": "2024-06-01", "exercises": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/api/v1/workouts/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn workout_import_reports_rejections() {
    let app = test_app(false).await;
    let (status, summary) = send(
        &app,
        "POST",
        "/api/v1/workouts/import",
        Some(json!([
            { "id": "a", "date": "2024-06-01" },
            { "id": "b", "date": 42 }
        ])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["imported"], 1);
    assert_eq!(summary["rejected"][0]["id"], "b");

    let (status, _) = send(&app, "POST", "/api/v1/workouts/import", Some(json!([]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn exercise_catalog_search() {
    let app = test_app(false).await;

    let (status, all) = send(&app, "GET", "/api/v1/exercises", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 6);

    let (_, found) = send(&app, "GET", "/api/v1/exercises?q=squat", None).await;
    assert_eq!(found[0]["name"], "Squat");
    assert_eq!(found[0]["difficulty"], "beginner");

    let (_, advanced) = send(&app, "GET", "/api/v1/exercises?difficulty=advanced", None).await;
    assert!(advanced
        .as_array()
        .unwrap()
        .iter()
        .all(|e| e["difficulty"] == "advanced"));

    let (status, _) = send(&app, "GET", "/api/v1/exercises/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn coaching_prompts() {
    let app = test_app(false).await;

    let (status, plan) = send(
        &app,
        "POST",
        "/api/v1/coaching/workout-plan-prompt",
        Some(json!({
            "fitnessGoal": "build muscle",
            "fitnessLevel": "beginner",
            "equipmentAvailable": "dumbbells",
            "preferredDuration": "45 minutes"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plan["name"], "workoutPlanPrompt");
    assert!(plan["prompt"]
        .as_str()
        .unwrap()
        .contains("Equipment Available: dumbbells"));

    let (status, feedback) = send(
        &app,
        "POST",
        "/api/v1/coaching/workout-feedback-prompt",
        Some(json!({
            "workout": {
                "date": "2024-06-01",
                "exercises": [{ "exerciseId": "1", "sets": [{ "reps": 20 }] }]
            },
            "fitnessGoals": "Improve endurance",
            "level": "intermediate"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(feedback["prompt"]
        .as_str()
        .unwrap()
        .contains("Push Up:\n  Set 1: 20 reps"));

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/coaching/feedback-prompt",
        Some(json!({ "workoutLog": "", "fitnessGoals": "x", "level": "beginner" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
