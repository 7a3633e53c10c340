use std::sync::Arc;

use supercoach_core::{
    documents::{GoalDocument, WorkoutDocument},
    goals::{GoalService, GoalServiceTrait},
    progress::{ProgressService, ProgressServiceTrait},
    storage::{InMemoryGoalRepository, InMemoryWorkoutRepository},
    workouts::{WorkoutService, WorkoutServiceTrait},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, LogFormat};

const DEMO_WORKOUTS: &str = include_str!("../data/demo_workouts.json");
const DEMO_GOALS: &str = include_str!("../data/demo_goals.json");

pub struct AppState {
    pub workout_service: Arc<dyn WorkoutServiceTrait + Send + Sync>,
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub progress_service: Arc<dyn ProgressServiceTrait + Send + Sync>,
    pub default_months_back: u32,
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let workout_repo = Arc::new(InMemoryWorkoutRepository::new());
    let goal_repo = Arc::new(InMemoryGoalRepository::new());

    let workout_service = Arc::new(WorkoutService::new(workout_repo.clone()));
    let goal_service = Arc::new(GoalService::new(goal_repo.clone()));
    let progress_service = Arc::new(ProgressService::new(workout_repo, goal_repo));

    if config.seed_demo {
        seed_demo_data(workout_service.as_ref(), goal_service.as_ref()).await?;
    }

    Ok(Arc::new(AppState {
        workout_service,
        goal_service,
        progress_service,
        default_months_back: config.default_months_back,
    }))
}

async fn seed_demo_data(
    workout_service: &dyn WorkoutServiceTrait,
    goal_service: &dyn GoalServiceTrait,
) -> anyhow::Result<()> {
    let workouts: Vec<WorkoutDocument> = serde_json::from_str(DEMO_WORKOUTS)?;
    let goals: Vec<GoalDocument> = serde_json::from_str(DEMO_GOALS)?;
    let workout_import = workout_service.import_workouts(workouts).await?;
    let goal_import = goal_service.import_goals(goals).await?;
    tracing::info!(
        "Seeded demo data: {} workouts, {} goals",
        workout_import.imported,
        goal_import.imported
    );
    Ok(())
}
