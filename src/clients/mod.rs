use std::future::Future;

use crate::error::StoreError;
use crate::models::exercise::{Difficulty, ExerciseRecord};
use crate::models::profile::FitnessGoal;
use crate::models::template::WorkoutTemplate;

pub mod file;
pub mod remote;

pub use file::FileStore;
pub use remote::RemoteStore;

/// Read-only access to the exercise catalog and authored templates.
pub trait ExerciseStore: Send + Sync {
    fn fetch_exercises(&self) -> impl Future<Output = Result<Vec<ExerciseRecord>, StoreError>> + Send;

    /// Templates at `difficulty` whose goal is `goal` or general fitness,
    /// with their exercise entries resolved.
    fn fetch_templates(
        &self,
        difficulty: Difficulty,
        goal: FitnessGoal,
    ) -> impl Future<Output = Result<Vec<WorkoutTemplate>, StoreError>> + Send;
}

#[derive(Clone)]
pub enum DataSource {
    File(FileStore),
    Remote(RemoteStore),
}

impl ExerciseStore for DataSource {
    async fn fetch_exercises(&self) -> Result<Vec<ExerciseRecord>, StoreError> {
        match self {
            DataSource::File(store) => store.fetch_exercises().await,
            DataSource::Remote(store) => store.fetch_exercises().await,
        }
    }

    async fn fetch_templates(
        &self,
        difficulty: Difficulty,
        goal: FitnessGoal,
    ) -> Result<Vec<WorkoutTemplate>, StoreError> {
        match self {
            DataSource::File(store) => store.fetch_templates(difficulty, goal).await,
            DataSource::Remote(store) => store.fetch_templates(difficulty, goal).await,
        }
    }
}
