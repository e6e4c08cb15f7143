use reqwest::{Client, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::clients::ExerciseStore;
use crate::config::Config;
use crate::error::StoreError;
use crate::models::exercise::{Difficulty, ExerciseRecord, normalize_tag};
use crate::models::profile::FitnessGoal;
use crate::models::template::WorkoutTemplate;

const EXERCISES_ENDPOINT: &str = "/v1/exercises";
const TEMPLATES_ENDPOINT: &str = "/v1/templates";

#[derive(Debug, Deserialize)]
struct ExercisesListResponse {
    exercises: Vec<ExerciseRecord>,
}

#[derive(Debug, Deserialize)]
struct TemplatesListResponse {
    templates: Vec<WorkoutTemplate>,
}

/// Catalog API client. Templates come back with their exercises already joined.
#[derive(Clone)]
pub struct RemoteStore {
    http: Client,
    base: Url,
    api_key: Option<String>,
}

impl RemoteStore {
    pub fn new(config: &Config) -> Result<Self, StoreError> {
        let base_url = config.catalog_api_url.as_deref().unwrap_or_default();
        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            base: Url::parse(base_url).map_err(|_| StoreError::InvalidUrl(base_url.to_string()))?,
            api_key: config.catalog_api_key.clone(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, StoreError> {
        let mut request = self.http.get(url);
        if let Some(api_key) = &self.api_key {
            request = request.header("api-key", api_key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await?;
            return Err(StoreError::Status { status, body });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn endpoint(&self, path: &str) -> Result<Url, StoreError> {
        self.base
            .join(path)
            .map_err(|_| StoreError::InvalidUrl(format!("{}{}", self.base, path)))
    }
}

impl ExerciseStore for RemoteStore {
    async fn fetch_exercises(&self) -> Result<Vec<ExerciseRecord>, StoreError> {
        let url = self.endpoint(EXERCISES_ENDPOINT)?;
        let response: ExercisesListResponse = self.get(url).await?;

        tracing::debug!(exercise_count = response.exercises.len(), "catalog.exercises_fetched");

        Ok(response
            .exercises
            .into_iter()
            .map(ExerciseRecord::normalized)
            .collect())
    }

    async fn fetch_templates(
        &self,
        difficulty: Difficulty,
        goal: FitnessGoal,
    ) -> Result<Vec<WorkoutTemplate>, StoreError> {
        let mut url = self.endpoint(TEMPLATES_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair("difficulty", difficulty.as_str())
            .append_pair("goal", goal.as_str());

        let response: TemplatesListResponse = self.get(url).await?;

        tracing::debug!(
            %difficulty,
            %goal,
            template_count = response.templates.len(),
            "catalog.templates_fetched"
        );

        Ok(response.templates.into_iter().map(normalize_template).collect())
    }
}

/// Brings goal and exercise tags into the form the selection rules compare against.
fn normalize_template(mut template: WorkoutTemplate) -> WorkoutTemplate {
    template.fitness_goal = normalize_tag(&template.fitness_goal);
    for entry in &mut template.exercises {
        entry.exercise = entry.exercise.clone().normalized();
    }
    template
}
