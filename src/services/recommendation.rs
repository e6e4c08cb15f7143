use crate::clients::ExerciseStore;
use crate::error::RecommendationError;
use crate::models::exercise::ExerciseRecord;
use crate::models::plan::WorkoutPlan;
use crate::models::profile::{SurveyProfile, UserProfile};
use crate::services::{composer, eligibility, templates};

#[derive(Clone)]
pub struct RecommendationService<S> {
    store: S,
    fallback_catalog: Option<Vec<ExerciseRecord>>,
    restrict_to_experience: bool,
}

impl<S: ExerciseStore> RecommendationService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            fallback_catalog: None,
            restrict_to_experience: false,
        }
    }

    /// Catalog composed from when the store cannot deliver exercises.
    pub fn with_fallback_catalog(mut self, catalog: Vec<ExerciseRecord>) -> Self {
        self.fallback_catalog = Some(catalog);
        self
    }

    pub fn with_experience_gate(mut self, enabled: bool) -> Self {
        self.restrict_to_experience = enabled;
        self
    }

    pub async fn recommend_for_survey(
        &self,
        survey: SurveyProfile,
    ) -> Result<Vec<WorkoutPlan>, RecommendationError> {
        let profile = UserProfile::try_from(survey)?;
        self.recommend_workouts(&profile).await
    }

    /// Template plans when any survive filtering, generated plans otherwise.
    pub async fn recommend_workouts(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<WorkoutPlan>, RecommendationError> {
        match templates::recommend_from_templates(&self.store, profile).await {
            Ok(plans) if !plans.is_empty() => {
                tracing::info!(plan_count = plans.len(), "recommendation.template_path_used");
                return Ok(plans);
            }
            Ok(_) => {
                tracing::info!(
                    experience = %profile.experience,
                    goal = %profile.fitness_goal,
                    "recommendation.no_usable_templates"
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "recommendation.template_path_failed");
            }
        }

        self.compose_from_catalog(profile).await
    }

    async fn compose_from_catalog(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<WorkoutPlan>, RecommendationError> {
        let catalog = match self.store.fetch_exercises().await {
            Ok(catalog) => catalog,
            Err(e) => match &self.fallback_catalog {
                Some(fallback) => {
                    tracing::warn!(error = %e, "recommendation.catalog_fallback");
                    fallback.clone()
                }
                None => {
                    tracing::error!(error = %e, "failed to fetch exercise catalog");
                    return Err(e.into());
                }
            },
        };

        let mut eligible = eligibility::filter(&catalog, profile);
        if self.restrict_to_experience {
            eligible = eligibility::within_experience(eligible, profile.experience);
        }

        let exercise_count = composer::exercise_count_for_duration(profile.workout_duration);
        let plans = composer::compose(&eligible, profile, exercise_count);

        tracing::info!(
            catalog_size = catalog.len(),
            eligible_count = eligible.len(),
            exercise_count,
            plan_count = plans.len(),
            "recommendation.composed"
        );

        Ok(plans)
    }
}
