use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::clients::ExerciseStore;
use crate::error::StoreError;
use crate::models::exercise::{Difficulty, ExerciseRecord, normalize_tag};
use crate::models::plan::Reps;
use crate::models::profile::FitnessGoal;
use crate::models::template::{TemplateEntry, WorkoutTemplate};

const SEED_CATALOG: &str = include_str!("../../data/seed_catalog.json");

// On-disk layout: templates reference exercises by id.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    exercises: Vec<ExerciseRecord>,
    #[serde(default)]
    templates: Vec<TemplateFile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TemplateFile {
    id: u32,
    name: String,
    #[serde(rename = "type")]
    template_type: String,
    difficulty: Difficulty,
    fitness_goal: String,
    #[serde(default)]
    exercises: Vec<TemplateEntryFile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TemplateEntryFile {
    exercise_id: u32,
    sets: u32,
    reps: Reps,
    #[serde(default)]
    rest_time: Option<u32>,
}

#[derive(Debug)]
struct Catalog {
    exercises: Vec<ExerciseRecord>,
    templates: Vec<WorkoutTemplate>,
}

/// Catalog held in memory, loaded from a JSON file or the bundled seed.
#[derive(Debug, Clone)]
pub struct FileStore {
    catalog: Arc<Catalog>,
}

impl FileStore {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let store = Self::from_json(&content)?;
        tracing::info!(
            path = %path.as_ref().display(),
            exercise_count = store.catalog.exercises.len(),
            template_count = store.catalog.templates.len(),
            "catalog.loaded"
        );
        Ok(store)
    }

    pub fn seed() -> Result<Self, StoreError> {
        Self::from_json(SEED_CATALOG)
    }

    pub fn from_json(content: &str) -> Result<Self, StoreError> {
        let file: CatalogFile = serde_json::from_str(content)?;

        let exercises: Vec<ExerciseRecord> = file
            .exercises
            .into_iter()
            .map(ExerciseRecord::normalized)
            .collect();

        let by_id: HashMap<u32, &ExerciseRecord> =
            exercises.iter().map(|exercise| (exercise.id, exercise)).collect();

        let templates = file
            .templates
            .into_iter()
            .map(|template| resolve_template(template, &by_id))
            .collect();

        Ok(Self {
            catalog: Arc::new(Catalog {
                exercises,
                templates,
            }),
        })
    }

    pub fn exercises(&self) -> &[ExerciseRecord] {
        &self.catalog.exercises
    }
}

fn resolve_template(
    template: TemplateFile,
    by_id: &HashMap<u32, &ExerciseRecord>,
) -> WorkoutTemplate {
    let exercises = template
        .exercises
        .into_iter()
        .filter_map(|entry| match by_id.get(&entry.exercise_id) {
            Some(exercise) => Some(TemplateEntry {
                exercise: (*exercise).clone(),
                sets: entry.sets,
                reps: entry.reps,
                rest_time: entry.rest_time,
            }),
            None => {
                tracing::warn!(
                    template_id = template.id,
                    exercise_id = entry.exercise_id,
                    "catalog.template_exercise_missing"
                );
                None
            }
        })
        .collect();

    WorkoutTemplate {
        id: template.id,
        name: template.name,
        template_type: template.template_type,
        difficulty: template.difficulty,
        fitness_goal: normalize_tag(&template.fitness_goal),
        exercises,
    }
}

impl ExerciseStore for FileStore {
    async fn fetch_exercises(&self) -> Result<Vec<ExerciseRecord>, StoreError> {
        Ok(self.catalog.exercises.clone())
    }

    async fn fetch_templates(
        &self,
        difficulty: Difficulty,
        goal: FitnessGoal,
    ) -> Result<Vec<WorkoutTemplate>, StoreError> {
        Ok(self
            .catalog
            .templates
            .iter()
            .filter(|template| {
                template.difficulty == difficulty
                    && (template.fitness_goal == goal.as_str()
                        || template.fitness_goal == FitnessGoal::GeneralFitness.as_str())
            })
            .cloned()
            .collect())
    }
}
