use serde::{Deserialize, Serialize};

use crate::models::exercise::{Difficulty, ExerciseRecord};
use crate::models::plan::Reps;

/// A pre-authored workout with its exercise entries already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutTemplate {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub template_type: String,
    pub difficulty: Difficulty,
    pub fitness_goal: String,
    #[serde(default)]
    pub exercises: Vec<TemplateEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateEntry {
    pub exercise: ExerciseRecord,
    pub sets: u32,
    pub reps: Reps,
    #[serde(default)]
    pub rest_time: Option<u32>,
}
