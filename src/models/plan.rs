use serde::{Deserialize, Serialize};

use crate::models::exercise::ExerciseRecord;

/// Either a repetition count or a timed hold such as "30 sec".
///
/// Serialized untagged: counts become JSON numbers, timed values strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reps {
    Count(u32),
    Timed(String),
}

impl Reps {
    pub fn seconds(seconds: u32) -> Self {
        Reps::Timed(format!("{} sec", seconds))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedExercise {
    #[serde(flatten)]
    pub exercise: ExerciseRecord,
    pub sets: u32,
    pub reps: Reps,
}

impl PlannedExercise {
    pub fn new(exercise: &ExerciseRecord, sets: u32, reps: Reps) -> Self {
        Self {
            exercise: exercise.clone(),
            sets,
            reps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub name: String,
    #[serde(rename = "type")]
    pub plan_type: String,
    pub duration: String,
    pub exercises: Vec<PlannedExercise>,
}

impl WorkoutPlan {
    pub fn new(name: &str, plan_type: &str, duration: &str) -> Self {
        Self {
            name: name.to_string(),
            plan_type: plan_type.to_string(),
            duration: duration.to_string(),
            exercises: Vec::new(),
        }
    }
}

#[cfg(test)]
impl WorkoutPlan {
    pub(crate) fn exercise_names(&self) -> Vec<&str> {
        self.exercises
            .iter()
            .map(|planned| planned.exercise.name.as_str())
            .collect()
    }
}
