use crate::models::exercise::{Difficulty, ExerciseRecord};
use crate::models::profile::UserProfile;

/// None of the exercise's contraindications may match a user health condition.
pub fn is_safe(exercise: &ExerciseRecord, profile: &UserProfile) -> bool {
    !exercise
        .contraindications
        .iter()
        .any(|condition| profile.has_condition(condition))
}

/// Bodyweight exercises always pass; otherwise one required tag must be available.
pub fn is_feasible(exercise: &ExerciseRecord, profile: &UserProfile) -> bool {
    exercise.is_bodyweight()
        || profile.environment.has_all_equipment()
        || exercise.equipment.iter().any(|tag| profile.has_equipment(tag))
}

pub fn is_eligible(exercise: &ExerciseRecord, profile: &UserProfile) -> bool {
    is_safe(exercise, profile) && is_feasible(exercise, profile)
}

/// Keeps catalog order, which the composer relies on when taking prefixes.
pub fn filter(catalog: &[ExerciseRecord], profile: &UserProfile) -> Vec<ExerciseRecord> {
    catalog
        .iter()
        .filter(|exercise| is_eligible(exercise, profile))
        .cloned()
        .collect()
}

/// Beginners get beginner work, intermediates add intermediate, advanced gets all.
pub fn within_experience(exercises: Vec<ExerciseRecord>, experience: Difficulty) -> Vec<ExerciseRecord> {
    exercises
        .into_iter()
        .filter(|exercise| exercise.difficulty <= experience)
        .collect()
}
