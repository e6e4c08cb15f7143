use crate::clients::ExerciseStore;
use crate::error::StoreError;
use crate::models::exercise::Difficulty;
use crate::models::plan::{PlannedExercise, WorkoutPlan};
use crate::models::profile::{FitnessGoal, UserProfile};
use crate::models::template::WorkoutTemplate;
use crate::services::eligibility;

/// Upper bound on templates turned into plans per request.
pub const MAX_TEMPLATES: usize = 3;

/// Keeps templates at `difficulty` for `goal` or general fitness, exact goal first.
pub fn select_templates(
    candidates: Vec<WorkoutTemplate>,
    difficulty: Difficulty,
    goal: FitnessGoal,
) -> Vec<WorkoutTemplate> {
    let general = FitnessGoal::GeneralFitness.as_str();
    let mut selected: Vec<_> = candidates
        .into_iter()
        .filter(|template| {
            template.difficulty == difficulty
                && (template.fitness_goal == goal.as_str() || template.fitness_goal == general)
        })
        .collect();

    selected.sort_by_key(|template| template.fitness_goal != goal.as_str());
    selected.truncate(MAX_TEMPLATES);
    selected
}

/// Filters the template's entries for `profile`, keeping the authored sets and reps.
pub fn plan_from_template(template: &WorkoutTemplate, profile: &UserProfile) -> Option<WorkoutPlan> {
    let exercises: Vec<PlannedExercise> = template
        .exercises
        .iter()
        .filter(|entry| {
            let eligible = eligibility::is_eligible(&entry.exercise, profile);
            if !eligible {
                tracing::debug!(
                    template_id = template.id,
                    exercise_id = entry.exercise.id,
                    "templates.exercise_filtered"
                );
            }
            eligible
        })
        .map(|entry| PlannedExercise::new(&entry.exercise, entry.sets, entry.reps.clone()))
        .collect();

    if exercises.is_empty() {
        return None;
    }

    let mut plan = WorkoutPlan::new(&template.name, &template.template_type, &profile.duration_label());
    plan.exercises = exercises;
    Some(plan)
}

/// Plans built from authored templates; empty when none qualify.
pub async fn recommend_from_templates<S: ExerciseStore>(
    store: &S,
    profile: &UserProfile,
) -> Result<Vec<WorkoutPlan>, StoreError> {
    let difficulty = profile.experience;
    let candidates = store.fetch_templates(difficulty, profile.fitness_goal).await?;
    let templates = select_templates(candidates, difficulty, profile.fitness_goal);

    tracing::debug!(
        %difficulty,
        goal = %profile.fitness_goal,
        template_count = templates.len(),
        "templates.selected"
    );

    Ok(templates
        .iter()
        .filter_map(|template| plan_from_template(template, profile))
        .collect())
}
