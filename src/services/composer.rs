//! Rule-based plan generation used when no template yields a workout.
//!
//! Every strategy takes prefixes of the type-partitioned pool, so catalog order
//! decides which exercises land in a plan when more are available than needed.

use crate::models::exercise::{ExerciseRecord, ExerciseType};
use crate::models::plan::{PlannedExercise, Reps, WorkoutPlan};
use crate::models::profile::{FitnessGoal, UserProfile};

pub const UPPER_BODY_MUSCLES: &[&str] = &["chest", "back", "shoulders", "triceps", "biceps"];
pub const LOWER_BODY_MUSCLES: &[&str] = &["quadriceps", "hamstrings", "glutes", "calves"];

/// A split plan is only worth emitting with at least this many candidates.
pub const MIN_SPLIT_EXERCISES: usize = 4;
/// General fitness split plans take this many exercises regardless of duration.
pub const GENERAL_SPLIT_SIZE: usize = 5;
/// Strength exercises needed before general fitness adds split plans.
pub const GENERAL_SPLIT_STRENGTH_THRESHOLD: usize = 5;
pub const HIIT_CARDIO_THRESHOLD: usize = 4;
pub const HIIT_CARDIO_SIZE: usize = 6;
pub const HIIT_CARDIO_DURATION: &str = "25 min";
pub const DEFAULT_EXERCISE_COUNT: usize = 6;

const TIMED_HOLD_SECONDS: u32 = 30;
const CIRCUIT_CARDIO_SECONDS: u32 = 45;

/// Nominal number of exercises for a session length in minutes.
pub fn exercise_count_for_duration(minutes: u32) -> usize {
    match minutes {
        15 => 4,
        30 => 6,
        60 => 10,
        75 => 12,
        _ => DEFAULT_EXERCISE_COUNT,
    }
}

/// `floor(count * percent / 100)` without float rounding surprises.
fn share_floor(count: usize, percent: usize) -> usize {
    count * percent / 100
}

fn share_ceil(count: usize, percent: usize) -> usize {
    (count * percent).div_ceil(100)
}

struct Pool<'a> {
    strength: Vec<&'a ExerciseRecord>,
    cardio: Vec<&'a ExerciseRecord>,
    mobility: Vec<&'a ExerciseRecord>,
}

impl<'a> Pool<'a> {
    fn partition(exercises: &'a [ExerciseRecord]) -> Self {
        let of_type = |wanted: ExerciseType| {
            exercises
                .iter()
                .filter(|exercise| exercise.exercise_type == wanted)
                .collect::<Vec<_>>()
        };

        Self {
            strength: of_type(ExerciseType::Strength),
            cardio: of_type(ExerciseType::Cardio),
            mobility: of_type(ExerciseType::Mobility),
        }
    }

    fn strength_targeting(&self, muscles: &[&str]) -> Vec<&'a ExerciseRecord> {
        self.strength
            .iter()
            .copied()
            .filter(|exercise| exercise.targets_any(muscles))
            .collect()
    }
}

/// Appends up to `take` exercises from the front of `source`.
fn prescribe(plan: &mut WorkoutPlan, source: &[&ExerciseRecord], take: usize, sets: u32, reps: Reps) {
    plan.exercises.extend(
        source
            .iter()
            .take(take)
            .map(|exercise| PlannedExercise::new(exercise, sets, reps.clone())),
    );
}

/// Builds the goal-specific plans from an already filtered exercise pool.
pub fn compose(
    filtered: &[ExerciseRecord],
    profile: &UserProfile,
    exercise_count: usize,
) -> Vec<WorkoutPlan> {
    let pool = Pool::partition(filtered);
    let duration = profile.duration_label();

    match profile.fitness_goal {
        FitnessGoal::FatLoss => fat_loss(&pool, exercise_count, &duration),
        FitnessGoal::MuscleGain => muscle_gain(&pool, exercise_count, &duration),
        FitnessGoal::StrengthPerformance => strength_performance(&pool, exercise_count, &duration),
        FitnessGoal::GeneralFitness => general_fitness(&pool, exercise_count, &duration),
    }
}

fn fat_loss(pool: &Pool, count: usize, duration: &str) -> Vec<WorkoutPlan> {
    let mut hiit = WorkoutPlan::new("HIIT Fat Burning", "cardio", duration);
    prescribe(&mut hiit, &pool.cardio, share_floor(count, 50), 4, Reps::seconds(TIMED_HOLD_SECONDS));
    prescribe(&mut hiit, &pool.strength, share_floor(count, 50), 3, Reps::Count(15));

    let mut circuit = WorkoutPlan::new("Full Body Circuit", "circuit", duration);
    for i in 0..count.min(pool.strength.len()) {
        circuit
            .exercises
            .push(PlannedExercise::new(pool.strength[i], 3, Reps::Count(12)));
        if let Some(cardio) = pool.cardio.get(i) {
            circuit.exercises.push(PlannedExercise::new(
                cardio,
                3,
                Reps::seconds(CIRCUIT_CARDIO_SECONDS),
            ));
        }
    }

    vec![hiit, circuit]
}

fn muscle_gain(pool: &Pool, count: usize, duration: &str) -> Vec<WorkoutPlan> {
    let mut plans = Vec::new();
    let split_size = share_ceil(count, 70);

    for (name, muscles) in [
        ("Upper Body Strength", UPPER_BODY_MUSCLES),
        ("Lower Body Strength", LOWER_BODY_MUSCLES),
    ] {
        let candidates = pool.strength_targeting(muscles);
        if candidates.len() >= MIN_SPLIT_EXERCISES {
            let mut plan = WorkoutPlan::new(name, "strength", duration);
            prescribe(&mut plan, &candidates, split_size, 4, Reps::Count(8));
            plans.push(plan);
        }
    }

    let mut full_body = WorkoutPlan::new("Full Body Hypertrophy", "strength", duration);
    prescribe(&mut full_body, &pool.strength, share_floor(count, 80), 3, Reps::Count(10));
    prescribe(&mut full_body, &pool.mobility, share_floor(count, 20), 2, Reps::seconds(TIMED_HOLD_SECONDS));
    plans.push(full_body);

    plans
}

fn strength_performance(pool: &Pool, count: usize, duration: &str) -> Vec<WorkoutPlan> {
    let compound: Vec<_> = pool.strength.iter().copied().filter(|e| e.is_compound()).collect();
    let isolation: Vec<_> = pool.strength.iter().copied().filter(|e| e.is_isolation()).collect();

    let mut power = WorkoutPlan::new("Strength & Power", "strength", duration);
    prescribe(&mut power, &compound, share_floor(count, 70), 5, Reps::Count(5));
    prescribe(&mut power, &isolation, share_floor(count, 20), 3, Reps::Count(8));
    prescribe(&mut power, &pool.mobility, share_floor(count, 10), 2, Reps::seconds(TIMED_HOLD_SECONDS));

    let mut functional = WorkoutPlan::new("Functional Strength", "strength", duration);
    prescribe(&mut functional, &pool.strength, count, 4, Reps::Count(6));

    vec![power, functional]
}

fn general_fitness(pool: &Pool, count: usize, duration: &str) -> Vec<WorkoutPlan> {
    let mut full_body = WorkoutPlan::new("Full Body Workout", "strength", duration);
    prescribe(&mut full_body, &pool.strength, share_floor(count, 60), 3, Reps::Count(12));
    prescribe(&mut full_body, &pool.cardio, share_floor(count, 20), 3, Reps::seconds(TIMED_HOLD_SECONDS));
    prescribe(&mut full_body, &pool.mobility, share_floor(count, 20), 2, Reps::seconds(TIMED_HOLD_SECONDS));

    let mut plans = vec![full_body];

    if pool.strength.len() >= GENERAL_SPLIT_STRENGTH_THRESHOLD {
        for (name, muscles, reps) in [
            ("Upper Body Focus", UPPER_BODY_MUSCLES, 12),
            ("Lower Body & Core", LOWER_BODY_MUSCLES, 15),
        ] {
            let candidates = pool.strength_targeting(muscles);
            if candidates.len() >= MIN_SPLIT_EXERCISES {
                let mut plan = WorkoutPlan::new(name, "strength", duration);
                prescribe(&mut plan, &candidates, GENERAL_SPLIT_SIZE, 3, Reps::Count(reps));
                plans.push(plan);
            }
        }
    }

    if pool.cardio.len() >= HIIT_CARDIO_THRESHOLD {
        let mut hiit = WorkoutPlan::new("HIIT Cardio", "cardio", HIIT_CARDIO_DURATION);
        prescribe(&mut hiit, &pool.cardio, HIIT_CARDIO_SIZE, 4, Reps::seconds(TIMED_HOLD_SECONDS));
        plans.push(hiit);
    }

    plans
}
