use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use thiserror::Error;

use crate::models::exercise::{Difficulty, normalize_tag};

static DURATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d+)\s*(?:m|min|mins|minutes)?\s*$").expect("valid duration pattern")
});

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("workout environment is required")]
    MissingEnvironment,
    #[error("unknown workout environment '{0}'")]
    UnknownEnvironment(String),
    #[error("workout environment must be a string, got {0}")]
    InvalidEnvironment(String),
    #[error("workout duration is required")]
    MissingDuration,
    #[error("workout duration '{0}' is not a number of minutes")]
    InvalidDuration(String),
    #[error("{0} must be a list of strings")]
    InvalidTagList(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Gym,
    Home,
    Both,
}

impl Environment {
    pub fn parse(value: &str) -> Result<Self, ProfileError> {
        match normalize_tag(value).as_str() {
            "gym" => Ok(Environment::Gym),
            "home" => Ok(Environment::Home),
            "both" => Ok(Environment::Both),
            "" => Err(ProfileError::MissingEnvironment),
            _ => Err(ProfileError::UnknownEnvironment(value.to_string())),
        }
    }

    /// A gym is assumed to stock every piece of equipment.
    pub fn has_all_equipment(&self) -> bool {
        matches!(self, Environment::Gym)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FitnessGoal {
    FatLoss,
    MuscleGain,
    #[default]
    GeneralFitness,
    StrengthPerformance,
}

impl FitnessGoal {
    /// Missing or unrecognized goals fall back to general fitness.
    pub fn parse(value: &str) -> Self {
        match normalize_tag(value).as_str() {
            "fat-loss" => FitnessGoal::FatLoss,
            "muscle-gain" => FitnessGoal::MuscleGain,
            "strength-performance" => FitnessGoal::StrengthPerformance,
            _ => FitnessGoal::GeneralFitness,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::FatLoss => "fat-loss",
            FitnessGoal::MuscleGain => "muscle-gain",
            FitnessGoal::GeneralFitness => "general-fitness",
            FitnessGoal::StrengthPerformance => "strength-performance",
        }
    }
}

impl std::fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Survey answers exactly as the client sends them.
///
/// Fields stay loosely typed; wrong-typed answers are rejected by the
/// conversion into [`UserProfile`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyProfile {
    #[serde(default)]
    pub experience_level: Option<Value>,
    #[serde(default)]
    pub health_conditions: Option<Value>,
    #[serde(default)]
    pub workout_environment: Option<Value>,
    #[serde(default)]
    pub equipment: Option<Value>,
    #[serde(default)]
    pub workout_duration: Option<Value>,
    #[serde(default)]
    pub fitness_goal: Option<Value>,
}

/// Whole minutes from a JSON number or a string like `"45"` or `"45 min"`.
fn duration_minutes(value: &Value) -> Result<u32, ProfileError> {
    let minutes = match value {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => DURATION_REGEX
            .captures(text)
            .and_then(|captures| captures.get(1))
            .and_then(|m| m.as_str().parse().ok()),
        _ => None,
    };

    minutes.ok_or_else(|| match value {
        Value::String(text) => ProfileError::InvalidDuration(text.clone()),
        other => ProfileError::InvalidDuration(other.to_string()),
    })
}

fn tag_set(value: Option<&Value>, field: &'static str) -> Result<BTreeSet<String>, ProfileError> {
    match value {
        None => Ok(BTreeSet::new()),
        Some(Value::Array(items)) => {
            let mut tags = BTreeSet::new();
            for item in items {
                let tag = normalize_tag(item.as_str().ok_or(ProfileError::InvalidTagList(field))?);
                if !tag.is_empty() {
                    tags.insert(tag);
                }
            }
            Ok(tags)
        }
        Some(_) => Err(ProfileError::InvalidTagList(field)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub experience: Difficulty,
    pub health_conditions: BTreeSet<String>,
    pub environment: Environment,
    pub equipment: BTreeSet<String>,
    pub workout_duration: u32,
    pub fitness_goal: FitnessGoal,
}

impl UserProfile {
    pub fn has_equipment(&self, tag: &str) -> bool {
        self.environment.has_all_equipment() || self.equipment.contains(tag)
    }

    pub fn has_condition(&self, tag: &str) -> bool {
        self.health_conditions.contains(tag)
    }

    pub fn duration_label(&self) -> String {
        format!("{} min", self.workout_duration)
    }
}

impl TryFrom<SurveyProfile> for UserProfile {
    type Error = ProfileError;

    fn try_from(survey: SurveyProfile) -> Result<Self, Self::Error> {
        let environment = match survey.workout_environment {
            None => return Err(ProfileError::MissingEnvironment),
            Some(Value::String(raw)) => Environment::parse(&raw)?,
            Some(other) => return Err(ProfileError::InvalidEnvironment(other.to_string())),
        };

        let workout_duration = survey
            .workout_duration
            .as_ref()
            .ok_or(ProfileError::MissingDuration)
            .and_then(duration_minutes)?;

        // Non-string experience or goal answers fall back like unknown ones.
        let experience = survey.experience_level.as_ref().and_then(Value::as_str);
        let fitness_goal = survey.fitness_goal.as_ref().and_then(Value::as_str);

        Ok(Self {
            experience: Difficulty::from_experience(experience.unwrap_or_default()),
            health_conditions: tag_set(survey.health_conditions.as_ref(), "healthConditions")?,
            environment,
            equipment: tag_set(survey.equipment.as_ref(), "equipment")?,
            workout_duration,
            fitness_goal: FitnessGoal::parse(fitness_goal.unwrap_or_default()),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn survey(json: &str) -> SurveyProfile {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_full_survey() {
        let profile = UserProfile::try_from(survey(
            r#"{
                "experienceLevel": "intermediate",
                "healthConditions": ["Knee-Issues", " back-pain "],
                "workoutEnvironment": "home",
                "equipment": ["dumbbells", ""],
                "workoutDuration": "60",
                "fitnessGoal": "muscle-gain"
            }"#,
        ))
        .unwrap();

        assert_eq!(profile.experience, Difficulty::Intermediate);
        assert!(profile.has_condition("knee-issues"));
        assert!(profile.has_condition("back-pain"));
        assert_eq!(profile.equipment.len(), 1);
        assert_eq!(profile.workout_duration, 60);
        assert_eq!(profile.fitness_goal, FitnessGoal::MuscleGain);
        assert_eq!(profile.duration_label(), "60 min");
    }

    #[test]
    fn test_duration_forms() {
        for (raw, expected) in [
            (r#"30"#, 30),
            (r#""15""#, 15),
            (r#""75 min""#, 75),
            (r#"" 45 Minutes ""#, 45),
        ] {
            let profile = UserProfile::try_from(survey(&format!(
                r#"{{"workoutEnvironment": "gym", "workoutDuration": {}}}"#,
                raw
            )))
            .unwrap();
            assert_eq!(profile.workout_duration, expected, "input {}", raw);
        }
    }

    #[test]
    fn test_defaults_for_unknown_goal_and_experience() {
        let profile = UserProfile::try_from(survey(
            r#"{"experienceLevel": "pro", "workoutEnvironment": "both", "workoutDuration": 30, "fitnessGoal": "yoga"}"#,
        ))
        .unwrap();

        assert_eq!(profile.experience, Difficulty::Beginner);
        assert_eq!(profile.fitness_goal, FitnessGoal::GeneralFitness);
        assert_eq!(profile.environment, Environment::Both);

        let profile = UserProfile::try_from(survey(
            r#"{"workoutEnvironment": "home", "workoutDuration": 30}"#,
        ))
        .unwrap();
        assert_eq!(profile.fitness_goal, FitnessGoal::GeneralFitness);
        assert!(profile.health_conditions.is_empty());
    }

    #[test]
    fn test_malformed_profiles() {
        assert_eq!(
            UserProfile::try_from(survey(r#"{"workoutDuration": 30}"#)),
            Err(ProfileError::MissingEnvironment)
        );
        assert_eq!(
            UserProfile::try_from(survey(
                r#"{"workoutEnvironment": "park", "workoutDuration": 30}"#
            )),
            Err(ProfileError::UnknownEnvironment("park".to_string()))
        );
        assert_eq!(
            UserProfile::try_from(survey(r#"{"workoutEnvironment": "home"}"#)),
            Err(ProfileError::MissingDuration)
        );
        assert_eq!(
            UserProfile::try_from(survey(
                r#"{"workoutEnvironment": "home", "workoutDuration": "half an hour"}"#
            )),
            Err(ProfileError::InvalidDuration("half an hour".to_string()))
        );
    }

    #[test]
    fn test_wrong_typed_answers_are_profile_errors() {
        for (raw, expected) in [
            ("-15", "-15"),
            ("22.5", "22.5"),
            ("true", "true"),
        ] {
            assert_eq!(
                UserProfile::try_from(survey(&format!(
                    r#"{{"workoutEnvironment": "home", "workoutDuration": {}}}"#,
                    raw
                ))),
                Err(ProfileError::InvalidDuration(expected.to_string()))
            );
        }

        assert_eq!(
            UserProfile::try_from(survey(r#"{"workoutEnvironment": 5, "workoutDuration": 30}"#)),
            Err(ProfileError::InvalidEnvironment("5".to_string()))
        );
        assert_eq!(
            UserProfile::try_from(survey(
                r#"{"workoutEnvironment": "gym", "workoutDuration": 30, "equipment": "dumbbells"}"#
            )),
            Err(ProfileError::InvalidTagList("equipment"))
        );
        assert_eq!(
            UserProfile::try_from(survey(
                r#"{"workoutEnvironment": "gym", "workoutDuration": 30, "healthConditions": [1]}"#
            )),
            Err(ProfileError::InvalidTagList("healthConditions"))
        );
    }

    #[test]
    fn test_null_answers_use_defaults() {
        let profile = UserProfile::try_from(survey(
            r#"{"experienceLevel": 3, "healthConditions": null, "workoutEnvironment": "home",
                "equipment": null, "workoutDuration": 45, "fitnessGoal": null}"#,
        ))
        .unwrap();

        assert_eq!(profile.experience, Difficulty::Beginner);
        assert!(profile.health_conditions.is_empty());
        assert!(profile.equipment.is_empty());
        assert_eq!(profile.fitness_goal, FitnessGoal::GeneralFitness);

        assert_eq!(
            UserProfile::try_from(survey(r#"{"workoutEnvironment": null, "workoutDuration": 30}"#)),
            Err(ProfileError::MissingEnvironment)
        );
    }

    #[test]
    fn test_gym_has_every_piece_of_equipment() {
        let gym = fixtures::profile(Environment::Gym, &[], &[], 30, FitnessGoal::FatLoss);
        let home = fixtures::profile(Environment::Home, &["dumbbells"], &[], 30, FitnessGoal::FatLoss);

        assert!(gym.has_equipment("barbell"));
        assert!(home.has_equipment("dumbbells"));
        assert!(!home.has_equipment("barbell"));
    }
}
