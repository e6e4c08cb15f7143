use serde::{Deserialize, Serialize};

/// Equipment tag meaning the exercise needs nothing but body weight.
pub const BODYWEIGHT: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Strength,
    Cardio,
    Mobility,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Unknown experience levels are treated as beginner.
    pub fn from_experience(level: &str) -> Self {
        match level.trim().to_lowercase().as_str() {
            "intermediate" => Difficulty::Intermediate,
            "advanced" => Difficulty::Advanced,
            _ => Difficulty::Beginner,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog entry. Never mutated once loaded; plans copy it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    pub equipment: Vec<String>,
    pub target_muscles: Vec<String>,
    #[serde(default)]
    pub contraindications: Vec<String>,
    pub difficulty: Difficulty,
}

impl ExerciseRecord {
    pub fn is_bodyweight(&self) -> bool {
        self.equipment.iter().any(|tag| tag == BODYWEIGHT)
    }

    /// Compound movements work more than one muscle group.
    pub fn is_compound(&self) -> bool {
        self.target_muscles.len() > 1
    }

    pub fn is_isolation(&self) -> bool {
        self.target_muscles.len() == 1
    }

    pub fn targets_any(&self, muscles: &[&str]) -> bool {
        self.target_muscles
            .iter()
            .any(|muscle| muscles.contains(&muscle.as_str()))
    }

    /// Lowercases and trims every tag so lookups against survey tags line up.
    pub fn normalized(mut self) -> Self {
        for tags in [
            &mut self.equipment,
            &mut self.target_muscles,
            &mut self.contraindications,
        ] {
            for tag in tags.iter_mut() {
                *tag = normalize_tag(tag);
            }
        }
        self
    }
}

pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn exercise(
        id: u32,
        name: &str,
        exercise_type: ExerciseType,
        equipment: &[&str],
        target_muscles: &[&str],
        contraindications: &[&str],
    ) -> ExerciseRecord {
        ExerciseRecord {
            id,
            name: name.to_string(),
            exercise_type,
            equipment: equipment.iter().map(|s| s.to_string()).collect(),
            target_muscles: target_muscles.iter().map(|s| s.to_string()).collect(),
            contraindications: contraindications.iter().map(|s| s.to_string()).collect(),
            difficulty: Difficulty::Beginner,
        }
    }

    pub fn strength(id: u32, name: &str, target_muscles: &[&str]) -> ExerciseRecord {
        exercise(id, name, ExerciseType::Strength, &["none"], target_muscles, &[])
    }

    pub fn cardio(id: u32, name: &str) -> ExerciseRecord {
        exercise(id, name, ExerciseType::Cardio, &["none"], &["full-body"], &[])
    }

    pub fn mobility(id: u32, name: &str) -> ExerciseRecord {
        exercise(id, name, ExerciseType::Mobility, &["none"], &["hip-flexors"], &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_experience() {
        assert_eq!(Difficulty::from_experience("advanced"), Difficulty::Advanced);
        assert_eq!(
            Difficulty::from_experience(" Intermediate "),
            Difficulty::Intermediate
        );
        assert_eq!(Difficulty::from_experience("beginner"), Difficulty::Beginner);
        assert_eq!(Difficulty::from_experience("elite"), Difficulty::Beginner);
        assert_eq!(Difficulty::from_experience(""), Difficulty::Beginner);
    }

    #[test]
    fn test_deserialize_catalog_record() {
        let json = r#"{
            "id": 7,
            "name": "Dumbbell Rows",
            "type": "strength",
            "equipment": ["Dumbbells"],
            "targetMuscles": ["back", "biceps"],
            "difficulty": "intermediate"
        }"#;

        let record: ExerciseRecord = serde_json::from_str(json).unwrap();
        let record = record.normalized();

        assert_eq!(record.exercise_type, ExerciseType::Strength);
        assert_eq!(record.equipment, vec!["dumbbells"]);
        assert!(record.contraindications.is_empty());
        assert!(record.is_compound());
        assert!(!record.is_bodyweight());
    }

    #[test]
    fn test_muscle_classification() {
        let plank = fixtures::strength(4, "Plank", &["core", "shoulders"]);
        let leg_raise = fixtures::strength(12, "Hanging Leg Raises", &["core"]);

        assert!(plank.is_compound());
        assert!(leg_raise.is_isolation());
        assert!(plank.targets_any(&["shoulders", "chest"]));
        assert!(!leg_raise.targets_any(&["shoulders", "chest"]));
    }
}
