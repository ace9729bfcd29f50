use serde::Serialize;

use super::ids::{SetId, WorkoutId};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkoutSet {
    pub id: SetId,
    pub workout_id: WorkoutId,
    pub weight: String,
    pub sets: String,
    pub reps: String,
}

/// Weight/sets/reps stored directly on a workout row by the older schema.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ScalarLoad {
    pub weight: Option<String>,
    pub sets: Option<String>,
    pub reps: Option<String>,
}

impl ScalarLoad {
    pub fn is_empty(&self) -> bool {
        self.weight.is_none() && self.sets.is_none() && self.reps.is_none()
    }
}

/// The two shapes a workout's training data can take. Set rows win over
/// legacy scalar columns when both are present.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum WorkoutLoad {
    Scalar(ScalarLoad),
    SetBased { sets: Vec<WorkoutSet> },
}

impl WorkoutLoad {
    pub fn from_parts(legacy: ScalarLoad, sets: Vec<WorkoutSet>) -> Self {
        if sets.is_empty() && !legacy.is_empty() {
            WorkoutLoad::Scalar(legacy)
        } else {
            WorkoutLoad::SetBased { sets }
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, WorkoutLoad::Scalar(_))
    }
}

#[cfg(test)]
mod tests {
    use super::{ScalarLoad, WorkoutLoad, WorkoutSet};
    use crate::domain::ids::{SetId, WorkoutId};

    fn set(weight: &str) -> WorkoutSet {
        WorkoutSet {
            id: SetId::generate(),
            workout_id: WorkoutId::generate(),
            weight: weight.to_string(),
            sets: "1".to_string(),
            reps: "1".to_string(),
        }
    }

    #[test]
    fn set_rows_take_precedence_over_legacy_columns() {
        let legacy = ScalarLoad {
            weight: Some("80".to_string()),
            sets: None,
            reps: None,
        };
        let load = WorkoutLoad::from_parts(legacy, vec![set("100")]);
        assert!(matches!(load, WorkoutLoad::SetBased { ref sets } if sets.len() == 1));
    }

    #[test]
    fn legacy_columns_read_as_scalar_when_no_sets_exist() {
        let legacy = ScalarLoad {
            weight: Some("80".to_string()),
            sets: Some("3".to_string()),
            reps: Some("5".to_string()),
        };
        let load = WorkoutLoad::from_parts(legacy, Vec::new());
        assert!(load.is_legacy());
    }

    #[test]
    fn empty_workout_is_set_based_without_sets() {
        let load = WorkoutLoad::from_parts(ScalarLoad::default(), Vec::new());
        assert_eq!(load, WorkoutLoad::SetBased { sets: Vec::new() });
    }

    #[test]
    fn serializes_with_shape_tag() {
        let load = WorkoutLoad::Scalar(ScalarLoad {
            weight: Some("60".to_string()),
            sets: None,
            reps: None,
        });
        let json = serde_json::to_value(&load).expect("load should serialize");
        assert_eq!(json["shape"], "scalar");
        assert_eq!(json["weight"], "60");
    }
}
