use serde::{Deserialize, Serialize};

use crate::error::WorkoutError;

/// Raw readings sent by the tracker: a workout type code and its positional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: &str, data: &[f64]) -> Self {
        Self {
            workout_type: workout_type.to_string(),
            data: data.to_vec(),
        }
    }

    /// Accepts a single package or a list of them.
    pub fn from_json(bytes: &[u8]) -> Result<Vec<Self>, WorkoutError> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            One(SensorPackage),
            Many(Vec<SensorPackage>),
        }

        let parsed: OneOrMany = serde_json::from_slice(bytes)
            .map_err(|e| WorkoutError::InvalidPackage(e.to_string()))?;

        Ok(match parsed {
            OneOrMany::One(package) => vec![package],
            OneOrMany::Many(packages) => packages,
        })
    }
}
