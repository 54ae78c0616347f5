use crate::error::WorkoutError;
use crate::types::workout::{Running, SportsWalking, Swimming, Workout, WorkoutKind};

/// Builds the workout named by `workout_type` from positional sensor values.
///
/// Value order per type:
/// - `SWM`: action, duration (h), weight (kg), pool length (m), pool count
/// - `RUN`: action, duration (h), weight (kg)
/// - `WLK`: action, duration (h), weight (kg), height (cm)
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let kind = WorkoutKind::from_code(workout_type).ok_or_else(|| {
        tracing::warn!("Rejected package with unknown workout type {:?}", workout_type);
        WorkoutError::InvalidWorkoutType(workout_type.to_string())
    })?;

    if data.len() != kind.field_count() {
        return Err(WorkoutError::WrongArity {
            kind,
            expected: kind.field_count(),
            got: data.len(),
        });
    }

    let action = action_count(data[0])?;
    let workout: Workout = match kind {
        WorkoutKind::Running => Running::new(action, data[1], data[2])?.into(),
        WorkoutKind::SportsWalking => {
            SportsWalking::new(action, data[1], data[2], data[3])?.into()
        }
        WorkoutKind::Swimming => {
            Swimming::new(action, data[1], data[2], data[3], data[4])?.into()
        }
    };

    tracing::debug!("Read {} package with {} values", kind.code(), data.len());
    Ok(workout)
}

fn action_count(value: f64) -> Result<u32, WorkoutError> {
    if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidActionCount(value))
    }
}
