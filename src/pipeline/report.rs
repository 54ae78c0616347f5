use crate::error::WorkoutError;
use crate::pipeline::dispatch;
use crate::types::package::SensorPackage;
use crate::types::workout::Workout;

pub fn demo_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", &[15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

pub fn describe(workout: &Workout) -> String {
    let info = workout.show_training_info();
    tracing::debug!(
        "{}: {:.3} km, {:.3} kcal",
        info.training_type,
        info.distance_km,
        info.calories_kcal
    );
    info.message()
}

/// Renders one summary line per package, stopping at the first invalid one.
pub fn run(packages: &[SensorPackage]) -> Result<Vec<String>, WorkoutError> {
    packages
        .iter()
        .map(|package| {
            let workout = dispatch::read_package(&package.workout_type, &package.data)?;
            Ok(describe(&workout))
        })
        .collect()
}
