use std::fmt;

use serde::Serialize;

/// Computed statistics for one finished workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMessage {
    pub training_type: &'static str,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}

impl SummaryMessage {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SummaryMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration_h, self.distance_km, self.speed_kmh, self.calories_kcal
        )
    }
}
