//! Distance, mean speed and calorie statistics for tracked workouts.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;
