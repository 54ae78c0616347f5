use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::WorkoutError;
use crate::types::summary::SummaryMessage;

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

const LEN_STEP: f64 = 0.65;
const LEN_STROKE: f64 = 1.38;

const CALORIES_RUN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_RUN_SPEED_SHIFT: f64 = 20.0;

const CALORIES_WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const CALORIES_SWIM_SPEED_SHIFT: f64 = 1.1;
const CALORIES_SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    SportsWalking,
    #[serde(rename = "SWM")]
    Swimming,
}

impl WorkoutKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RUN" => Some(WorkoutKind::Running),
            "WLK" => Some(WorkoutKind::SportsWalking),
            "SWM" => Some(WorkoutKind::Swimming),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Label printed in the summary line.
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Distance covered by one step or stroke, in metres.
    pub fn step_length_m(&self) -> f64 {
        match self {
            WorkoutKind::Running | WorkoutKind::SportsWalking => LEN_STEP,
            WorkoutKind::Swimming => LEN_STROKE,
        }
    }

    /// Number of positional sensor values the variant is built from.
    pub fn field_count(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Readings shared by every workout type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Session {
    action: u32,
    duration_h: f64,
    weight_kg: f64,
}

impl Session {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            action,
            duration_h: positive("duration", duration_h)?,
            weight_kg,
        })
    }

    pub fn action(&self) -> u32 {
        self.action
    }

    pub fn duration_h(&self) -> f64 {
        self.duration_h
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn duration_min(&self) -> f64 {
        self.duration_h * MIN_IN_H
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::NonPositive { field, value })
    }
}

/// Metrics every workout type can compute from its readings.
///
/// Distance and mean speed have shared defaults; calories have none, so a
/// new workout type cannot exist without its own formula.
pub trait Training {
    fn kind(&self) -> WorkoutKind;

    fn session(&self) -> &Session;

    fn distance_km(&self) -> f64 {
        f64::from(self.session().action()) * self.kind().step_length_m() / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.session().duration_h()
    }

    fn spent_calories_kcal(&self) -> f64;

    fn show_training_info(&self) -> SummaryMessage {
        SummaryMessage {
            training_type: self.kind().display_name(),
            duration_h: self.session().duration_h(),
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories_kcal(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Running {
    session: Session,
}

impl Running {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            session: Session::new(action, duration_h, weight_kg)?,
        })
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories_kcal(&self) -> f64 {
        (CALORIES_RUN_SPEED_MULTIPLIER * self.mean_speed_kmh() - CALORIES_RUN_SPEED_SHIFT)
            * self.session.weight_kg()
            / M_IN_KM
            * self.session.duration_min()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SportsWalking {
    session: Session,
    height_cm: f64,
}

impl SportsWalking {
    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            session: Session::new(action, duration_h, weight_kg)?,
            height_cm: positive("height", height_cm)?,
        })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories_kcal(&self) -> f64 {
        let weight = self.session.weight_kg();
        // Floor toward negative infinity, not truncation.
        let speed_height_ratio = (self.mean_speed_kmh().powi(2) / self.height_cm).floor();
        (CALORIES_WALK_WEIGHT_MULTIPLIER * weight
            + speed_height_ratio * CALORIES_WALK_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.session.duration_min()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Swimming {
    session: Session,
    pool_length_m: f64,
    pool_count: f64,
}

impl Swimming {
    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_count: f64,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            session: Session::new(action, duration_h, weight_kg)?,
            pool_length_m,
            pool_count,
        })
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_count(&self) -> f64 {
        self.pool_count
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_count / M_IN_KM / self.session.duration_h()
    }

    fn spent_calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_SWIM_SPEED_SHIFT)
            * CALORIES_SWIM_WEIGHT_MULTIPLIER
            * self.session.weight_kg()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        self.as_training().kind()
    }

    pub fn show_training_info(&self) -> SummaryMessage {
        self.as_training().show_training_info()
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}
