//! Workout parameters - typed request and validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::exercises::MuscleGroup;

pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 5;

/// Training modality
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Lifting,
    Circuit,
    Crossfit,
    Hiit,
    Calisthenics,
    Stretching,
    Combination,
}

impl WorkoutType {
    pub fn key(&self) -> &'static str {
        match self {
            WorkoutType::Lifting => "lifting",
            WorkoutType::Circuit => "circuit",
            WorkoutType::Crossfit => "crossfit",
            WorkoutType::Hiit => "hiit",
            WorkoutType::Calisthenics => "calisthenics",
            WorkoutType::Stretching => "stretching",
            WorkoutType::Combination => "combination",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Lifting => "Weight Lifting",
            WorkoutType::Circuit => "Circuit Training",
            WorkoutType::Crossfit => "CrossFit",
            WorkoutType::Hiit => "HIIT",
            WorkoutType::Calisthenics => "Calisthenics",
            WorkoutType::Stretching => "Stretching/Flexibility",
            WorkoutType::Combination => "Combination",
        }
    }

    pub fn from_key(key: &str) -> Option<WorkoutType> {
        Self::all().iter().copied().find(|t| t.key() == key)
    }

    pub fn all() -> &'static [WorkoutType] {
        &[
            WorkoutType::Lifting,
            WorkoutType::Circuit,
            WorkoutType::Crossfit,
            WorkoutType::Hiit,
            WorkoutType::Calisthenics,
            WorkoutType::Stretching,
            WorkoutType::Combination,
        ]
    }
}

/// Fitness goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    WeightLoss,
    MuscleBuild,
    Endurance,
    Strength,
    Toning,
    Flexibility,
    Maintenance,
}

impl Goal {
    pub fn key(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weightLoss",
            Goal::MuscleBuild => "muscleBuild",
            Goal::Endurance => "endurance",
            Goal::Strength => "strength",
            Goal::Toning => "toning",
            Goal::Flexibility => "flexibility",
            Goal::Maintenance => "maintenance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::MuscleBuild => "Muscle Building",
            Goal::Endurance => "Endurance",
            Goal::Strength => "Strength",
            Goal::Toning => "Toning/Definition",
            Goal::Flexibility => "Flexibility",
            Goal::Maintenance => "General Fitness/Maintenance",
        }
    }

    pub fn from_key(key: &str) -> Option<Goal> {
        Self::all().iter().copied().find(|g| g.key() == key)
    }

    pub fn all() -> &'static [Goal] {
        &[
            Goal::WeightLoss,
            Goal::MuscleBuild,
            Goal::Endurance,
            Goal::Strength,
            Goal::Toning,
            Goal::Flexibility,
            Goal::Maintenance,
        ]
    }
}

/// Human-readable intensity: 1 = Beginner .. 5 = Expert
pub fn intensity_label(intensity: u8) -> &'static str {
    match intensity {
        1 => "Beginner",
        2 => "Light",
        3 => "Moderate",
        4 => "Challenging",
        5 => "Expert",
        _ => "Custom",
    }
}

/// Validated parameters; immutable once built by [`validate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutParameters {
    pub muscle_groups: Vec<MuscleGroup>,
    pub intensity: u8,
    pub workout_type: WorkoutType,
    pub goal: Goal,
    /// Minutes, kept as the caller sent it ("30")
    pub duration: String,
}

impl WorkoutParameters {
    pub fn targets(&self, group: MuscleGroup) -> bool {
        self.muscle_groups.contains(&group)
    }

    /// Parsed duration; validation guarantees a positive integer.
    /// Values past `u32::MAX` saturate.
    pub fn duration_minutes(&self) -> u32 {
        let duration = self.duration.trim();
        match duration.parse() {
            Ok(minutes) => minutes,
            Err(_) if is_positive_integer(duration) => u32::MAX,
            Err(_) => 0,
        }
    }

    /// Raw keys joined with ", " ("chest, legs")
    pub fn muscle_groups_text(&self) -> String {
        self.muscle_groups
            .iter()
            .map(|g| g.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Untyped request as it arrives from a form, JSON body or CLI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawWorkoutRequest {
    pub muscle_groups: Vec<String>,
    pub intensity: i64,
    pub workout_type: String,
    pub goal: String,
    pub duration: String,
}

/// One violated constraint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("Select at least one muscle group")]
    NoMuscleGroups,
    #[error("Unknown muscle group: {0}")]
    UnknownMuscleGroup(String),
    #[error("Intensity must be between 1 and 5, got {0}")]
    IntensityOutOfRange(i64),
    #[error("Workout type is required")]
    MissingWorkoutType,
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),
    #[error("Fitness goal is required")]
    MissingGoal,
    #[error("Unknown fitness goal: {0}")]
    UnknownGoal(String),
    #[error("Duration is required")]
    MissingDuration,
    #[error("Duration must be a positive number of minutes, got {0:?}")]
    InvalidDuration(String),
}

/// Every constraint the request violated, in field order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation error: {}", join_violations(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Digits only, not all zeros
fn is_positive_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) && s.bytes().any(|b| b != b'0')
}

/// Validate and normalize a raw request
pub fn validate(raw: &RawWorkoutRequest) -> Result<WorkoutParameters, ValidationError> {
    let mut violations = Vec::new();

    let mut muscle_groups: Vec<MuscleGroup> = Vec::new();
    for key in &raw.muscle_groups {
        match MuscleGroup::from_key(key.trim()) {
            Some(group) if !muscle_groups.contains(&group) => muscle_groups.push(group),
            Some(_) => {} // duplicate
            None => violations.push(Violation::UnknownMuscleGroup(key.clone())),
        }
    }
    if raw.muscle_groups.is_empty() {
        violations.push(Violation::NoMuscleGroups);
    }

    let in_range = (i64::from(MIN_INTENSITY)..=i64::from(MAX_INTENSITY)).contains(&raw.intensity);
    if !in_range {
        violations.push(Violation::IntensityOutOfRange(raw.intensity));
    }

    let workout_type = raw.workout_type.trim();
    let workout_type = if workout_type.is_empty() {
        violations.push(Violation::MissingWorkoutType);
        None
    } else {
        let parsed = WorkoutType::from_key(workout_type);
        if parsed.is_none() {
            violations.push(Violation::UnknownWorkoutType(workout_type.to_string()));
        }
        parsed
    };

    let goal = raw.goal.trim();
    let goal = if goal.is_empty() {
        violations.push(Violation::MissingGoal);
        None
    } else {
        let parsed = Goal::from_key(goal);
        if parsed.is_none() {
            violations.push(Violation::UnknownGoal(goal.to_string()));
        }
        parsed
    };

    let duration = raw.duration.trim();
    if duration.is_empty() {
        violations.push(Violation::MissingDuration);
    } else if !is_positive_integer(duration) {
        violations.push(Violation::InvalidDuration(duration.to_string()));
    }

    match (workout_type, goal) {
        (Some(workout_type), Some(goal)) if violations.is_empty() => Ok(WorkoutParameters {
            muscle_groups,
            intensity: raw.intensity as u8,
            workout_type,
            goal,
            duration: duration.to_string(),
        }),
        _ => Err(ValidationError { violations }),
    }
}
