//! Workout module - rule-based workout synthesis
//!
//! Pipeline:
//! - Workout type adapter (HIIT timing, stretch holds)
//! - Intensity scaling of sets, rest and exercise counts
//! - Muscle-group selection with a total cap
//! - Goal-based training tip
//! - HTML rendering

pub mod adapter;
pub mod render;
pub mod scaler;
pub mod selection;

pub use adapter::{EffectiveCatalog, effective_catalog};
pub use scaler::{Scaling, scale};
pub use selection::{ExerciseInstance, normalize_selection, select_exercises};

use crate::exercises::MuscleGroup;
use crate::params::{WorkoutParameters, intensity_label};
use crate::tips::select_tip;

/// Minutes reserved for warm-up and cool-down
pub const WARMUP_COOLDOWN_MINUTES: u32 = 10;

pub const COOLDOWN_LINES: [&str; 2] = [
    "Static stretching for worked muscle groups - 3 minutes",
    "Deep breathing and relaxation - 2 minutes",
];

/// A complete plan produced without any external service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedWorkout {
    pub parameters: WorkoutParameters,
    pub title: String,
    pub overview: String,
    pub warmup: [&'static str; 2],
    pub main_workout_minutes: u32,
    pub main_exercises: Vec<ExerciseInstance>,
    pub cooldown: [&'static str; 2],
    pub goal_label: &'static str,
    pub training_tip: &'static str,
}

impl SynthesizedWorkout {
    pub fn to_html(&self) -> String {
        render::to_html(self)
    }
}

/// Warm-up keyed off legs and shoulders/arms
pub fn warmup_lines(params: &WorkoutParameters) -> [&'static str; 2] {
    let cardio = if params.targets(MuscleGroup::Legs) {
        "Bodyweight squats and jumping jacks"
    } else {
        "Jogging in place and arm circles"
    };
    let mobility = if params.targets(MuscleGroup::Shoulders) || params.targets(MuscleGroup::Arms) {
        "Arm circles, wrist rotations, and shoulder rolls"
    } else {
        "Hip rotations, torso twists, and bodyweight squats"
    };
    [cardio, mobility]
}

/// Duration minus warm-up/cool-down, never below zero
pub fn main_workout_minutes(params: &WorkoutParameters) -> u32 {
    params
        .duration_minutes()
        .saturating_sub(WARMUP_COOLDOWN_MINUTES)
}

/// Build the plan for validated parameters. Pure and total.
pub fn synthesize(params: &WorkoutParameters) -> SynthesizedWorkout {
    let type_label = params.workout_type.label();
    let goal_label = params.goal.label();
    let intensity_text = intensity_label(params.intensity);

    let catalog = effective_catalog(params.workout_type);
    let warmup = warmup_lines(params);
    let scaling = scale(params.intensity);
    let main_exercises = select_exercises(&params.muscle_groups, &catalog, &scaling);
    let training_tip = select_tip(params.goal, params.intensity);

    SynthesizedWorkout {
        parameters: params.clone(),
        title: format!("Custom {} Workout", type_label),
        overview: format!(
            "This {} intensity workout targets your {} and is designed for {}.",
            intensity_text.to_lowercase(),
            params.muscle_groups_text(),
            goal_label.to_lowercase()
        ),
        warmup,
        main_workout_minutes: main_workout_minutes(params),
        main_exercises,
        cooldown: COOLDOWN_LINES,
        goal_label,
        training_tip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Goal, WorkoutType};
    use crate::tips::tips_for;

    fn params(groups: &[MuscleGroup], intensity: u8, workout_type: WorkoutType, goal: Goal, duration: &str) -> WorkoutParameters {
        WorkoutParameters {
            muscle_groups: groups.to_vec(),
            intensity,
            workout_type,
            goal,
            duration: duration.to_string(),
        }
    }

    #[test]
    fn test_chest_moderate_lifting() {
        let p = params(&[MuscleGroup::Chest], 3, WorkoutType::Lifting, Goal::MuscleBuild, "30");
        let w = synthesize(&p);

        assert_eq!(w.main_exercises.len(), 2);
        let first = &w.main_exercises[0];
        assert_eq!(first.name, "Push-ups");
        assert_eq!(first.sets, 4);
        assert_eq!(first.rest_secs, 60);
        assert_eq!(first.reps, 12);
        assert_eq!(first.rep_unit, "reps");
        assert_eq!(w.training_tip, tips_for(Goal::MuscleBuild)[1].text);
        assert_eq!(w.main_workout_minutes, 20);
        assert_eq!(w.title, "Custom Weight Lifting Workout");
    }

    #[test]
    fn test_overview_text() {
        let p = params(&[MuscleGroup::Chest, MuscleGroup::Legs], 4, WorkoutType::Circuit, Goal::Toning, "45");
        let w = synthesize(&p);
        assert_eq!(
            w.overview,
            "This challenging intensity workout targets your chest, legs and is designed for toning/definition."
        );
    }

    #[test]
    fn test_deterministic() {
        let p = params(&[MuscleGroup::Back, MuscleGroup::Core], 2, WorkoutType::Hiit, Goal::Endurance, "45");
        let a = synthesize(&p);
        let b = synthesize(&p);
        assert_eq!(a, b);
        assert_eq!(a.to_html(), b.to_html());
    }

    #[test]
    fn test_parameters_echoed() {
        let p = params(&[MuscleGroup::Arms], 5, WorkoutType::Calisthenics, Goal::Strength, "60");
        assert_eq!(synthesize(&p).parameters, p);
    }

    #[test]
    fn test_hiit_every_exercise_thirty_seconds() {
        let p = params(
            &[MuscleGroup::Chest, MuscleGroup::Legs, MuscleGroup::Core],
            4,
            WorkoutType::Hiit,
            Goal::WeightLoss,
            "30",
        );
        let w = synthesize(&p);
        assert!(!w.main_exercises.is_empty());
        for e in &w.main_exercises {
            assert_eq!(e.reps, 30);
            assert_eq!(e.rep_unit, "seconds");
        }
    }

    #[test]
    fn test_stretching_core() {
        let p = params(&[MuscleGroup::Core], 1, WorkoutType::Stretching, Goal::Flexibility, "30");
        let w = synthesize(&p);
        let names: Vec<_> = w.main_exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Core Stretch 1", "Core Stretch 2"]);
        for e in &w.main_exercises {
            assert_eq!(e.reps, 30);
            assert_eq!(e.rep_unit, "seconds hold");
        }
    }

    #[test]
    fn test_fullbody_exclusive() {
        let p = params(
            &[MuscleGroup::Legs, MuscleGroup::FullBody, MuscleGroup::Arms],
            1,
            WorkoutType::Combination,
            Goal::Maintenance,
            "45",
        );
        let w = synthesize(&p);
        let fullbody: Vec<_> = crate::exercises::FULL_BODY.iter().map(|t| t.name).collect();
        assert_eq!(w.main_exercises.len(), 3);
        assert!(w.main_exercises.iter().all(|e| fullbody.contains(&e.name.as_str())));
    }

    #[test]
    fn test_cap_at_extremes() {
        let every: Vec<MuscleGroup> = vec![
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Arms,
            MuscleGroup::Legs,
            MuscleGroup::Core,
        ];
        let beginner = synthesize(&params(&every, 1, WorkoutType::Lifting, Goal::Strength, "60"));
        assert_eq!(beginner.main_exercises.len(), 4);
        let expert = synthesize(&params(&every, 5, WorkoutType::Lifting, Goal::Strength, "60"));
        assert_eq!(expert.main_exercises.len(), 6);
    }

    #[test]
    fn test_warmup_heuristics() {
        let legs = params(&[MuscleGroup::Legs], 2, WorkoutType::Lifting, Goal::Strength, "30");
        assert_eq!(
            warmup_lines(&legs),
            ["Bodyweight squats and jumping jacks", "Hip rotations, torso twists, and bodyweight squats"]
        );
        let arms = params(&[MuscleGroup::Arms], 2, WorkoutType::Lifting, Goal::Strength, "30");
        assert_eq!(
            warmup_lines(&arms),
            ["Jogging in place and arm circles", "Arm circles, wrist rotations, and shoulder rolls"]
        );
    }

    #[test]
    fn test_cooldown_fixed() {
        let w = synthesize(&params(&[MuscleGroup::Back], 3, WorkoutType::Circuit, Goal::Toning, "30"));
        assert_eq!(w.cooldown, COOLDOWN_LINES);
    }

    #[test]
    fn test_short_duration_clamped_to_zero() {
        for d in ["5", "10"] {
            let w = synthesize(&params(&[MuscleGroup::Core], 2, WorkoutType::Hiit, Goal::Toning, d));
            assert_eq!(w.main_workout_minutes, 0);
        }
        let w = synthesize(&params(&[MuscleGroup::Core], 2, WorkoutType::Hiit, Goal::Toning, "11"));
        assert_eq!(w.main_workout_minutes, 1);
    }
}
