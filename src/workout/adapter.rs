//! Workout type adapter - reshapes the catalog for timed modalities

use std::collections::HashMap;

use crate::exercises::{ExerciseTemplate, MuscleGroup, templates_for};
use crate::params::WorkoutType;

pub const HIIT_SECONDS: u32 = 30;
pub const HIIT_UNIT: &str = "seconds";
pub const HIIT_TIP_SUFFIX: &str = " Focus on intensity and minimal rest.";

pub const STRETCH_HOLD_SECONDS: u32 = 30;
pub const STRETCH_UNIT: &str = "seconds hold";
pub const STRETCH_TIPS: [&str; 2] = [
    "Focus on breathing deeply and relaxing into the stretch.",
    "Never bounce in a stretched position - hold steady.",
];

/// Owned exercise candidate after adaptation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub reps: u32,
    pub rep_unit: String,
    pub tip: String,
}

impl From<&ExerciseTemplate> for Candidate {
    fn from(t: &ExerciseTemplate) -> Self {
        Self {
            name: t.name.to_string(),
            reps: t.reps,
            rep_unit: t.unit().to_string(),
            tip: t.tip.to_string(),
        }
    }
}

/// Candidates per muscle group for one workout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveCatalog {
    groups: HashMap<MuscleGroup, Vec<Candidate>>,
}

impl EffectiveCatalog {
    /// The static catalog, unchanged
    pub fn base() -> Self {
        let groups = MuscleGroup::all()
            .iter()
            .map(|g| (*g, templates_for(*g).iter().map(Candidate::from).collect()))
            .collect();
        Self { groups }
    }

    #[cfg(test)]
    pub(crate) fn from_groups(groups: HashMap<MuscleGroup, Vec<Candidate>>) -> Self {
        Self { groups }
    }

    /// Ordered candidates; an absent group yields none
    pub fn candidates(&self, group: MuscleGroup) -> &[Candidate] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Apply the workout type's transform to a catalog
pub fn adapt(catalog: EffectiveCatalog, workout_type: WorkoutType) -> EffectiveCatalog {
    match workout_type {
        WorkoutType::Hiit => {
            let groups = catalog
                .groups
                .into_iter()
                .map(|(group, candidates)| {
                    let timed = candidates
                        .into_iter()
                        .map(|c| Candidate {
                            reps: HIIT_SECONDS,
                            rep_unit: HIIT_UNIT.to_string(),
                            tip: format!("{}{}", c.tip, HIIT_TIP_SUFFIX),
                            name: c.name,
                        })
                        .collect();
                    (group, timed)
                })
                .collect();
            EffectiveCatalog { groups }
        }
        WorkoutType::Stretching => {
            // replaced, not filtered: every group gets two holds
            let groups = catalog
                .groups
                .into_keys()
                .map(|group| (group, stretches_for(group)))
                .collect();
            EffectiveCatalog { groups }
        }
        WorkoutType::Lifting
        | WorkoutType::Circuit
        | WorkoutType::Crossfit
        | WorkoutType::Calisthenics
        | WorkoutType::Combination => catalog,
    }
}

/// Base catalog adapted to a workout type
pub fn effective_catalog(workout_type: WorkoutType) -> EffectiveCatalog {
    adapt(EffectiveCatalog::base(), workout_type)
}

fn stretches_for(group: MuscleGroup) -> Vec<Candidate> {
    let title = group.capitalized_key();
    STRETCH_TIPS
        .iter()
        .enumerate()
        .map(|(i, tip)| Candidate {
            name: format!("{} Stretch {}", title, i + 1),
            reps: STRETCH_HOLD_SECONDS,
            rep_unit: STRETCH_UNIT.to_string(),
            tip: tip.to_string(),
        })
        .collect()
}
