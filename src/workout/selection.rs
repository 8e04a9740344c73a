//! Muscle-group selection and capping

use super::adapter::{Candidate, EffectiveCatalog};
use super::scaler::Scaling;
use crate::exercises::MuscleGroup;

/// Exercise as it appears in the plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseInstance {
    pub name: String,
    pub reps: u32,
    pub rep_unit: String,
    pub tip: String,
    pub sets: u32,
    pub rest_secs: u32,
}

impl ExerciseInstance {
    fn new(candidate: &Candidate, scaling: &Scaling) -> Self {
        Self {
            name: candidate.name.clone(),
            reps: candidate.reps,
            rep_unit: candidate.rep_unit.clone(),
            tip: candidate.tip.clone(),
            sets: scaling.sets,
            rest_secs: scaling.rest_secs,
        }
    }
}

/// Full body supersedes every other group; otherwise caller order is kept
pub fn normalize_selection(groups: &[MuscleGroup]) -> Vec<MuscleGroup> {
    if groups.contains(&MuscleGroup::FullBody) {
        vec![MuscleGroup::FullBody]
    } else {
        groups.to_vec()
    }
}

/// Front candidates of each group, in group order, truncated to the cap
pub fn select_exercises(
    groups: &[MuscleGroup],
    catalog: &EffectiveCatalog,
    scaling: &Scaling,
) -> Vec<ExerciseInstance> {
    let mut exercises: Vec<ExerciseInstance> = normalize_selection(groups)
        .into_iter()
        .flat_map(|group| {
            catalog
                .candidates(group)
                .iter()
                .take(scaling.exercises_per_group)
        })
        .map(|c| ExerciseInstance::new(c, scaling))
        .collect();

    exercises.truncate(scaling.max_total_exercises);
    exercises
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::WorkoutType;
    use crate::workout::adapter::effective_catalog;
    use crate::workout::scaler::scale;
    use std::collections::HashMap;

    fn names(exercises: &[ExerciseInstance]) -> Vec<&str> {
        exercises.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_normalize_fullbody_exclusive() {
        let groups = [MuscleGroup::Chest, MuscleGroup::FullBody, MuscleGroup::Legs];
        assert_eq!(normalize_selection(&groups), vec![MuscleGroup::FullBody]);
    }

    #[test]
    fn test_normalize_keeps_order() {
        let groups = [MuscleGroup::Legs, MuscleGroup::Chest];
        assert_eq!(normalize_selection(&groups), groups.to_vec());
    }

    #[test]
    fn test_single_group_takes_front_candidates() {
        let catalog = effective_catalog(WorkoutType::Lifting);
        let exercises = select_exercises(&[MuscleGroup::Chest], &catalog, &scale(3));
        assert_eq!(names(&exercises), vec!["Push-ups", "Dumbbell Chest Press"]);
        assert!(exercises.iter().all(|e| e.sets == 4 && e.rest_secs == 60));
    }

    #[test]
    fn test_beginner_takes_three_per_group_capped_at_four() {
        let catalog = effective_catalog(WorkoutType::Lifting);
        let exercises = select_exercises(
            &[MuscleGroup::Back, MuscleGroup::Arms],
            &catalog,
            &scale(1),
        );
        // 3 back + 3 arms = 6, cap 4: earlier group wins
        assert_eq!(
            names(&exercises),
            vec!["Dumbbell Rows", "Superman Holds", "Pull-ups", "Bicep Curls"]
        );
    }

    #[test]
    fn test_cap_invariant_all_intensities() {
        let catalog = effective_catalog(WorkoutType::Circuit);
        let all: Vec<MuscleGroup> = MuscleGroup::all()
            .iter()
            .copied()
            .filter(|g| *g != MuscleGroup::FullBody)
            .collect();
        for i in 1..=5 {
            let scaling = scale(i);
            let exercises = select_exercises(&all, &catalog, &scaling);
            assert_eq!(exercises.len(), scaling.max_total_exercises, "intensity {}", i);
        }
    }

    #[test]
    fn test_fullbody_draws_only_fullbody() {
        let catalog = effective_catalog(WorkoutType::Crossfit);
        let exercises = select_exercises(
            &[MuscleGroup::Chest, MuscleGroup::FullBody],
            &catalog,
            &scale(2),
        );
        assert_eq!(names(&exercises), vec!["Burpees", "Squat to Overhead Press"]);
    }

    #[test]
    fn test_absent_group_contributes_nothing() {
        let mut groups = HashMap::new();
        groups.insert(
            MuscleGroup::Core,
            EffectiveCatalog::base().candidates(MuscleGroup::Core).to_vec(),
        );
        let catalog = EffectiveCatalog::from_groups(groups);
        let exercises = select_exercises(
            &[MuscleGroup::Chest, MuscleGroup::Core],
            &catalog,
            &scale(4),
        );
        assert_eq!(names(&exercises), vec!["Plank", "Bicycle Crunches"]);
    }
}
