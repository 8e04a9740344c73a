//! Exercise definitions - база упражнений по группам мышц

use serde::{Deserialize, Serialize};

/// Muscle groups a workout can target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Core,
    FullBody,
}

impl MuscleGroup {
    /// Wire key, e.g. `"fullbody"`
    pub fn key(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Arms => "arms",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Core => "core",
            MuscleGroup::FullBody => "fullbody",
        }
    }

    pub fn from_key(key: &str) -> Option<MuscleGroup> {
        Self::all().iter().copied().find(|g| g.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Core => "Core",
            MuscleGroup::FullBody => "Full Body",
        }
    }

    /// Key with the first letter upper-cased ("Fullbody", not "Full Body")
    pub fn capitalized_key(&self) -> String {
        let key = self.key();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// All muscle groups for iteration
    pub fn all() -> &'static [MuscleGroup] {
        &[
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Arms,
            MuscleGroup::Legs,
            MuscleGroup::Core,
            MuscleGroup::FullBody,
        ]
    }
}

/// Static catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseTemplate {
    pub name: &'static str,
    pub reps: u32,
    /// `None` = plain "reps"
    pub rep_unit: Option<&'static str>,
    pub tip: &'static str,
}

pub const DEFAULT_REP_UNIT: &str = "reps";

impl ExerciseTemplate {
    pub fn unit(&self) -> &'static str {
        self.rep_unit.unwrap_or(DEFAULT_REP_UNIT)
    }
}

const fn ex(name: &'static str, reps: u32, tip: &'static str) -> ExerciseTemplate {
    ExerciseTemplate { name, reps, rep_unit: None, tip }
}

const fn ex_unit(
    name: &'static str,
    reps: u32,
    unit: &'static str,
    tip: &'static str,
) -> ExerciseTemplate {
    ExerciseTemplate { name, reps, rep_unit: Some(unit), tip }
}

pub const CHEST: [ExerciseTemplate; 4] = [
    ex("Push-ups", 12, "Keep your core engaged and body in a straight line."),
    ex("Dumbbell Chest Press", 10, "Focus on a full range of motion, bringing dumbbells to chest level."),
    ex("Incline Push-ups", 15, "Elevate your hands on a stable surface for a modified version."),
    ex("Chest Flies", 12, "Maintain a slight bend in the elbows throughout the movement."),
];

pub const BACK: [ExerciseTemplate; 4] = [
    ex("Dumbbell Rows", 12, "Keep your back flat and pull the weight toward your hip."),
    ex_unit("Superman Holds", 30, "seconds", "Lift arms and legs simultaneously, engaging your entire back."),
    ex("Pull-ups", 8, "If too challenging, use an assisted pull-up machine or resistance bands."),
    ex("Lat Pulldowns", 12, "Focus on pulling with your back muscles, not your arms."),
];

pub const LEGS: [ExerciseTemplate; 4] = [
    ex("Bodyweight Squats", 15, "Keep weight in your heels and chest up throughout the movement."),
    ex_unit("Walking Lunges", 10, "per leg", "Take a big step forward and keep your front knee above your ankle."),
    ex("Glute Bridges", 15, "Squeeze your glutes at the top of the movement."),
    ex_unit("Bulgarian Split Squats", 10, "per leg", "Keep your front foot flat on the ground and torso upright."),
];

pub const CORE: [ExerciseTemplate; 4] = [
    ex_unit("Plank", 45, "seconds", "Keep your body in a straight line from head to heels."),
    ex_unit("Bicycle Crunches", 20, "per side", "Focus on the rotation and bringing opposite elbow to knee."),
    ex_unit("Russian Twists", 16, "total", "Keep feet elevated and twist from your core, not your arms."),
    ex_unit("Mountain Climbers", 20, "per leg", "Maintain a strong plank position while alternating knees to chest."),
];

pub const SHOULDERS: [ExerciseTemplate; 4] = [
    ex("Shoulder Press", 12, "Avoid arching your back by engaging your core."),
    ex("Lateral Raises", 12, "Keep a slight bend in your elbows and raise to shoulder height."),
    ex("Front Raises", 12, "Use a controlled tempo and avoid swinging the weights."),
    ex("Pike Push-ups", 10, "Form an inverted V with your body and lower your head toward the ground."),
];

pub const ARMS: [ExerciseTemplate; 4] = [
    ex("Bicep Curls", 12, "Keep elbows close to your sides throughout the movement."),
    ex("Tricep Dips", 12, "Lower yourself with control and keep shoulders away from your ears."),
    ex("Hammer Curls", 12, "Maintain a neutral grip with palms facing each other."),
    ex("Diamond Push-ups", 10, "Form a diamond shape with your hands directly under your chest."),
];

pub const FULL_BODY: [ExerciseTemplate; 4] = [
    ex("Burpees", 10, "Focus on proper form rather than speed, especially when fatigued."),
    ex("Squat to Overhead Press", 12, "Use the power from your legs to help drive the press upward."),
    ex_unit("Renegade Rows", 8, "per arm", "Keep hips stable and avoid rotating your torso."),
    ex("Thruster", 12, "Combine a front squat with an overhead press in one fluid motion."),
];

/// Ordered candidates for a muscle group; the front of the list is preferred
pub fn templates_for(group: MuscleGroup) -> &'static [ExerciseTemplate] {
    match group {
        MuscleGroup::Chest => &CHEST,
        MuscleGroup::Back => &BACK,
        MuscleGroup::Shoulders => &SHOULDERS,
        MuscleGroup::Arms => &ARMS,
        MuscleGroup::Legs => &LEGS,
        MuscleGroup::Core => &CORE,
        MuscleGroup::FullBody => &FULL_BODY,
    }
}
