//! Tips module - советы по цели тренировки

use crate::params::Goal;

/// Tips per goal, ordered from gentle to advanced
pub const TIPS_PER_GOAL: usize = 3;

pub struct Tip {
    pub goal: Goal,
    pub text: &'static str,
}

pub const TIPS: &[Tip] = &[
    // === WEIGHT LOSS ===
    Tip {
        goal: Goal::WeightLoss,
        text: "For weight loss, consistency is key. Aim to perform this workout 3-4 times per week, incorporating cardio on rest days.",
    },
    Tip {
        goal: Goal::WeightLoss,
        text: "Focus on maintaining a caloric deficit through diet and regular exercise for optimal weight loss results.",
    },
    Tip {
        goal: Goal::WeightLoss,
        text: "Consider adding 15-20 minutes of high-intensity interval training (HIIT) at the end of your workout to boost calorie burn.",
    },

    // === MUSCLE BUILDING ===
    Tip {
        goal: Goal::MuscleBuild,
        text: "For muscle building, ensure you're eating in a slight caloric surplus with adequate protein (1.6-2.2g per kg of bodyweight).",
    },
    Tip {
        goal: Goal::MuscleBuild,
        text: "Progressive overload is essential - aim to increase weight or reps every 1-2 weeks.",
    },
    Tip {
        goal: Goal::MuscleBuild,
        text: "Allow muscle groups 48-72 hours to recover between training sessions for optimal growth.",
    },

    // === ENDURANCE ===
    Tip {
        goal: Goal::Endurance,
        text: "For endurance training, focus on maintaining proper form even as fatigue sets in.",
    },
    Tip {
        goal: Goal::Endurance,
        text: "Gradually increase workout duration by 5-10% each week to build sustainable endurance.",
    },
    Tip {
        goal: Goal::Endurance,
        text: "Stay well-hydrated and consider adding electrolytes to your water during longer training sessions.",
    },

    // === STRENGTH ===
    Tip {
        goal: Goal::Strength,
        text: "For strength gains, focus on compound movements and lift in the 80-90% of your one-rep max range.",
    },
    Tip {
        goal: Goal::Strength,
        text: "Ensure proper recovery with 2-3 minutes of rest between heavy sets.",
    },
    Tip {
        goal: Goal::Strength,
        text: "Track your lifts to ensure progressive overload over time - aim for small, consistent strength increases.",
    },

    // === TONING ===
    Tip {
        goal: Goal::Toning,
        text: "For muscle toning, use moderate weights with higher repetitions (12-15 reps per set).",
    },
    Tip {
        goal: Goal::Toning,
        text: "Maintain tension throughout each movement with controlled tempos (especially during the lowering phase).",
    },
    Tip {
        goal: Goal::Toning,
        text: "Consider incorporating supersets to increase workout intensity while keeping rest periods short.",
    },

    // === FLEXIBILITY ===
    Tip {
        goal: Goal::Flexibility,
        text: "Hold each stretch for 20-30 seconds, breathing deeply to help muscles relax.",
    },
    Tip {
        goal: Goal::Flexibility,
        text: "Never bounce in a stretched position - instead, ease gently into each stretch.",
    },
    Tip {
        goal: Goal::Flexibility,
        text: "For best results, practice flexibility work daily, not just during scheduled workouts.",
    },

    // === MAINTENANCE ===
    Tip {
        goal: Goal::Maintenance,
        text: "For general fitness maintenance, aim for consistency with 3-4 workouts per week.",
    },
    Tip {
        goal: Goal::Maintenance,
        text: "Balance your routine with a mix of strength, cardio, and flexibility exercises.",
    },
    Tip {
        goal: Goal::Maintenance,
        text: "Listen to your body - adjust workout intensity based on energy levels and recovery.",
    },
];

/// Tips of one goal in table order
pub fn tips_for(goal: Goal) -> Vec<&'static Tip> {
    TIPS.iter().filter(|t| t.goal == goal).collect()
}

/// Index into a goal's list: floor(intensity / 2), capped at the last tip
pub fn tip_index(intensity: u8, len: usize) -> usize {
    (usize::from(intensity) / 2).min(len.saturating_sub(1))
}

/// Training tip for a goal and intensity
pub fn select_tip(goal: Goal, intensity: u8) -> &'static str {
    let tips = tips_for(goal);
    tips.get(tip_index(intensity, tips.len()))
        .map(|t| t.text)
        .unwrap_or_default()
}
