//! Intensity scaling - sets, rest and exercise counts per difficulty level

/// Knobs derived from intensity; shared by every exercise of one workout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scaling {
    pub sets: u32,
    pub rest_secs: u32,
    pub exercises_per_group: usize,
    pub max_total_exercises: usize,
}

/// Integer-only mapping:
/// - sets = min(3 + i/2, 5)
/// - rest = max(90 - 10i, 45)
/// - per group = max(4 - i, 2), so harder workouts pick fewer movements
/// - total cap = clamp(i + 3, 4, 6)
pub fn scale(intensity: u8) -> Scaling {
    let i = u32::from(intensity);
    Scaling {
        sets: (3 + i / 2).min(5),
        rest_secs: 90u32.saturating_sub(i * 10).max(45),
        exercises_per_group: 4usize.saturating_sub(usize::from(intensity)).max(2),
        max_total_exercises: (usize::from(intensity) + 3).clamp(4, 6),
    }
}
