//! HTML rendering of a synthesized workout
//!
//! Section order: title, warm-up, main workout, cool down, training tips.

use std::fmt;

use super::SynthesizedWorkout;

const EXERCISE_CLASS: &str = "bg-neutral-50 p-4 rounded-lg mb-4";
const TIP_CLASS: &str = "bg-blue-50 p-4 rounded-lg mt-4";

/// HTML view of a workout
pub struct Html<'a>(pub &'a SynthesizedWorkout);

impl fmt::Display for Html<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let workout = self.0;

        writeln!(f, "<h3>{}</h3>", workout.title)?;
        writeln!(f, "<p>{}</p>", workout.overview)?;

        writeln!(f, "<h4>Warm-up (5 minutes)</h4>")?;
        writeln!(f, "<ul>")?;
        writeln!(f, "  <li>Light cardio: {} - 2 minutes</li>", workout.warmup[0])?;
        writeln!(f, "  <li>Dynamic stretching: {} - 3 minutes</li>", workout.warmup[1])?;
        writeln!(f, "</ul>")?;

        writeln!(f, "<h4>Main Workout ({} minutes)</h4>", workout.main_workout_minutes)?;
        for (index, exercise) in workout.main_exercises.iter().enumerate() {
            writeln!(f, "<div class=\"{}\">", EXERCISE_CLASS)?;
            writeln!(f, "  <p class=\"font-medium\">Exercise {}: {}</p>", index + 1, exercise.name)?;
            writeln!(
                f,
                "  <p>{} sets of {} {} | Rest {} seconds between sets</p>",
                exercise.sets, exercise.reps, exercise.rep_unit, exercise.rest_secs
            )?;
            writeln!(f, "  <p class=\"text-sm text-neutral-600 mt-1\">{}</p>", exercise.tip)?;
            writeln!(f, "</div>")?;
        }

        writeln!(f, "<h4>Cool Down (5 minutes)</h4>")?;
        writeln!(f, "<ul>")?;
        for line in workout.cooldown {
            writeln!(f, "  <li>{}</li>", line)?;
        }
        writeln!(f, "</ul>")?;

        writeln!(f, "<h4>Training Tips</h4>")?;
        writeln!(f, "<div class=\"{}\">", TIP_CLASS)?;
        writeln!(f, "  <p class=\"font-medium text-blue-800\">Pro Tip for {}</p>", workout.goal_label)?;
        writeln!(f, "  <p>{}</p>", workout.training_tip)?;
        writeln!(f, "</div>")
    }
}

pub fn to_html(workout: &SynthesizedWorkout) -> String {
    Html(workout).to_string()
}
