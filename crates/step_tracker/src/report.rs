//! Fixed-template text reports.

use std::fmt;

use serde::Serialize;

use crate::ActivityKind;

/// Result of a daily step log computation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DaySummary {
    pub steps: u64,
    pub distance_km: f64,
    pub calories: f64,
}

/// Result of a training session computation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrainingSummary {
    /// Label as written in the record.
    pub activity: String,
    pub kind: ActivityKind,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories: f64,
}

/// Whole-number calorie values print without decimals, others with two.
pub fn format_calories(calories: f64) -> String {
    if calories.is_finite() && calories.fract() == 0.0 {
        format!("{calories:.0}")
    } else {
        format!("{calories:.2}")
    }
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Step count: {}.", self.steps)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Calories burned: {:.2}.", self.calories)
    }
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Training type: {}", self.activity)?;
        writeln!(f, "Duration: {:.2} hours", self.duration_hours)?;
        writeln!(f, "Distance: {:.2} km", self.distance_km)?;
        writeln!(f, "Speed: {:.2} km/h", self.speed_kmh)?;
        writeln!(f, "Calories: {}", format_calories(self.calories))
    }
}
