//! Entry points tying record parsing, calculation and reporting together.

use crate::calories::{self, FIXED_STRIDE_M};
use crate::record::{parse_day_record, parse_training_record};
use crate::report::{DaySummary, TrainingSummary};
use crate::{ActivityKind, Field, TrackerError, TrackerResult};

/// Compute the daily summary for a `"<steps>,<duration>"` record.
///
/// Distance uses the fixed stride; calories use the walking formula.
pub fn try_day_summary(data: &str, weight: f64, height: f64) -> TrackerResult<DaySummary> {
    let record = parse_day_record(data)?;
    let distance_km = calories::distance_km(record.steps, FIXED_STRIDE_M);
    let calories =
        calories::walking_spent_calories(record.steps, weight, height, record.duration)?;
    tracing::debug!(steps = record.steps, distance_km, calories, "day summary computed");
    Ok(DaySummary {
        steps: record.steps,
        distance_km,
        calories,
    })
}

/// Daily summary report, or an empty string if the record or inputs are
/// invalid. Failures are logged rather than returned.
pub fn compute_day_summary(data: &str, weight: f64, height: f64) -> String {
    match try_day_summary(data, weight, height) {
        Ok(summary) => summary.to_string(),
        Err(e) => {
            tracing::warn!(record = data, error = %e, "day summary failed");
            String::new()
        }
    }
}

/// Compute the training summary for a `"<steps>,<activity>,<duration>"` record.
pub fn try_training_summary(
    data: &str,
    weight: f64,
    height: f64,
) -> TrackerResult<TrainingSummary> {
    if weight.is_nan() || weight <= 0.0 {
        return Err(TrackerError::Precondition(Field::Weight));
    }
    if height.is_nan() || height <= 0.0 {
        return Err(TrackerError::Precondition(Field::Height));
    }

    let record = parse_training_record(data)?;
    let kind: ActivityKind = record.activity.parse()?;
    let calories = calories::spent_calories(kind, record.steps, weight, height, record.duration)?;
    let summary = TrainingSummary {
        kind,
        duration_hours: calories::hours(record.duration),
        distance_km: calories::distance_for_height(record.steps, height),
        speed_kmh: calories::mean_speed(record.steps, height, record.duration),
        calories,
        activity: record.activity,
    };
    tracing::debug!(
        kind = %summary.kind,
        distance_km = summary.distance_km,
        calories = summary.calories,
        "training summary computed"
    );
    Ok(summary)
}

/// Training summary report. Errors are returned to the caller.
pub fn compute_training_summary(data: &str, weight: f64, height: f64) -> TrackerResult<String> {
    try_training_summary(data, weight, height).map(|summary| summary.to_string())
}
