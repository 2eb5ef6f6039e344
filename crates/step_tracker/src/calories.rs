//! Stride, distance, speed and calorie formulas.

use std::time::Duration;

use crate::{ActivityKind, Field, TrackerError, TrackerResult};

/// Stride used for daily step logs, in metres.
pub const FIXED_STRIDE_M: f64 = 0.65;
/// Stride as a fraction of body height.
pub const STRIDE_HEIGHT_COEFFICIENT: f64 = 0.45;
pub const METERS_PER_KM: f64 = 1000.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

pub fn stride_for_height(height: f64) -> f64 {
    height * STRIDE_HEIGHT_COEFFICIENT
}

/// Distance in km covered by `steps` strides of `stride_m` metres.
pub fn distance_km(steps: u64, stride_m: f64) -> f64 {
    steps as f64 * stride_m / METERS_PER_KM
}

pub fn distance_for_height(steps: u64, height: f64) -> f64 {
    distance_km(steps, stride_for_height(height))
}

/// Mean speed in km/h using the height-based stride. Zero for a zero duration.
pub fn mean_speed(steps: u64, height: f64, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 0.0;
    }
    distance_for_height(steps, height) / hours(duration)
}

pub fn hours(duration: Duration) -> f64 {
    duration.as_secs_f64() / 3600.0
}

pub fn minutes(duration: Duration) -> f64 {
    duration.as_secs_f64() / 60.0
}

// Order matters: the first failing input is the one reported.
fn check_inputs(steps: u64, weight: f64, height: f64, duration: Duration) -> TrackerResult<()> {
    if steps == 0 {
        return Err(TrackerError::Precondition(Field::Steps));
    }
    if weight.is_nan() || weight <= 0.0 {
        return Err(TrackerError::Precondition(Field::Weight));
    }
    if height.is_nan() || height <= 0.0 {
        return Err(TrackerError::Precondition(Field::Height));
    }
    if duration.is_zero() {
        return Err(TrackerError::Precondition(Field::Duration));
    }
    Ok(())
}

pub fn walking_spent_calories(
    steps: u64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> TrackerResult<f64> {
    check_inputs(steps, weight, height, duration)?;
    let speed = mean_speed(steps, height, duration);
    Ok(WALKING_CALORIES_COEFFICIENT * speed * weight * minutes(duration) / MINUTES_PER_HOUR)
}

pub fn running_spent_calories(
    steps: u64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> TrackerResult<f64> {
    check_inputs(steps, weight, height, duration)?;
    let speed = mean_speed(steps, height, duration);
    Ok(speed * weight * minutes(duration) / MINUTES_PER_HOUR)
}

pub fn spent_calories(
    kind: ActivityKind,
    steps: u64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> TrackerResult<f64> {
    match kind {
        ActivityKind::Walking => walking_spent_calories(steps, weight, height, duration),
        ActivityKind::Running => running_spent_calories(steps, weight, height, duration),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn three_hours() -> Duration {
        Duration::from_secs(3 * 3600)
    }

    #[test]
    fn fixed_stride_distance() {
        assert!((distance_km(1000, FIXED_STRIDE_M) - 0.65).abs() < EPS);
    }

    #[test]
    fn height_based_distance_and_speed() {
        assert!((stride_for_height(1.75) - 0.7875).abs() < EPS);
        let d = distance_for_height(3456, 1.75);
        assert!((d - 2.7216).abs() < EPS);
        let v = mean_speed(3456, 1.75, three_hours());
        assert!((v - 0.9072).abs() < EPS);
    }

    #[test]
    fn zero_duration_speed_is_zero() {
        assert_eq!(mean_speed(1000, 1.8, Duration::ZERO), 0.0);
    }

    #[test]
    fn walking_calories_follow_formula() {
        let speed = mean_speed(3456, 1.75, three_hours());
        let expected = 0.5 * speed * 70.0 * 180.0 / 60.0;
        let got = walking_spent_calories(3456, 70.0, 1.75, three_hours()).unwrap();
        assert!((got - expected).abs() < EPS);
        assert!((got - 95.256).abs() < 1e-6);
    }

    #[test]
    fn running_is_twice_walking() {
        for (steps, weight, height, secs) in [
            (3456, 70.0, 1.75, 3 * 3600),
            (12000, 82.5, 1.91, 4210),
            (1, 0.1, 0.1, 1),
        ] {
            let d = Duration::from_secs(secs);
            let walk = walking_spent_calories(steps, weight, height, d).unwrap();
            let run = running_spent_calories(steps, weight, height, d).unwrap();
            assert_eq!(run, 2.0 * walk);
        }
    }

    #[test]
    fn dispatch_by_kind() {
        let d = three_hours();
        assert_eq!(
            spent_calories(ActivityKind::Running, 3456, 70.0, 1.75, d),
            running_spent_calories(3456, 70.0, 1.75, d)
        );
        assert_eq!(
            spent_calories(ActivityKind::Walking, 3456, 70.0, 1.75, d),
            walking_spent_calories(3456, 70.0, 1.75, d)
        );
    }

    #[test]
    fn preconditions_checked_in_order() {
        let d = three_hours();
        assert_eq!(
            walking_spent_calories(0, -1.0, -1.0, Duration::ZERO),
            Err(TrackerError::Precondition(Field::Steps))
        );
        assert_eq!(
            running_spent_calories(10, 0.0, -1.0, Duration::ZERO),
            Err(TrackerError::Precondition(Field::Weight))
        );
        assert_eq!(
            walking_spent_calories(10, 70.0, 0.0, Duration::ZERO),
            Err(TrackerError::Precondition(Field::Height))
        );
        assert_eq!(
            running_spent_calories(10, 70.0, 1.8, Duration::ZERO),
            Err(TrackerError::Precondition(Field::Duration))
        );
        assert_eq!(
            walking_spent_calories(10, f64::NAN, 1.8, d),
            Err(TrackerError::Precondition(Field::Weight))
        );
    }

    #[test]
    fn valid_inputs_give_non_negative_results() {
        for steps in [1u64, 10, 999, 50_000] {
            for secs in [1u64, 60, 5400, 36_000] {
                let d = Duration::from_secs(secs);
                assert!(distance_km(steps, FIXED_STRIDE_M) >= 0.0);
                assert!(mean_speed(steps, 1.7, d) >= 0.0);
                assert!(walking_spent_calories(steps, 60.0, 1.7, d).unwrap() >= 0.0);
                assert!(running_spent_calories(steps, 60.0, 1.7, d).unwrap() >= 0.0);
            }
        }
    }
}
