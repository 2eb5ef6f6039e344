//! Parsing of comma-separated activity records.
//!
//! Numeric fields (steps and duration) have all whitespace removed before
//! parsing, so `"1 000, 1h 30m"` reads as 1000 steps over 90 minutes. The
//! activity label is only trimmed.

use std::time::Duration;

use crate::duration::parse_duration;
use crate::{Field, TrackerError, TrackerResult};

/// A daily step log: `"<steps>,<duration>"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayRecord {
    pub steps: u64,
    pub duration: Duration,
}

/// A training session: `"<steps>,<activity>,<duration>"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainingRecord {
    pub steps: u64,
    /// Label as written in the record, trimmed.
    pub activity: String,
    pub duration: Duration,
}

fn split_fields(data: &str, expected: usize) -> TrackerResult<Vec<&str>> {
    let parts: Vec<&str> = data.split(',').collect();
    if parts.len() != expected {
        return Err(TrackerError::Format {
            expected,
            found: parts.len(),
        });
    }
    Ok(parts)
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn parse_steps(raw: &str) -> TrackerResult<u64> {
    let text = strip_whitespace(raw);
    if text.is_empty() {
        return Err(TrackerError::EmptyField(Field::Steps));
    }
    let steps: i64 = text.parse().map_err(TrackerError::InvalidSteps)?;
    u64::try_from(steps)
        .ok()
        .filter(|s| *s > 0)
        .ok_or(TrackerError::NonPositive(Field::Steps))
}

fn parse_positive_duration(raw: &str) -> TrackerResult<Duration> {
    let text = strip_whitespace(raw);
    if text.is_empty() {
        return Err(TrackerError::EmptyField(Field::Duration));
    }
    let parsed = parse_duration(&text).map_err(TrackerError::InvalidDuration)?;
    if !parsed.is_positive() {
        return Err(TrackerError::NonPositive(Field::Duration));
    }
    Ok(parsed.magnitude())
}

pub fn parse_day_record(data: &str) -> TrackerResult<DayRecord> {
    let parts = split_fields(data, 2)?;
    let steps = parse_steps(parts[0])?;
    let duration = parse_positive_duration(parts[1])?;
    Ok(DayRecord { steps, duration })
}

pub fn parse_training_record(data: &str) -> TrackerResult<TrainingRecord> {
    let parts = split_fields(data, 3)?;
    let steps = parse_steps(parts[0])?;

    let activity = parts[1].trim();
    if activity.is_empty() {
        return Err(TrackerError::EmptyField(Field::Activity));
    }

    let duration = parse_positive_duration(parts[2])?;
    Ok(TrainingRecord {
        steps,
        activity: activity.to_string(),
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_record() {
        let r = parse_day_record("1000,3h00m10s").unwrap();
        assert_eq!(r.steps, 1000);
        assert_eq!(r.duration, Duration::from_secs(3 * 3600 + 10));
    }

    #[test]
    fn day_record_strips_internal_whitespace() {
        let r = parse_day_record(" 1 000 , 1h 30m ").unwrap();
        assert_eq!(r.steps, 1000);
        assert_eq!(r.duration, Duration::from_secs(5400));
    }

    #[test]
    fn parses_training_record() {
        let r = parse_training_record("3456, Ходьба ,3h00m").unwrap();
        assert_eq!(r.steps, 3456);
        assert_eq!(r.activity, "Ходьба");
        assert_eq!(r.duration, Duration::from_secs(3 * 3600));
    }

    #[test]
    fn training_label_keeps_inner_spaces() {
        let r = parse_training_record("10, nordic walking ,1h").unwrap();
        assert_eq!(r.activity, "nordic walking");
    }

    #[test]
    fn wrong_field_count() {
        assert_eq!(
            parse_day_record("1000"),
            Err(TrackerError::Format {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            parse_training_record("1000,1h"),
            Err(TrackerError::Format {
                expected: 3,
                found: 2
            })
        );
        assert!(matches!(
            parse_day_record("1,2,3"),
            Err(TrackerError::Format { found: 3, .. })
        ));
    }

    #[test]
    fn empty_fields() {
        assert_eq!(
            parse_day_record(" ,1h"),
            Err(TrackerError::EmptyField(Field::Steps))
        );
        assert_eq!(
            parse_day_record("100,  "),
            Err(TrackerError::EmptyField(Field::Duration))
        );
        assert_eq!(
            parse_training_record("100, ,1h"),
            Err(TrackerError::EmptyField(Field::Activity))
        );
    }

    #[test]
    fn non_numeric_steps() {
        assert!(matches!(
            parse_day_record("abc,1h"),
            Err(TrackerError::InvalidSteps(_))
        ));
        assert!(matches!(
            parse_training_record("12.5,walking,1h"),
            Err(TrackerError::InvalidSteps(_))
        ));
    }

    #[test]
    fn non_positive_steps() {
        assert_eq!(
            parse_day_record("0,1h"),
            Err(TrackerError::NonPositive(Field::Steps))
        );
        assert_eq!(
            parse_training_record("-5,running,1h"),
            Err(TrackerError::NonPositive(Field::Steps))
        );
    }

    #[test]
    fn bad_durations() {
        assert!(matches!(
            parse_day_record("100,forever"),
            Err(TrackerError::InvalidDuration(_))
        ));
        assert!(matches!(
            parse_training_record("100,walking,90"),
            Err(TrackerError::InvalidDuration(_))
        ));
        assert_eq!(
            parse_day_record("100,0s"),
            Err(TrackerError::NonPositive(Field::Duration))
        );
        assert_eq!(
            parse_training_record("100,walking,-1h"),
            Err(TrackerError::NonPositive(Field::Duration))
        );
    }
}
