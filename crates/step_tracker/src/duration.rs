//! Compound duration expressions such as `3h00m10s` or `1.5h`.
//!
//! Grammar: `[-+]?([0-9]*(\.[0-9]*)?unit)+` where unit is one of
//! `h`, `m`, `s`, `ms`, `us` (`µs`, `μs`) or `ns`. A bare `0` is accepted
//! without a unit.

use std::time::Duration;

use thiserror::Error;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

/// Largest representable magnitude, in nanoseconds.
const MAX_NANOS: u64 = i64::MAX as u64;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,
    #[error("invalid duration {0:?}")]
    Invalid(String),
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },
    #[error("duration {0:?} is out of range")]
    OutOfRange(String),
}

/// A parsed duration: a sign plus a non-negative magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignedDuration {
    negative: bool,
    magnitude: Duration,
}

impl SignedDuration {
    pub fn new(negative: bool, magnitude: Duration) -> Self {
        // -0 is just 0
        Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    /// True when the duration is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.magnitude.is_zero()
    }

    pub fn magnitude(&self) -> Duration {
        self.magnitude
    }
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

/// Consume leading ASCII digits as an integer. `None` on overflow.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: u64 = 0;
    for b in s[..end].bytes() {
        value = value.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
        if value > MAX_NANOS {
            return None;
        }
    }
    Some((value, &s[end..]))
}

/// Consume leading ASCII digits as a fraction `value / scale`. Digits past
/// the point where `value` would overflow are consumed but ignored.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: u64 = 0;
    let mut scale = 1.0_f64;
    let mut saturated = false;
    for b in s[..end].bytes() {
        if saturated {
            continue;
        }
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
        {
            Some(v) if v <= MAX_NANOS => {
                value = v;
                scale *= 10.0;
            }
            _ => saturated = true,
        }
    }
    (value, scale, &s[end..])
}

/// Parse a compound duration expression.
///
/// ```
/// use std::time::Duration;
/// use step_tracker::parse_duration;
///
/// let d = parse_duration("1h30m").unwrap();
/// assert_eq!(d.magnitude(), Duration::from_secs(90 * 60));
/// assert!(d.is_positive());
/// ```
pub fn parse_duration(input: &str) -> Result<SignedDuration, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());

    let mut s = input;
    let mut negative = false;
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s == "0" {
        return Ok(SignedDuration::new(false, Duration::ZERO));
    }
    if s.is_empty() {
        return Err(if input.is_empty() {
            DurationError::Empty
        } else {
            invalid()
        });
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        let first = s.as_bytes()[0];
        if !(first == b'.' || first.is_ascii_digit()) {
            return Err(invalid());
        }

        let before = s.len();
        let (mut value, rest) =
            leading_int(s).ok_or_else(|| DurationError::OutOfRange(input.to_string()))?;
        s = rest;
        let has_int = before != s.len();

        let mut fraction = 0u64;
        let mut scale = 1.0_f64;
        let mut has_fraction = false;
        if let Some(rest) = s.strip_prefix('.') {
            let before = rest.len();
            let (f, sc, rest) = leading_fraction(rest);
            fraction = f;
            scale = sc;
            has_fraction = before != rest.len();
            s = rest;
        }
        if !has_int && !has_fraction {
            return Err(invalid());
        }

        let unit_end = s
            .bytes()
            .position(|b| b == b'.' || b.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_end == 0 {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let unit = &s[..unit_end];
        s = &s[unit_end..];
        let per_unit = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let out_of_range = || DurationError::OutOfRange(input.to_string());
        value = value
            .checked_mul(per_unit)
            .filter(|v| *v <= MAX_NANOS)
            .ok_or_else(out_of_range)?;
        if fraction > 0 {
            let extra = (fraction as f64 * (per_unit as f64 / scale)) as u64;
            value = value
                .checked_add(extra)
                .filter(|v| *v <= MAX_NANOS)
                .ok_or_else(out_of_range)?;
        }
        total = total
            .checked_add(value)
            .filter(|v| *v <= MAX_NANOS)
            .ok_or_else(out_of_range)?;
    }

    Ok(SignedDuration::new(negative, Duration::from_nanos(total)))
}
