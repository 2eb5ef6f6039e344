//! Distance and calorie summaries computed from step-count activity records.
//!
//! A record is a single comma-separated line, either `"<steps>,<duration>"`
//! for a daily step log or `"<steps>,<activity>,<duration>"` for a training
//! session. See [`compute_day_summary`] and [`compute_training_summary`].

use std::fmt;
use std::num::ParseIntError;

use serde::Serialize;
use thiserror::Error;

pub mod activity;
pub mod calories;
pub mod config;
pub mod duration;
pub mod record;
pub mod report;
pub mod summary;

pub use activity::ActivityKind;
pub use config::{Config, PhysicalProfile};
pub use duration::{DurationError, SignedDuration, parse_duration};
pub use record::{DayRecord, TrainingRecord, parse_day_record, parse_training_record};
pub use report::{DaySummary, TrainingSummary};
pub use summary::{
    compute_day_summary, compute_training_summary, try_day_summary, try_training_summary,
};

/// Named input quantity, used to say which value an error is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Steps,
    Activity,
    Duration,
    Weight,
    Height,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Steps => "step count",
            Field::Activity => "activity type",
            Field::Duration => "duration",
            Field::Weight => "weight",
            Field::Height => "height",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TrackerError {
    #[error("invalid record format: expected {expected} comma-separated values, got {found}")]
    Format { expected: usize, found: usize },

    #[error("{0} must not be empty")]
    EmptyField(Field),

    #[error("failed to parse step count: {0}")]
    InvalidSteps(#[source] ParseIntError),

    #[error("failed to parse duration: {0}")]
    InvalidDuration(#[source] DurationError),

    /// A record field parsed but is zero or negative.
    #[error("{0} must be positive")]
    NonPositive(Field),

    #[error("unknown training type: {0}")]
    UnknownActivity(String),

    /// A calculation input supplied by the caller is zero or negative.
    #[error("precondition failed: {0} must be positive")]
    Precondition(Field),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
