use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::TrackerError;

/// Training types with distinct calorie formulas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Walking,
    Running,
}

impl ActivityKind {
    /// Resolve a free-text label, case-insensitively.
    pub fn from_label(label: &str) -> Result<Self, TrackerError> {
        match label.to_lowercase().as_str() {
            "walking" | "ходьба" => Ok(ActivityKind::Walking),
            "running" | "бег" => Ok(ActivityKind::Running),
            _ => Err(TrackerError::UnknownActivity(label.to_string())),
        }
    }
}

impl FromStr for ActivityKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityKind::Walking => f.write_str("walking"),
            ActivityKind::Running => f.write_str("running"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_labels_case_insensitively() {
        assert_eq!(ActivityKind::from_label("Walking").unwrap(), ActivityKind::Walking);
        assert_eq!(ActivityKind::from_label("ХОДЬБА").unwrap(), ActivityKind::Walking);
        assert_eq!(ActivityKind::from_label("running").unwrap(), ActivityKind::Running);
        assert_eq!("Бег".parse::<ActivityKind>().unwrap(), ActivityKind::Running);
    }

    #[test]
    fn unknown_label_keeps_original_text() {
        let err = ActivityKind::from_label("Cycling").unwrap_err();
        assert_eq!(err, TrackerError::UnknownActivity("Cycling".into()));
        assert_eq!(err.to_string(), "unknown training type: Cycling");
    }
}
