use crate::{Field, TrackerError, TrackerResult};

pub const WEIGHT_ENV: &str = "STEP_TRACKER_WEIGHT_KG";
pub const HEIGHT_ENV: &str = "STEP_TRACKER_HEIGHT_M";
pub const LOG_LEVEL_ENV: &str = "STEP_TRACKER_LOG_LEVEL";

/// Body measurements used by the calorie formulas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalProfile {
    pub weight_kg: f64,
    pub height_m: f64,
}

impl PhysicalProfile {
    pub fn new(weight_kg: f64, height_m: f64) -> TrackerResult<Self> {
        if weight_kg.is_nan() || weight_kg <= 0.0 {
            return Err(TrackerError::Precondition(Field::Weight));
        }
        if height_m.is_nan() || height_m <= 0.0 {
            return Err(TrackerError::Precondition(Field::Height));
        }
        Ok(Self {
            weight_kg,
            height_m,
        })
    }
}

/// Settings read from the environment. Measurements are kept as raw text and
/// only parsed when no explicit value is given for them.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub weight_kg: Option<String>,
    pub height_m: Option<String>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function instead of the process environment.
    pub fn from_env_with<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let weight_kg = get(WEIGHT_ENV);
        let height_m = get(HEIGHT_ENV);
        let log_level = get(LOG_LEVEL_ENV)
            .or_else(|| get("RUST_LOG"))
            .unwrap_or_else(|| "info".into());
        Self {
            weight_kg,
            height_m,
            log_level,
        }
    }

    /// Weight and height, preferring explicit values over configured ones.
    /// Values are not range-checked.
    pub fn measurements(
        &self,
        weight_kg: Option<f64>,
        height_m: Option<f64>,
    ) -> TrackerResult<(f64, f64)> {
        let weight = resolve(weight_kg, self.weight_kg.as_deref(), WEIGHT_ENV, "weight")?;
        let height = resolve(height_m, self.height_m.as_deref(), HEIGHT_ENV, "height")?;
        Ok((weight, height))
    }

    /// Like [`Config::measurements`], but rejects non-positive values.
    pub fn profile(
        &self,
        weight_kg: Option<f64>,
        height_m: Option<f64>,
    ) -> TrackerResult<PhysicalProfile> {
        let (weight, height) = self.measurements(weight_kg, height_m)?;
        PhysicalProfile::new(weight, height)
    }
}

fn resolve(
    explicit: Option<f64>,
    raw: Option<&str>,
    key: &str,
    what: &str,
) -> TrackerResult<f64> {
    if let Some(value) = explicit {
        return Ok(value);
    }
    let raw = raw
        .ok_or_else(|| TrackerError::Config(format!("{what} not given and {key} missing")))?;
    raw.trim()
        .parse::<f64>()
        .map_err(|e| TrackerError::Config(format!("{key}={raw:?}: {e}")))
}
