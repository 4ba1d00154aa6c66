use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Options for rendering vectors and comparing floating point vectors.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct VectorConfig {
    /// Largest per-element difference still considered equal by `approx_eq_with`.
    #[serde(default = "VectorConfig::default_tolerance")]
    pub tolerance: f64,

    /// Digits after the decimal point when rendering; `None` prints full precision.
    #[serde(default)]
    pub precision: Option<usize>,
}

impl VectorConfig {
    const DEFAULT_TOLERANCE: f64 = 1e-9;

    fn default_tolerance() -> f64 {
        Self::DEFAULT_TOLERANCE
    }

    pub fn new(tolerance: f64, precision: Option<usize>) -> Self {
        Self {
            tolerance,
            precision,
        }
    }

    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: VectorConfig =
            serde_json::from_str(json).context("Failed to parse vector configuration")?;
        if config.tolerance.is_nan() || config.tolerance < 0.0 {
            anyhow::bail!(
                "Tolerance must be a non-negative number, got {}",
                config.tolerance
            );
        }
        log::trace!("Loaded vector configuration: {:?}", config);
        Ok(config)
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            precision: None,
        }
    }
}

/// Parses a precision keyword: `"full"` or a digit count such as `"7"`.
impl FromStr for VectorConfig {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(VectorConfig::default()),
            other => other
                .parse::<usize>()
                .map(|digits| VectorConfig::default().with_precision(Some(digits)))
                .map_err(|_| {
                    format!(
                        "Unknown precision: {}. Use `full` or a number of digits",
                        s
                    )
                }),
        }
    }
}
