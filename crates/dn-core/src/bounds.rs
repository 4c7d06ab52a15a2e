//! Optional `min`/`max` clamping applied to every committed value.

use serde::{Deserialize, Serialize};

/// Inclusive value range. Either end may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl Bounds {
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    /// Build a validated range.
    ///
    /// # Errors
    /// Returns a message if an end is NaN or `min > max`.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Result<Self, String> {
        if min.is_some_and(f64::is_nan) || max.is_some_and(f64::is_nan) {
            return Err("bounds must not be NaN".to_string());
        }
        if let (Some(lo), Some(hi)) = (min, max)
            && lo > hi
        {
            return Err(format!("min ({lo}) is greater than max ({hi})"));
        }
        Ok(Self { min, max })
    }

    /// Clamp `value` into the range. Lower bound first, then upper.
    pub fn clamp(&self, value: f64) -> f64 {
        let mut v = value;
        if let Some(min) = self.min {
            v = v.max(min);
        }
        if let Some(max) = self.max {
            v = v.min(max);
        }
        v
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}
