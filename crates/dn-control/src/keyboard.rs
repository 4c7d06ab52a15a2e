//! Arrow-key stepping.
//!
//! Maps a key press to a single step of the active multiplier. Only the
//! arrow keys are bound; digits, `.` and `-` fall through untouched so
//! direct text entry keeps working.

use dn_core::{Bounds, ModifierPolicy, Modifiers, StepDirection, step_value};

use crate::input::Key;

/// Result of an arrow-key step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyStep {
    pub value: f64,
    /// Multiplier the step was taken with; drives display precision.
    pub multiplier: f64,
}

/// Resolves keys into step directions.
pub struct StepKeys;

impl StepKeys {
    /// Returns `None` for keys with no binding.
    pub fn resolve(key: &Key) -> Option<StepDirection> {
        match key {
            Key::ArrowUp => Some(StepDirection::Up),
            Key::ArrowDown => Some(StepDirection::Down),
            _ => None,
        }
    }

    /// Step `value` once in the direction bound to `key`.
    ///
    /// Sensitivity is ignored: a key press moves exactly one multiplier.
    pub fn apply(
        key: &Key,
        value: f64,
        modifiers: Modifiers,
        policy: &ModifierPolicy,
        bounds: Bounds,
    ) -> Option<KeyStep> {
        let direction = Self::resolve(key)?;
        let multiplier = policy.resolve(modifiers).multiplier;
        let value = step_value(value, direction, multiplier, bounds);
        log::debug!("keyboard: {} x{multiplier} -> {value}", key.as_str());
        Some(KeyStep { value, multiplier })
    }
}
