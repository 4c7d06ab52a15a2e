//! Value mapping: movement and modifier pair → committed value.
//!
//! Drag path: `start + movement * sensitivity * multiplier`, snapped to the
//! nearest multiple of `multiplier`, then clamped. Keyboard path: one step
//! of exactly `multiplier`, no sensitivity, no snapping.

use crate::bounds::Bounds;
use crate::format::{MAX_FRACTION_DIGITS, round_to_decimals};
use crate::modifiers::ModifierPair;

/// Direction of a discrete keyboard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

impl StepDirection {
    fn sign(self) -> f64 {
        match self {
            StepDirection::Up => 1.0,
            StepDirection::Down => -1.0,
        }
    }
}

/// Round half towards positive infinity (`-2.5 → -2`, `2.5 → 3`).
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Fractional digits needed to write `grid` exactly (`3e-7 → 7`, `0.25 → 2`),
/// capped where `f64` runs out of significant digits.
fn grid_decimals(grid: f64) -> usize {
    if !(grid.is_finite() && grid > 0.0) {
        return 0;
    }
    let cap = (15 - grid.log10().floor() as i32).clamp(0, 300) as usize;
    (0..=cap)
        .find(|&d| {
            let scaled = grid * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-9 * scaled.abs().max(1.0)
        })
        .unwrap_or(cap)
}

/// Digits kept when cleaning float noise off a result on `grid`.
///
/// Never coarser than the grid itself, and at least [`MAX_FRACTION_DIGITS`]
/// so values that started off the grid keep their displayed digits.
fn clean_digits(grid: f64) -> usize {
    grid_decimals(grid).max(MAX_FRACTION_DIGITS)
}

/// Snap `value` to the nearest multiple of `grid`.
///
/// The result is cleaned at the grid's own precision so fractional grids
/// like `0.1` yield `0.3` rather than `0.30000000000000004`, and tiny grids
/// like `3e-7` stay on the grid. Never returns negative zero.
pub fn snap_to_grid(value: f64, grid: f64) -> f64 {
    let snapped = round_half_up(value / grid) * grid;
    round_to_decimals(snapped, clean_digits(grid))
}

/// Map accumulated drag movement to a new value.
pub fn map_value(start: f64, movement: f64, pair: ModifierPair, bounds: Bounds) -> f64 {
    let delta = movement * pair.sensitivity * pair.multiplier;
    let raw = start + delta;
    let snapped = snap_to_grid(raw, pair.multiplier);
    log::trace!(
        "map_value: start={start} movement={movement} x{} ~{} -> {snapped}",
        pair.multiplier,
        pair.sensitivity
    );
    bounds.clamp(snapped)
}

/// Apply one keyboard step of size `multiplier` from `value`.
pub fn step_value(value: f64, direction: StepDirection, multiplier: f64, bounds: Bounds) -> f64 {
    let raw = value + direction.sign() * multiplier;
    bounds.clamp(round_to_decimals(raw, clean_digits(multiplier)))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Equal within a tolerance relative to the magnitude.
    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn default_pair_moves_one_per_pixel() {
        assert_eq!(map_value(42.0, 10.0, ModifierPair::UNIT, Bounds::UNBOUNDED), 52.0);
    }

    #[test]
    fn shift_pair_snaps_to_tens() {
        // 20 * 0.5 * 10 = 100 → 142 → 140
        assert_eq!(map_value(42.0, 20.0, ModifierPair::SHIFT, Bounds::UNBOUNDED), 140.0);
    }

    #[test]
    fn zero_movement_is_identity_modulo_clamp() {
        let bounds = Bounds::new(Some(0.0), Some(10.0)).unwrap();
        assert_eq!(map_value(7.0, 0.0, ModifierPair::UNIT, Bounds::UNBOUNDED), 7.0);
        assert_eq!(map_value(7.0, 0.0, ModifierPair::UNIT, bounds), 7.0);
        assert_eq!(map_value(17.0, 0.0, ModifierPair::UNIT, bounds), 10.0);
    }

    #[test]
    fn result_is_multiple_of_multiplier() {
        for multiplier in [2.5e-7, 3e-7, 0.001, 0.01, 0.1, 0.25, 1.0, 2.0, 10.0] {
            let pair = ModifierPair::new(multiplier, 0.37).unwrap();
            for movement in [-113.0, -7.0, -1.0, 1.0, 3.0, 59.0, 401.0] {
                let v = map_value(1.234, movement, pair, Bounds::UNBOUNDED);
                let steps = v / multiplier;
                assert!(
                    approx(steps, steps.round()),
                    "{v} is not a multiple of {multiplier}"
                );
            }
        }
    }

    #[test]
    fn clamps_after_snapping() {
        let bounds = Bounds::new(Some(0.0), Some(100.0)).unwrap();
        assert_eq!(map_value(42.0, 20.0, ModifierPair::SHIFT, bounds), 100.0);
        assert_eq!(map_value(42.0, -500.0, ModifierPair::UNIT, bounds), 0.0);
    }

    #[test]
    fn never_negative_zero() {
        let v = map_value(-0.4, 0.0, ModifierPair::UNIT, Bounds::UNBOUNDED);
        assert_eq!(v, 0.0);
        assert!(v.is_sign_positive());
    }

    #[test]
    fn ties_round_towards_positive_infinity() {
        assert_eq!(snap_to_grid(2.5, 1.0), 3.0);
        assert_eq!(snap_to_grid(-2.5, 1.0), -2.0);
        assert_eq!(snap_to_grid(15.0, 10.0), 20.0);
    }

    #[test]
    fn fractional_grid_is_clean() {
        assert_eq!(snap_to_grid(0.31, 0.1), 0.3);
        assert_eq!(snap_to_grid(0.014, 0.01), 0.01);
    }

    #[test]
    fn tiny_grids_stay_on_grid() {
        let pair = ModifierPair::new(3e-7, 1.0).unwrap();
        let v = map_value(0.0, 2.0, pair, Bounds::UNBOUNDED);
        assert!(approx(v, 6e-7), "{v}");
        assert!(approx(snap_to_grid(1e-6, 2.5e-7) / 2.5e-7, 4.0));
        assert_eq!(grid_decimals(3e-7), 7);
        assert_eq!(grid_decimals(2.5e-7), 8);
        assert_eq!(grid_decimals(0.25), 2);
        assert_eq!(grid_decimals(10.0), 0);
    }

    #[test]
    fn keyboard_step_on_tiny_grid_is_not_rounded_away() {
        let v = step_value(0.0, StepDirection::Up, 3e-7, Bounds::UNBOUNDED);
        assert!(approx(v, 3e-7), "{v}");
    }

    #[test]
    fn keyboard_steps_ignore_sensitivity() {
        assert_eq!(step_value(0.0, StepDirection::Up, 2.0, Bounds::UNBOUNDED), 2.0);
        assert_eq!(step_value(0.0, StepDirection::Down, 0.1, Bounds::UNBOUNDED), -0.1);
        assert_eq!(step_value(0.2, StepDirection::Up, 0.1, Bounds::UNBOUNDED), 0.3);
        let bounds = Bounds::new(None, Some(1.0)).unwrap();
        assert_eq!(step_value(0.5, StepDirection::Up, 10.0, bounds), 1.0);
    }
}
