//! Drag Number core: the pure arithmetic behind drag-to-change number inputs.
//!
//! - [`modifiers`]: modifier keys → `(multiplier, sensitivity)` policy
//! - [`value`]: movement → snapped, clamped value; keyboard steps
//! - [`format`]: value ↔ displayed text
//! - [`bounds`]: optional `min`/`max`

pub mod bounds;
pub mod format;
pub mod modifiers;
pub mod value;

pub use bounds::Bounds;
pub use format::{decimal_places, format_number, format_value, parse_number};
pub use modifiers::{ModifierKey, ModifierOverrides, ModifierPair, ModifierPolicy, Modifiers};
pub use value::{StepDirection, map_value, snap_to_grid, step_value};
