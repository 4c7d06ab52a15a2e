//! Control configuration and callbacks.

use std::fmt;

use dn_core::{Bounds, ModifierOverrides, ModifierPolicy};
use serde::{Deserialize, Serialize};

/// Static configuration of a control, named after the component props.
///
/// ```json
/// { "min": 0, "max": 100, "modifierKeys": { "shiftKey": { "multiplier": 5, "sensitivity": 1 } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ControlConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub modifier_keys: ModifierOverrides,
    /// Always use absolute-position dragging.
    pub disable_pointer_lock: bool,
    /// Label variant only: no editable field, the label is the whole control.
    pub no_input: bool,
}

impl ControlConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    /// Returns a message for malformed JSON, unknown keys, a non-positive
    /// modifier pair, or `min > max`.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("invalid config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Same checks as [`ControlConfig::from_json`] minus parsing.
    pub fn validate(&self) -> Result<(), String> {
        self.settings().map(|_| ())
    }

    /// Validate into the form a control runs with.
    ///
    /// # Errors
    /// See [`ControlConfig::validate`].
    pub fn settings(&self) -> Result<Settings, String> {
        Ok(Settings {
            bounds: self.bounds()?,
            policy: self.policy()?,
            pointer_capture: !self.disable_pointer_lock,
            no_input: self.no_input,
        })
    }

    /// # Errors
    /// Returns a message if `min > max` or either is NaN.
    pub fn bounds(&self) -> Result<Bounds, String> {
        Bounds::new(self.min, self.max)
    }

    /// # Errors
    /// Returns a message if any override breaks the positivity invariant.
    pub fn policy(&self) -> Result<ModifierPolicy, String> {
        ModifierPolicy::with_overrides(&self.modifier_keys)
    }
}

/// A validated [`ControlConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub bounds: Bounds,
    pub policy: ModifierPolicy,
    pub pointer_capture: bool,
    pub no_input: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bounds: Bounds::UNBOUNDED,
            policy: ModifierPolicy::default(),
            pointer_capture: true,
            no_input: false,
        }
    }
}

// ─── Variant ─────────────────────────────────────────────────────────────

/// Which element acts as the drag handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// The editable field is the handle.
    Field,
    /// A label wraps the field; `with_field: false` is a label-only control.
    Label { with_field: bool },
}

impl Variant {
    pub fn has_field(self) -> bool {
        match self {
            Variant::Field => true,
            Variant::Label { with_field } => with_field,
        }
    }
}

// ─── Callbacks ───────────────────────────────────────────────────────────

type ChangeFn = Box<dyn FnMut(f64)>;
type NotifyFn = Box<dyn FnMut()>;

/// Host callbacks. Every slot defaults to a no-op.
pub struct Callbacks {
    on_change: ChangeFn,
    on_drag_start: NotifyFn,
    on_drag_end: NotifyFn,
}

impl Default for Callbacks {
    fn default() -> Self {
        Self {
            on_change: Box::new(|_| {}),
            on_drag_start: Box::new(|| {}),
            on_drag_end: Box::new(|| {}),
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_change(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_change = Box::new(f);
        self
    }

    pub fn on_drag_start(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_drag_start = Box::new(f);
        self
    }

    pub fn on_drag_end(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_drag_end = Box::new(f);
        self
    }

    pub(crate) fn change(&mut self, value: f64) {
        (self.on_change)(value);
    }

    pub(crate) fn drag_start(&mut self) {
        (self.on_drag_start)();
    }

    pub(crate) fn drag_end(&mut self) {
        (self.on_drag_end)();
    }
}
