//! Modifier-key policy.
//!
//! Maps the modifier keys held during an event to a [`ModifierPair`]. The
//! multiplier scales each unit of movement and doubles as the snapping grid;
//! the sensitivity damps continuous drag movement only.
//!
//! ## Built-in pairs
//!
//! | Identifier | Multiplier | Sensitivity |
//! |------------|-----------:|------------:|
//! | `default`  | 1          | 1           |
//! | `ctrlKey`  | 1          | 1           |
//! | `altKey`   | 1          | 1           |
//! | `shiftKey` | 10         | 0.5         |
//! | `metaKey`  | 1          | 1           |
//!
//! When several modifiers are held at once, the first held key in
//! [`ModifierKey::PRECEDENCE`] wins.

use serde::{Deserialize, Serialize};

// ─── Pair ────────────────────────────────────────────────────────────────

/// The `(multiplier, sensitivity)` tuple bound to one modifier identifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModifierPair {
    pub multiplier: f64,
    pub sensitivity: f64,
}

impl ModifierPair {
    /// The pair used when no modifier is held.
    pub const UNIT: Self = Self {
        multiplier: 1.0,
        sensitivity: 1.0,
    };

    /// Built-in shift pair: coarse steps, half-speed drag.
    pub const SHIFT: Self = Self {
        multiplier: 10.0,
        sensitivity: 0.5,
    };

    /// Build a validated pair.
    ///
    /// # Errors
    /// Returns a message if either component is not finite and strictly positive.
    pub fn new(multiplier: f64, sensitivity: f64) -> Result<Self, String> {
        let pair = Self {
            multiplier,
            sensitivity,
        };
        pair.validate()?;
        Ok(pair)
    }

    /// Check the positivity invariant.
    ///
    /// # Errors
    /// Returns a message naming the offending component.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.multiplier.is_finite() && self.multiplier > 0.0) {
            return Err(format!(
                "multiplier must be a positive number, got {}",
                self.multiplier
            ));
        }
        if !(self.sensitivity.is_finite() && self.sensitivity > 0.0) {
            return Err(format!(
                "sensitivity must be a positive number, got {}",
                self.sensitivity
            ));
        }
        Ok(())
    }
}

impl Default for ModifierPair {
    fn default() -> Self {
        Self::UNIT
    }
}

// ─── Keys ────────────────────────────────────────────────────────────────

/// Identifier of a policy entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKey {
    Default,
    Ctrl,
    Alt,
    Shift,
    Meta,
}

impl ModifierKey {
    /// Resolution order when more than one modifier is held.
    pub const PRECEDENCE: [ModifierKey; 4] = [
        ModifierKey::Ctrl,
        ModifierKey::Alt,
        ModifierKey::Shift,
        ModifierKey::Meta,
    ];

    /// The identifier used in configuration (`"shiftKey"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            ModifierKey::Default => "default",
            ModifierKey::Ctrl => "ctrlKey",
            ModifierKey::Alt => "altKey",
            ModifierKey::Shift => "shiftKey",
            ModifierKey::Meta => "metaKey",
        }
    }
}

/// Modifier flags carried by a pointer or keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Whether the given key is held. `Default` is never "held".
    pub fn is_held(&self, key: ModifierKey) -> bool {
        match key {
            ModifierKey::Default => false,
            ModifierKey::Ctrl => self.ctrl,
            ModifierKey::Alt => self.alt,
            ModifierKey::Shift => self.shift,
            ModifierKey::Meta => self.meta,
        }
    }

    /// The winning key by precedence, or `Default` when nothing is held.
    pub fn active(&self) -> ModifierKey {
        ModifierKey::PRECEDENCE
            .into_iter()
            .find(|key| self.is_held(*key))
            .unwrap_or(ModifierKey::Default)
    }
}

// ─── Policy ──────────────────────────────────────────────────────────────

/// Consumer-supplied overrides. Missing entries fall back to the built-ins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModifierOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ModifierPair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctrl_key: Option<ModifierPair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_key: Option<ModifierPair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_key: Option<ModifierPair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_key: Option<ModifierPair>,
}

impl ModifierOverrides {
    fn get(&self, key: ModifierKey) -> Option<ModifierPair> {
        match key {
            ModifierKey::Default => self.default,
            ModifierKey::Ctrl => self.ctrl_key,
            ModifierKey::Alt => self.alt_key,
            ModifierKey::Shift => self.shift_key,
            ModifierKey::Meta => self.meta_key,
        }
    }
}

/// The effective policy: overrides merged over the built-in table.
///
/// Always holds a pair for every identifier, so resolution never fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifierPolicy {
    default: ModifierPair,
    ctrl: ModifierPair,
    alt: ModifierPair,
    shift: ModifierPair,
    meta: ModifierPair,
}

impl Default for ModifierPolicy {
    fn default() -> Self {
        Self {
            default: ModifierPair::UNIT,
            ctrl: ModifierPair::UNIT,
            alt: ModifierPair::UNIT,
            shift: ModifierPair::SHIFT,
            meta: ModifierPair::UNIT,
        }
    }
}

impl ModifierPolicy {
    /// Merge `overrides` over the built-in pairs.
    ///
    /// # Errors
    /// Returns a message if any supplied pair breaks the positivity invariant.
    /// The policy is rejected as a whole; no partial merge happens.
    pub fn with_overrides(overrides: &ModifierOverrides) -> Result<Self, String> {
        let mut policy = Self::default();
        for key in [
            ModifierKey::Default,
            ModifierKey::Ctrl,
            ModifierKey::Alt,
            ModifierKey::Shift,
            ModifierKey::Meta,
        ] {
            if let Some(pair) = overrides.get(key) {
                pair.validate()
                    .map_err(|e| format!("modifierKeys.{}: {e}", key.name()))?;
                *policy.slot_mut(key) = pair;
            }
        }
        Ok(policy)
    }

    /// The pair stored for `key`.
    pub fn pair(&self, key: ModifierKey) -> ModifierPair {
        match key {
            ModifierKey::Default => self.default,
            ModifierKey::Ctrl => self.ctrl,
            ModifierKey::Alt => self.alt,
            ModifierKey::Shift => self.shift,
            ModifierKey::Meta => self.meta,
        }
    }

    /// Resolve the pair for the modifiers held on an event.
    pub fn resolve(&self, modifiers: Modifiers) -> ModifierPair {
        self.pair(modifiers.active())
    }

    fn slot_mut(&mut self, key: ModifierKey) -> &mut ModifierPair {
        match key {
            ModifierKey::Default => &mut self.default,
            ModifierKey::Ctrl => &mut self.ctrl,
            ModifierKey::Alt => &mut self.alt,
            ModifierKey::Shift => &mut self.shift,
            ModifierKey::Meta => &mut self.meta,
        }
    }
}
