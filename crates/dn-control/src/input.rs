//! Input abstraction layer.
//!
//! Normalizes mouse, touch, keyboard, and text-field events into a unified
//! `InputEvent` enum consumed by [`Control`](crate::control::Control).

use serde::{Deserialize, Serialize};

pub use dn_core::Modifiers;

/// Which device produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

/// A keyboard key, as reported by `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Shift,
    Control,
    Alt,
    Meta,
    Other(String),
}

impl Key {
    pub fn as_str(&self) -> &str {
        match self {
            Key::ArrowUp => "ArrowUp",
            Key::ArrowDown => "ArrowDown",
            Key::Shift => "Shift",
            Key::Control => "Control",
            Key::Alt => "Alt",
            Key::Meta => "Meta",
            Key::Other(s) => s,
        }
    }

    /// Shift, Control, Alt, or Meta.
    pub fn is_modifier(&self) -> bool {
        matches!(self, Key::Shift | Key::Control | Key::Alt | Key::Meta)
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        match key {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Shift" => Key::Shift,
            "Control" => Key::Control,
            "Alt" => Key::Alt,
            "Meta" => Key::Meta,
            other => Key::Other(other.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Key::from(key.as_str())
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.as_str().to_string()
    }
}

/// A normalized input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start) on the control.
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        pointer: PointerKind,
        /// Pressed on the editable field itself rather than the label around it.
        #[serde(default)]
        on_field: bool,
        #[serde(default)]
        modifiers: Modifiers,
    },

    /// Pointer moved anywhere in the document.
    PointerMove {
        x: f64,
        y: f64,
        /// Relative motion since the previous event (`movementX`).
        #[serde(default)]
        movement_x: f64,
        #[serde(default)]
        movement_y: f64,
        #[serde(default)]
        pointer: PointerKind,
        #[serde(default)]
        modifiers: Modifiers,
    },

    /// Pointer released (mouse up, touch end).
    PointerUp,

    /// Pointer stream aborted by the platform (touch cancel, capture loss).
    PointerCancel,

    /// The window lost focus mid-interaction.
    FocusLost,

    KeyDown {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },

    KeyUp {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },

    /// The editable field's text was changed by the user.
    TextInput { text: String },

    /// The editable field gained focus.
    Focus,

    /// The editable field lost focus.
    Blur,
}

impl InputEvent {
    /// Mouse press on the handle.
    pub fn mouse_down(x: f64, y: f64) -> Self {
        Self::PointerDown {
            x,
            y,
            pointer: PointerKind::Mouse,
            on_field: false,
            modifiers: Modifiers::NONE,
        }
    }

    /// Mouse move carrying both absolute position and relative motion.
    pub fn mouse_move(x: f64, y: f64, movement_x: f64, movement_y: f64, modifiers: Modifiers) -> Self {
        Self::PointerMove {
            x,
            y,
            movement_x,
            movement_y,
            pointer: PointerKind::Mouse,
            modifiers,
        }
    }

    pub fn touch_start(x: f64, y: f64) -> Self {
        Self::PointerDown {
            x,
            y,
            pointer: PointerKind::Touch,
            on_field: false,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn touch_move(x: f64, y: f64) -> Self {
        Self::PointerMove {
            x,
            y,
            movement_x: 0.0,
            movement_y: 0.0,
            pointer: PointerKind::Touch,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn key_down(key: &str, modifiers: Modifiers) -> Self {
        Self::KeyDown {
            key: Key::from(key),
            modifiers,
        }
    }

    pub fn key_up(key: &str, modifiers: Modifiers) -> Self {
        Self::KeyUp {
            key: Key::from(key),
            modifiers,
        }
    }

    /// Extract position if this is a pointer-down or pointer-move.
    pub fn position(&self) -> Option<(f64, f64)> {
        match self {
            Self::PointerDown { x, y, .. } | Self::PointerMove { x, y, .. } => Some((*x, *y)),
            _ => None,
        }
    }
}
