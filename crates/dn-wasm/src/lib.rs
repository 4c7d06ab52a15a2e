//! WASM bridge for Drag Number — exposes the interaction engine to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The JS glue owns the DOM
//! listeners; every handler returns a JSON [`Report`](bridge::Report):
//!
//! ```json
//! { "preventDefault": false, "effects": [{ "type": "change", "value": 52 }],
//!   "text": "42", "dragging": true, "caretHidden": true,
//!   "listeners": { "pointer": true, "modifierKeys": true }, "cursor": { "x": 10, "y": 4 } }
//! ```

mod bridge;
mod dom;

use dn_control::{ControlConfig, InputEvent, Key, Modifiers, PointerKind, Variant};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use bridge::{Bridge, error_json};
use dom::DomPlatform;

fn modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    Modifiers {
        shift,
        ctrl,
        alt,
        meta,
    }
}

fn pointer_kind(touch: bool) -> PointerKind {
    if touch {
        PointerKind::Touch
    } else {
        PointerKind::Mouse
    }
}

/// One drag-number control bound to DOM elements.
#[wasm_bindgen]
pub struct DragNumberControl {
    bridge: Bridge<DomPlatform>,
}

#[wasm_bindgen]
impl DragNumberControl {
    /// `handle` receives pointer-down; `field` is the `<input>`, if any.
    /// With `label` set, `handle` is a label wrapping the field.
    ///
    /// Never throws: check [`DragNumberControl::status`] for config errors.
    #[wasm_bindgen(constructor)]
    pub fn new(
        handle: HtmlElement,
        field: Option<HtmlElement>,
        label: bool,
        value: f64,
        config_json: &str,
    ) -> Self {
        console_error_panic_hook_setup();

        let variant = if label {
            Variant::Label {
                with_field: field.is_some(),
            }
        } else {
            Variant::Field
        };
        Self {
            bridge: Bridge::new(variant, value, config_json, DomPlatform::new(handle, field)),
        }
    }

    /// `{"ok":true}` or `{"ok":false,"error":"..."}` for the constructor's config.
    pub fn status(&self) -> String {
        self.bridge.status_json()
    }

    /// Push the committed value from the host's state.
    pub fn set_value(&mut self, value: f64) -> String {
        self.bridge.set_value(value).to_json()
    }

    pub fn value(&self) -> f64 {
        self.bridge.control().value()
    }

    pub fn text(&self) -> String {
        self.bridge.control().text().to_string()
    }

    pub fn is_dragging(&self) -> bool {
        self.bridge.control().is_dragging()
    }

    pub fn caret_hidden(&self) -> bool {
        self.bridge.control().caret_hidden()
    }

    // ─── Pointer ─────────────────────────────────────────────────────────

    #[allow(clippy::too_many_arguments)]
    pub fn handle_pointer_down(
        &mut self,
        x: f64,
        y: f64,
        touch: bool,
        on_field: bool,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let event = InputEvent::PointerDown {
            x,
            y,
            pointer: pointer_kind(touch),
            on_field,
            modifiers: modifiers(shift, ctrl, alt, meta),
        };
        self.bridge.handle(&event).to_json()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn handle_pointer_move(
        &mut self,
        x: f64,
        y: f64,
        movement_x: f64,
        movement_y: f64,
        touch: bool,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let event = InputEvent::PointerMove {
            x,
            y,
            movement_x,
            movement_y,
            pointer: pointer_kind(touch),
            modifiers: modifiers(shift, ctrl, alt, meta),
        };
        self.bridge.handle(&event).to_json()
    }

    pub fn handle_pointer_up(&mut self) -> String {
        self.bridge.handle(&InputEvent::PointerUp).to_json()
    }

    pub fn handle_pointer_cancel(&mut self) -> String {
        self.bridge.handle(&InputEvent::PointerCancel).to_json()
    }

    /// Window `blur`: ends any gesture without a click.
    pub fn handle_focus_lost(&mut self) -> String {
        self.bridge.handle(&InputEvent::FocusLost).to_json()
    }

    // ─── Keyboard & field ────────────────────────────────────────────────

    pub fn handle_key_down(
        &mut self,
        key: &str,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let event = InputEvent::KeyDown {
            key: Key::from(key),
            modifiers: modifiers(shift, ctrl, alt, meta),
        };
        self.bridge.handle(&event).to_json()
    }

    pub fn handle_key_up(&mut self, key: &str, shift: bool, ctrl: bool, alt: bool, meta: bool) -> String {
        let event = InputEvent::KeyUp {
            key: Key::from(key),
            modifiers: modifiers(shift, ctrl, alt, meta),
        };
        self.bridge.handle(&event).to_json()
    }

    /// The field's `input` event.
    pub fn handle_text_input(&mut self, text: &str) -> String {
        let event = InputEvent::TextInput {
            text: text.to_string(),
        };
        self.bridge.handle(&event).to_json()
    }

    pub fn handle_focus(&mut self) -> String {
        self.bridge.handle(&InputEvent::Focus).to_json()
    }

    pub fn handle_blur(&mut self) -> String {
        self.bridge.handle(&InputEvent::Blur).to_json()
    }

    /// Any event in its JSON form, e.g. `{"type":"pointerUp"}`.
    pub fn handle_event_json(&mut self, json: &str) -> String {
        match serde_json::from_str::<InputEvent>(json) {
            Ok(event) => self.bridge.handle(&event).to_json(),
            Err(e) => error_json(&format!("invalid event: {e}")),
        }
    }
}

// ─── Panic hook ──────────────────────────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Drag Number WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Standalone validation (no control needed) ───────────────────────────

/// Validate a control config. Returns `{"ok":true}` or `{"ok":false,"error":"..."}`.
#[wasm_bindgen]
pub fn validate_config(json: &str) -> String {
    match ControlConfig::from_json(json) {
        Ok(_) => r#"{"ok":true}"#.to_string(),
        Err(e) => error_json(&e),
    }
}

/// Format a value at the precision implied by `multiplier`, as the field shows it.
#[wasm_bindgen]
pub fn format_value(value: f64, multiplier: f64) -> String {
    dn_core::format_value(value, multiplier)
}
