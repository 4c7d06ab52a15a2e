//! Platform-independent half of the JS bridge.
//!
//! Wraps a [`Control`], collects its callbacks into an effect list, and
//! serializes everything JS needs after an event into one [`Report`].

use std::cell::RefCell;
use std::rc::Rc;

use dn_control::{
    Callbacks, Control, ControlConfig, Headless, InputEvent, Listeners, Outcome, Platform,
    Settings, Variant,
};
use serde::Serialize;

/// Read back which document-level listener groups the platform wants.
pub trait ListenerSet {
    fn listeners(&self) -> Listeners;
}

impl ListenerSet for Headless {
    fn listeners(&self) -> Listeners {
        Headless::listeners(self)
    }
}

/// A callback the host should run, in the order they fired.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    Change { value: f64 },
    DragStart,
    DragEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
}

/// State snapshot returned to JS after every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub prevent_default: bool,
    pub effects: Vec<Effect>,
    pub text: String,
    pub dragging: bool,
    pub caret_hidden: bool,
    pub listeners: Listeners,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
}

impl Report {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| error_json(&e.to_string()))
    }
}

/// `{"ok":false,"error":"..."}` with the message escaped.
pub fn error_json(message: &str) -> String {
    serde_json::json!({ "ok": false, "error": message }).to_string()
}

pub struct Bridge<P: Platform + ListenerSet> {
    control: Control<P>,
    effects: Rc<RefCell<Vec<Effect>>>,
    config_error: Option<String>,
}

impl<P: Platform + ListenerSet> Bridge<P> {
    /// Build a control from a JSON config.
    ///
    /// An invalid config never fails construction: the error is kept for
    /// [`Bridge::status_json`] and the default config is used instead.
    pub fn new(variant: Variant, value: f64, config_json: &str, platform: P) -> Self {
        let (settings, config_error) =
            match ControlConfig::from_json(config_json).and_then(|c| c.settings()) {
                Ok(settings) => (settings, None),
                Err(e) => {
                    log::warn!("bridge: {e}; using defaults");
                    (Settings::default(), Some(e))
                }
            };

        let effects = Rc::new(RefCell::new(Vec::new()));
        let (on_change, on_start, on_end) = (effects.clone(), effects.clone(), effects.clone());
        let callbacks = Callbacks::new()
            .on_change(move |value| on_change.borrow_mut().push(Effect::Change { value }))
            .on_drag_start(move || on_start.borrow_mut().push(Effect::DragStart))
            .on_drag_end(move || on_end.borrow_mut().push(Effect::DragEnd));

        Self {
            control: Control::with_settings(variant, value, settings, callbacks, platform),
            effects,
            config_error,
        }
    }

    pub fn status_json(&self) -> String {
        match &self.config_error {
            None => r#"{"ok":true}"#.to_string(),
            Some(e) => error_json(e),
        }
    }

    pub fn control(&self) -> &Control<P> {
        &self.control
    }

    pub fn handle(&mut self, event: &InputEvent) -> Report {
        let outcome = self.control.handle(event);
        self.report(outcome)
    }

    pub fn set_value(&mut self, value: f64) -> Report {
        self.control.set_value(value);
        self.report(Outcome::default())
    }

    fn report(&mut self, outcome: Outcome) -> Report {
        Report {
            prevent_default: outcome.prevent_default,
            effects: std::mem::take(&mut *self.effects.borrow_mut()),
            text: self.control.text().to_string(),
            dragging: self.control.is_dragging(),
            caret_hidden: self.control.caret_hidden(),
            listeners: self.control.platform().listeners(),
            cursor: self.control.cursor_overlay().map(|(x, y)| Cursor { x, y }),
        }
    }
}
