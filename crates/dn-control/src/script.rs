//! Scripted event replay against a headless control.
//!
//! A script is a JSON document describing a control and an event stream:
//!
//! ```json
//! {
//!   "handle": "field",
//!   "value": 42,
//!   "echo": true,
//!   "config": { "min": 0, "max": 100 },
//!   "events": [
//!     { "type": "pointerDown", "x": 0, "y": 0 },
//!     { "type": "pointerMove", "x": 0, "y": 0, "movementX": 10 },
//!     { "type": "pointerUp" }
//!   ]
//! }
//! ```
//!
//! With `echo` set, every proposed value is pushed straight back into the
//! control, the way a host that stores the value in its own state would.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::{Callbacks, ControlConfig, Variant};
use crate::control::Control;
use crate::input::InputEvent;
use crate::platform::{Headless, Viewport};

/// Which element is the drag handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Handle {
    #[default]
    Field,
    Label,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Script {
    #[serde(default)]
    pub handle: Handle,
    pub value: f64,
    #[serde(default)]
    pub echo: bool,
    /// Whether the headless platform grants pointer capture.
    #[serde(default = "default_true")]
    pub pointer_capture: bool,
    #[serde(default)]
    pub config: ControlConfig,
    pub events: Vec<InputEvent>,
}

fn default_true() -> bool {
    true
}

/// Everything a control reported to its host, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Reported {
    Change(f64),
    DragStart,
    DragEnd,
    FocusField,
}

/// Final state after a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Replay {
    pub reported: Vec<Reported>,
    pub value: f64,
    pub text: String,
}

impl Script {
    /// # Errors
    /// Returns a message for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid script: {e}"))
    }

    /// Feed every event through a fresh headless control.
    ///
    /// # Errors
    /// Returns a message if the script's config is invalid.
    pub fn run(&self) -> Result<Replay, String> {
        self.config.validate()?;

        let reported = Rc::new(RefCell::new(Vec::new()));
        let (on_change, on_start, on_end) = (reported.clone(), reported.clone(), reported.clone());
        let callbacks = Callbacks::new()
            .on_change(move |v| on_change.borrow_mut().push(Reported::Change(v)))
            .on_drag_start(move || on_start.borrow_mut().push(Reported::DragStart))
            .on_drag_end(move || on_end.borrow_mut().push(Reported::DragEnd));

        let mut platform = Headless::new(Viewport {
            width: 1280.0,
            height: 720.0,
        });
        platform.capture_supported = self.pointer_capture;

        let variant = match self.handle {
            Handle::Field => Variant::Field,
            Handle::Label => Variant::Label { with_field: true },
        };
        let mut control = Control::new(variant, self.value, &self.config, callbacks, platform)?;

        for event in &self.events {
            let before = reported.borrow().len();
            let focus_before = control.platform().focus_requests();

            control.handle(event);

            if control.platform().focus_requests() > focus_before {
                reported.borrow_mut().push(Reported::FocusField);
            }
            if self.echo {
                let last_change = reported.borrow()[before..]
                    .iter()
                    .rev()
                    .find_map(|r| match r {
                        Reported::Change(v) => Some(*v),
                        _ => None,
                    });
                if let Some(value) = last_change {
                    control.set_value(value);
                }
            }
        }

        let reported = reported.borrow().clone();
        log::debug!("script: replayed {} events, {} reports", self.events.len(), reported.len());
        Ok(Replay {
            reported,
            value: control.value(),
            text: control.text().to_string(),
        })
    }
}
