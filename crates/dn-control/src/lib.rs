//! Drag Number interaction engine.
//!
//! Turns pointer, keyboard, and text events into proposed values for a
//! drag-to-change number control. Host integration goes through two seams:
//! [`Platform`] (pointer capture, listeners, focus) and [`Callbacks`]
//! (`on_change`, `on_drag_start`, `on_drag_end`).
//!
//! ```
//! use dn_control::{Callbacks, Control, ControlConfig, Headless, InputEvent, Modifiers};
//!
//! let mut control = Control::field(
//!     42.0,
//!     &ControlConfig::default(),
//!     Callbacks::new().on_change(|v| assert_eq!(v, 52.0)),
//!     Headless::default(),
//! )
//! .unwrap();
//!
//! control.handle(&InputEvent::mouse_down(0.0, 0.0));
//! control.handle(&InputEvent::mouse_move(0.0, 0.0, 10.0, 0.0, Modifiers::NONE));
//! control.handle(&InputEvent::PointerUp);
//! ```

pub mod config;
pub mod control;
pub mod cursor;
pub mod gesture;
pub mod input;
pub mod keyboard;
pub mod platform;
pub mod script;
pub mod text;

pub use config::{Callbacks, ControlConfig, Settings, Variant};
pub use control::{Control, Outcome};
pub use cursor::CursorOverlay;
pub use gesture::{GestureEvent, GestureTracker, Phase};
pub use input::{InputEvent, Key, Modifiers, PointerKind};
pub use keyboard::{KeyStep, StepKeys};
pub use platform::{Headless, Listeners, Platform, Viewport};
pub use script::{Handle, Replay, Reported, Script};
pub use text::TextBuffer;
