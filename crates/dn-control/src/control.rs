//! The control surface: routes input events through the tracker, the
//! keyboard handler and the text buffer, and reports to the host.
//!
//! The committed value belongs to the host. A control only *proposes*
//! values through `on_change`; it learns about the new value when the host
//! calls [`Control::set_value`]. Until then, arrow steps and new gestures
//! start from the last value the host pushed.

use dn_core::{Bounds, ModifierPolicy, Modifiers, map_value};

use crate::config::{Callbacks, ControlConfig, Settings, Variant};
use crate::gesture::{GestureEvent, GestureEvents, GestureTracker};
use crate::input::{InputEvent, Key, PointerKind};
use crate::keyboard::StepKeys;
use crate::platform::Platform;
use crate::text::TextBuffer;

/// What the host should do with the native event after handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Suppress the browser default (arrow caret moves, touch scrolling).
    pub prevent_default: bool,
}

impl Outcome {
    const PREVENT: Self = Self {
        prevent_default: true,
    };
}

pub struct Control<P: Platform> {
    variant: Variant,
    value: f64,
    bounds: Bounds,
    policy: ModifierPolicy,
    /// Multiplier from the most recent modifier resolution; sets display precision.
    multiplier: f64,
    text: TextBuffer,
    focused: bool,
    tracker: GestureTracker,
    callbacks: Callbacks,
    platform: P,
}

impl<P: Platform> Control<P> {
    /// # Errors
    /// Returns a message if `config` fails validation.
    pub fn new(
        variant: Variant,
        value: f64,
        config: &ControlConfig,
        callbacks: Callbacks,
        platform: P,
    ) -> Result<Self, String> {
        let settings = config.settings()?;
        Ok(Self::with_settings(variant, value, settings, callbacks, platform))
    }

    /// Build from already-validated settings.
    pub fn with_settings(
        variant: Variant,
        value: f64,
        settings: Settings,
        callbacks: Callbacks,
        platform: P,
    ) -> Self {
        // `noInput` only applies to the label variant.
        let variant = match variant {
            Variant::Label { with_field } => Variant::Label {
                with_field: with_field && !settings.no_input,
            },
            Variant::Field => Variant::Field,
        };
        let multiplier = settings.policy.resolve(Modifiers::NONE).multiplier;

        log::debug!(
            "control: new {variant:?} value={value} bounds={:?}",
            settings.bounds
        );
        Self {
            variant,
            value,
            bounds: settings.bounds,
            policy: settings.policy,
            multiplier,
            text: TextBuffer::new(value, multiplier),
            focused: false,
            tracker: GestureTracker::new(settings.pointer_capture),
            callbacks,
            platform,
        }
    }

    /// The field is the drag handle.
    ///
    /// # Errors
    /// See [`Control::new`].
    pub fn field(
        value: f64,
        config: &ControlConfig,
        callbacks: Callbacks,
        platform: P,
    ) -> Result<Self, String> {
        Self::new(Variant::Field, value, config, callbacks, platform)
    }

    /// A label around the field is the drag handle.
    ///
    /// # Errors
    /// See [`Control::new`].
    pub fn label(
        value: f64,
        config: &ControlConfig,
        callbacks: Callbacks,
        platform: P,
    ) -> Result<Self, String> {
        Self::new(
            Variant::Label { with_field: true },
            value,
            config,
            callbacks,
            platform,
        )
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Last committed value pushed by the host.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Text currently shown in the field.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn has_field(&self) -> bool {
        self.variant.has_field()
    }

    pub fn is_armed(&self) -> bool {
        self.tracker.is_armed()
    }

    /// The "dragging" style flag.
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// The field variant hides its caret while dragging.
    pub fn caret_hidden(&self) -> bool {
        self.variant == Variant::Field && self.is_dragging()
    }

    /// Where to draw the synthetic cursor, if anywhere.
    pub fn cursor_overlay(&self) -> Option<(f64, f64)> {
        self.tracker.overlay()
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    // ─── Host → control ──────────────────────────────────────────────────

    /// Push a new committed value from the host.
    ///
    /// The field is re-formatted only when the value actually changed, so
    /// re-rendering with the same value keeps partially typed text.
    pub fn set_value(&mut self, value: f64) {
        if value.to_bits() == self.value.to_bits() {
            return;
        }
        self.value = value;
        self.text.reset(value, self.multiplier);
    }

    /// Handle one input event.
    pub fn handle(&mut self, event: &InputEvent) -> Outcome {
        match event {
            InputEvent::PointerDown {
                x,
                y,
                pointer,
                on_field,
                ..
            } => {
                self.pointer_down(*x, *y, *pointer, *on_field);
                Outcome::default()
            }
            InputEvent::PointerMove {
                x,
                movement_x,
                movement_y,
                pointer,
                modifiers,
                ..
            } => {
                if !self.tracker.is_armed() {
                    return Outcome::default();
                }
                let events = self.tracker.pointer_move(
                    &mut self.platform,
                    *x,
                    *movement_x,
                    *movement_y,
                    *pointer,
                    *modifiers,
                );
                self.dispatch(events);
                // Keep touch drags from scrolling the page.
                if *pointer == PointerKind::Touch {
                    Outcome::PREVENT
                } else {
                    Outcome::default()
                }
            }
            InputEvent::PointerUp => {
                let events = self.tracker.pointer_up(&mut self.platform);
                self.dispatch(events);
                Outcome::default()
            }
            InputEvent::PointerCancel | InputEvent::FocusLost => {
                let events = self.tracker.cancel(&mut self.platform);
                self.dispatch(events);
                Outcome::default()
            }
            InputEvent::KeyDown { key, modifiers } => self.key_down(key, *modifiers),
            InputEvent::KeyUp { key, modifiers } => {
                if key.is_modifier() {
                    let events = self.tracker.modifiers_changed(*modifiers);
                    self.dispatch(events);
                }
                Outcome::default()
            }
            InputEvent::TextInput { text } => {
                self.text_input(text);
                Outcome::default()
            }
            InputEvent::Focus => {
                if self.has_field() {
                    self.focused = true;
                }
                Outcome::default()
            }
            InputEvent::Blur => {
                self.focused = false;
                if self.has_field() {
                    self.text.reset(self.value, self.multiplier);
                }
                Outcome::default()
            }
        }
    }

    // ─── Internals ───────────────────────────────────────────────────────

    fn pointer_down(&mut self, x: f64, y: f64, pointer: PointerKind, on_field: bool) {
        // Inside a label, pressing the field places the caret instead.
        if on_field && matches!(self.variant, Variant::Label { with_field: true }) {
            log::debug!("control: pointer-down on field inside label, not arming");
            return;
        }
        self.tracker
            .pointer_down(&mut self.platform, self.value, x, y, pointer);
    }

    fn key_down(&mut self, key: &Key, modifiers: Modifiers) -> Outcome {
        if key.is_modifier() {
            let events = self.tracker.modifiers_changed(modifiers);
            self.dispatch(events);
        }
        if !(self.focused && self.has_field()) {
            return Outcome::default();
        }

        match StepKeys::apply(key, self.value, modifiers, &self.policy, self.bounds) {
            Some(step) => {
                self.multiplier = step.multiplier;
                self.commit(step.value);
                Outcome::PREVENT
            }
            None => {
                // Holding a modifier in the field still sets display precision.
                self.multiplier = self.policy.resolve(modifiers).multiplier;
                Outcome::default()
            }
        }
    }

    fn text_input(&mut self, text: &str) {
        if !self.has_field() {
            return;
        }
        if let Some(parsed) = self.text.edit(text) {
            self.commit(self.bounds.clamp(parsed));
        }
    }

    fn dispatch(&mut self, events: GestureEvents) {
        for event in events {
            match event {
                GestureEvent::DragStart => self.callbacks.drag_start(),
                GestureEvent::Movement {
                    start_value,
                    movement,
                    modifiers,
                } => {
                    let pair = self.policy.resolve(modifiers);
                    self.multiplier = pair.multiplier;
                    let value = map_value(start_value, movement, pair, self.bounds);
                    self.commit(value);
                }
                GestureEvent::DragEnd => self.callbacks.drag_end(),
                GestureEvent::Click => {
                    if self.has_field() {
                        self.platform.focus_field();
                    }
                }
            }
        }
    }

    fn commit(&mut self, value: f64) {
        log::trace!("control: commit {value}");
        self.callbacks.change(value);
    }
}
