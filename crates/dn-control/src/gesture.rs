//! Drag gesture tracker.
//!
//! Turns a pointer-down → move… → up stream into a signed movement scalar.
//!
//! ```text
//! Idle ──down──▶ Armed ──move (movement ≠ 0)──▶ Dragging
//!   ▲              │                               │
//!   └──── up ──────┴────────── up / cancel ────────┘
//! ```
//!
//! ## Movement sources
//!
//! | Gesture                   | Movement                           | Range     |
//! |---------------------------|------------------------------------|-----------|
//! | Mouse, capture granted    | running sum of `movement_x`        | unbounded |
//! | Mouse, capture off/denied | `x - start_x`                      | screen    |
//! | Touch                     | `x - start_x`                      | screen    |
//!
//! The source is chosen once, when the gesture arms.

use dn_core::Modifiers;
use smallvec::{SmallVec, smallvec};

use crate::cursor::CursorOverlay;
use crate::input::PointerKind;
use crate::platform::{Listeners, Platform};

/// Notifications produced by the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// First non-zero movement of a gesture. Fires once.
    DragStart,
    /// Movement was (re)computed; map it to a value from `start_value`.
    Movement {
        start_value: f64,
        movement: f64,
        modifiers: Modifiers,
    },
    /// Gesture that reached `Dragging` ended. Fires once.
    DragEnd,
    /// Gesture ended without ever moving: treat as a click.
    Click,
}

pub type GestureEvents = SmallVec<[GestureEvent; 2]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Armed,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tracking {
    /// Accumulate relative deltas (pointer captured).
    Relative,
    /// Difference from the start position.
    Absolute,
}

/// State of one pointer interaction. Dropped when the gesture ends.
#[derive(Debug, Clone)]
struct Gesture {
    start_value: f64,
    start_x: f64,
    movement: f64,
    tracking: Tracking,
    dragging: bool,
    /// Listener groups this gesture holds; all are released at the end.
    listeners: Listeners,
}

#[derive(Debug, Clone)]
pub struct GestureTracker {
    capture_enabled: bool,
    gesture: Option<Gesture>,
    overlay: CursorOverlay,
}

impl GestureTracker {
    pub fn new(capture_enabled: bool) -> Self {
        Self {
            capture_enabled,
            gesture: None,
            overlay: CursorOverlay::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        match &self.gesture {
            None => Phase::Idle,
            Some(g) if g.dragging => Phase::Dragging,
            Some(_) => Phase::Armed,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.phase() == Phase::Dragging
    }

    /// Accumulated movement of the active gesture.
    pub fn movement(&self) -> Option<f64> {
        self.gesture.as_ref().map(|g| g.movement)
    }

    /// Overlay cursor position while a captured gesture is active.
    pub fn overlay(&self) -> Option<(f64, f64)> {
        self.overlay.position()
    }

    /// Arm a gesture. Ignored if one is already active.
    pub fn pointer_down(
        &mut self,
        platform: &mut dyn Platform,
        value: f64,
        x: f64,
        y: f64,
        pointer: PointerKind,
    ) {
        if self.gesture.is_some() {
            log::debug!("gesture: pointer-down ignored, gesture already active");
            return;
        }

        let tracking = if self.capture_enabled
            && pointer == PointerKind::Mouse
            && platform.request_pointer_capture()
        {
            Tracking::Relative
        } else {
            Tracking::Absolute
        };

        platform.attach_listeners(Listeners::POINTER);
        if tracking == Tracking::Relative {
            self.overlay.show(x, y);
        }

        log::debug!("gesture: armed at ({x}, {y}) value={value} tracking={tracking:?}");
        self.gesture = Some(Gesture {
            start_value: value,
            start_x: x,
            movement: 0.0,
            tracking,
            dragging: false,
            listeners: Listeners::POINTER,
        });
    }

    /// Update movement from a pointer move.
    pub fn pointer_move(
        &mut self,
        platform: &mut dyn Platform,
        x: f64,
        movement_x: f64,
        movement_y: f64,
        pointer: PointerKind,
        modifiers: Modifiers,
    ) -> GestureEvents {
        let Some(gesture) = self.gesture.as_mut() else {
            return SmallVec::new();
        };

        let relative = gesture.tracking == Tracking::Relative && pointer == PointerKind::Mouse;
        if relative && platform.has_pointer_capture() {
            self.overlay
                .advance(movement_x, movement_y, platform.viewport());
        }

        let movement = if relative {
            gesture.movement + movement_x
        } else {
            x - gesture.start_x
        };

        let mut events = GestureEvents::new();
        if !gesture.dragging && movement != 0.0 {
            gesture.dragging = true;
            platform.attach_listeners(Listeners::MODIFIER_KEYS);
            gesture.listeners = gesture.listeners.union(Listeners::MODIFIER_KEYS);
            log::debug!("gesture: drag started");
            events.push(GestureEvent::DragStart);
        }
        gesture.movement = movement;

        events.push(GestureEvent::Movement {
            start_value: gesture.start_value,
            movement,
            modifiers,
        });
        events
    }

    /// Re-evaluate after a modifier key went down or up mid-drag.
    ///
    /// Uses the already-accumulated movement; nothing happens unless dragging.
    pub fn modifiers_changed(&mut self, modifiers: Modifiers) -> GestureEvents {
        match &self.gesture {
            Some(g) if g.dragging => smallvec![GestureEvent::Movement {
                start_value: g.start_value,
                movement: g.movement,
                modifiers,
            }],
            _ => SmallVec::new(),
        }
    }

    /// End the gesture on pointer-up.
    pub fn pointer_up(&mut self, platform: &mut dyn Platform) -> GestureEvents {
        self.finish(platform, true)
    }

    /// End the gesture on cancel or focus loss. Never reports a click.
    pub fn cancel(&mut self, platform: &mut dyn Platform) -> GestureEvents {
        self.finish(platform, false)
    }

    fn finish(&mut self, platform: &mut dyn Platform, click_on_idle: bool) -> GestureEvents {
        self.overlay.hide();
        let gesture = self.gesture.take();

        // Release even without a gesture: the platform may have granted
        // capture after we already gave up on it. A relative gesture releases
        // unconditionally so a still-pending grant gets cancelled.
        let requested = gesture
            .as_ref()
            .is_some_and(|g| g.tracking == Tracking::Relative);
        if requested || platform.has_pointer_capture() {
            platform.release_pointer_capture();
        }

        let Some(gesture) = gesture else {
            return SmallVec::new();
        };
        platform.detach_listeners(gesture.listeners);

        if gesture.dragging {
            log::debug!("gesture: drag ended, movement={}", gesture.movement);
            smallvec![GestureEvent::DragEnd]
        } else if click_on_idle {
            log::debug!("gesture: released without movement, treating as click");
            smallvec![GestureEvent::Click]
        } else {
            SmallVec::new()
        }
    }
}
