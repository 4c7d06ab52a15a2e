//! Platform capabilities the engine drives but does not own.
//!
//! A host (browser bridge, native toolkit, test harness) implements
//! [`Platform`] to supply pointer capture, document-level listener
//! management, viewport size, and field focus. Pointer capture is optional:
//! a platform that cannot capture returns `false` from
//! [`Platform::request_pointer_capture`] and the tracker falls back to
//! absolute-position dragging.

use serde::Serialize;

/// Viewport size in CSS pixels, used to wrap the overlay cursor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Document-level listener groups a gesture subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listeners {
    /// Pointer move / up / cancel.
    pub pointer: bool,
    /// Modifier key down / up.
    pub modifier_keys: bool,
}

impl Listeners {
    pub const NONE: Self = Self {
        pointer: false,
        modifier_keys: false,
    };
    pub const POINTER: Self = Self {
        pointer: true,
        modifier_keys: false,
    };
    pub const MODIFIER_KEYS: Self = Self {
        pointer: false,
        modifier_keys: true,
    };

    pub fn union(self, other: Self) -> Self {
        Self {
            pointer: self.pointer || other.pointer,
            modifier_keys: self.modifier_keys || other.modifier_keys,
        }
    }

    pub fn without(self, other: Self) -> Self {
        Self {
            pointer: self.pointer && !other.pointer,
            modifier_keys: self.modifier_keys && !other.modifier_keys,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.pointer && !self.modifier_keys
    }
}

/// Host capabilities used by a control.
pub trait Platform {
    /// Ask for exclusive relative-motion input on the handle.
    ///
    /// Returns `false` when the capability is missing; that is not an error.
    fn request_pointer_capture(&mut self) -> bool;

    /// Give up pointer capture. Must be safe to call when not captured.
    ///
    /// A request still waiting to be granted is cancelled too: if the grant
    /// arrives later, the platform exits capture immediately.
    fn release_pointer_capture(&mut self);

    /// Whether capture is currently in effect.
    fn has_pointer_capture(&self) -> bool;

    fn viewport(&self) -> Viewport;

    /// Start delivering the given document-level events to the control.
    fn attach_listeners(&mut self, listeners: Listeners);

    /// Stop delivering the given document-level events.
    fn detach_listeners(&mut self, listeners: Listeners);

    /// Move keyboard focus to the editable field.
    fn focus_field(&mut self);
}

// ─── Headless ────────────────────────────────────────────────────────────

/// In-memory platform for tests, replays, and non-visual hosts.
///
/// Capture is granted synchronously when `capture_supported` is set, or
/// later through [`Headless::grant_capture`] when `grant_deferred` is set
/// (the way browsers grant pointer lock).
#[derive(Debug, Clone)]
pub struct Headless {
    pub viewport: Viewport,
    pub capture_supported: bool,
    pub grant_deferred: bool,
    captured: bool,
    pending: bool,
    exit_on_grant: bool,
    listeners: Listeners,
    capture_requests: usize,
    capture_releases: usize,
    focus_requests: usize,
}

impl Default for Headless {
    fn default() -> Self {
        Self::new(Viewport {
            width: 1280.0,
            height: 720.0,
        })
    }
}

impl Headless {
    /// A platform that supports pointer capture.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            capture_supported: true,
            grant_deferred: false,
            captured: false,
            pending: false,
            exit_on_grant: false,
            listeners: Listeners::NONE,
            capture_requests: 0,
            capture_releases: 0,
            focus_requests: 0,
        }
    }

    /// A platform without pointer capture.
    pub fn without_capture() -> Self {
        Self {
            capture_supported: false,
            ..Self::default()
        }
    }

    /// A platform that grants capture only when [`Headless::grant_capture`] runs.
    pub fn deferred() -> Self {
        Self {
            grant_deferred: true,
            ..Self::default()
        }
    }

    /// Deliver a pending capture grant.
    pub fn grant_capture(&mut self) {
        if self.pending {
            self.pending = false;
            self.captured = !self.exit_on_grant;
            self.exit_on_grant = false;
        }
    }

    pub fn listeners(&self) -> Listeners {
        self.listeners
    }

    pub fn capture_requests(&self) -> usize {
        self.capture_requests
    }

    pub fn capture_releases(&self) -> usize {
        self.capture_releases
    }

    pub fn focus_requests(&self) -> usize {
        self.focus_requests
    }

    /// Simulate the platform revoking capture on its own (e.g. Escape).
    pub fn revoke_capture(&mut self) {
        self.captured = false;
    }
}

impl Platform for Headless {
    fn request_pointer_capture(&mut self) -> bool {
        self.capture_requests += 1;
        if !self.capture_supported {
            return false;
        }
        if self.grant_deferred {
            self.pending = true;
            self.exit_on_grant = false;
        } else {
            self.captured = true;
        }
        true
    }

    fn release_pointer_capture(&mut self) {
        self.capture_releases += 1;
        self.captured = false;
        if self.pending {
            self.exit_on_grant = true;
        }
    }

    fn has_pointer_capture(&self) -> bool {
        self.captured
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn attach_listeners(&mut self, listeners: Listeners) {
        self.listeners = self.listeners.union(listeners);
    }

    fn detach_listeners(&mut self, listeners: Listeners) {
        self.listeners = self.listeners.without(listeners);
    }

    fn focus_field(&mut self) {
        self.focus_requests += 1;
    }
}
