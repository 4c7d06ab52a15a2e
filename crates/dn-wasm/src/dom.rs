//! [`Platform`] on top of the DOM pointer-lock API.

use std::cell::Cell;
use std::rc::Rc;

use dn_control::{Listeners, Platform, Viewport};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, HtmlElement};

use crate::bridge::ListenerSet;

/// Browser platform for one control.
///
/// Document-level listeners are not attached here: the wanted set is
/// reported back to JS with every event, and the JS glue adds or removes
/// its `pointermove`/`pointerup`/`keydown`/`keyup` handlers to match.
///
/// Pointer lock is granted asynchronously. A release that arrives while a
/// request is still in flight leaves a one-shot `pointerlockchange` handler
/// that exits the lock as soon as it is granted.
pub struct DomPlatform {
    handle: HtmlElement,
    field: Option<HtmlElement>,
    listeners: Listeners,
    pending: bool,
    /// Bumped per request; a deferred exit only acts on its own request.
    generation: Rc<Cell<u32>>,
}

impl DomPlatform {
    pub fn new(handle: HtmlElement, field: Option<HtmlElement>) -> Self {
        Self {
            handle,
            field,
            listeners: Listeners::NONE,
            pending: false,
            generation: Rc::new(Cell::new(0)),
        }
    }

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    /// Exit pointer lock once the in-flight request is granted.
    fn exit_when_granted(&self, document: &web_sys::Document) {
        let expected = self.generation.get();
        let generation = Rc::clone(&self.generation);
        let target = document.clone();
        let on_change = Closure::once_into_js(move || {
            if generation.get() == expected && target.pointer_lock_element().is_some() {
                log::debug!("dom: late pointer lock grant, exiting");
                target.exit_pointer_lock();
            }
        });

        let options = AddEventListenerOptions::new();
        options.set_once(true);
        if let Err(e) = document.add_event_listener_with_callback_and_add_event_listener_options(
            "pointerlockchange",
            on_change.unchecked_ref(),
            &options,
        ) {
            log::warn!("dom: could not watch pointer lock grant: {e:?}");
        }
    }
}

impl Platform for DomPlatform {
    fn request_pointer_capture(&mut self) -> bool {
        // Safari on iOS and some embedded webviews lack pointer lock.
        let supported = js_sys::Reflect::has(&self.handle, &JsValue::from_str("requestPointerLock"))
            .unwrap_or(false);
        if supported {
            self.generation.set(self.generation.get().wrapping_add(1));
            self.pending = true;
            self.handle.request_pointer_lock();
        }
        log::debug!("dom: pointer lock requested, supported={supported}");
        supported
    }

    fn release_pointer_capture(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        let Some(document) = Self::document() else {
            return;
        };
        if document.pointer_lock_element().is_some() {
            document.exit_pointer_lock();
        } else if pending {
            self.exit_when_granted(&document);
        }
    }

    fn has_pointer_capture(&self) -> bool {
        Self::document().is_some_and(|d| d.pointer_lock_element().is_some())
    }

    fn viewport(&self) -> Viewport {
        let size = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        match web_sys::window() {
            Some(window) => Viewport {
                width: size(window.inner_width()),
                height: size(window.inner_height()),
            },
            None => Viewport {
                width: 0.0,
                height: 0.0,
            },
        }
    }

    fn attach_listeners(&mut self, listeners: Listeners) {
        self.listeners = self.listeners.union(listeners);
    }

    fn detach_listeners(&mut self, listeners: Listeners) {
        self.listeners = self.listeners.without(listeners);
    }

    fn focus_field(&mut self) {
        if let Some(field) = &self.field
            && let Err(e) = field.focus()
        {
            log::warn!("dom: focusing field failed: {e:?}");
        }
    }
}

impl ListenerSet for DomPlatform {
    fn listeners(&self) -> Listeners {
        self.listeners
    }
}
