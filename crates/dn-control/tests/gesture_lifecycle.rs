//! Integration tests: gesture resource handling through a control.

use std::cell::RefCell;
use std::rc::Rc;

use dn_control::{
    Callbacks, Control, ControlConfig, Headless, InputEvent, Modifiers, Platform, Viewport,
};
use pretty_assertions::assert_eq;

fn counting_control(value: f64, platform: Headless) -> (Control<Headless>, Rc<RefCell<Vec<&'static str>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let (a, b) = (log.clone(), log.clone());
    let callbacks = Callbacks::new()
        .on_drag_start(move || a.borrow_mut().push("start"))
        .on_drag_end(move || b.borrow_mut().push("end"));
    let control = Control::field(value, &ControlConfig::default(), callbacks, platform).unwrap();
    (control, log)
}

#[test]
fn capture_and_listeners_are_released_after_drag() {
    let (mut control, log) = counting_control(0.0, Headless::default());

    control.handle(&InputEvent::mouse_down(10.0, 10.0));
    assert!(control.platform().has_pointer_capture());
    assert!(control.platform().listeners().pointer);

    control.handle(&InputEvent::mouse_move(10.0, 10.0, 3.0, 0.0, Modifiers::NONE));
    assert!(control.platform().listeners().modifier_keys);

    control.handle(&InputEvent::PointerUp);
    assert!(!control.platform().has_pointer_capture());
    assert!(control.platform().listeners().is_empty());
    assert_eq!(*log.borrow(), vec!["start", "end"]);
}

#[test]
fn click_before_capture_is_granted_leaves_capture_off() {
    let (mut control, log) = counting_control(0.0, Headless::deferred());

    control.handle(&InputEvent::mouse_down(10.0, 10.0));
    control.handle(&InputEvent::PointerUp);
    control.platform_mut().grant_capture();

    assert!(!control.platform().has_pointer_capture());
    assert!(control.platform().listeners().is_empty());
    assert_eq!(control.platform().focus_requests(), 1);
    assert_eq!(*log.borrow(), Vec::<&str>::new());
}

#[test]
fn drag_release_exits_capture_once() {
    let (mut control, _) = counting_control(0.0, Headless::default());

    control.handle(&InputEvent::mouse_down(10.0, 10.0));
    control.handle(&InputEvent::mouse_move(10.0, 10.0, 3.0, 0.0, Modifiers::NONE));
    control.handle(&InputEvent::PointerUp);

    assert_eq!(control.platform().capture_releases(), 1);
}

#[test]
fn focus_loss_ends_drag_and_releases_capture() {
    let (mut control, log) = counting_control(0.0, Headless::default());

    control.handle(&InputEvent::mouse_down(10.0, 10.0));
    control.handle(&InputEvent::mouse_move(10.0, 10.0, 3.0, 0.0, Modifiers::NONE));
    control.handle(&InputEvent::FocusLost);

    assert!(!control.is_armed());
    assert!(!control.platform().has_pointer_capture());
    assert_eq!(*log.borrow(), vec!["start", "end"]);
    assert_eq!(control.platform().focus_requests(), 0);
}

#[test]
fn second_press_during_gesture_is_ignored() {
    let (mut control, log) = counting_control(0.0, Headless::default());

    control.handle(&InputEvent::mouse_down(10.0, 10.0));
    control.handle(&InputEvent::mouse_move(10.0, 10.0, 3.0, 0.0, Modifiers::NONE));
    control.handle(&InputEvent::mouse_down(500.0, 10.0));
    control.handle(&InputEvent::PointerUp);

    assert_eq!(control.platform().capture_requests(), 1);
    assert_eq!(*log.borrow(), vec!["start", "end"]);
}

#[test]
fn stray_release_still_exits_capture() {
    let (mut control, log) = counting_control(0.0, Headless::default());
    control.platform_mut().request_pointer_capture();

    control.handle(&InputEvent::PointerUp);
    assert!(!control.platform().has_pointer_capture());
    assert!(log.borrow().is_empty());
}

#[test]
fn overlay_wraps_around_viewport() {
    let platform = Headless::new(Viewport {
        width: 200.0,
        height: 100.0,
    });
    let (mut control, _) = counting_control(0.0, platform);

    control.handle(&InputEvent::mouse_down(190.0, 5.0));
    assert_eq!(control.cursor_overlay(), Some((190.0, 5.0)));

    control.handle(&InputEvent::mouse_move(190.0, 5.0, 30.0, -10.0, Modifiers::NONE));
    assert_eq!(control.cursor_overlay(), Some((20.0, 95.0)));

    control.handle(&InputEvent::PointerUp);
    assert_eq!(control.cursor_overlay(), None);
}

#[test]
fn no_overlay_without_capture() {
    let (mut control, _) = counting_control(0.0, Headless::without_capture());
    control.handle(&InputEvent::mouse_down(50.0, 50.0));
    control.handle(&InputEvent::mouse_move(60.0, 50.0, 10.0, 0.0, Modifiers::NONE));
    assert!(control.is_dragging());
    assert_eq!(control.cursor_overlay(), None);
}

#[test]
fn display_precision_follows_drag_modifier() {
    let config = ControlConfig::from_json(
        r#"{ "modifierKeys": { "altKey": { "multiplier": 0.01, "sensitivity": 1 } } }"#,
    )
    .unwrap();
    let proposed = Rc::new(RefCell::new(Vec::new()));
    let sink = proposed.clone();
    let mut control = Control::field(
        1.0,
        &config,
        Callbacks::new().on_change(move |v| sink.borrow_mut().push(v)),
        Headless::default(),
    )
    .unwrap();

    let alt = Modifiers {
        alt: true,
        ..Modifiers::NONE
    };
    control.handle(&InputEvent::mouse_down(0.0, 0.0));
    control.handle(&InputEvent::mouse_move(0.0, 0.0, 50.0, 0.0, alt));
    let last = *proposed.borrow().last().unwrap();
    control.set_value(last);

    assert_eq!(last, 1.5);
    assert_eq!(control.text(), "1.50");
}
