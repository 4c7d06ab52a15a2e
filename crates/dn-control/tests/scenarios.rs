//! Integration tests: scripted end-to-end interactions.

use dn_control::{Reported, Script};
use pretty_assertions::assert_eq;

fn replay(json: &str) -> dn_control::Replay {
    Script::from_json(json)
        .expect("bad fixture")
        .run()
        .expect("replay failed")
}

#[test]
fn default_drag_moves_one_per_pixel() {
    let replay = replay(include_str!("fixtures/drag_default.json"));
    assert_eq!(
        replay.reported,
        vec![Reported::DragStart, Reported::Change(52.0), Reported::DragEnd]
    );
}

#[test]
fn shift_drag_snaps_to_multiplier() {
    let replay = replay(include_str!("fixtures/drag_shift.json"));
    assert_eq!(
        replay.reported,
        vec![Reported::DragStart, Reported::Change(140.0), Reported::DragEnd]
    );
}

#[test]
fn drag_is_clamped_to_bounds() {
    let replay = replay(include_str!("fixtures/drag_clamped.json"));
    assert_eq!(
        replay.reported,
        vec![
            Reported::DragStart,
            Reported::Change(100.0),
            Reported::Change(0.0),
            Reported::DragEnd
        ]
    );
}

#[test]
fn arrow_steps_use_each_modifier_multiplier() {
    // The host never echoes, so every step starts from 0.
    let replay = replay(include_str!("fixtures/arrow_precision.json"));
    assert_eq!(
        replay.reported,
        vec![
            Reported::Change(2.0),
            Reported::Change(-0.1),
            Reported::Change(0.01),
            Reported::Change(-0.001),
            Reported::Change(10.0),
        ]
    );
    assert_eq!(replay.value, 0.0);
}

#[test]
fn repeated_arrow_without_echo_proposes_same_value() {
    let replay = replay(include_str!("fixtures/arrow_repeat.json"));
    assert_eq!(
        replay.reported,
        vec![Reported::Change(2.0), Reported::Change(2.0)]
    );
    assert_eq!(replay.value, 0.0);
    assert_eq!(replay.text, "0");
}

#[test]
fn invalid_text_reverts_on_blur() {
    let replay = replay(include_str!("fixtures/text_invalid.json"));
    assert_eq!(replay.reported, vec![]);
    assert_eq!(replay.value, 42.0);
    assert_eq!(replay.text, "42");
}

#[test]
fn touch_drag_uses_absolute_position() {
    let replay = replay(include_str!("fixtures/touch_drag.json"));
    assert_eq!(
        replay.reported,
        vec![
            Reported::DragStart,
            Reported::Change(13.0),
            Reported::Change(5.0),
            Reported::DragEnd
        ]
    );
    assert_eq!(replay.text, "5");
}

#[test]
fn disabled_pointer_lock_falls_back_to_absolute() {
    let replay = replay(
        r#"{
            "value": 0,
            "config": { "disablePointerLock": true },
            "events": [
                { "type": "pointerDown", "x": 300, "y": 0 },
                { "type": "pointerMove", "x": 340, "y": 0, "movementX": 1 },
                { "type": "pointerUp" }
            ]
        }"#,
    );
    assert_eq!(
        replay.reported,
        vec![Reported::DragStart, Reported::Change(40.0), Reported::DragEnd]
    );
}

#[test]
fn click_without_movement_focuses_field() {
    let replay = replay(
        r#"{
            "handle": "label",
            "value": 7,
            "events": [
                { "type": "pointerDown", "x": 10, "y": 10 },
                { "type": "pointerUp" }
            ]
        }"#,
    );
    assert_eq!(replay.reported, vec![Reported::FocusField]);
}

#[test]
fn typed_number_is_clamped_and_committed() {
    let replay = replay(
        r#"{
            "value": 5,
            "echo": true,
            "config": { "max": 10 },
            "events": [
                { "type": "focus" },
                { "type": "textInput", "text": "1" },
                { "type": "textInput", "text": "12" },
                { "type": "blur" }
            ]
        }"#,
    );
    assert_eq!(
        replay.reported,
        vec![Reported::Change(1.0), Reported::Change(10.0)]
    );
    assert_eq!(replay.text, "10");
}

#[test]
fn invalid_config_fails_the_replay() {
    let script = Script::from_json(r#"{ "value": 0, "config": { "min": 5, "max": 1 }, "events": [] }"#)
        .unwrap();
    assert!(script.run().is_err());
}
