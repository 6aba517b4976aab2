//! Behavior of the component's explicit update functions.

mod common;

use click_counter::ui::app::App;
use click_counter::ui::control::Control;
use click_counter::ui::message::PLACEHOLDER;
use common::*;

#[test]
fn fresh_component_is_zero_and_empty() {
    let app = make_app();
    assert_eq!(app.clicks(), 0);
    assert_eq!(app.message(), "");
    assert_eq!(app.message_display(), PLACEHOLDER);
    assert!(!app.is_enabled(Control::Reset));
    assert!(!app.is_enabled(Control::Clear));
}

#[test]
fn n_increments_count_to_n() {
    for n in [1_u64, 2, 7, 100] {
        let mut app = make_app();
        for _ in 0..n {
            app.increment();
        }
        assert_eq!(app.clicks(), n);
    }
}

#[test]
fn reset_always_yields_zero() {
    for n in [0_u64, 1, 5] {
        let mut app = make_app();
        for _ in 0..n {
            app.increment();
        }
        app.reset();
        assert_eq!(app.clicks(), 0);
        assert!(!app.is_enabled(Control::Reset));
    }
}

#[test]
fn reset_enabled_iff_counter_nonzero() {
    let mut app = make_app();
    assert!(!app.can_reset());
    app.increment();
    assert!(app.can_reset());
    app.reset();
    assert!(!app.can_reset());
}

#[test]
fn set_message_round_trips_any_string() {
    let samples = ["", "hello", "  padded  ", "привет", "emoji 🦀", "(nothing entered yet)"];
    let mut app = make_app();
    for sample in samples {
        app.set_message(sample);
        assert_eq!(app.message(), sample);
    }
}

#[test]
fn clear_always_yields_empty_and_disables_clear() {
    let mut app = make_app();
    app.clear_message();
    assert_eq!(app.message(), "");
    app.set_message("something");
    assert!(app.can_clear());
    app.clear_message();
    assert_eq!(app.message(), "");
    assert!(!app.can_clear());
}

#[test]
fn counter_and_message_are_independent() {
    let mut app = make_app();
    app.increment();
    app.set_message("keep");
    app.reset();
    assert_eq!(app.message(), "keep");
    app.increment();
    app.clear_message();
    assert_eq!(app.clicks(), 1);
}

/// Click increment 3 times, then reset.
#[test]
fn scenario_increment_three_then_reset() {
    let mut app = make_app();
    for _ in 0..3 {
        assert!(app.activate(Control::Increment));
    }
    assert_eq!(app.view().counter_text, "3");
    assert!(app.view().reset_enabled);

    assert!(app.activate(Control::Reset));
    assert_eq!(app.view().counter_text, "0");
    assert!(!app.view().reset_enabled);
    assert!(!app.activate(Control::Reset));
}

/// Type "hello", then clear.
#[test]
fn scenario_type_hello_then_clear() {
    let mut app = make_app();
    app.focus_control(Control::MessageInput);
    type_text(&mut app, "hello");
    assert_eq!(app.view().message_display, "hello");

    assert!(app.activate(Control::Clear));
    let view = app.view();
    assert_eq!(view.message_display, "(nothing entered yet)");
    assert!(view.message_is_placeholder);
    assert!(!view.clear_enabled);
}

#[test]
fn remount_starts_fresh() {
    let mut app = make_app();
    app.increment();
    app.set_message("gone");
    app.unmount();
    app.mount();
    assert_eq!(app.clicks(), 0);
    assert_eq!(app.message(), "");
}

#[test]
fn unmounted_component_ignores_buttons() {
    let mut app = App::new();
    assert!(!app.activate(Control::Increment));
    assert_eq!(app.clicks(), 0);
}
