use crate::app::{FlashlightApp, Mode, PanelUpdate};
use crate::settings::Settings;
use crate::slider::geometry::{map_pointer, POINTER_FALLBACK_LENGTH};
use crate::slider::{FillExtent, Orientation, SliderConfig};

fn slider(value: f32, min: f32, max: f32, orientation: Orientation, length: f32) -> crate::slider::Slider {
    let mut slider = SliderConfig::new(value, min, max)
        .orientation(orientation)
        .build_detached()
        .unwrap();
    slider.set_track_length(length);
    slider
}

#[test]
fn test_horizontal_midpoint() {
    let mut s = slider(0.0, 0.0, 100.0, Orientation::Horizontal, 200.0);
    assert_eq!(s.drag_to(100.0), 50.0);
}

#[test]
fn test_vertical_quarter_from_top() {
    let mut s = slider(0.0, 0.0, 100.0, Orientation::Vertical, 200.0);
    assert_eq!(s.drag_to(50.0), 75.0);
}

#[test]
fn test_degenerate_brightness_stays_full() {
    let mut s = slider(1.0, 1.0, 1.0, Orientation::Vertical, 500.0);
    for p in [-10.0, 0.0, 123.0, 500.0, 9999.0] {
        assert_eq!(s.drag_to(p), 1.0);
    }
    assert_eq!(s.fill().length, 0.0);
}

#[test]
fn test_vertical_size_range_endpoints() {
    let mut s = slider(300.0, 50.0, 1000.0, Orientation::Vertical, 400.0);
    assert_eq!(s.drag_to(0.0), 1000.0);
    assert_eq!(s.drag_to(400.0), 50.0);
}

#[test]
fn test_values_stay_in_bounds_for_any_pointer() {
    let cases = [
        (0.0, 100.0, 200.0),
        (50.0, 900.0, 500.0),
        (0.1, 1.0, 37.5),
        (-20.0, 20.0, 1.0),
    ];
    let mut p = -300.0;
    while p < 1500.0 {
        for (min, max, length) in cases {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                let v = map_pointer(p, length, min, max, orientation);
                assert!(v >= min && v <= max, "{} out of [{}, {}] at p={}", v, min, max, p);
            }
        }
        p += 7.3;
    }
}

#[test]
fn test_full_f32_range_stays_in_bounds() {
    let (min, max) = (-f32::MAX, f32::MAX);
    for p in [-50.0, 0.0, 100.0, 200.0, 900.0] {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let v = map_pointer(p, 200.0, min, max, orientation);
            assert!(!v.is_nan() && v >= min && v <= max, "{} at p={}", v, p);
        }
    }
    assert_eq!(map_pointer(100.0, 200.0, min, max, Orientation::Horizontal), 0.0);
}

#[test]
fn test_range_wider_than_f32_is_rejected() {
    let err = SliderConfig::new(0.0, -f32::MAX, f32::MAX)
        .build_detached()
        .unwrap_err();
    assert_eq!(err.error_code(), "RANGE_TOO_WIDE");

    let mut settings = Settings::default();
    settings.size_slider.min = -f32::MAX;
    settings.size_slider.max = f32::MAX;
    assert_eq!(settings.validate().unwrap_err().error_code(), "RANGE_TOO_WIDE");
}

#[test]
fn test_resize_never_changes_value() {
    let mut s = slider(300.0, 50.0, 900.0, Orientation::Vertical, 500.0);
    s.drag_to(123.0);
    let value = s.value();
    let label = s.label().to_string();

    for length in [480.0, 200.0, 0.0, 5.0, 1200.0, f32::NAN] {
        s.set_track_length(length);
        assert_eq!(s.value(), value);
        assert_eq!(s.label(), label);
    }
}

#[test]
fn test_zero_track_uses_fallback_and_stays_in_range() {
    let mut s = slider(0.5, 0.0, 1.0, Orientation::Horizontal, 0.0);
    assert_eq!(s.track_length(), POINTER_FALLBACK_LENGTH);
    let v = s.drag_to(150.0);
    assert!((0.0..=1.0).contains(&v));
    assert_eq!(v, 0.5);
}

#[test]
fn test_fill_is_independent_of_how_value_was_set() {
    let mut dragged = slider(300.0, 50.0, 900.0, Orientation::Vertical, 500.0);
    dragged.tap(0.0);
    dragged.reset();

    let fresh = slider(300.0, 50.0, 900.0, Orientation::Vertical, 500.0);
    assert_eq!(dragged.fill(), fresh.fill());

    let recomputed = FillExtent::compute(fresh.value(), 50.0, 900.0, 500.0, Orientation::Vertical);
    assert_eq!(fresh.fill(), recomputed);
}

#[test]
fn test_slider_changes_reach_panel_state_in_order() {
    let mut app = FlashlightApp::from_settings(Settings::default()).unwrap();
    assert_eq!(app.state.diameter(), 300.0);
    assert_eq!(app.state.brightness(), 1.0);

    app.size_slider.set_track_length(500.0);
    app.brightness_slider.set_track_length(500.0);

    app.size_slider.drag_to(500.0);
    app.size_slider.drag_to(250.0);
    app.brightness_slider.tap(500.0);

    let redraw = app.process_panel_updates();
    assert!(redraw.circle);
    assert!(!redraw.overlay);
    assert_eq!(app.state.diameter(), 475.0);
    assert!((app.state.brightness() - 0.1).abs() < 1e-6);
}

#[test]
fn test_mode_toggle_goes_through_channel() {
    let mut app = FlashlightApp::from_settings(Settings::default()).unwrap();
    app.toggle_mode();
    assert_eq!(app.state.mode(), Mode::Control);

    let redraw = app.process_panel_updates();
    assert!(redraw.overlay);
    assert_eq!(app.state.mode(), Mode::Flash);

    app.update_tx.send(PanelUpdate::ToggleMode).unwrap();
    app.process_panel_updates();
    assert_eq!(app.state.mode(), Mode::Control);
}

#[test]
fn test_invalid_settings_are_rejected_up_front() {
    let mut settings = Settings::default();
    settings.size_slider.min = 1000.0;
    let err = FlashlightApp::from_settings(settings).err().unwrap();
    assert_eq!(err.error_code(), "INVALID_BOUNDS");
    assert!(err.user_message().contains("Swap the slider's min and max"));
}
