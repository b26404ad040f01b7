// Host-side tests for easing curves and tweens.

use framing_core::tween::{Easing, Tween};
use glam::Vec3;

const ALL: [Easing; 6] = [
    Easing::Linear,
    Easing::QuadIn,
    Easing::QuadOut,
    Easing::QuadInOut,
    Easing::CubicOut,
    Easing::CubicInOut,
];

#[test]
fn easing_curves_hit_endpoints() {
    for easing in ALL {
        assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
        assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
    }
}

#[test]
fn easing_curves_are_monotonic() {
    for easing in ALL {
        let mut prev = easing.apply(0.0);
        for i in 1..=100 {
            let v = easing.apply(i as f32 / 100.0);
            assert!(v >= prev - 1e-6, "{easing:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn easing_clamps_input() {
    for easing in ALL {
        assert_eq!(easing.apply(-1.0), easing.apply(0.0));
        assert_eq!(easing.apply(2.0), easing.apply(1.0));
    }
}

#[test]
fn in_out_curves_are_symmetric_at_midpoint() {
    assert!((Easing::QuadInOut.apply(0.5) - 0.5).abs() < 1e-6);
    assert!((Easing::CubicInOut.apply(0.5) - 0.5).abs() < 1e-6);
    assert!(Easing::QuadOut.apply(0.5) > 0.5);
    assert!(Easing::QuadIn.apply(0.5) < 0.5);
}

#[test]
fn tween_lands_exactly_on_target() {
    let mut tween = Tween::new(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0), 0.5, Easing::QuadInOut);
    assert_eq!(tween.value(), Vec3::ZERO);
    tween.advance(0.25);
    assert!(!tween.is_finished());
    assert!((tween.progress() - 0.5).abs() < 1e-6);
    let end = tween.advance(0.3);
    assert!(tween.is_finished());
    assert_eq!(end, Vec3::new(1.0, 2.0, 3.0));
    assert!((tween.overflow() - 0.05).abs() < 1e-5);
}

#[test]
fn zero_duration_tween_is_complete() {
    let mut tween = Tween::new(3.0_f32, 7.0, 0.0, Easing::Linear);
    assert!(tween.is_finished());
    assert_eq!(tween.advance(0.0), 7.0);
}

#[test]
fn negative_delta_does_not_rewind() {
    let mut tween = Tween::new(0.0_f32, 10.0, 1.0, Easing::Linear);
    tween.advance(0.5);
    tween.advance(-1.0);
    assert!((tween.value() - 5.0).abs() < 1e-5);
}
