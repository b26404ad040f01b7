// Host-side tests for the live layout state and its listeners.

use framing_core::*;
use glam::Vec3;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn camera_for(width: f32, height: f32) -> SharedCamera {
    shared_camera(Camera::new(
        Vec3::new(0.0, 0.0, DEFAULT_CAMERA_Z),
        DEFAULT_FOV_DEGREES,
        width / height,
    ))
}

#[test]
fn no_layout_before_first_update() {
    let layout = LayoutState::new(camera_for(1920.0, 1080.0));
    assert!(layout.current_layout().is_none());
}

#[test]
fn landscape_has_two_decoration_strips_touching_safe_area() {
    let mut layout = LayoutState::new(camera_for(1920.0, 1080.0));
    let info = layout.update(1920.0, 1080.0);
    assert_eq!(info.mode, LayoutMode::Landscape);
    assert_eq!(info.decoration_areas.len(), 2);

    let left = info.decoration_areas[0];
    let right = info.decoration_areas[1];
    assert_eq!(left.side, DecorationSide::Left);
    assert_eq!(right.side, DecorationSide::Right);
    assert_eq!(left.left, 0.0);
    assert_eq!(left.right, info.safe_area.left);
    assert_eq!(right.left, info.safe_area.right);
    assert_eq!(right.right, 1.0);

    let wb = info.safe_area.world_bounds;
    assert_eq!(left.world_right, wb.left);
    assert!((left.world_left - (wb.left - wb.width)).abs() < 1e-5);
    assert_eq!(right.world_left, wb.right);
    assert!((right.world_right - (wb.right + wb.width)).abs() < 1e-5);
    assert_eq!(info.decoration(DecorationSide::Right), Some(&right));
}

#[test]
fn portrait_has_no_decoration() {
    let mut layout = LayoutState::new(camera_for(1080.0, 1920.0));
    let info = layout.update(1080.0, 1920.0);
    assert_eq!(info.mode, LayoutMode::Portrait);
    assert!(info.is_portrait());
    assert!(info.decoration_areas.is_empty());
    assert!(info.decoration(DecorationSide::Left).is_none());
}

#[test]
fn square_screen_counts_as_landscape() {
    let mut layout = LayoutState::new(camera_for(800.0, 800.0));
    let info = layout.update(800.0, 800.0);
    assert_eq!(info.mode, LayoutMode::Landscape);
    assert!((info.safe_area.width - 0.5625).abs() < 1e-6);
}

#[test]
fn update_replaces_current_layout_and_is_idempotent() {
    let mut layout = LayoutState::new(camera_for(1920.0, 1080.0));
    let first = layout.update(1920.0, 1080.0);
    let second = layout.update(1920.0, 1080.0);
    assert_eq!(first, second);
    assert_eq!(layout.current_layout(), Some(&second));

    let portrait = layout.update(600.0, 900.0);
    assert_eq!(layout.current_layout(), Some(&portrait));
    assert_eq!(layout.current_layout().map(|l| l.mode), Some(LayoutMode::Portrait));
}

#[test]
fn listeners_are_notified_on_every_update() {
    let mut layout = LayoutState::new(camera_for(1920.0, 1080.0));
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::new(RefCell::new(None));
    {
        let calls = calls.clone();
        let seen = seen.clone();
        layout.add_listener(move |info| {
            calls.set(calls.get() + 1);
            *seen.borrow_mut() = Some(info.mode);
        });
    }
    layout.update(1920.0, 1080.0);
    layout.update(1920.0, 1080.0);
    assert_eq!(calls.get(), 2, "identical updates are not de-duplicated");
    layout.update(720.0, 1280.0);
    assert_eq!(calls.get(), 3);
    assert_eq!(*seen.borrow(), Some(LayoutMode::Portrait));
}

#[test]
fn removed_listener_is_no_longer_called() {
    let mut layout = LayoutState::new(camera_for(1920.0, 1080.0));
    let a = Rc::new(Cell::new(0));
    let b = Rc::new(Cell::new(0));
    let id_a = {
        let a = a.clone();
        layout.add_listener(move |_| a.set(a.get() + 1))
    };
    {
        let b = b.clone();
        layout.add_listener(move |_| b.set(b.get() + 1));
    }
    assert_eq!(layout.listener_count(), 2);
    layout.update(1920.0, 1080.0);
    assert!(layout.remove_listener(id_a));
    assert!(!layout.remove_listener(id_a), "second removal is a no-op");
    layout.update(1920.0, 1080.0);
    assert_eq!(a.get(), 1);
    assert_eq!(b.get(), 2);
    assert_eq!(layout.listener_count(), 1);
}

#[test]
fn target_z_only_affects_later_updates() {
    let mut layout = LayoutState::new(camera_for(1920.0, 1080.0));
    assert_eq!(layout.target_z(), DEFAULT_TARGET_Z);
    let at_origin = layout.update(1920.0, 1080.0);
    layout.set_target_z(-12.0);
    assert_eq!(layout.current_layout(), Some(&at_origin));

    let deeper = layout.update(1920.0, 1080.0);
    // twice the distance from the camera, twice the world extent
    let ratio = deeper.safe_area.world_bounds.width / at_origin.safe_area.world_bounds.width;
    assert!((ratio - 2.0).abs() < 1e-4);
    assert_eq!(deeper.safe_area.left, at_origin.safe_area.left);
}
