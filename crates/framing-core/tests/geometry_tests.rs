// Host-side tests for safe-area geometry.

use framing_core::*;

const EPS: f32 = 1e-4;

fn frustum_at(camera_z: f32, aspect: f32) -> FrustumParams {
    FrustumParams {
        fov_degrees: 60.0,
        aspect,
        camera_z,
    }
}

#[test]
fn portrait_covers_full_screen() {
    for aspect in [0.3_f32, 9.0 / 16.0, 0.75, 0.999] {
        let sa = compute_safe_area(aspect, frustum_at(12.0, aspect), 0.0);
        assert_eq!(sa.left, 0.0);
        assert_eq!(sa.right, 1.0);
        assert_eq!(sa.top, 0.0);
        assert_eq!(sa.bottom, 1.0);
        assert_eq!(sa.width, 1.0);
        assert_eq!(sa.height, 1.0);
    }
}

#[test]
fn landscape_is_horizontally_centered() {
    for aspect in [1.0_f32, 4.0 / 3.0, 16.0 / 9.0, 2.0, 21.0 / 9.0] {
        let sa = compute_safe_area(aspect, frustum_at(12.0, aspect), 0.0);
        assert!((sa.left + sa.right - 1.0).abs() < EPS, "not centered at aspect {aspect}");
        assert!((sa.width - (9.0 / 16.0) / aspect).abs() < EPS);
        assert!((sa.right - (sa.left + sa.width)).abs() < EPS);
        assert_eq!(sa.top, 0.0);
        assert_eq!(sa.bottom, 1.0);
    }
}

#[test]
fn widescreen_scenario_matches_expected_margins() {
    let aspect = 16.0 / 9.0;
    let sa = compute_safe_area(aspect, frustum_at(12.0, aspect), 0.0);
    assert!((sa.width - 0.316_406_25).abs() < 1e-6);
    assert!((sa.left - 0.3418).abs() < 1e-3);
    assert!((1.0 - sa.right - 0.3418).abs() < 1e-3);

    // Frustum at 12 units with 60 degrees: height = 24 * tan(30deg)
    let frustum_h = 24.0 * 30.0_f32.to_radians().tan();
    let frustum_w = frustum_h * aspect;
    let wb = sa.world_bounds;
    assert!((wb.top - frustum_h * 0.5).abs() < EPS);
    assert!((wb.bottom + frustum_h * 0.5).abs() < EPS);
    assert!((wb.height - frustum_h).abs() < EPS);
    assert!((wb.width - sa.width * frustum_w).abs() < EPS);
    assert!(wb.center_x.abs() < EPS);
    assert!(wb.center_y.abs() < EPS);
}

#[test]
fn world_y_is_inverted_relative_to_screen_y() {
    let sa = compute_safe_area(0.5, frustum_at(10.0, 0.5), 0.0);
    // normalized top (0) projects above normalized bottom (1)
    assert!(sa.world_bounds.top > sa.world_bounds.bottom);
    assert!(sa.world_bounds.left < sa.world_bounds.right);
}

#[test]
fn distance_uses_absolute_depth_difference() {
    let near = compute_safe_area(2.0, frustum_at(12.0, 2.0), 2.0);
    let behind = compute_safe_area(2.0, frustum_at(12.0, 2.0), 22.0);
    assert!((near.world_bounds.width - behind.world_bounds.width).abs() < EPS);
    assert!((near.world_bounds.height - behind.world_bounds.height).abs() < EPS);
}

#[test]
fn zero_distance_collapses_world_bounds() {
    let sa = compute_safe_area(16.0 / 9.0, frustum_at(5.0, 16.0 / 9.0), 5.0);
    assert_eq!(sa.world_bounds.width, 0.0);
    assert_eq!(sa.world_bounds.height, 0.0);
    assert!(sa.width > 0.0);
}

#[test]
fn frustum_size_scales_linearly_with_distance() {
    let a = frustum_size(60.0, 1.5, 4.0);
    let b = frustum_size(60.0, 1.5, 8.0);
    assert!((b.x - 2.0 * a.x).abs() < EPS);
    assert!((b.y - 2.0 * a.y).abs() < EPS);
    assert!((a.x - a.y * 1.5).abs() < EPS);
}

#[test]
fn frustum_params_follow_the_camera() {
    let camera = Camera::new(glam::Vec3::new(1.0, 2.0, 7.5), 45.0, 1.25);
    let params = FrustumParams::from_camera(&camera);
    assert_eq!(params.fov_degrees, 45.0);
    assert_eq!(params.aspect, 1.25);
    assert_eq!(params.camera_z, 7.5);
}

#[test]
fn bounds_containment_is_edge_inclusive() {
    let sa = compute_safe_area(2.0, frustum_at(12.0, 2.0), 0.0);
    assert!(sa.contains_normalized(sa.left, 0.0));
    assert!(sa.contains_normalized(sa.right, 1.0));
    assert!(!sa.contains_normalized(sa.left - 0.01, 0.5));
    let wb = sa.world_bounds;
    assert!(wb.contains(glam::Vec3::new(wb.left, wb.top, 3.0)));
    assert!(!wb.contains(glam::Vec3::new(wb.right + 0.01, 0.0, 0.0)));
}
