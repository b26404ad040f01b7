//! Safe-area geometry.
//!
//! Converts a screen aspect ratio into the normalized rectangle that must stay
//! visible, and projects that rectangle onto a world-space depth plane using
//! the camera's vertical field of view and aspect ratio.
//!
//! Normalized coordinates run from `0` at the left/top screen edge to `1` at
//! the right/bottom edge. World Y grows upward, so normalized Y is inverted
//! when projected.

use crate::camera::Camera;
use crate::constants::SAFE_AREA_ASPECT;
use glam::{Vec2, Vec3};

/// Axis-aligned rectangle in world units at a fixed depth plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn from_edges(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
            center_x: (left + right) * 0.5,
            center_y: (top + bottom) * 0.5,
            width: right - left,
            height: top - bottom,
        }
    }

    /// Whether the XY projection of `point` lies inside (edges inclusive).
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.bottom && point.y <= self.top
    }
}

/// Normalized safe rectangle plus its world-space projection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SafeAreaBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
    pub world_bounds: WorldBounds,
}

impl SafeAreaBounds {
    /// Whether a normalized screen point lies inside (edges inclusive).
    pub fn contains_normalized(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Camera projection parameters needed to size the frustum at a depth plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrustumParams {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub camera_z: f32,
}

impl FrustumParams {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            fov_degrees: camera.fov_degrees,
            aspect: camera.aspect,
            camera_z: camera.position.z,
        }
    }
}

#[inline]
pub fn is_portrait(screen_aspect: f32) -> bool {
    screen_aspect < 1.0
}

/// Visible frustum width and height at `distance` in front of the camera.
#[inline]
pub fn frustum_size(fov_degrees: f32, aspect: f32, distance: f32) -> Vec2 {
    let height = 2.0 * distance * (fov_degrees.to_radians() * 0.5).tan();
    Vec2::new(height * aspect, height)
}

/// Compute the safe area for `screen_aspect` and project it onto `depth_z`.
///
/// Zero distance between camera and depth plane yields a collapsed world
/// rectangle; callers are expected to keep the two apart.
pub fn compute_safe_area(screen_aspect: f32, frustum: FrustumParams, depth_z: f32) -> SafeAreaBounds {
    let (left, width) = if is_portrait(screen_aspect) {
        (0.0, 1.0)
    } else {
        let safe_width = SAFE_AREA_ASPECT / screen_aspect;
        ((1.0 - safe_width) * 0.5, safe_width)
    };
    let (top, height) = (0.0, 1.0);
    let right = left + width;
    let bottom = top + height;

    let distance = (frustum.camera_z - depth_z).abs();
    let size = frustum_size(frustum.fov_degrees, frustum.aspect, distance);
    let to_world_x = |n: f32| (n - 0.5) * size.x;
    let to_world_y = |n: f32| (0.5 - n) * size.y;

    SafeAreaBounds {
        left,
        right,
        top,
        bottom,
        width,
        height,
        world_bounds: WorldBounds::from_edges(
            to_world_x(left),
            to_world_x(right),
            to_world_y(top),
            to_world_y(bottom),
        ),
    }
}
