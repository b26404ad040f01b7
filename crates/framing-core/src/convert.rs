//! Conversions between safe-area-relative, screen, camera and world space.
//!
//! Safe-area-relative coordinates run from `-1` at the left/bottom edge to
//! `+1` at the right/top edge, with `0` at the center of the safe area.

use crate::camera::SharedCamera;
use crate::constants::DEFAULT_TARGET_Z;
use crate::geometry::{compute_safe_area, frustum_size, FrustumParams, SafeAreaBounds};
use glam::{Vec2, Vec3};

/// Anything with a mutable world position, e.g. a scene-graph node.
pub trait Positionable {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
}

impl Positionable for Vec3 {
    fn position(&self) -> Vec3 {
        *self
    }

    fn set_position(&mut self, position: Vec3) {
        *self = position;
    }
}

pub struct CoordinateConverter {
    camera: SharedCamera,
    safe_area: SafeAreaBounds,
}

impl CoordinateConverter {
    /// Starts out treating the camera's own aspect as the screen aspect,
    /// projected at the default depth, until layout data arrives.
    pub fn new(camera: SharedCamera) -> Self {
        let safe_area = {
            let cam = camera.borrow();
            compute_safe_area(cam.aspect, FrustumParams::from_camera(&cam), DEFAULT_TARGET_Z)
        };
        Self { camera, safe_area }
    }

    pub fn update_safe_area(&mut self, safe_area: SafeAreaBounds) {
        self.safe_area = safe_area;
    }

    pub fn safe_area(&self) -> &SafeAreaBounds {
        &self.safe_area
    }

    /// World-anchored point inside the safe area at the given depth.
    pub fn safe_area_relative_to_world(&self, rel_x: f32, rel_y: f32, depth: f32) -> Vec3 {
        let wb = &self.safe_area.world_bounds;
        Vec3::new(
            wb.center_x + rel_x * wb.width * 0.5,
            wb.center_y + rel_y * wb.height * 0.5,
            depth,
        )
    }

    /// Point `distance` in front of the camera, offset within the safe area.
    ///
    /// Unlike [`safe_area_relative_to_world`](Self::safe_area_relative_to_world)
    /// this follows the camera's current position, orientation and fov.
    pub fn safe_area_relative_to_camera(&self, rel_x: f32, rel_y: f32, distance: f32) -> Vec3 {
        let cam = self.camera.borrow();
        let frustum = frustum_size(cam.fov_degrees, cam.aspect, distance);
        let half_w = self.safe_area.width * frustum.x * 0.5;
        let half_h = self.safe_area.height * frustum.y * 0.5;
        cam.position
            + cam.forward() * distance
            + cam.right() * (rel_x * half_w)
            + cam.up_axis() * (rel_y * half_h)
    }

    /// Map a pixel position to safe-area-relative coordinates.
    ///
    /// Returns `None` when the point falls outside the safe area. Screen Y
    /// grows downward, the result's Y grows upward.
    pub fn screen_to_safe_area_relative(
        &self,
        screen_x: f32,
        screen_y: f32,
        screen_width: f32,
        screen_height: f32,
    ) -> Option<Vec2> {
        let nx = screen_x / screen_width;
        let ny = screen_y / screen_height;
        let sa = &self.safe_area;
        if !sa.contains_normalized(nx, ny) {
            return None;
        }
        let x = (nx - sa.left) / sa.width * 2.0 - 1.0;
        let y = 1.0 - (ny - sa.top) / sa.height * 2.0;
        Some(Vec2::new(x, y))
    }

    /// Inverse of the world mapping. Not clamped to `[-1, 1]`.
    pub fn world_to_safe_area_relative(&self, world: Vec3) -> Vec2 {
        let wb = &self.safe_area.world_bounds;
        Vec2::new(
            (world.x - wb.center_x) / (wb.width * 0.5),
            (world.y - wb.center_y) / (wb.height * 0.5),
        )
    }

    pub fn is_in_safe_area(&self, world: Vec3) -> bool {
        self.safe_area.world_bounds.contains(world)
    }

    /// Move `object` to a safe-area-relative spot on the `depth` plane.
    pub fn position_in_safe_area<P: Positionable>(&self, object: &mut P, rel_x: f32, rel_y: f32, depth: f32) {
        object.set_position(self.safe_area_relative_to_world(rel_x, rel_y, depth));
    }

    /// Pull `object` back inside the safe area, keeping `padding` world units
    /// from each edge. Z is left untouched.
    pub fn clamp_to_safe_area<P: Positionable>(&self, object: &mut P, padding: f32) {
        let wb = &self.safe_area.world_bounds;
        let mut pos = object.position();
        let (min_x, max_x) = padded_span(wb.left, wb.right, padding);
        let (min_y, max_y) = padded_span(wb.bottom, wb.top, padding);
        pos.x = pos.x.clamp(min_x, max_x);
        pos.y = pos.y.clamp(min_y, max_y);
        object.set_position(pos);
    }
}

// Collapses to the midpoint when the padding exceeds half the span.
fn padded_span(lo: f32, hi: f32, padding: f32) -> (f32, f32) {
    let (lo, hi) = (lo + padding, hi - padding);
    if lo > hi {
        let mid = (lo + hi) * 0.5;
        (mid, mid)
    } else {
        (lo, hi)
    }
}
