//! Camera object shared between the layout, conversion and control code.
//!
//! The camera is owned by the frame driver and handed to each component as a
//! [`SharedCamera`]. Only the camera controller writes position, orientation
//! and field of view during normal operation; the driver may change the
//! aspect ratio when the viewport is resized.

use crate::constants::{CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Quat, Vec3};
use std::cell::RefCell;
use std::rc::Rc;

pub type SharedCamera = Rc<RefCell<Camera>>;

/// Wrap a camera for sharing between framing components.
pub fn shared_camera(camera: Camera) -> SharedCamera {
    Rc::new(RefCell::new(camera))
}

/// Right-handed perspective camera. Looks down its local -Z axis.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub rotation: Quat,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Transient offset added to `position` only when rendering (shake).
    pub render_offset: Vec3,
    projection: Mat4,
}

impl Camera {
    pub fn new(position: Vec3, fov_degrees: f32, aspect: f32) -> Self {
        let mut camera = Self {
            position,
            rotation: Quat::IDENTITY,
            up: Vec3::Y,
            fov_degrees,
            aspect,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            render_offset: Vec3::ZERO,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Orient the camera so its forward axis points at `target`.
    ///
    /// Does nothing when `target` coincides with the camera position.
    pub fn look_at(&mut self, target: Vec3) {
        let dir = target - self.position;
        if dir.length_squared() <= f32::EPSILON {
            return;
        }
        // look_at_rh degenerates when the view direction is parallel to up
        let up = if dir.normalize().cross(self.up).length_squared() <= 1e-8 {
            Vec3::Z
        } else {
            self.up
        };
        let view = Mat4::look_at_rh(self.position, target, up);
        self.rotation = Quat::from_mat4(&view.inverse()).normalize();
    }

    /// Recompute the cached projection. Call after changing fov or aspect.
    pub fn update_projection_matrix(&mut self) {
        self.projection = Mat4::perspective_rh(
            self.fov_degrees.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection_matrix();
    }

    pub fn set_fov(&mut self, fov_degrees: f32) {
        self.fov_degrees = fov_degrees;
        self.update_projection_matrix();
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// Position the scene is rendered from: the base pose plus any overlay.
    pub fn rendered_position(&self) -> Vec3 {
        self.position + self.render_offset
    }

    /// World to view space transform, including the render offset.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.rendered_position()).inverse()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    #[inline]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    #[inline]
    pub fn up_axis(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}
