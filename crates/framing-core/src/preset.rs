use crate::constants::{DEFAULT_CAMERA_Z, DEFAULT_FOV_DEGREES};
use glam::Vec3;

/// Named camera placement. `fov` of `None` keeps the current field of view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPreset {
    pub position: Vec3,
    pub look_at: Vec3,
    pub fov: Option<f32>,
}

impl CameraPreset {
    pub const fn new(position: Vec3, look_at: Vec3) -> Self {
        Self {
            position,
            look_at,
            fov: None,
        }
    }

    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = Some(fov);
        self
    }
}

pub const DEFAULT_PRESET: &str = "default";

// Presets every controller starts with; callers may override any of them.
pub fn default_presets() -> [(&'static str, CameraPreset); 5] {
    [
        (
            DEFAULT_PRESET,
            CameraPreset::new(Vec3::new(0.0, 0.0, DEFAULT_CAMERA_Z), Vec3::ZERO)
                .with_fov(DEFAULT_FOV_DEGREES),
        ),
        (
            "overview",
            CameraPreset::new(Vec3::new(0.0, 8.0, 16.0), Vec3::ZERO).with_fov(55.0),
        ),
        (
            "closeup",
            CameraPreset::new(Vec3::new(0.0, 1.5, 6.0), Vec3::new(0.0, 0.5, 0.0)).with_fov(45.0),
        ),
        ("side", CameraPreset::new(Vec3::new(10.0, 2.0, 6.0), Vec3::ZERO)),
        ("top", CameraPreset::new(Vec3::new(0.0, 18.0, 0.01), Vec3::ZERO)),
    ]
}
