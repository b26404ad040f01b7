use glam::Vec3;

// Shared framing/camera tuning constants used by the layout and camera code.

// Safe area
pub const SAFE_AREA_ASPECT: f32 = 9.0 / 16.0; // width / height of the guaranteed-visible region
pub const DEFAULT_TARGET_Z: f32 = 0.0; // depth plane the safe area is projected onto

// Camera defaults
pub const DEFAULT_FOV_DEGREES: f32 = 60.0; // vertical field of view
pub const DEFAULT_CAMERA_Z: f32 = 12.0; // eye distance from the origin along +Z
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Follow
pub const FOLLOW_DEFAULT_OFFSET: Vec3 = Vec3::new(0.0, 3.0, 8.0);
pub const FOLLOW_DEFAULT_LOOK_AT_OFFSET: Vec3 = Vec3::ZERO;
pub const FOLLOW_DEFAULT_SMOOTHNESS: f32 = 0.85; // fraction of the gap kept per reference frame
pub const FOLLOW_REFERENCE_FPS: f32 = 60.0; // smoothing is tuned against this frame rate

// Animation
pub const DEFAULT_ANIMATION_SECS: f32 = 1.0;

// Transient effects
pub const SHAKE_THRESHOLD: f32 = 1e-4; // offsets shorter than this are not applied
pub const ZOOM_PUNCH_OUT_FRACTION: f32 = 0.3; // share of the punch spent reaching the target fov

// Layout reaction
pub const PORTRAIT_MAX_ZOOM_OUT: f32 = 2.5; // cap on the portrait Z stretch factor
