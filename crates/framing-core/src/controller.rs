//! Camera control state machine.
//!
//! [`CameraController`] arbitrates between presets, cuts, eased animations
//! and target following, and layers transient effects (shake, zoom punch) on
//! top without letting them leak into the persistent camera state.
//!
//! Per frame the driver calls [`CameraController::advance_tweens`] (the
//! interpolation tick for animations and effects) followed by
//! [`CameraController::update`] (follow smoothing and the shake overlay).
//!
//! Callbacks passed through [`AnimateOptions`] run while the controller holds
//! the shared camera borrowed; they must not borrow it mutably.

use crate::camera::{Camera, SharedCamera};
use crate::constants::{
    DEFAULT_ANIMATION_SECS, FOLLOW_DEFAULT_LOOK_AT_OFFSET, FOLLOW_DEFAULT_OFFSET,
    FOLLOW_DEFAULT_SMOOTHNESS, FOLLOW_REFERENCE_FPS, PORTRAIT_MAX_ZOOM_OUT, SHAKE_THRESHOLD,
};
use crate::convert::Positionable;
use crate::effects::{Shake, ZoomPunch};
use crate::error::CameraError;
use crate::layout::LayoutInfo;
use crate::preset::{default_presets, CameraPreset};
use crate::tween::{Easing, Tween};
use fnv::FnvHashMap;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraState {
    #[default]
    Idle,
    Following,
    Animating,
    /// Resting state after a cut; only an explicit command leaves it.
    Cut,
}

/// Something the camera can follow.
pub trait FollowTarget {
    fn follow_position(&self) -> Vec3;
}

impl FollowTarget for Vec3 {
    fn follow_position(&self) -> Vec3 {
        *self
    }
}

impl<T: Positionable> FollowTarget for RefCell<T> {
    fn follow_position(&self) -> Vec3 {
        self.borrow().position()
    }
}

/// Optional limits applied while following.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FollowBounds {
    pub min_y: Option<f32>,
    pub max_y: Option<f32>,
    /// Maximum distance between the camera and the target.
    pub max_distance: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowConfig {
    pub offset: Vec3,
    pub look_at_offset: Vec3,
    /// Fraction of the remaining gap kept per 60 Hz frame, in `[0, 1]`.
    /// `0` snaps, `1` never moves.
    pub smoothness: f32,
    pub bounds: FollowBounds,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            offset: FOLLOW_DEFAULT_OFFSET,
            look_at_offset: FOLLOW_DEFAULT_LOOK_AT_OFFSET,
            smoothness: FOLLOW_DEFAULT_SMOOTHNESS,
            bounds: FollowBounds::default(),
        }
    }
}

/// Options for [`CameraController::animate_to`].
pub struct AnimateOptions {
    pub duration: f32,
    pub easing: Easing,
    /// Field of view to tween toward alongside the position.
    pub fov: Option<f32>,
    /// Snapshot the current placement for [`CameraController::return_to_saved`].
    pub save_state: bool,
    pub on_update: Option<Box<dyn FnMut(&Camera)>>,
    pub on_complete: Option<Box<dyn FnOnce()>>,
}

impl Default for AnimateOptions {
    fn default() -> Self {
        Self {
            duration: DEFAULT_ANIMATION_SECS,
            easing: Easing::default(),
            fov: None,
            save_state: false,
            on_update: None,
            on_complete: None,
        }
    }
}

impl AnimateOptions {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = Some(fov);
        self
    }

    pub fn saving_state(mut self) -> Self {
        self.save_state = true;
        self
    }

    pub fn on_update(mut self, f: impl FnMut(&Camera) + 'static) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    pub fn on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SavedCameraState {
    pub position: Vec3,
    pub look_at: Vec3,
    pub fov: f32,
}

struct Animation {
    position: Tween<Vec3>,
    look_at: Tween<Vec3>,
    fov: Option<Tween<f32>>,
    on_update: Option<Box<dyn FnMut(&Camera)>>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl Animation {
    fn is_finished(&self) -> bool {
        self.position.is_finished()
            && self.look_at.is_finished()
            && self.fov.as_ref().map_or(true, |t| t.is_finished())
    }
}

struct ActiveFollow {
    target: Rc<dyn FollowTarget>,
    config: FollowConfig,
}

pub struct CameraController {
    camera: SharedCamera,
    presets: FnvHashMap<String, CameraPreset>,
    state: CameraState,
    look_at: Vec3,
    follow: Option<ActiveFollow>,
    timeline: Option<Animation>,
    saved: Option<SavedCameraState>,
    shake: Option<Shake>,
    shake_offset: Vec3,
    zoom_punch: Option<ZoomPunch>,
    rng: StdRng,
}

impl CameraController {
    pub fn new(camera: SharedCamera) -> Self {
        Self::with_rng(camera, StdRng::from_entropy())
    }

    /// Deterministic shake jitter, mainly for tests and replays.
    pub fn with_seed(camera: SharedCamera, seed: u64) -> Self {
        Self::with_rng(camera, StdRng::seed_from_u64(seed))
    }

    fn with_rng(camera: SharedCamera, rng: StdRng) -> Self {
        let presets = default_presets()
            .into_iter()
            .map(|(name, preset)| (name.to_string(), preset))
            .collect();
        Self {
            camera,
            presets,
            state: CameraState::Idle,
            look_at: Vec3::ZERO,
            follow: None,
            timeline: None,
            saved: None,
            shake: None,
            shake_offset: Vec3::ZERO,
            zoom_punch: None,
            rng,
        }
    }

    pub fn camera(&self) -> &SharedCamera {
        &self.camera
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    pub fn is_following(&self) -> bool {
        self.state == CameraState::Following
    }

    pub fn follow_config(&self) -> Option<&FollowConfig> {
        self.follow.as_ref().map(|f| &f.config)
    }

    pub fn has_active_animation(&self) -> bool {
        self.timeline.is_some()
    }

    /// Point the camera is currently oriented toward.
    pub fn look_at_target(&self) -> Vec3 {
        self.look_at
    }

    pub fn shake_offset(&self) -> Vec3 {
        self.shake_offset
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_some()
    }

    pub fn is_zoom_punching(&self) -> bool {
        self.zoom_punch.is_some()
    }

    // ---------------- Presets ----------------

    /// Register or overwrite a named preset.
    pub fn register_preset(&mut self, name: impl Into<String>, preset: CameraPreset) {
        self.presets.insert(name.into(), preset);
    }

    pub fn preset(&self, name: &str) -> Option<&CameraPreset> {
        self.presets.get(name)
    }

    /// Registered preset names, sorted.
    pub fn preset_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn find_preset(&self, name: &str) -> Result<CameraPreset, CameraError> {
        self.presets.get(name).copied().ok_or_else(|| {
            log::warn!("[camera] preset not found: {name}");
            CameraError::PresetNotFound(name.to_string())
        })
    }

    /// Snap to a preset. Cancels any animation or follow.
    pub fn apply_preset(&mut self, name: &str) -> Result<(), CameraError> {
        let preset = self.find_preset(name)?;
        self.cancel_motion();
        self.snap(preset.position, preset.look_at, preset.fov);
        self.set_state(CameraState::Idle);
        Ok(())
    }

    // ---------------- Commands ----------------

    /// Jump instantly. The controller stays in [`CameraState::Cut`] until the
    /// next command.
    pub fn cut_to(&mut self, position: Vec3, look_at: Vec3, save_state: bool) {
        self.cancel_motion();
        if save_state {
            self.save_state();
        }
        self.snap(position, look_at, None);
        self.set_state(CameraState::Cut);
    }

    /// Ease position and look-at toward the given placement.
    pub fn animate_to(&mut self, position: Vec3, look_at: Vec3, options: AnimateOptions) {
        self.cancel_motion();
        if options.save_state {
            self.save_state();
        }
        let (from_position, from_fov) = {
            let cam = self.camera.borrow();
            (cam.position, cam.fov_degrees)
        };
        let AnimateOptions {
            duration,
            easing,
            fov,
            on_update,
            on_complete,
            ..
        } = options;
        if fov.is_some() {
            self.drop_zoom_punch();
        }
        self.timeline = Some(Animation {
            position: Tween::new(from_position, position, duration, easing),
            look_at: Tween::new(self.look_at, look_at, duration, easing),
            fov: fov.map(|target| Tween::new(from_fov, target, duration, easing)),
            on_update,
            on_complete,
        });
        self.set_state(CameraState::Animating);
    }

    /// Animate back to the last saved placement and consume the snapshot.
    pub fn return_to_saved(&mut self, options: AnimateOptions) -> Result<(), CameraError> {
        let Some(saved) = self.saved.take() else {
            log::warn!("[camera] no saved state to return to");
            return Err(CameraError::NoSavedState);
        };
        let options = AnimateOptions {
            fov: Some(saved.fov),
            save_state: false,
            ..options
        };
        self.animate_to(saved.position, saved.look_at, options);
        Ok(())
    }

    /// Snapshot the current placement, without any shake overlay.
    pub fn save_state(&mut self) {
        let cam = self.camera.borrow();
        let fov = self
            .zoom_punch
            .as_ref()
            .map_or(cam.fov_degrees, ZoomPunch::original_fov);
        self.saved = Some(SavedCameraState {
            position: cam.position,
            look_at: self.look_at,
            fov,
        });
    }

    pub fn has_saved_state(&self) -> bool {
        self.saved.is_some()
    }

    pub fn saved_state(&self) -> Option<&SavedCameraState> {
        self.saved.as_ref()
    }

    pub fn start_follow(&mut self, target: Rc<dyn FollowTarget>, config: FollowConfig) {
        self.timeline = None;
        let config = FollowConfig {
            smoothness: config.smoothness.clamp(0.0, 1.0),
            ..config
        };
        self.follow = Some(ActiveFollow { target, config });
        self.set_state(CameraState::Following);
    }

    pub fn stop_follow(&mut self) {
        if self.follow.take().is_some() && self.state == CameraState::Following {
            self.set_state(CameraState::Idle);
        }
    }

    pub fn stop_animation(&mut self) {
        if self.timeline.take().is_some() && self.state == CameraState::Animating {
            self.set_state(CameraState::Idle);
        }
    }

    // ---------------- Effects ----------------

    /// Jitter the camera for `duration` seconds. Replaces a running shake.
    pub fn shake(&mut self, intensity: f32, duration: f32, decay: bool) {
        log::debug!("[camera] shake intensity={intensity} duration={duration}s decay={decay}");
        self.shake = Some(Shake::new(intensity, duration, decay));
    }

    /// Kick the field of view to `target_fov` and back over `duration` seconds.
    ///
    /// Ignored while an animation is tweening the field of view.
    pub fn zoom_punch(&mut self, target_fov: f32, duration: f32) {
        if self.animation_owns_fov() {
            log::debug!("[camera] zoom punch skipped: animation owns the fov");
            return;
        }
        let current = self.camera.borrow().fov_degrees;
        let original = self
            .zoom_punch
            .as_ref()
            .map_or(current, ZoomPunch::original_fov);
        self.zoom_punch = Some(ZoomPunch::new(original, current, target_fov, duration));
    }

    // ---------------- Layout ----------------

    /// Place the camera at `preset_name` adjusted for the layout: portrait
    /// screens push the camera back along Z as they narrow.
    pub fn adjust_for_layout(&mut self, layout: &LayoutInfo, preset_name: &str) -> Result<(), CameraError> {
        let preset = self.find_preset(preset_name)?;
        let mut position = preset.position;
        if layout.is_portrait() {
            let zoom_out = (1.0 / layout.screen_aspect).min(PORTRAIT_MAX_ZOOM_OUT);
            position.z *= zoom_out;
        }
        self.snap(position, preset.look_at, None);
        Ok(())
    }

    // ---------------- Per-frame ----------------

    /// Interpolation tick: advances the animation, shake and zoom punch.
    pub fn advance_tweens(&mut self, delta: f32) {
        if let Some(anim) = self.timeline.as_mut() {
            let position = anim.position.advance(delta);
            let look_at = anim.look_at.advance(delta);
            let fov = anim.fov.as_mut().map(|t| t.advance(delta));
            {
                let mut cam = self.camera.borrow_mut();
                cam.position = position;
                if let Some(fov) = fov {
                    cam.set_fov(fov);
                }
                cam.look_at(look_at);
            }
            self.look_at = look_at;
            if let Some(on_update) = anim.on_update.as_mut() {
                on_update(&*self.camera.borrow());
            }
            if anim.is_finished() {
                let finished = self.timeline.take();
                self.set_state(CameraState::Idle);
                if let Some(on_complete) = finished.and_then(|a| a.on_complete) {
                    on_complete();
                }
            }
        }

        if let Some(shake) = self.shake.as_mut() {
            self.shake_offset = shake.step(delta, &mut self.rng);
            if shake.is_finished() {
                self.shake = None;
                self.shake_offset = Vec3::ZERO;
            }
        }

        if let Some(punch) = self.zoom_punch.as_mut() {
            let fov = punch.step(delta);
            self.camera.borrow_mut().set_fov(fov);
            if punch.is_finished() {
                self.zoom_punch = None;
            }
        }
    }

    /// Frame update: follow smoothing, then the shake overlay.
    pub fn update(&mut self, delta: f32) {
        if self.state == CameraState::Following {
            self.step_follow(delta);
        }

        let overlay = if self.shake_offset.length() > SHAKE_THRESHOLD {
            self.shake_offset
        } else {
            Vec3::ZERO
        };
        self.camera.borrow_mut().render_offset = overlay;
    }

    fn step_follow(&mut self, delta: f32) {
        let Some(follow) = self.follow.as_ref() else {
            return;
        };
        let target = follow.target.follow_position();
        let config = follow.config;

        let mut desired = target + config.offset;
        if let Some(min_y) = config.bounds.min_y {
            desired.y = desired.y.max(min_y);
        }
        if let Some(max_y) = config.bounds.max_y {
            desired.y = desired.y.min(max_y);
        }
        let desired_look_at = target + config.look_at_offset;

        // Exponential decay referenced to 60 Hz so the feel is frame-rate independent.
        let factor = 1.0 - config.smoothness.powf(delta * FOLLOW_REFERENCE_FPS);

        let mut cam = self.camera.borrow_mut();
        let mut position = cam.position.lerp(desired, factor);
        if let Some(max_distance) = config.bounds.max_distance {
            let away = position - target;
            if away.length() > max_distance {
                position = target + away.normalize() * max_distance;
            }
        }
        cam.position = position;
        self.look_at = self.look_at.lerp(desired_look_at, factor);
        cam.look_at(self.look_at);
    }

    // ---------------- Internals ----------------

    fn cancel_motion(&mut self) {
        self.timeline = None;
        self.follow = None;
    }

    fn animation_owns_fov(&self) -> bool {
        self.timeline.as_ref().is_some_and(|a| a.fov.is_some())
    }

    // A command that sets the fov supersedes a punch still in flight.
    fn drop_zoom_punch(&mut self) {
        if self.zoom_punch.take().is_some() {
            log::debug!("[camera] zoom punch superseded by an fov change");
        }
    }

    fn snap(&mut self, position: Vec3, look_at: Vec3, fov: Option<f32>) {
        if fov.is_some() {
            self.drop_zoom_punch();
        }
        let mut cam = self.camera.borrow_mut();
        cam.position = position;
        if let Some(fov) = fov {
            cam.set_fov(fov);
        }
        cam.look_at(look_at);
        self.look_at = look_at;
    }

    fn set_state(&mut self, next: CameraState) {
        if self.state != next {
            log::debug!("[camera] {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }
}
