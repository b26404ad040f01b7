//! Transient camera effects layered on top of the controller state.

use crate::constants::ZOOM_PUNCH_OUT_FRACTION;
use crate::tween::{Easing, Tween};
use glam::Vec3;
use rand::Rng;

/// Random positional jitter whose amplitude optionally fades to zero.
#[derive(Clone, Debug)]
pub struct Shake {
    progress: Tween<f32>,
    intensity: f32,
    decay: bool,
}

impl Shake {
    pub fn new(intensity: f32, duration: f32, decay: bool) -> Self {
        Self {
            progress: Tween::new(0.0, 1.0, duration, Easing::Linear),
            intensity,
            decay,
        }
    }

    /// Advance and return this tick's offset; zero once the shake is done.
    pub fn step<R: Rng>(&mut self, dt: f32, rng: &mut R) -> Vec3 {
        let t = self.progress.advance(dt);
        if self.is_finished() {
            return Vec3::ZERO;
        }
        let amount = if self.decay {
            self.intensity * (1.0 - t)
        } else {
            self.intensity
        };
        Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        ) * amount
    }

    pub fn is_finished(&self) -> bool {
        self.progress.is_finished()
    }
}

#[derive(Clone, Debug)]
enum PunchPhase {
    Out(Tween<f32>),
    Back(Tween<f32>),
    Done,
}

/// Two-phase field-of-view kick: out to a target fov, then back again.
#[derive(Clone, Debug)]
pub struct ZoomPunch {
    original_fov: f32,
    back_duration: f32,
    phase: PunchPhase,
}

impl ZoomPunch {
    /// `from_fov` is where the punch starts; it differs from `original_fov`
    /// when a punch interrupts one still in flight.
    pub fn new(original_fov: f32, from_fov: f32, target_fov: f32, duration: f32) -> Self {
        let duration = duration.max(0.0);
        let out = duration * ZOOM_PUNCH_OUT_FRACTION;
        Self {
            original_fov,
            back_duration: duration - out,
            phase: PunchPhase::Out(Tween::new(from_fov, target_fov, out, Easing::QuadOut)),
        }
    }

    pub fn original_fov(&self) -> f32 {
        self.original_fov
    }

    /// Advance and return the fov for this tick.
    pub fn step(&mut self, dt: f32) -> f32 {
        match &mut self.phase {
            PunchPhase::Out(tween) => {
                let fov = tween.advance(dt);
                if !tween.is_finished() {
                    return fov;
                }
                let carry = tween.overflow();
                let mut back = Tween::new(fov, self.original_fov, self.back_duration, Easing::QuadInOut);
                let fov = back.advance(carry);
                self.phase = if back.is_finished() {
                    PunchPhase::Done
                } else {
                    PunchPhase::Back(back)
                };
                fov
            }
            PunchPhase::Back(tween) => {
                let fov = tween.advance(dt);
                if tween.is_finished() {
                    self.phase = PunchPhase::Done;
                }
                fov
            }
            PunchPhase::Done => self.original_fov,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, PunchPhase::Done)
    }
}
