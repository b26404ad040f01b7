//! Adaptive safe-area layout and camera framing.
//!
//! Keeps a fixed 9:16 "safe area" of a 3D scene visible at any viewport
//! aspect ratio and drives the camera through presets, cuts, eased moves,
//! target following and transient effects.

pub mod camera;
pub mod constants;
pub mod controller;
pub mod convert;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod preset;
pub mod tween;

pub use camera::*;
pub use constants::*;
pub use controller::*;
pub use convert::*;
pub use error::*;
pub use geometry::*;
pub use layout::*;
pub use preset::*;
pub use tween::{Easing, Lerp, Tween};
