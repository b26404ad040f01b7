use thiserror::Error;

/// Soft failures reported by the camera controller. The camera is left
/// untouched whenever one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CameraError {
    #[error("camera preset not found: {0}")]
    PresetNotFound(String),
    #[error("no saved camera state to return to")]
    NoSavedState,
}
