//! Loading and preparation errors
//!
//! Preparation either succeeds (scene runs) or fails permanently (scene is
//! left in the error state). Gameplay losses are state transitions, not errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("atlas has no slice named '{name}'")]
    MissingSlice { name: String },
    #[error("slice '{name}' has an unusable footprint {width}x{height}")]
    DegenerateSlice { name: String, width: f32, height: f32 },
    #[error("view size {width}x{height} has a zero extent")]
    EmptyView { width: u32, height: u32 },
    #[error("tuning value {field} = {value} is not usable")]
    InvalidTuning { field: &'static str, value: f32 },
    #[error("malformed manifest: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),
}
