//! Touch UI

pub mod controls;

pub use controls::{Control, ControlKind, ControlPanel};
