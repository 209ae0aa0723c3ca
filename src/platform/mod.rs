//! Platform abstraction layer
//!
//! Narrow interfaces to what the host provides:
//! - Time (shot cooldown timer)
//! - Touch input events

pub mod input;
pub mod time;

pub use input::{TouchEvent, TouchPhase};
pub use time::{FrameClock, Timer};
#[cfg(not(target_arch = "wasm32"))]
pub use time::WallClock;
