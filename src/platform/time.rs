//! Interval timers
//!
//! The scene only needs "seconds since last reset". [`FrameClock`] measures
//! game time from the frame deltas it is fed, [`WallClock`] measures real time.

/// Resettable stopwatch
pub trait Timer {
    fn elapsed_seconds(&self) -> f32;

    fn reset(&mut self);

    /// Called once per simulated frame; wall-time timers ignore it
    fn advance(&mut self, _dt: f32) {}
}

/// Game-time stopwatch driven by frame deltas
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    elapsed: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Timer for FrameClock {
    fn elapsed_seconds(&self) -> f32 {
        self.elapsed
    }

    fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }
}

/// Real-time stopwatch
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    start: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for WallClock {
    fn default() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Timer for WallClock {
    fn elapsed_seconds(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    fn reset(&mut self) {
        self.start = std::time::Instant::now();
    }
}
