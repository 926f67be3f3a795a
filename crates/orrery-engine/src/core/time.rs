//! Monotonic frame clock.
//! Accumulates elapsed time from variable frame deltas and hands each frame
//! an explicit context instead of closing over mutable globals.

/// Per-frame timing data passed into the update path.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Total elapsed seconds since the clock started.
    pub elapsed: f64,
    /// This frame's delta in seconds, after spike capping.
    pub dt: f32,
}

/// Accumulates elapsed time across frames.
pub struct FrameClock {
    elapsed: f64,
    /// Largest delta accepted in one frame. Browsers suspend frame callbacks
    /// in background tabs; the first delta after returning can be minutes.
    max_dt: f32,
}

/// Default frame-delta cap in seconds.
const DEFAULT_MAX_DT: f32 = 0.25;

impl FrameClock {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            max_dt: DEFAULT_MAX_DT,
        }
    }

    pub fn with_max_dt(max_dt: f32) -> Self {
        Self {
            elapsed: 0.0,
            max_dt,
        }
    }

    /// Advance the clock by one frame delta and return the frame context.
    pub fn advance(&mut self, dt: f32) -> FrameContext {
        let dt = dt.clamp(0.0, self.max_dt);
        self.elapsed += dt as f64;
        FrameContext {
            elapsed: self.elapsed,
            dt,
        }
    }

    /// Total elapsed seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
