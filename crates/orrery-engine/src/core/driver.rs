use crate::core::time::{FrameClock, FrameContext};

/// Animation driver lifecycle.
/// `Stopped` is terminal: a torn-down view never resumes ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
    Stopped,
}

/// Explicit frame-loop driver.
///
/// The browser's refresh callback calls `begin_frame(dt)` once per display
/// refresh; the driver owns the clock and the run state, so cancellation is
/// a state transition rather than "stop rescheduling the callback".
pub struct AnimationDriver {
    state: DriverState,
    clock: FrameClock,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self {
            state: DriverState::Idle,
            clock: FrameClock::new(),
        }
    }

    /// Transition `Idle → Running`. A stopped driver stays stopped.
    pub fn start(&mut self) {
        if self.state == DriverState::Idle {
            self.state = DriverState::Running;
            log::debug!("animation driver running");
        }
    }

    /// Terminal transition on view teardown.
    pub fn stop(&mut self) {
        if self.state != DriverState::Stopped {
            log::debug!("animation driver stopped at {:.3}s", self.clock.elapsed());
        }
        self.state = DriverState::Stopped;
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Advance the clock and yield this frame's context, or `None` when the
    /// driver is not running (every tick after `stop` is a no-op).
    pub fn begin_frame(&mut self, dt: f32) -> Option<FrameContext> {
        if self.state != DriverState::Running {
            return None;
        }
        Some(self.clock.advance(dt))
    }

    /// Total elapsed seconds while running.
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}
