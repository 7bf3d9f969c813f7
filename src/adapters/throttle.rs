//! Move throttle adapters.

use std::{thread, time::Duration};

use crate::ports::MoveThrottle;

/// Pause the game server demands between moves.
pub const MOVE_DELAY: Duration = Duration::from_secs(15);

/// Real-time throttle that sleeps for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    /// Throttle at the server's standard move delay.
    pub fn new() -> Self {
        Self { delay: MOVE_DELAY }
    }

    /// Throttle at a custom delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveThrottle for FixedDelay {
    fn pause(&self) {
        thread::sleep(self.delay);
    }
}

/// No-op throttle for tests and trusted local servers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl MoveThrottle for NoDelay {
    fn pause(&self) {}
}
