use std::thread::sleep;
use std::time::{Duration, Instant};

use node_control::bsp::clock::Clock;

/// Monotonic millisecond clock backed by [Instant]. Busy-waits call
/// [Clock::idle], which sleeps so the simulator does not spin a core.
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn start() -> Self {
        SystemClock {
            started: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn millis(&self) -> u32 {
        self.started.elapsed().as_millis() as u32
    }

    fn idle(&self) {
        sleep(Duration::from_millis(1));
    }
}
