use std::time::{Duration, Instant};

pub const SIM_FPS: u32 = 60;
pub const DT: f32 = 1.0 / SIM_FPS as f32;
const TIC: Duration = Duration::from_micros(1_000_000 / SIM_FPS as u64);

/// Never run more than this many catch-up updates in one frame; a long stall
/// (window drag, debugger) would otherwise fast-forward the flight.
const MAX_CATCH_UP: u32 = 8;

/// Converts wall-clock time into a whole number of fixed `DT` updates.
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// How many fixed updates are due since the previous call.
    pub fn pump(&mut self) -> u32 {
        self.pump_at(Instant::now())
    }

    fn pump_at(&mut self, now: Instant) -> u32 {
        let mut due = 0;
        while now.duration_since(self.last) >= TIC {
            self.last += TIC;
            due += 1;
            if due == MAX_CATCH_UP {
                self.last = now;
                break;
            }
        }
        due
    }
}
