//! Periodic enemy spawn policy
//!
//! A step counter; on reaching the fixed threshold the policy signals that
//! exactly one enemy enters the world and the counter resets. Deterministic
//! in step count; the side/speed/variant draw happens at the call site from
//! the session RNG.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnPolicy {
    interval_ticks: u32,
    counter: u32,
}

impl SpawnPolicy {
    pub fn new(interval_ticks: u32) -> Self {
        Self {
            interval_ticks,
            counter: 0,
        }
    }

    /// Advance one step; true when a spawn is due this step
    pub fn step(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.interval_ticks {
            self.counter = 0;
            return true;
        }
        false
    }
}
