//! Frame timing handed to the controllers.

use bevy::prelude::*;

/// Time information for a single simulation tick.
///
/// `now` is monotonic seconds since startup, `delta` the seconds elapsed
/// since the previous tick. Deadlines are always compared against `now`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameClock {
    pub now: f32,
    pub delta: f32,
}

impl FrameClock {
    pub fn new(now: f32, delta: f32) -> Self {
        Self { now, delta }
    }

    /// Snapshot the current frame from Bevy's virtual clock.
    pub fn from_time(time: &Time) -> Self {
        Self {
            now: time.elapsed_secs(),
            delta: time.delta_secs(),
        }
    }

    /// The clock `delta` seconds later, as seen by the next tick.
    pub fn advance(self, delta: f32) -> Self {
        Self {
            now: self.now + delta,
            delta,
        }
    }
}
