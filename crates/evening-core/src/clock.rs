use instant::Instant;
use std::time::Duration;

/// Reference timestamp for the animation, captured exactly once at
/// startup. Every render tick and the cue scheduler express time as an
/// offset from this epoch; nothing may reset it after start.
#[derive(Clone, Copy, Debug)]
pub struct AnimationClock {
    epoch: Instant,
}

impl AnimationClock {
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.epoch.elapsed()
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}
