//! Clocks and frame timing

use std::time::Instant;

/// Monotonic millisecond clock owned by the shell
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall-clock backed by [`Instant`], starting at zero on creation
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Clock that only moves when told to (headless runs, replays, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    pub fn starting_at(now: u64) -> Self {
        Self { now }
    }

    pub fn advance(&mut self, ms: u64) -> u64 {
        self.now += ms;
        self.now
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }
}

/// Converts real frame durations into `dt` multipliers (1.0 = one nominal tick)
#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    tick_ms: f32,
    /// Upper bound on `dt` after a stall, to prevent tunneling
    max_dt: f32,
    last: Option<u64>,
}

impl FrameTimer {
    /// Largest `dt` handed out by default (a quarter of a second at 60 Hz)
    pub const DEFAULT_MAX_DT: f32 = 15.0;

    pub fn new(fps: u32) -> Self {
        Self {
            tick_ms: 1000.0 / fps.max(1) as f32,
            max_dt: Self::DEFAULT_MAX_DT,
            last: None,
        }
    }

    /// Nominal frame duration in milliseconds
    pub fn tick_ms(&self) -> f32 {
        self.tick_ms
    }

    /// `dt` for a frame that took `elapsed_ms`
    pub fn dt_for(&self, elapsed_ms: f32) -> f32 {
        (elapsed_ms / self.tick_ms).clamp(0.0, self.max_dt)
    }

    /// Record a frame at `now` and return its `dt`; the first frame counts as one tick
    pub fn frame(&mut self, now: u64) -> f32 {
        let dt = match self.last {
            None => 1.0,
            Some(last) => self.dt_for(crate::elapsed_ms(last, now) as f32),
        };
        self.last = Some(now);
        dt
    }
}
