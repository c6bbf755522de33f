//! Platform abstraction layer
//!
//! Handles what a shell has to provide to the simulation:
//! - A monotonic millisecond clock
//! - Frame timing normalized to the nominal tick rate

pub mod time;

pub use time::{Clock, FrameTimer, ManualClock, SystemClock};
