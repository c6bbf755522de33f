//! Zombie Shooter - A single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session state machine)
//! - `game`: Campaign controller (restart, level advance, quit)
//! - `renderer`: Renderable scene description and triangle tessellation
//! - `platform`: Clock and frame-timing abstraction for shells
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{Flow, Game, ShellEvent};
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Playfield dimensions
    pub const WIDTH: f32 = 900.0;
    pub const HEIGHT: f32 = 600.0;
    /// Nominal frame rate; `dt == 1.0` is one tick at this rate
    pub const FPS: u32 = 60;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 4.0;
    pub const PLAYER_RADIUS: f32 = 18.0;
    pub const PLAYER_MAX_HEALTH: i32 = 10;
    pub const PLAYER_SHOT_COOLDOWN_MS: u64 = 180;
    pub const PLAYER_MUZZLE: f32 = 28.0;

    /// Friendly bullet defaults
    pub const BULLET_SPEED: f32 = 12.0;
    pub const BULLET_RADIUS: f32 = 5.0;
    pub const BULLET_LIFETIME_MS: u64 = 2000;

    /// Zombie defaults
    pub const ZOMBIE_SPEED_MIN: f32 = 0.6;
    pub const ZOMBIE_SPEED_MAX: f32 = 1.6;
    pub const ZOMBIE_RADIUS: f32 = 20.0;
    pub const ZOMBIE_HEALTH: i32 = 3;
    pub const SPAWN_INTERVAL_MS: u64 = 2000;
    pub const SPAWN_INTERVAL_FLOOR_MS: u64 = 1500;

    /// Boss defaults
    pub const BOSS_HEALTH: i32 = 60;
    pub const BOSS_SPEED: f32 = 1.2;
    pub const BOSS_RADIUS: f32 = 28.0;
    pub const BOSS_BULLET_SPEED: f32 = 6.0;
    pub const BOSS_BULLET_RADIUS: f32 = 6.0;
    pub const BOSS_BULLET_LIFETIME_MS: u64 = 4000;
    pub const BOSS_ATTACK_COOLDOWN_MS: u64 = 1200;
    pub const BOSS_FLEE_THRESHOLD: i32 = 20;
    pub const BOSS_FLEE_SPEED: f32 = 2.5;
    pub const BOSS_ESCAPE_MARGIN: f32 = 40.0;

    /// Session defaults
    pub const LEVEL_COUNT: u32 = 3;
    pub const LEVEL_DURATION_MS: u64 = 60_000;
    pub const LEVEL_KILL_TARGET: u32 = 10;
}

/// Unit vector pointing from `from` toward `to`, plus the distance between them.
///
/// Coincident points yield `(Vec2::ZERO, 0.0)` instead of dividing by zero.
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> (Vec2, f32) {
    let delta = to - from;
    let dist = delta.length();
    if dist == 0.0 || !dist.is_finite() {
        return (Vec2::ZERO, 0.0);
    }
    (delta / dist, dist)
}

/// Milliseconds elapsed between two clock readings, zero if the clock went backwards
#[inline]
pub fn elapsed_ms(since: u64, now: u64) -> u64 {
    now.saturating_sub(since)
}
