//! Per-frame simulation step
//!
//! Order matters: terminal check, level timer, firing, movement, boss
//! attack, spawning, collisions, then the boss-escape check.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision;
use super::player::MoveKeys;
use super::spawn;
use super::state::{GameEvent, GameState, LevelOutcome};
use crate::elapsed_ms;

/// Input sampled by the shell for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Held direction keys
    pub keys: MoveKeys,
    /// Pointer position in playfield coordinates (aim target)
    pub pointer: Vec2,
    /// Fire button held or clicked this frame
    pub fire: bool,
}

/// Advance the session by one frame
///
/// `dt` is the frame duration as a multiple of one nominal tick (1.0 at
/// the target frame rate); negative or non-finite values are treated as
/// zero. `now` is the shell's monotonic clock in milliseconds.
///
/// Terminal sessions are left untouched.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, now: u64) {
    if state.phase.is_terminal() {
        return;
    }
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let boss_level = state.is_boss_level();

    // Level timer
    let elapsed = elapsed_ms(state.started_at, now);
    state.time_left_ms = state
        .tuning
        .session
        .level_duration_ms
        .saturating_sub(elapsed);
    if !boss_level && state.time_left_ms == 0 {
        state.complete_level(LevelOutcome::TimeUp);
        return;
    }

    if input.fire && state.player.can_shoot(now) {
        let id = state.next_entity_id();
        let bullet_tuning = state.tuning.bullet;
        if let Some(bullet) = state.player.try_shoot(id, input.pointer, &bullet_tuning, now) {
            state.bullets.push(bullet);
            state.events.push(GameEvent::ShotFired { id });
        }
    }

    // Movement
    let bounds = state.bounds;
    state.player.update(dt, input.keys, &bounds);
    let player_pos = state.player.pos();
    for bullet in &mut state.bullets {
        bullet.update(dt, now, &bounds);
    }
    for bullet in &mut state.enemy_bullets {
        bullet.update(dt, now, &bounds);
    }
    state.bullets.retain(|b| b.alive);
    state.enemy_bullets.retain(|b| b.alive);
    for zombie in &mut state.zombies {
        zombie.update(dt, player_pos);
    }

    if boss_level {
        if let Some(boss) = state.boss.as_mut() {
            boss.update(dt, player_pos, &bounds);
        }
        boss_attack(state, now);
    }

    spawn::run(state, now);
    collision::resolve(state);

    if boss_level && state.boss.as_ref().is_some_and(|b| b.escaped) {
        if state.is_in_progress() {
            state.events.push(GameEvent::BossEscaped);
            log::info!("Boss escaped");
        }
        state.complete_level(LevelOutcome::BossEscaped);
    }
}

/// Boss fires at the player when it is pursuing and off cooldown
fn boss_attack(state: &mut GameState, now: u64) {
    let ready = state.boss.as_ref().is_some_and(|b| b.can_attack(now));
    if !ready {
        return;
    }
    let id = state.next_entity_id();
    let target = state.player.pos();
    let bullet_tuning = state.tuning.boss_bullet;
    let shot = state
        .boss
        .as_mut()
        .and_then(|b| b.try_attack(id, target, &bullet_tuning, now));
    if let Some(bullet) = shot {
        state.enemy_bullets.push(bullet);
        state.events.push(GameEvent::BossShot { id });
        log::debug!("Boss fired shot {}", id);
    }
}
