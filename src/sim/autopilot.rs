//! Attract-mode AI: produces input that plays the game by itself
//!
//! Aims at the nearest threat and keeps the trigger held, strafes away from
//! zombies that get too close, and otherwise drifts back toward the middle.

use glam::Vec2;

use super::player::MoveKeys;
use super::state::GameState;
use super::tick::TickInput;

/// Zombies closer than this (center to center) make the autopilot back off
const DANGER_DISTANCE: f32 = 140.0;
/// Ignore small steering components so the player doesn't jitter
const AXIS_DEADZONE: f32 = 0.35;
/// How far from the middle the player may wander before drifting back
const HOME_RADIUS: f32 = 60.0;

/// Turn a desired heading into held direction keys
pub fn keys_toward(dir: Vec2) -> MoveKeys {
    let dir = dir.normalize_or_zero();
    MoveKeys {
        up: dir.y < -AXIS_DEADZONE,
        down: dir.y > AXIS_DEADZONE,
        left: dir.x < -AXIS_DEADZONE,
        right: dir.x > AXIS_DEADZONE,
    }
}

/// Build this frame's input for `state`
pub fn autopilot(state: &GameState) -> TickInput {
    let me = state.player.pos();

    let nearest_zombie = state
        .zombies
        .iter()
        .map(|z| (z.pos(), z.pos().distance_squared(me)))
        .min_by(|a, b| a.1.total_cmp(&b.1));

    let boss = state.boss.as_ref().map(|b| (b.pos(), b.pos().distance_squared(me)));

    let target = match (nearest_zombie, boss) {
        (Some(z), Some(b)) => Some(if z.1 <= b.1 { z } else { b }),
        (z, b) => z.or(b),
    };

    let heading = match nearest_zombie {
        Some((pos, dist_sq)) if dist_sq < DANGER_DISTANCE * DANGER_DISTANCE => me - pos,
        _ => {
            let home = state.bounds.center() - me;
            if home.length_squared() > HOME_RADIUS * HOME_RADIUS {
                home
            } else {
                Vec2::ZERO
            }
        }
    };

    TickInput {
        keys: keys_toward(heading),
        pointer: target.map_or(me, |(pos, _)| pos),
        fire: target.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::zombie::Zombie;
    use crate::tuning::Tuning;

    #[test]
    fn test_idle_when_nothing_around() {
        let state = GameState::start_level(1, Tuning::default(), 1, 0);
        let input = autopilot(&state);
        assert!(!input.fire);
        assert_eq!(input.keys, MoveKeys::default());
    }

    #[test]
    fn test_aims_at_nearest_zombie_and_backs_off() {
        let mut state = GameState::start_level(1, Tuning::default(), 1, 0);
        let near = state.player.pos() + Vec2::new(100.0, 0.0);
        state.zombies.push(Zombie::new(1, Vec2::new(0.0, 0.0), 20.0, 1.0, 3));
        state.zombies.push(Zombie::new(2, near, 20.0, 1.0, 3));
        let input = autopilot(&state);
        assert!(input.fire);
        assert_eq!(input.pointer, near);
        assert!(input.keys.left && !input.keys.right);
    }

    #[test]
    fn test_targets_boss() {
        let state = GameState::start_level(3, Tuning::default(), 1, 0);
        let input = autopilot(&state);
        assert!(input.fire);
        assert_eq!(input.pointer, state.boss.as_ref().unwrap().pos());
    }

    #[test]
    fn test_keys_toward_deadzone() {
        let keys = keys_toward(Vec2::new(1.0, 0.1));
        assert!(keys.right && !keys.up && !keys.down);
        assert_eq!(keys_toward(Vec2::ZERO), MoveKeys::default());
    }
}
