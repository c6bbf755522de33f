//! Spawn policy: zombies on a timer, one boss on the final level
//!
//! Everything enters from a random point just outside a random edge.

use glam::Vec2;
use rand::Rng;

use super::body::Bounds;
use super::boss::Boss;
use super::state::{GameEvent, GameState};
use super::zombie::Zombie;
use crate::elapsed_ms;

/// Playfield edge a spawn comes in from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Uniform point along `edge`, pushed `offset` units outside the playfield
pub fn edge_point(rng: &mut impl Rng, edge: Edge, bounds: &Bounds, offset: f32) -> Vec2 {
    match edge {
        Edge::Top => Vec2::new(rng.random_range(0.0..=bounds.width), -offset),
        Edge::Bottom => Vec2::new(rng.random_range(0.0..=bounds.width), bounds.height + offset),
        Edge::Left => Vec2::new(-offset, rng.random_range(0.0..=bounds.height)),
        Edge::Right => Vec2::new(bounds.width + offset, rng.random_range(0.0..=bounds.height)),
    }
}

/// Spawn one zombie with level-scaled speed and health
pub fn spawn_zombie(state: &mut GameState) -> u32 {
    let tuning = state.tuning.zombie;
    let edge = Edge::random(&mut state.rng);
    let pos = edge_point(&mut state.rng, edge, &state.bounds, tuning.spawn_offset);
    let (lo, hi) = tuning.speed_range(state.level);
    let speed = state.rng.random_range(lo..=hi);
    let health = tuning.health_for(state.level);

    let id = state.next_entity_id();
    state
        .zombies
        .push(Zombie::new(id, pos, tuning.radius, speed, health));
    state.events.push(GameEvent::ZombieSpawned { id, pos });
    log::debug!(
        "Zombie {} spawned at ({:.0}, {:.0}) speed {:.2} hp {}",
        id,
        pos.x,
        pos.y,
        speed,
        health
    );
    id
}

/// Place the boss just outside a random edge
pub fn spawn_boss(state: &mut GameState) {
    let tuning = state.tuning.boss;
    let edge = Edge::random(&mut state.rng);
    let pos = edge_point(&mut state.rng, edge, &state.bounds, tuning.spawn_offset);
    state.boss = Some(Boss::new(pos, &tuning));
    state.events.push(GameEvent::BossSpawned { pos });
    log::info!("Boss spawned at ({:.0}, {:.0})", pos.x, pos.y);
}

/// Run the spawn policy for this frame
///
/// Regular levels get a zombie whenever the level's spawn interval has
/// passed. The boss level never spawns zombies; it keeps exactly one boss
/// alive until that boss has been defeated.
pub fn run(state: &mut GameState, now: u64) {
    if state.is_boss_level() {
        if state.boss.is_none() && !state.boss_defeated {
            spawn_boss(state);
        }
        return;
    }

    let interval = state.tuning.zombie.spawn_interval_ms(state.level);
    let due = match state.last_spawn {
        None => true,
        Some(last) => elapsed_ms(last, now) > interval,
    };
    if due {
        spawn_zombie(state);
        state.last_spawn = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_edge_points_sit_outside() {
        let bounds = Bounds::new(900.0, 600.0);
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..200 {
            let edge = Edge::random(&mut rng);
            let p = edge_point(&mut rng, edge, &bounds, 30.0);
            match edge {
                Edge::Top => assert_eq!(p.y, -30.0),
                Edge::Bottom => assert_eq!(p.y, 630.0),
                Edge::Left => assert_eq!(p.x, -30.0),
                Edge::Right => assert_eq!(p.x, 930.0),
            }
            assert!((-30.0..=930.0).contains(&p.x));
            assert!((-30.0..=630.0).contains(&p.y));
        }
    }

    #[test]
    fn test_zombie_stats_scale_with_level() {
        let mut state = GameState::start_level(2, Tuning::default(), 11, 0);
        for _ in 0..50 {
            spawn_zombie(&mut state);
        }
        for z in &state.zombies {
            assert_eq!(z.health, 4);
            assert!(z.speed >= 1.0 - 1e-5 && z.speed <= 2.2 + 1e-5);
            assert_eq!(z.body.radius, 20.0);
        }
    }

    #[test]
    fn test_spawn_timer() {
        let mut state = GameState::start_level(1, Tuning::default(), 5, 0);
        run(&mut state, 100);
        assert_eq!(state.zombies.len(), 1, "first spawn is immediate");
        run(&mut state, 1900);
        assert_eq!(state.zombies.len(), 1, "interval is 1800ms on level 1, strictly exceeded");
        run(&mut state, 1901);
        assert_eq!(state.zombies.len(), 2);
    }

    #[test]
    fn test_boss_level_never_spawns_zombies() {
        let mut state = GameState::start_level(3, Tuning::default(), 5, 0);
        for t in 0..20 {
            run(&mut state, t * 5000);
        }
        assert!(state.zombies.is_empty());
        assert!(state.boss.is_some());
    }

    #[test]
    fn test_defeated_boss_never_respawns() {
        let mut state = GameState::start_level(3, Tuning::default(), 5, 0);
        state.boss = None;
        state.boss_defeated = true;
        run(&mut state, 1000);
        assert!(state.boss.is_none());

        state.boss_defeated = false;
        run(&mut state, 2000);
        assert!(state.boss.is_some());
    }

    #[test]
    fn test_spawns_are_deterministic_per_seed() {
        let mut a = GameState::start_level(1, Tuning::default(), 42, 0);
        let mut b = GameState::start_level(1, Tuning::default(), 42, 0);
        spawn_zombie(&mut a);
        spawn_zombie(&mut b);
        assert_eq!(a.zombies[0].pos(), b.zombies[0].pos());
        assert_eq!(a.zombies[0].speed, b.zombies[0].speed);
    }
}
