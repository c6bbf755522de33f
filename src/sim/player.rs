//! The player character

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, Bounds};
use super::projectile::{Projectile, ProjectileKind};
use crate::tuning::{PlayerTuning, ProjectileTuning};
use crate::{direction_to, elapsed_ms};

/// Held direction keys for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveKeys {
    /// Normalized sum of the held axes; opposing keys cancel out
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down)).normalize_or_zero()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub health: i32,
    pub max_health: i32,
    pub speed: f32,
    pub muzzle: f32,
    pub shot_cooldown_ms: u64,
    /// Clock reading of the last shot, `None` before the first one
    pub last_shot: Option<u64>,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &PlayerTuning) -> Self {
        Self {
            body: Body::new(pos, tuning.radius),
            health: tuning.max_health,
            max_health: tuning.max_health,
            speed: tuning.speed,
            muzzle: tuning.muzzle,
            shot_cooldown_ms: tuning.shot_cooldown_ms,
            last_shot: None,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Health as a 0..=1 fraction for health bars
    pub fn health_fraction(&self) -> f32 {
        self.health.max(0) as f32 / self.max_health as f32
    }

    /// Move under directional input, then clamp inside the playfield
    pub fn update(&mut self, dt: f32, keys: MoveKeys, bounds: &Bounds) {
        self.body.advance(keys.direction(), self.speed, dt);
        self.body.clamp_to(bounds);
    }

    pub fn can_shoot(&self, now: u64) -> bool {
        match self.last_shot {
            None => true,
            Some(last) => now >= last && elapsed_ms(last, now) >= self.shot_cooldown_ms,
        }
    }

    /// Fire toward `target` if the cooldown allows it
    ///
    /// The bullet starts `muzzle` units out along the aim direction. Aiming
    /// at the player's own center yields a motionless bullet at the center.
    pub fn try_shoot(
        &mut self,
        id: u32,
        target: Vec2,
        bullet: &ProjectileTuning,
        now: u64,
    ) -> Option<Projectile> {
        if !self.can_shoot(now) {
            return None;
        }
        self.last_shot = Some(now);
        let (dir, _) = direction_to(self.body.pos, target);
        let origin = self.body.pos + dir * self.muzzle;
        Some(Projectile::launch(id, ProjectileKind::Friendly, origin, dir, bullet, now))
    }

    /// Apply damage, returning the health left
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.health = self.health.saturating_sub(amount).max(0);
        self.health
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player() -> Player {
        Player::new(Vec2::new(450.0, 300.0), &PlayerTuning::default())
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let keys = MoveKeys {
            up: true,
            right: true,
            ..Default::default()
        };
        let dir = keys.direction();
        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert!(dir.x > 0.0 && dir.y < 0.0);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let keys = MoveKeys {
            up: true,
            down: true,
            left: true,
            right: true,
        };
        assert_eq!(keys.direction(), Vec2::ZERO);
    }

    #[test]
    fn test_move_right_one_tick() {
        let mut p = player();
        let keys = MoveKeys {
            right: true,
            ..Default::default()
        };
        p.update(1.0, keys, &Bounds::new(900.0, 600.0));
        assert!((p.pos().x - 454.0).abs() < 1e-5);
    }

    #[test]
    fn test_cooldown_blocks_second_shot() {
        let mut p = player();
        let bullet = ProjectileTuning::friendly();
        let target = Vec2::new(600.0, 300.0);
        assert!(p.try_shoot(1, target, &bullet, 1000).is_some());
        assert!(p.try_shoot(2, target, &bullet, 1179).is_none());
        assert!(p.try_shoot(3, target, &bullet, 1180).is_some());
    }

    #[test]
    fn test_clock_going_backwards_does_not_fire() {
        let mut p = player();
        let bullet = ProjectileTuning::friendly();
        assert!(p.try_shoot(1, Vec2::ZERO, &bullet, 5000).is_some());
        assert!(p.try_shoot(2, Vec2::ZERO, &bullet, 100).is_none());
    }

    #[test]
    fn test_bullet_spawns_at_muzzle() {
        let mut p = player();
        let b = p
            .try_shoot(7, Vec2::new(450.0, 0.0), &ProjectileTuning::friendly(), 0)
            .unwrap();
        assert_eq!(b.id, 7);
        assert_eq!(b.kind, ProjectileKind::Friendly);
        assert!((b.pos() - Vec2::new(450.0, 272.0)).length() < 1e-4);
        assert!((b.vel - Vec2::new(0.0, -12.0)).length() < 1e-4);
    }

    #[test]
    fn test_aim_at_self_fires_still_bullet() {
        let mut p = player();
        let b = p
            .try_shoot(1, p.pos(), &ProjectileTuning::friendly(), 0)
            .unwrap();
        assert_eq!(b.vel, Vec2::ZERO);
        assert_eq!(b.pos(), p.pos());
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let mut p = player();
        p.health = 1;
        assert_eq!(p.take_damage(2), 0);
        assert!(p.is_dead());
        assert_eq!(p.take_damage(i32::MAX), 0);
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_bounds(
            start_x in -200.0f32..1100.0,
            start_y in -200.0f32..800.0,
            dt in -5.0f32..50.0,
            up: bool, down: bool, left: bool, right: bool,
        ) {
            let bounds = Bounds::new(900.0, 600.0);
            let mut p = Player::new(Vec2::new(start_x, start_y), &PlayerTuning::default());
            p.update(dt, MoveKeys { up, down, left, right }, &bounds);
            let r = p.body.radius;
            prop_assert!(p.pos().x >= r && p.pos().x <= bounds.width - r);
            prop_assert!(p.pos().y >= r && p.pos().y <= bounds.height - r);
        }

        #[test]
        fn prop_cooldown_window_yields_one_shot(first in 0u64..1_000_000, gap in 0u64..180) {
            let mut p = player();
            let bullet = ProjectileTuning::friendly();
            let target = Vec2::new(0.0, 0.0);
            prop_assert!(p.try_shoot(1, target, &bullet, first).is_some());
            prop_assert!(p.try_shoot(2, target, &bullet, first + gap).is_none());
            prop_assert!(p.try_shoot(3, target, &bullet, first + 180).is_some());
        }
    }
}
