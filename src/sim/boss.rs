//! The final-level boss
//!
//! Two phases: it pursues the player and fires on a cooldown until its
//! health drops below the flee threshold, then it runs straight away from
//! the player until it is far enough off-screen to count as escaped. The
//! switch to fleeing is one-way.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, Bounds};
use super::projectile::{Projectile, ProjectileKind};
use crate::tuning::{BossTuning, ProjectileTuning};
use crate::{direction_to, elapsed_ms};

/// Behavior phase of the boss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPhase {
    Pursuing,
    Fleeing,
}

/// What a hit did to the boss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossHit {
    /// Damaged, behavior unchanged
    Wounded,
    /// Damaged and switched to fleeing on this hit
    StartedFleeing,
    /// Health reached zero
    Defeated,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub body: Body,
    pub speed: f32,
    pub flee_speed: f32,
    pub health: i32,
    pub max_health: i32,
    pub flee_threshold: i32,
    pub escape_margin: f32,
    pub attack_cooldown_ms: u64,
    pub muzzle_gap: f32,
    pub last_attack: Option<u64>,
    pub phase: BossPhase,
    /// Set once the fleeing boss is past the escape margin
    pub escaped: bool,
}

impl Boss {
    pub fn new(pos: Vec2, tuning: &BossTuning) -> Self {
        Self {
            body: Body::new(pos, tuning.radius),
            speed: tuning.speed,
            flee_speed: tuning.flee_speed,
            health: tuning.max_health,
            max_health: tuning.max_health,
            flee_threshold: tuning.flee_threshold,
            escape_margin: tuning.escape_margin,
            attack_cooldown_ms: tuning.attack_cooldown_ms,
            muzzle_gap: tuning.muzzle_gap,
            last_attack: None,
            phase: BossPhase::Pursuing,
            escaped: false,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn is_fleeing(&self) -> bool {
        self.phase == BossPhase::Fleeing
    }

    pub fn health_fraction(&self) -> f32 {
        self.health.max(0) as f32 / self.max_health as f32
    }

    pub fn update(&mut self, dt: f32, player_pos: Vec2, bounds: &Bounds) {
        match self.phase {
            BossPhase::Pursuing => self.body.seek(player_pos, self.speed, dt),
            BossPhase::Fleeing => {
                self.body.flee(player_pos, self.flee_speed, dt);
                if bounds.is_beyond(self.body.pos, self.escape_margin) {
                    self.escaped = true;
                }
            }
        }
    }

    /// Ready to fire: pursuing and off cooldown
    pub fn can_attack(&self, now: u64) -> bool {
        if self.is_fleeing() {
            return false;
        }
        match self.last_attack {
            None => true,
            Some(last) => now >= last && elapsed_ms(last, now) >= self.attack_cooldown_ms,
        }
    }

    /// Fire at `target` if ready; the shot starts just outside the boss's edge
    pub fn try_attack(
        &mut self,
        id: u32,
        target: Vec2,
        bullet: &ProjectileTuning,
        now: u64,
    ) -> Option<Projectile> {
        if !self.can_attack(now) {
            return None;
        }
        self.last_attack = Some(now);
        let (dir, _) = direction_to(self.body.pos, target);
        let origin = self.body.pos + dir * (self.body.radius + self.muzzle_gap);
        Some(Projectile::launch(id, ProjectileKind::Hostile, origin, dir, bullet, now))
    }

    /// Apply damage and report the resulting transition
    ///
    /// Defeat takes precedence: a killing blow never flags fleeing.
    pub fn take_hit(&mut self, damage: i32) -> BossHit {
        self.health -= damage;
        if self.health <= 0 {
            BossHit::Defeated
        } else if self.health < self.flee_threshold && self.phase == BossPhase::Pursuing {
            self.phase = BossPhase::Fleeing;
            BossHit::StartedFleeing
        } else {
            BossHit::Wounded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boss_at(pos: Vec2) -> Boss {
        Boss::new(pos, &BossTuning::default())
    }

    #[test]
    fn test_flee_transition_happens_once() {
        let mut boss = boss_at(Vec2::new(100.0, 100.0));
        boss.health = 21;
        assert_eq!(boss.take_hit(1), BossHit::Wounded); // 20 is not below 20
        assert_eq!(boss.take_hit(1), BossHit::StartedFleeing);
        assert!(boss.is_fleeing());
        for _ in 0..5 {
            assert_eq!(boss.take_hit(1), BossHit::Wounded);
            assert!(boss.is_fleeing());
        }
    }

    #[test]
    fn test_killing_blow_does_not_flee() {
        let mut boss = boss_at(Vec2::new(100.0, 100.0));
        boss.health = 1;
        assert_eq!(boss.take_hit(1), BossHit::Defeated);
        assert_eq!(boss.phase, BossPhase::Pursuing);
    }

    #[test]
    fn test_fleeing_boss_does_not_attack() {
        let mut boss = boss_at(Vec2::new(100.0, 100.0));
        boss.phase = BossPhase::Fleeing;
        let shot = boss.try_attack(1, Vec2::ZERO, &ProjectileTuning::hostile(), 10_000);
        assert!(shot.is_none());
    }

    #[test]
    fn test_attack_cooldown_and_muzzle() {
        let mut boss = boss_at(Vec2::new(100.0, 100.0));
        let bullet = ProjectileTuning::hostile();
        let shot = boss
            .try_attack(1, Vec2::new(300.0, 100.0), &bullet, 0)
            .unwrap();
        assert_eq!(shot.kind, ProjectileKind::Hostile);
        assert!((shot.pos() - Vec2::new(132.0, 100.0)).length() < 1e-4);
        assert!((shot.vel - Vec2::new(6.0, 0.0)).length() < 1e-4);
        assert!(boss.try_attack(2, Vec2::ZERO, &bullet, 1199).is_none());
        assert!(boss.try_attack(3, Vec2::ZERO, &bullet, 1200).is_some());
    }

    #[test]
    fn test_fleeing_boss_escapes_past_margin() {
        let bounds = Bounds::new(900.0, 600.0);
        let mut boss = boss_at(Vec2::new(5.0, 300.0));
        boss.phase = BossPhase::Fleeing;
        let player = Vec2::new(450.0, 300.0);
        let mut ticks = 0;
        while !boss.escaped {
            boss.update(1.0, player, &bounds);
            ticks += 1;
            assert!(ticks < 100, "boss never escaped");
        }
        assert!(boss.pos().x < -40.0);
    }

    #[test]
    fn test_pursuing_boss_approaches() {
        let bounds = Bounds::new(900.0, 600.0);
        let mut boss = boss_at(Vec2::new(0.0, 300.0));
        boss.update(1.0, Vec2::new(450.0, 300.0), &bounds);
        assert!((boss.pos().x - 1.2).abs() < 1e-5);
        assert!(!boss.escaped);
    }
}
