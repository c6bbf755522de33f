//! Straight-flying projectiles from the player and the boss

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, Bounds};
use crate::elapsed_ms;
use crate::tuning::ProjectileTuning;

/// Who fired the projectile (and therefore what it can hurt)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Fired by the player, hurts zombies and the boss
    Friendly,
    /// Fired by the boss, hurts the player
    Hostile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub kind: ProjectileKind,
    pub body: Body,
    pub vel: Vec2,
    pub spawned_at: u64,
    pub lifetime_ms: u64,
    pub damage: i32,
    /// Cleared when the projectile expires, leaves the field or hits something
    pub alive: bool,
}

impl Projectile {
    /// Launch from `origin` along `dir` (unit or zero) with the given tuning
    pub fn launch(
        id: u32,
        kind: ProjectileKind,
        origin: Vec2,
        dir: Vec2,
        tuning: &ProjectileTuning,
        now: u64,
    ) -> Self {
        Self {
            id,
            kind,
            body: Body::new(origin, tuning.radius),
            vel: dir * tuning.speed,
            spawned_at: now,
            lifetime_ms: tuning.lifetime_ms,
            damage: tuning.damage,
            alive: true,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn is_expired(&self, now: u64) -> bool {
        elapsed_ms(self.spawned_at, now) > self.lifetime_ms
    }

    /// Fly for `dt` ticks, then die if too old or outside the playfield
    pub fn update(&mut self, dt: f32, now: u64, bounds: &Bounds) {
        self.body.pos += self.vel * dt.max(0.0);
        if self.is_expired(now) || !bounds.contains(self.body.pos) {
            self.alive = false;
        }
    }
}
