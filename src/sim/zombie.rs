//! Zombies: walk straight at the player, soak up a few hits

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zombie {
    pub id: u32,
    pub body: Body,
    /// Drawn once at spawn
    pub speed: f32,
    pub health: i32,
}

impl Zombie {
    pub fn new(id: u32, pos: Vec2, radius: f32, speed: f32, health: i32) -> Self {
        Self {
            id,
            body: Body::new(pos, radius),
            speed,
            health,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn update(&mut self, dt: f32, player_pos: Vec2) {
        self.body.seek(player_pos, self.speed, dt);
    }
}
