//! Shared kinematic state for every mobile actor
//!
//! Every actor embeds a [`Body`] by value; collision is circle-circle using
//! squared distances so no square root is taken.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::direction_to;

/// Axis-aligned playfield rectangle anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True if `p` lies inside the rectangle (edges inclusive)
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// True if `p` is further than `margin` outside any edge
    pub fn is_beyond(&self, p: Vec2, margin: f32) -> bool {
        p.x < -margin || p.x > self.width + margin || p.y < -margin || p.y > self.height + margin
    }
}

/// Position and collision radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub radius: f32,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self { pos, radius }
    }

    /// Circle overlap test; touching (and coincident) circles count as overlapping
    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        let reach = self.radius + other.radius;
        self.pos.distance_squared(other.pos) <= reach * reach
    }

    /// Move along `dir` (expected unit length or zero) at `speed` for `dt` ticks
    #[inline]
    pub fn advance(&mut self, dir: Vec2, speed: f32, dt: f32) {
        self.pos += dir * speed * dt.max(0.0);
    }

    /// Step toward `target`; stays put when already on top of it
    pub fn seek(&mut self, target: Vec2, speed: f32, dt: f32) {
        let (dir, _) = direction_to(self.pos, target);
        self.advance(dir, speed, dt);
    }

    /// Step directly away from `threat`; stays put when on top of it
    pub fn flee(&mut self, threat: Vec2, speed: f32, dt: f32) {
        let (dir, _) = direction_to(threat, self.pos);
        self.advance(dir, speed, dt);
    }

    /// Keep the whole circle inside `bounds`
    pub fn clamp_to(&mut self, bounds: &Bounds) {
        self.pos.x = self.pos.x.clamp(self.radius, bounds.width - self.radius);
        self.pos.y = self.pos.y.clamp(self.radius, bounds.height - self.radius);
    }
}
