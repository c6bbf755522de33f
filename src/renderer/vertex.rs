//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Bytes between consecutive vertices in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// View a vertex list as raw bytes for upload to a GPU buffer
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Convert an 8-bit RGB triple to a normalized RGBA color
pub const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements
pub mod colors {
    use super::rgb;

    pub const BACKGROUND: [f32; 4] = rgb(40, 40, 40);
    pub const PLAYER: [f32; 4] = rgb(30, 144, 255);
    pub const GUN: [f32; 4] = rgb(10, 10, 10);
    pub const BULLET: [f32; 4] = rgb(255, 215, 0);
    pub const ZOMBIE: [f32; 4] = rgb(34, 139, 34);
    pub const BOSS: [f32; 4] = rgb(200, 40, 40);
    pub const BOSS_BULLET: [f32; 4] = rgb(255, 80, 80);
    pub const EYES: [f32; 4] = rgb(0, 0, 0);
    pub const BAR_BACK: [f32; 4] = rgb(60, 60, 60);
    pub const PLAYER_HEALTH: [f32; 4] = rgb(50, 205, 50);
    pub const BOSS_HEALTH: [f32; 4] = rgb(220, 60, 60);
    pub const TEXT: [f32; 4] = rgb(255, 255, 255);
    pub const TEXT_DIM: [f32; 4] = rgb(200, 200, 200);
    pub const GAME_OVER: [f32; 4] = rgb(255, 50, 50);
    pub const LEVEL_COMPLETE: [f32; 4] = rgb(255, 255, 0);
    pub const VICTORY: [f32; 4] = rgb(50, 255, 50);
}
