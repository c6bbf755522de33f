//! Renderable description of a session
//!
//! Built from a [`GameState`] each frame. Shells draw it however they like:
//! tessellate the shapes with [`super::shapes::scene_vertices`] and render
//! the text items with their own font stack.

use glam::Vec2;
use serde::Serialize;

use super::vertex::colors;
use crate::sim::{GameState, SessionPhase};

/// Barrel length drawn from the player's center toward the pointer
const GUN_LENGTH: f32 = 26.0;
const GUN_WIDTH: f32 = 6.0;
const PLAYER_BAR: Vec2 = Vec2::new(60.0, 8.0);
/// Gap between the top of the player and its health bar
const PLAYER_BAR_GAP: f32 = 14.0;
const BOSS_BAR: Vec2 = Vec2::new(300.0, 14.0);
const BOSS_BAR_TOP: f32 = 50.0;
/// Alpha of the darkening overlay behind end-of-level messages
const GAME_OVER_DIM: f32 = 160.0 / 255.0;
const LEVEL_COMPLETE_DIM: f32 = 150.0 / 255.0;

/// What a circle in the scene depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DrawKind {
    Player,
    Zombie,
    Boss,
    Bullet,
    BossBullet,
    Eye,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub kind: DrawKind,
    pub center: Vec2,
    pub radius: f32,
    pub color: [f32; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: [f32; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthBar {
    /// Top-left corner
    pub origin: Vec2,
    pub size: Vec2,
    /// Filled portion, 0..=1
    pub fraction: f32,
    /// Inset of the fill from the bar's edge
    pub inset: f32,
    pub fill: [f32; 4],
    pub back: [f32; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextSize {
    Normal,
    Large,
}

/// Where a text item is anchored horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub content: String,
    pub pos: Vec2,
    pub align: Align,
    pub size: TextSize,
    pub color: [f32; 4],
}

impl Text {
    fn centered(content: String, y: f32, width: f32, size: TextSize, color: [f32; 4]) -> Self {
        Self {
            content,
            pos: Vec2::new(width / 2.0, y),
            align: Align::Center,
            size,
            color,
        }
    }
}

/// End-of-level screen drawn over the playfield
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    /// Alpha of the black fill behind the text
    pub dim: f32,
    pub texts: Vec<Text>,
}

/// Everything a shell needs to draw one frame, back to front
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub size: Vec2,
    pub background: [f32; 4],
    pub circles: Vec<Circle>,
    pub lines: Vec<Line>,
    pub bars: Vec<HealthBar>,
    pub texts: Vec<Text>,
    pub overlay: Option<Overlay>,
}

impl Scene {
    /// Describe `state` as seen with the pointer at `pointer`
    pub fn from_state(state: &GameState, pointer: Vec2) -> Self {
        let size = Vec2::new(state.bounds.width, state.bounds.height);
        let mut scene = Self {
            size,
            background: colors::BACKGROUND,
            circles: Vec::new(),
            lines: Vec::new(),
            bars: Vec::new(),
            texts: vec![Text {
                content: hud_text(state),
                pos: Vec2::new(10.0, 10.0),
                align: Align::Left,
                size: TextSize::Normal,
                color: colors::TEXT,
            }],
            overlay: None,
        };

        for bullet in &state.bullets {
            scene.circle(DrawKind::Bullet, bullet.pos(), bullet.body.radius, colors::BULLET);
        }
        for zombie in &state.zombies {
            scene.circle(DrawKind::Zombie, zombie.pos(), zombie.body.radius, colors::ZOMBIE);
            scene.eyes(zombie.pos(), 6.0, 3.0, 3.0);
        }
        if let Some(boss) = &state.boss {
            scene.circle(DrawKind::Boss, boss.pos(), boss.body.radius, colors::BOSS);
            scene.eyes(boss.pos(), 8.0, 4.0, 4.0);
            scene.bars.push(HealthBar {
                origin: Vec2::new((size.x - BOSS_BAR.x) / 2.0, BOSS_BAR_TOP),
                size: BOSS_BAR,
                fraction: boss.health_fraction(),
                inset: 2.0,
                fill: colors::BOSS_HEALTH,
                back: colors::BAR_BACK,
            });
            scene.texts.push(Text::centered(
                "Boss HP".to_string(),
                BOSS_BAR_TOP - 22.0,
                size.x,
                TextSize::Normal,
                colors::TEXT,
            ));
        }
        for bullet in &state.enemy_bullets {
            scene.circle(DrawKind::BossBullet, bullet.pos(), bullet.body.radius, colors::BOSS_BULLET);
        }

        let player = &state.player;
        scene.circle(DrawKind::Player, player.pos(), player.body.radius, colors::PLAYER);
        let (aim, _) = crate::direction_to(player.pos(), pointer);
        scene.lines.push(Line {
            from: player.pos(),
            to: player.pos() + aim * GUN_LENGTH,
            width: GUN_WIDTH,
            color: colors::GUN,
        });
        scene.bars.push(HealthBar {
            origin: Vec2::new(
                player.pos().x - PLAYER_BAR.x / 2.0,
                player.pos().y - player.body.radius - PLAYER_BAR_GAP,
            ),
            size: PLAYER_BAR,
            fraction: player.health_fraction(),
            inset: 1.0,
            fill: colors::PLAYER_HEALTH,
            back: colors::BAR_BACK,
        });

        scene.overlay = overlay(state, size);
        scene
    }

    fn circle(&mut self, kind: DrawKind, center: Vec2, radius: f32, color: [f32; 4]) {
        self.circles.push(Circle {
            kind,
            center,
            radius,
            color,
        });
    }

    fn eyes(&mut self, center: Vec2, spread: f32, lift: f32, radius: f32) {
        for side in [-1.0, 1.0] {
            let eye = center + Vec2::new(side * spread, -lift);
            self.circle(DrawKind::Eye, eye, radius, colors::EYES);
        }
    }
}

/// "Level n | Score: s | Time: mm:ss"; the boss level shows no timer
pub fn hud_text(state: &GameState) -> String {
    let mut text = format!("Level {} | Score: {}", state.level, state.score);
    if !state.is_boss_level() {
        text.push_str(&format!(" | {}", format_time(state.time_left_ms)));
    }
    text
}

/// Remaining time as "Time: mm:ss", rounded down to whole seconds
pub fn format_time(ms: u64) -> String {
    let seconds = ms / 1000;
    format!("Time: {:02}:{:02}", seconds / 60, seconds % 60)
}

fn overlay(state: &GameState, size: Vec2) -> Option<Overlay> {
    let mid = size.y / 2.0;
    let texts = match state.phase {
        SessionPhase::InProgress => return None,
        SessionPhase::GameOver => vec![
            Text::centered("GAME OVER".into(), mid - 80.0, size.x, TextSize::Large, colors::GAME_OVER),
            Text::centered(
                format!("Final Score: {}", state.score),
                mid - 20.0,
                size.x,
                TextSize::Normal,
                colors::TEXT,
            ),
            Text::centered("Press R to restart".into(), mid + 24.0, size.x, TextSize::Normal, colors::TEXT_DIM),
        ],
        SessionPhase::LevelComplete(_) if state.is_final_level() => vec![
            Text::centered("YOU WIN!".into(), mid - 40.0, size.x, TextSize::Large, colors::VICTORY),
            Text::centered("Press N to quit".into(), mid + 20.0, size.x, TextSize::Normal, colors::TEXT),
        ],
        SessionPhase::LevelComplete(_) => vec![
            Text::centered(
                format!("Level {} Complete!", state.level),
                mid - 40.0,
                size.x,
                TextSize::Large,
                colors::LEVEL_COMPLETE,
            ),
            Text::centered(
                "Press Y to continue or N to quit".into(),
                mid + 20.0,
                size.x,
                TextSize::Normal,
                colors::TEXT,
            ),
        ],
    };
    let dim = if state.is_game_over() {
        GAME_OVER_DIM
    } else {
        LEVEL_COMPLETE_DIM
    };
    Some(Overlay { dim, texts })
}
