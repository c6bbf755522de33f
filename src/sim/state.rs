//! Game session state and lifecycle
//!
//! A [`GameState`] is one attempt at one level. It is never reset in place:
//! restarting or advancing builds a brand-new session.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Bounds;
use super::boss::Boss;
use super::player::Player;
use super::projectile::Projectile;
use super::spawn;
use super::zombie::Zombie;
use crate::tuning::Tuning;

/// Why a level ended in success
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelOutcome {
    /// Survived until the level timer ran out
    TimeUp,
    /// Reached the kill target early
    KillTarget,
    /// Boss health reached zero
    BossDefeated,
    /// Boss ran off the playfield
    BossEscaped,
}

/// Session state machine; both non-`InProgress` states are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    InProgress,
    LevelComplete(LevelOutcome),
    GameOver,
}

impl SessionPhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionPhase::InProgress)
    }
}

/// Things that happened during a tick, for sound/FX hooks and logging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired { id: u32 },
    ZombieSpawned { id: u32, pos: Vec2 },
    ZombieHit { id: u32, health_left: i32 },
    ZombieKilled { id: u32, score: u64 },
    BossSpawned { pos: Vec2 },
    BossShot { id: u32 },
    BossHit { health_left: i32 },
    BossFled,
    BossEscaped,
    BossDefeated { bonus: u64 },
    PlayerHurt { damage: i32, health_left: i32 },
    LevelComplete(LevelOutcome),
    GameOver,
}

/// One level's worth of game session
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub bounds: Bounds,
    /// Seed this session's RNG was built from
    pub seed: u64,
    pub rng: Pcg32,
    /// 1-based level number
    pub level: u32,
    pub score: u64,
    pub zombies_killed: u32,
    pub level_target: u32,
    /// Clock reading when the level started
    pub started_at: u64,
    pub time_left_ms: u64,
    /// Clock reading of the last zombie spawn, `None` before the first
    pub last_spawn: Option<u64>,
    pub boss_defeated: bool,
    pub phase: SessionPhase,
    pub player: Player,
    /// Active zombies (sorted by id for determinism)
    pub zombies: Vec<Zombie>,
    /// Player bullets (sorted by id for determinism)
    pub bullets: Vec<Projectile>,
    /// Boss bullets (sorted by id for determinism)
    pub enemy_bullets: Vec<Projectile>,
    pub boss: Option<Boss>,
    /// Events since the shell last drained them
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Start `level` with a fresh player in the middle of the playfield
    ///
    /// Out-of-range levels are clamped into `1..=level_count`.
    pub fn start_level(level: u32, tuning: Tuning, seed: u64, now: u64) -> Self {
        let level_count = tuning.session.level_count;
        let clamped = level.clamp(1, level_count.max(1));
        if clamped != level {
            log::warn!("Level {} out of range, starting level {}", level, clamped);
        }

        let bounds = Bounds::new(tuning.arena.width, tuning.arena.height);
        let mut state = Self {
            bounds,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            level: clamped,
            score: 0,
            zombies_killed: 0,
            level_target: tuning.session.kill_target,
            started_at: now,
            time_left_ms: tuning.session.level_duration_ms,
            last_spawn: None,
            boss_defeated: false,
            phase: SessionPhase::InProgress,
            player: Player::new(bounds.center(), &tuning.player),
            zombies: Vec::new(),
            bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            boss: None,
            events: Vec::new(),
            next_id: 1,
            tuning,
        };

        if state.is_boss_level() {
            spawn::spawn_boss(&mut state);
        }

        log::info!(
            "Level {} started{}",
            state.level,
            if state.is_boss_level() { " (boss)" } else { "" }
        );
        state
    }

    /// New session back at level 1 with zero score and full health
    pub fn restart(&self, seed: u64, now: u64) -> Self {
        Self::start_level(1, self.tuning.clone(), seed, now)
    }

    /// New session at `level`; score carries over if the tuning says so
    pub fn advance_to_level(&self, level: u32, seed: u64, now: u64) -> Self {
        let mut next = Self::start_level(level, self.tuning.clone(), seed, now);
        if self.tuning.session.carry_score_between_levels {
            next.score = self.score;
        }
        next
    }

    /// Advance one frame; see [`super::tick::tick`]
    pub fn update(&mut self, input: &super::TickInput, dt: f32, now: u64) {
        super::tick::tick(self, input, dt, now);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    pub fn is_level_complete(&self) -> bool {
        matches!(self.phase, SessionPhase::LevelComplete(_))
    }

    pub fn is_in_progress(&self) -> bool {
        self.phase == SessionPhase::InProgress
    }

    pub fn current_score(&self) -> u64 {
        self.score
    }

    pub fn is_boss_level(&self) -> bool {
        self.tuning.is_boss_level(self.level)
    }

    /// Whether this is the last level of the campaign
    pub fn is_final_level(&self) -> bool {
        self.level >= self.tuning.session.level_count
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Take the events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Enter `LevelComplete`; ignored once the session is already terminal
    pub fn complete_level(&mut self, outcome: LevelOutcome) {
        if self.phase.is_terminal() {
            return;
        }
        self.phase = SessionPhase::LevelComplete(outcome);
        self.events.push(GameEvent::LevelComplete(outcome));
        log::info!(
            "Level {} complete ({:?}), score {}, kills {}",
            self.level,
            outcome,
            self.score,
            self.zombies_killed
        );
    }

    /// Enter `GameOver`; ignored once the session is already terminal
    pub fn end_game(&mut self) {
        if self.phase.is_terminal() {
            return;
        }
        self.phase = SessionPhase::GameOver;
        self.events.push(GameEvent::GameOver);
        log::info!("Game over on level {} with score {}", self.level, self.score);
    }
}
