//! Campaign controller
//!
//! Owns the current session and replaces it on restart or level advance.
//! Shells feed it one [`TickInput`] plus any discrete key presses per frame.

use glam::Vec2;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::renderer::Scene;
use crate::sim::{GameEvent, GameState, TickInput};
use crate::tuning::Tuning;

/// Discrete key presses the shell forwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// Start over from level 1 (only after a game over)
    Restart,
    /// Continue to the next level (only after a level is complete)
    AdvanceLevel,
    /// Leave after a completed level
    QuitLevel,
}

/// Whether the shell should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Game {
    tuning: Tuning,
    state: GameState,
    /// Seeds every session this campaign creates
    seeds: Pcg32,
    /// Events produced by the most recent frame
    events: Vec<GameEvent>,
    /// Pointer seen on the most recent frame, for scene building
    pointer: Vec2,
}

impl Game {
    /// New campaign at level 1
    pub fn new(tuning: Tuning, seed: u64, now: u64) -> Self {
        Self::start_level(tuning, seed, 1, now)
    }

    /// New campaign starting at `level`
    pub fn start_level(tuning: Tuning, seed: u64, level: u32, now: u64) -> Self {
        let mut seeds = Pcg32::seed_from_u64(seed);
        let state = GameState::start_level(level, tuning.clone(), seeds.next_u64(), now);
        Self {
            tuning,
            state,
            seeds,
            events: Vec::new(),
            pointer: Vec2::ZERO,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Events produced by the most recent frame
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Handle this frame's key presses, then advance the session
    pub fn frame(&mut self, input: &TickInput, presses: &[ShellEvent], dt: f32, now: u64) -> Flow {
        for press in presses {
            if self.handle(*press, now) == Flow::Quit {
                return Flow::Quit;
            }
        }

        self.pointer = input.pointer;
        let mut input = *input;
        if self.state.is_level_complete() {
            input.fire = false;
        }
        self.update(&input, dt, now);
        Flow::Continue
    }

    /// Advance the current session one frame
    pub fn update(&mut self, input: &TickInput, dt: f32, now: u64) {
        self.state.update(input, dt, now);
        self.events = self.state.drain_events();
        for event in &self.events {
            log::debug!("{:?}", event);
        }
    }

    fn handle(&mut self, press: ShellEvent, now: u64) -> Flow {
        match press {
            ShellEvent::Restart if self.state.is_game_over() => self.restart(now),
            ShellEvent::AdvanceLevel if self.state.is_level_complete() => {
                if self.state.is_final_level() {
                    log::info!("Campaign won with score {}", self.state.score);
                    return Flow::Quit;
                }
                self.advance_to_level(self.state.level + 1, now);
            }
            ShellEvent::QuitLevel if self.state.is_level_complete() => return Flow::Quit,
            _ => {}
        }
        Flow::Continue
    }

    /// Throw the session away and start over at level 1
    pub fn restart(&mut self, now: u64) {
        let seed = self.seeds.next_u64();
        self.state = self.state.restart(seed, now);
    }

    /// Replace the session with a fresh one at `level`
    pub fn advance_to_level(&mut self, level: u32, now: u64) {
        let seed = self.seeds.next_u64();
        self.state = self.state.advance_to_level(level, seed, now);
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn is_level_complete(&self) -> bool {
        self.state.is_level_complete()
    }

    pub fn current_score(&self) -> u64 {
        self.state.current_score()
    }

    /// Renderable description of the current frame
    pub fn scene(&self) -> Scene {
        Scene::from_state(&self.state, self.pointer)
    }
}
