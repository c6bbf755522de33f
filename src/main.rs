//! Zombie Shooter entry point
//!
//! Native builds run a headless attract-mode campaign: the autopilot plays
//! through every level on a simulated 60 Hz clock and the outcome is logged.
//! Windowed shells drive [`zombie_shooter::Game`] the same way, with real
//! input and a [`zombie_shooter::platform::SystemClock`].
//!
//! Environment:
//! - `ZOMBIE_SHOOTER_TUNING`: path to a JSON tuning file
//! - `ZOMBIE_SHOOTER_SEED`: campaign seed (decimal)
//! - `RUST_LOG`: log filter (e.g. `debug`)
//!
//! Pass `--dump-scene` to tessellate the final frame and print its scene as JSON.

use zombie_shooter::platform::{Clock, FrameTimer, ManualClock};
use zombie_shooter::renderer::scene_vertices;
use zombie_shooter::renderer::vertex::as_bytes;
use zombie_shooter::sim::autopilot;
use zombie_shooter::{Flow, Game, ShellEvent, Tuning};

const DEFAULT_SEED: u64 = 0x5EED;
/// Safety stop for the headless run (ten minutes of game time)
const MAX_FRAMES: u64 = 60 * 60 * 10;

fn main() {
    env_logger::init();
    log::info!("Zombie Shooter (headless) starting...");

    let tuning = match std::env::var("ZOMBIE_SHOOTER_TUNING") {
        Ok(path) => Tuning::load_or_default(path),
        Err(_) => Tuning::default(),
    };
    let seed = std::env::var("ZOMBIE_SHOOTER_SEED")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let dump_scene = std::env::args().any(|a| a == "--dump-scene");

    let game = run_attract(tuning, seed);

    let state = game.state();
    println!(
        "Level {} | Score: {} | Kills: {} | Health: {} | {:?}",
        state.level, state.score, state.zombies_killed, state.player.health, state.phase
    );

    if dump_scene {
        let scene = game.scene();
        let vertices = scene_vertices(&scene);
        log::info!(
            "Final scene: {} vertices, {} bytes",
            vertices.len(),
            as_bytes(&vertices).len()
        );
        match serde_json::to_string_pretty(&scene) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize scene: {}", e),
        }
    }
}

/// Let the autopilot play until it dies, wins, or runs out of frames
fn run_attract(tuning: Tuning, seed: u64) -> Game {
    let mut timer = FrameTimer::new(tuning.arena.fps);
    let frame_ms = timer.tick_ms();
    let mut clock = ManualClock::default();
    let mut game = Game::new(tuning, seed, clock.now_ms());
    let mut carry = 0.0f32;

    for _ in 0..MAX_FRAMES {
        // Accumulate fractional milliseconds so the clock keeps pace with 60 Hz
        carry += frame_ms;
        let whole = carry.floor();
        carry -= whole;
        let now = clock.advance(whole as u64);
        let dt = timer.frame(now);

        if game.is_game_over() {
            log::info!("Autopilot died on level {}", game.state().level);
            break;
        }
        let presses: &[ShellEvent] = if game.is_level_complete() {
            &[ShellEvent::AdvanceLevel]
        } else {
            &[]
        };

        let input = autopilot(game.state());
        if game.frame(&input, presses, dt, now) == Flow::Quit {
            break;
        }
    }

    game
}
