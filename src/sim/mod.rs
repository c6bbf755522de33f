//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time is injected by the caller (no clock reads)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod body;
pub mod boss;
pub mod collision;
pub mod player;
pub mod projectile;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod zombie;

pub use autopilot::autopilot;
pub use body::{Body, Bounds};
pub use boss::{Boss, BossHit, BossPhase};
pub use player::{MoveKeys, Player};
pub use projectile::{Projectile, ProjectileKind};
pub use state::{GameEvent, GameState, LevelOutcome, SessionPhase};
pub use tick::{TickInput, tick};
pub use zombie::Zombie;
