//! Data-driven game balance
//!
//! Every gameplay constant lives here and is handed to the simulation
//! explicitly. Loaded from JSON; any field left out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, TuningError>;

/// Playfield rectangle, anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaTuning {
    pub width: f32,
    pub height: f32,
    /// Nominal frame rate the `dt` multiplier is normalized to
    pub fps: u32,
}

impl Default for ArenaTuning {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            fps: FPS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub speed: f32,
    pub radius: f32,
    pub max_health: i32,
    pub shot_cooldown_ms: u64,
    /// Distance from the player's center where bullets appear
    pub muzzle: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            radius: PLAYER_RADIUS,
            max_health: PLAYER_MAX_HEALTH,
            shot_cooldown_ms: PLAYER_SHOT_COOLDOWN_MS,
            muzzle: PLAYER_MUZZLE,
        }
    }
}

/// Gameplay tuning for one kind of projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileTuning {
    /// Distance travelled per nominal tick
    pub speed: f32,
    pub radius: f32,
    /// Lifetime before the projectile is despawned
    pub lifetime_ms: u64,
    /// Health removed from whatever it hits
    pub damage: i32,
}

impl ProjectileTuning {
    pub fn friendly() -> Self {
        Self {
            speed: BULLET_SPEED,
            radius: BULLET_RADIUS,
            lifetime_ms: BULLET_LIFETIME_MS,
            damage: 1,
        }
    }

    pub fn hostile() -> Self {
        Self {
            speed: BOSS_BULLET_SPEED,
            radius: BOSS_BULLET_RADIUS,
            lifetime_ms: BOSS_BULLET_LIFETIME_MS,
            damage: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZombieTuning {
    pub speed_min: f32,
    pub speed_max: f32,
    /// Added to `speed_min` per level
    pub speed_min_per_level: f32,
    /// Added to `speed_max` per level
    pub speed_max_per_level: f32,
    pub radius: f32,
    /// Health at level 1; one more per level after that
    pub base_health: i32,
    pub contact_damage: i32,
    /// Score per kill, multiplied by the level number
    pub score_per_level: u64,
    pub spawn_interval_ms: u64,
    pub spawn_interval_step_ms: u64,
    pub spawn_interval_floor_ms: u64,
    /// How far outside the playfield edge zombies appear
    pub spawn_offset: f32,
}

impl Default for ZombieTuning {
    fn default() -> Self {
        Self {
            speed_min: ZOMBIE_SPEED_MIN,
            speed_max: ZOMBIE_SPEED_MAX,
            speed_min_per_level: 0.2,
            speed_max_per_level: 0.3,
            radius: ZOMBIE_RADIUS,
            base_health: ZOMBIE_HEALTH,
            contact_damage: 1,
            score_per_level: 10,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_interval_step_ms: 200,
            spawn_interval_floor_ms: SPAWN_INTERVAL_FLOOR_MS,
            spawn_offset: 30.0,
        }
    }
}

impl ZombieTuning {
    /// Milliseconds between zombie spawns on `level`
    pub fn spawn_interval_ms(&self, level: u32) -> u64 {
        self.spawn_interval_ms
            .saturating_sub(self.spawn_interval_step_ms.saturating_mul(level as u64))
            .max(self.spawn_interval_floor_ms)
    }

    /// Speed range a zombie on `level` draws from
    pub fn speed_range(&self, level: u32) -> (f32, f32) {
        let l = level as f32;
        (
            self.speed_min + self.speed_min_per_level * l,
            self.speed_max + self.speed_max_per_level * l,
        )
    }

    pub fn health_for(&self, level: u32) -> i32 {
        self.base_health + level.saturating_sub(1) as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BossTuning {
    pub max_health: i32,
    pub speed: f32,
    pub flee_speed: f32,
    pub radius: f32,
    pub attack_cooldown_ms: u64,
    /// Health below which the boss stops attacking and runs
    pub flee_threshold: i32,
    /// How far past the playfield edge counts as escaped
    pub escape_margin: f32,
    pub spawn_offset: f32,
    pub defeat_bonus: u64,
    /// Gap between the boss's edge and its bullets' spawn point
    pub muzzle_gap: f32,
}

impl Default for BossTuning {
    fn default() -> Self {
        Self {
            max_health: BOSS_HEALTH,
            speed: BOSS_SPEED,
            flee_speed: BOSS_FLEE_SPEED,
            radius: BOSS_RADIUS,
            attack_cooldown_ms: BOSS_ATTACK_COOLDOWN_MS,
            flee_threshold: BOSS_FLEE_THRESHOLD,
            escape_margin: BOSS_ESCAPE_MARGIN,
            spawn_offset: 40.0,
            defeat_bonus: 200,
            muzzle_gap: 4.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionTuning {
    /// Number of levels; the last one is the boss level
    pub level_count: u32,
    pub level_duration_ms: u64,
    pub kill_target: u32,
    /// Keep the running score when advancing to the next level
    pub carry_score_between_levels: bool,
}

impl Default for SessionTuning {
    fn default() -> Self {
        Self {
            level_count: LEVEL_COUNT,
            level_duration_ms: LEVEL_DURATION_MS,
            kill_target: LEVEL_KILL_TARGET,
            carry_score_between_levels: false,
        }
    }
}

/// Complete balance sheet for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena: ArenaTuning,
    pub player: PlayerTuning,
    pub bullet: ProjectileTuning,
    pub boss_bullet: ProjectileTuning,
    pub zombie: ZombieTuning,
    pub boss: BossTuning,
    pub session: SessionTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena: ArenaTuning::default(),
            player: PlayerTuning::default(),
            bullet: ProjectileTuning::friendly(),
            boss_bullet: ProjectileTuning::hostile(),
            zombie: ZombieTuning::default(),
            boss: BossTuning::default(),
            session: SessionTuning::default(),
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Load a tuning file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Using default tuning ({})", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The final level, where the boss fight replaces the zombie waves
    pub fn boss_level(&self) -> u32 {
        self.session.level_count
    }

    pub fn is_boss_level(&self, level: u32) -> bool {
        level == self.boss_level()
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        positive("arena.width", self.arena.width)?;
        positive("arena.height", self.arena.height)?;
        if self.arena.fps == 0 {
            return Err(invalid("arena.fps", "must be at least 1"));
        }

        positive("player.speed", self.player.speed)?;
        positive("player.radius", self.player.radius)?;
        if self.player.max_health <= 0 {
            return Err(invalid("player.max_health", "must be positive"));
        }
        if 2.0 * self.player.radius > self.arena.width.min(self.arena.height) {
            return Err(invalid("player.radius", "player does not fit in the arena"));
        }

        positive("bullet.speed", self.bullet.speed)?;
        positive("bullet.radius", self.bullet.radius)?;
        positive("boss_bullet.speed", self.boss_bullet.speed)?;
        positive("boss_bullet.radius", self.boss_bullet.radius)?;

        positive("zombie.radius", self.zombie.radius)?;
        positive("zombie.speed_min", self.zombie.speed_min)?;
        positive("zombie.speed_max", self.zombie.speed_max)?;
        non_negative("zombie.speed_min_per_level", self.zombie.speed_min_per_level)?;
        non_negative("zombie.speed_max_per_level", self.zombie.speed_max_per_level)?;
        if self.zombie.speed_max < self.zombie.speed_min {
            return Err(invalid("zombie.speed_max", "must not be below speed_min"));
        }
        if self.zombie.speed_max_per_level < self.zombie.speed_min_per_level {
            return Err(invalid(
                "zombie.speed_max_per_level",
                "must not be below speed_min_per_level",
            ));
        }
        let (lo, hi) = self.zombie.speed_range(self.boss_level());
        if !lo.is_finite() || !hi.is_finite() {
            return Err(invalid(
                "zombie.speed_max_per_level",
                "speed overflows on later levels",
            ));
        }
        if self.zombie.base_health <= 0 {
            return Err(invalid("zombie.base_health", "must be positive"));
        }
        if self.zombie.spawn_interval_floor_ms == 0 {
            return Err(invalid("zombie.spawn_interval_floor_ms", "must be positive"));
        }

        positive("boss.radius", self.boss.radius)?;
        positive("boss.speed", self.boss.speed)?;
        positive("boss.flee_speed", self.boss.flee_speed)?;
        if self.boss.max_health <= 0 {
            return Err(invalid("boss.max_health", "must be positive"));
        }
        if self.boss.attack_cooldown_ms == 0 {
            return Err(invalid("boss.attack_cooldown_ms", "must be positive"));
        }

        if self.session.level_count == 0 {
            return Err(invalid("session.level_count", "must be at least 1"));
        }
        if self.session.level_duration_ms == 0 {
            return Err(invalid("session.level_duration_ms", "must be positive"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> TuningError {
    TuningError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: format!("must be a finite number >= 0, got {}", value),
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: format!("must be a positive number, got {}", value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_spawn_interval_scaling() {
        let z = ZombieTuning::default();
        assert_eq!(z.spawn_interval_ms(1), 1800);
        assert_eq!(z.spawn_interval_ms(2), 1600);
        // Floor kicks in from level 3 on
        assert_eq!(z.spawn_interval_ms(3), 1500);
        assert_eq!(z.spawn_interval_ms(20), 1500);

        let steep = ZombieTuning {
            spawn_interval_step_ms: u64::MAX,
            ..z
        };
        assert_eq!(steep.spawn_interval_ms(2), steep.spawn_interval_floor_ms);
    }

    #[test]
    fn test_zombie_level_scaling() {
        let z = ZombieTuning::default();
        assert_eq!(z.health_for(1), 3);
        assert_eq!(z.health_for(2), 4);
        let (lo, hi) = z.speed_range(2);
        assert!((lo - 1.0).abs() < 1e-5);
        assert!((hi - 2.2).abs() < 1e-5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json_str(r#"{ "boss": { "max_health": 30 } }"#).unwrap();
        assert_eq!(t.boss.max_health, 30);
        assert_eq!(t.boss.flee_threshold, BOSS_FLEE_THRESHOLD);
        assert_eq!(t.player, PlayerTuning::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Tuning::from_json_str(r#"{ "player": { "radius": 0.0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "player.radius",
                ..
            }
        ));

        let err =
            Tuning::from_json_str(r#"{ "zombie": { "speed_min": 2.0, "speed_max": 1.0 } }"#)
                .unwrap_err();
        assert!(matches!(err, TuningError::Invalid { .. }));
    }

    #[test]
    fn test_non_finite_zombie_speeds_rejected() {
        let err = Tuning::from_json_str(r#"{ "zombie": { "speed_max": 1e39 } }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "zombie.speed_max",
                ..
            }
        ));

        let mut t = Tuning::default();
        t.zombie.speed_min_per_level = f32::NAN;
        assert!(t.validate().is_err());

        let mut t = Tuning::default();
        t.zombie.speed_max_per_level = 3.0e38;
        assert!(matches!(
            t.validate(),
            Err(TuningError::Invalid {
                field: "zombie.speed_max_per_level",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Tuning::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let t = Tuning::load_or_default("/definitely/not/here/tuning.json");
        assert_eq!(t, Tuning::default());
    }

    #[test]
    fn test_json_roundtrip_preserves_values() {
        let mut t = Tuning::default();
        t.session.carry_score_between_levels = true;
        let json = t.to_json().unwrap();
        assert_eq!(Tuning::from_json_str(&json).unwrap(), t);
    }
}
