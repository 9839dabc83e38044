//! Game configuration: defaults, JSON loading and validation.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::entities::BOSS_SIZE;

pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;
pub const DEFAULT_ARENA_HEIGHT: f32 = 600.0;
pub const DEFAULT_MAX_LEVEL: u32 = 5;
pub const DEFAULT_SHOT_COOLDOWN_MS: u64 = 300;
pub const DEFAULT_FPS: u32 = 60;

/// When the level's boss appears and how tough it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BossPolicy {
    /// Spawned once every enemy is dead; takes 5 hits.
    #[default]
    Deferred,
    /// Spawned with the rest of the level; dies in one hit.
    Immediate,
}

impl BossPolicy {
    pub fn boss_hit_points(&self) -> u32 {
        match self {
            BossPolicy::Deferred => 5,
            BossPolicy::Immediate => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena_width: f32,
    pub arena_height: f32,
    /// Clearing this level wins the game.
    pub max_level: u32,
    pub shot_cooldown_ms: u64,
    pub boss_policy: BossPolicy,
    /// Host frame rate. The simulation advances one tick per frame.
    pub fps: u32,
    /// Directory searched for `<sprite>.txt` art.
    pub assets_dir: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            max_level: DEFAULT_MAX_LEVEL,
            shot_cooldown_ms: DEFAULT_SHOT_COOLDOWN_MS,
            boss_policy: BossPolicy::default(),
            fps: DEFAULT_FPS,
            assets_dir: "assets".to_string(),
        }
    }
}

impl GameConfig {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // Level layout places items up to 100px from the bottom and the boss needs room to patrol.
        let min_width = BOSS_SIZE * 2.0;
        let min_height = BOSS_SIZE + 100.0;
        if !(self.arena_width >= min_width && self.arena_height >= min_height) {
            bail!(
                "arena must be at least {min_width}x{min_height}, got {}x{}",
                self.arena_width,
                self.arena_height
            );
        }
        if self.max_level == 0 {
            bail!("max_level must be > 0");
        }
        if self.fps == 0 {
            bail!("fps must be > 0");
        }
        Ok(())
    }
}
