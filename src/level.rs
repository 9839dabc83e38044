//! Level layout: how many of each entity a level gets and where they go.

use rand::Rng;
use tracing::debug;

use crate::collision::Rect;
use crate::config::{BossPolicy, GameConfig};
use crate::entities::{
    Boss, Collectible, Enemy, GameSession, Seaweed, BOSS_SIZE, COLLECTIBLE_SIZE, ENEMY_SIZE,
    SEAWEED_HEIGHT, SEAWEED_WIDTH,
};
use crate::spawn::find_safe_spawn;

pub const SEAWEED_PER_LEVEL: usize = 4;

// ── Scaling tables ───────────────────────────────────────────────────────────

pub fn collectible_count(level: u32) -> usize {
    5 + level as usize
}

pub fn enemy_count(level: u32) -> usize {
    3 + level as usize
}

pub fn boss_speed(level: u32) -> f32 {
    1.0 + level as f32 * 0.5
}

// ── Layout ───────────────────────────────────────────────────────────────────

/// Everything a level starts with, before it is loaded into a session.
#[derive(Clone, Debug)]
pub struct LevelLayout {
    pub collectibles: Vec<Collectible>,
    pub enemies: Vec<Enemy>,
    pub seaweed: Vec<Seaweed>,
    pub boss: Option<Boss>,
}

pub fn build_level(level: u32, config: &GameConfig, player: &Rect, rng: &mut impl Rng) -> LevelLayout {
    let (w, h) = (config.arena_width, config.arena_height);

    let collectibles = (0..collectible_count(level))
        .map(|_| Collectible {
            x: rng.gen::<f32>() * (w - COLLECTIBLE_SIZE),
            y: rng.gen::<f32>() * (h - 100.0) + 20.0,
            collected: false,
        })
        .collect();

    let enemies = (0..enemy_count(level))
        .map(|_| {
            let spot = find_safe_spawn(ENEMY_SIZE, ENEMY_SIZE, w, h, player, rng);
            Enemy {
                x: spot.x,
                y: spot.y,
                speed: 1.0 + rng.gen::<f32>(),
                direction: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
                alive: true,
            }
        })
        .collect();

    let seaweed = (0..SEAWEED_PER_LEVEL)
        .map(|_| Seaweed {
            x: rng.gen::<f32>() * (w - SEAWEED_WIDTH),
            y: h - SEAWEED_HEIGHT,
        })
        .collect();

    let boss = match config.boss_policy {
        BossPolicy::Deferred => None,
        BossPolicy::Immediate => Some(spawn_boss(level, config, player, rng)),
    };

    debug!(level, "level built");
    LevelLayout {
        collectibles,
        enemies,
        seaweed,
        boss,
    }
}

/// A fresh boss for `level`, placed clear of the player.
pub fn spawn_boss(level: u32, config: &GameConfig, player: &Rect, rng: &mut impl Rng) -> Boss {
    let spot = find_safe_spawn(
        BOSS_SIZE,
        BOSS_SIZE,
        config.arena_width,
        config.arena_height,
        player,
        rng,
    );
    Boss {
        x: spot.x,
        y: spot.y,
        speed: boss_speed(level),
        direction: 1.0,
        alive: true,
        hit_points: config.boss_policy.boss_hit_points(),
    }
}

/// Replace the session's level entities. Score, player and background are kept.
pub fn load_level(state: &mut GameSession, layout: LevelLayout) {
    state.collectibles = layout.collectibles;
    state.enemies = layout.enemies;
    state.seaweed = layout.seaweed;
    state.boss = layout.boss;
    state.projectiles.clear();
}
