//! All game entity types — plain data plus their `Bounded` rectangles.

use std::time::Duration;

use crate::collision::{Bounded, Rect};
use crate::config::GameConfig;

// ── Sizes & speeds (arena pixels, per tick) ──────────────────────────────────

pub const PLAYER_SIZE: f32 = 64.0;
pub const PLAYER_SPEED: f32 = 3.0;
pub const PLAYER_HOME_X: f32 = 100.0;

pub const PROJECTILE_SIZE: f32 = 16.0;
pub const PROJECTILE_SPEED: f32 = 6.0;

pub const COLLECTIBLE_SIZE: f32 = 32.0;
pub const ENEMY_SIZE: f32 = 48.0;
pub const BOSS_SIZE: f32 = 80.0;

pub const SEAWEED_WIDTH: f32 = 32.0;
pub const SEAWEED_HEIGHT: f32 = 64.0;

/// Deep ocean, coral reef, sea floor.
pub const BACKGROUND_SPEEDS: [f32; 3] = [0.2, 0.5, 1.0];

// ── Status ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Title screen, waiting for confirm.
    Start,
    Gameplay,
    /// Simulation frozen; confirm returns to the title.
    GameOver(Outcome),
}

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// +1 facing right, -1 facing left.
    pub facing: f32,
}

impl Player {
    pub fn at_home(arena_height: f32) -> Self {
        Player {
            x: PLAYER_HOME_X,
            y: arena_height / 2.0,
            facing: 1.0,
        }
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_SIZE, PLAYER_SIZE)
    }
}

// ── Projectiles ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub direction: f32,
    /// Once false, never true again.
    pub active: bool,
}

impl Bounded for Projectile {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, PROJECTILE_SIZE, PROJECTILE_SIZE)
    }
}

// ── Collectibles & decoration ────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Collectible {
    pub x: f32,
    pub y: f32,
    pub collected: bool,
}

impl Bounded for Collectible {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, COLLECTIBLE_SIZE, COLLECTIBLE_SIZE)
    }
}

/// Hiding zone: a player overlapping seaweed cannot be killed.
#[derive(Clone, Debug, PartialEq)]
pub struct Seaweed {
    pub x: f32,
    pub y: f32,
}

impl Bounded for Seaweed {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, SEAWEED_WIDTH, SEAWEED_HEIGHT)
    }
}

// ── Enemies ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub direction: f32,
    pub alive: bool,
}

impl Bounded for Enemy {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, ENEMY_SIZE, ENEMY_SIZE)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boss {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub direction: f32,
    pub alive: bool,
    pub hit_points: u32,
}

impl Bounded for Boss {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, BOSS_SIZE, BOSS_SIZE)
    }
}

// ── Parallax background ──────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundLayer {
    /// Horizontal scroll offset, in `(-arena_width, 0]`.
    pub offset: f32,
    pub speed: f32,
}

// ── Per-tick input ───────────────────────────────────────────────────────────

/// Key state sampled by the host once per frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
    /// Time since the previous tick. Drives the shot cooldown.
    pub dt: Duration,
}

// ── Master game state ────────────────────────────────────────────────────────

/// The entire game session. Cloneable so `tick` can return a new copy
/// without mutating the caller's.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub config: GameConfig,
    pub status: GameStatus,
    pub level: u32,
    pub score: u32,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub collectibles: Vec<Collectible>,
    pub enemies: Vec<Enemy>,
    pub seaweed: Vec<Seaweed>,
    pub boss: Option<Boss>,
    pub backgrounds: Vec<BackgroundLayer>,
    /// Simulation clock: the sum of every tick's `dt`.
    pub clock: Duration,
    pub last_shot: Option<Duration>,
    pub frame: u64,
}

impl GameSession {
    /// A session on the title screen with an empty arena.
    pub fn new(config: GameConfig) -> Self {
        GameSession {
            status: GameStatus::Start,
            level: 1,
            score: 0,
            player: Player::at_home(config.arena_height),
            projectiles: Vec::new(),
            collectibles: Vec::new(),
            enemies: Vec::new(),
            seaweed: Vec::new(),
            boss: None,
            backgrounds: BACKGROUND_SPEEDS
                .iter()
                .map(|&speed| BackgroundLayer { offset: 0.0, speed })
                .collect(),
            clock: Duration::ZERO,
            last_shot: None,
            frame: 0,
            config,
        }
    }

    pub fn arena(&self) -> (f32, f32) {
        (self.config.arena_width, self.config.arena_height)
    }

    /// True while the player overlaps any seaweed.
    pub fn player_hidden(&self) -> bool {
        self.seaweed
            .iter()
            .any(|s| crate::collision::overlaps(&self.player, s))
    }
}
