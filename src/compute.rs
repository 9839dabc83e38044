//! Game-logic functions.
//!
//! Every public state transition takes an immutable reference to the current
//! `GameSession` (and, where needed, an RNG handle) and returns a new
//! `GameSession`. Side effects are limited to the injected RNG and tracing.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use crate::collision::{overlaps, Bounded};
use crate::config::BossPolicy;
use crate::entities::{
    BackgroundLayer, Enemy, GameSession, GameStatus, Outcome, Player, Projectile, TickInput,
    ENEMY_SIZE, BOSS_SIZE, PLAYER_SIZE, PLAYER_SPEED, PROJECTILE_SIZE, PROJECTILE_SPEED,
};
use crate::level::{build_level, load_level, spawn_boss};

// ── Scoring ──────────────────────────────────────────────────────────────────

pub const ENEMY_POINTS: u32 = 5;
pub const BOSS_POINTS: u32 = 10;
pub const COLLECTIBLE_POINTS: u32 = 10;

// ── Screen flow (pure) ───────────────────────────────────────────────────────

/// Begin a new run: score 0, level 1, player at home, level 1 populated.
pub fn start_game(state: &GameSession, rng: &mut impl Rng) -> GameSession {
    let mut next = state.clone();
    next.status = GameStatus::Gameplay;
    next.score = 0;
    next.level = 1;
    next.player = Player::at_home(next.config.arena_height);
    next.last_shot = None;
    let layout = build_level(next.level, &next.config, &next.player.bounds(), rng);
    load_level(&mut next, layout);
    info!(frame = next.frame, "game started");
    next
}

/// Back to the title. The last score stays visible until the next start.
pub fn go_to_start_screen(state: &GameSession) -> GameSession {
    GameSession {
        status: GameStatus::Start,
        ..state.clone()
    }
}

/// The confirm key: starts from the title, returns to it from game over.
pub fn confirm(state: &GameSession, rng: &mut impl Rng) -> GameSession {
    match state.status {
        GameStatus::Start => start_game(state, rng),
        GameStatus::GameOver(_) => go_to_start_screen(state),
        GameStatus::Gameplay => state.clone(),
    }
}

// ── Input-driven transitions (pure) ──────────────────────────────────────────

pub fn move_player(state: &GameSession, input: &TickInput) -> GameSession {
    let mut next = state.clone();
    steer_player(&mut next, input);
    next
}

/// Fire one ink shot if the cooldown allows it.
pub fn player_shoot(state: &GameSession) -> GameSession {
    let mut next = state.clone();
    try_shoot(&mut next);
    next
}

fn steer_player(state: &mut GameSession, input: &TickInput) {
    let (w, h) = state.arena();
    let p = &mut state.player;
    if input.up {
        p.y = (p.y - PLAYER_SPEED).max(0.0);
    }
    if input.down {
        p.y = (p.y + PLAYER_SPEED).min(h - PLAYER_SIZE);
    }
    if input.left {
        p.x = (p.x - PLAYER_SPEED).max(0.0);
        p.facing = -1.0;
    }
    if input.right {
        p.x = (p.x + PLAYER_SPEED).min(w - PLAYER_SIZE);
        p.facing = 1.0;
    }
}

fn try_shoot(state: &mut GameSession) {
    let cooldown = Duration::from_millis(state.config.shot_cooldown_ms);
    let ready = state
        .last_shot
        .map_or(true, |at| state.clock.saturating_sub(at) >= cooldown);
    if !ready {
        return;
    }
    let p = &state.player;
    let x = if p.facing > 0.0 { p.x + PLAYER_SIZE } else { p.x };
    let y = p.y + PLAYER_SIZE / 2.0 - PROJECTILE_SIZE / 2.0;
    state.projectiles.push(Projectile {
        x,
        y,
        direction: p.facing,
        active: true,
    });
    state.last_shot = Some(state.clock);
}

// ── Per-entity motion ────────────────────────────────────────────────────────

/// Move a shot; it goes inactive for good once it leaves the arena sideways.
pub fn advance_projectile(shot: &mut Projectile, arena_width: f32) {
    if !shot.active {
        return;
    }
    shot.x += PROJECTILE_SPEED * shot.direction;
    if shot.x < 0.0 || shot.x > arena_width {
        shot.active = false;
    }
}

/// Horizontal bounce patrol shared by enemies and the boss.
pub fn patrol(x: &mut f32, direction: &mut f32, width: f32, speed: f32, arena_width: f32) {
    *x += speed * *direction;
    if *x < 0.0 || *x + width > arena_width {
        *direction = -*direction;
    }
}

pub fn patrol_enemy(enemy: &mut Enemy, arena_width: f32) {
    patrol(&mut enemy.x, &mut enemy.direction, ENEMY_SIZE, enemy.speed, arena_width);
}

pub fn scroll_background(layer: &mut BackgroundLayer, arena_width: f32) {
    layer.offset -= layer.speed;
    if layer.offset <= -arena_width {
        layer.offset = 0.0;
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.
///
/// Outside of gameplay only the clock and frame counter move. Interactions are
/// resolved in a fixed order; within one tick a projectile can hit at most one
/// target, taken in enemy order, and a loss ends the tick on the spot.
pub fn tick(state: &GameSession, input: &TickInput, rng: &mut impl Rng) -> GameSession {
    let mut next = state.clone();
    next.frame += 1;
    next.clock += input.dt;
    if next.status != GameStatus::Gameplay {
        return next;
    }
    let (w, _) = next.arena();

    // ── 0. Housekeeping: drop spent shots, scroll parallax ──────────────────
    next.projectiles.retain(|p| p.active);
    for layer in &mut next.backgrounds {
        scroll_background(layer, w);
    }

    // ── 1. Move projectiles ──────────────────────────────────────────────────
    for shot in &mut next.projectiles {
        advance_projectile(shot, w);
    }

    // ── 2. Projectiles ↔ enemies ─────────────────────────────────────────────
    for enemy in next.enemies.iter_mut().filter(|e| e.alive) {
        if let Some(shot) = next
            .projectiles
            .iter_mut()
            .find(|p| p.active && overlaps(&**p, &*enemy))
        {
            shot.active = false;
            enemy.alive = false;
            next.score += ENEMY_POINTS;
        }
    }

    // ── 3. Deferred boss appears once the last enemy is down ────────────────
    if next.config.boss_policy == BossPolicy::Deferred
        && next.boss.is_none()
        && next.enemies.iter().all(|e| !e.alive)
    {
        let boss = spawn_boss(next.level, &next.config, &next.player.bounds(), rng);
        debug!(level = next.level, x = boss.x, y = boss.y, "boss spawned");
        next.boss = Some(boss);
    }

    // ── 4. Projectiles ↔ boss ────────────────────────────────────────────────
    if let Some(boss) = next.boss.as_mut().filter(|b| b.alive) {
        for shot in next.projectiles.iter_mut().filter(|p| p.active) {
            if !overlaps(&*shot, &*boss) {
                continue;
            }
            shot.active = false;
            boss.hit_points = boss.hit_points.saturating_sub(1);
            if boss.hit_points == 0 {
                boss.alive = false;
                next.score += BOSS_POINTS;
                info!(level = next.level, "boss defeated");
                break;
            }
        }
    }

    // ── 5/6. Enemies and boss patrol, then threaten the player ──────────────
    let hidden = next.player_hidden();
    let mut caught = false;
    for enemy in next.enemies.iter_mut().filter(|e| e.alive) {
        patrol_enemy(enemy, w);
        if overlaps(&next.player, &*enemy) && !hidden {
            caught = true;
            break;
        }
    }
    if !caught {
        if let Some(boss) = next.boss.as_mut().filter(|b| b.alive) {
            patrol(&mut boss.x, &mut boss.direction, BOSS_SIZE, boss.speed, w);
            caught = overlaps(&next.player, &*boss) && !hidden;
        }
    }
    if caught {
        end_game(&mut next, Outcome::Loss);
        return next;
    }

    // ── 7. Collectibles ──────────────────────────────────────────────────────
    for item in next.collectibles.iter_mut().filter(|c| !c.collected) {
        if overlaps(&next.player, &*item) {
            item.collected = true;
            next.score += COLLECTIBLE_POINTS;
        }
    }

    // ── 8. Player input ──────────────────────────────────────────────────────
    steer_player(&mut next, input);
    if input.shoot {
        try_shoot(&mut next);
    }

    // ── 9. Level clear / victory ─────────────────────────────────────────────
    check_level_clear(&mut next, rng);

    next
}

fn check_level_clear(state: &mut GameSession, rng: &mut impl Rng) {
    let all_collected = state.collectibles.iter().all(|c| c.collected);
    let boss_down = state.boss.as_ref().map_or(true, |b| !b.alive);
    if !(all_collected && boss_down) {
        return;
    }

    let cleared = state.level;
    state.level += 1;
    if state.level > state.config.max_level {
        info!(level = cleared, score = state.score, "final level cleared");
        end_game(state, Outcome::Win);
        return;
    }

    info!(level = cleared, score = state.score, "level cleared");
    let layout = build_level(state.level, &state.config, &state.player.bounds(), rng);
    load_level(state, layout);
}

fn end_game(state: &mut GameSession, outcome: Outcome) {
    state.status = GameStatus::GameOver(outcome);
    info!(?outcome, level = state.level, score = state.score, "game over");
}
