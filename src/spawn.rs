use rand::Rng;
use tracing::debug;

use crate::collision::{overlaps, Rect};

/// Samples drawn before accepting an overlapping position.
pub const SPAWN_ATTEMPTS: u32 = 100;

/// Pick a `width × height` rectangle inside the arena that does not overlap
/// `avoid`.
///
/// Gives up after [`SPAWN_ATTEMPTS`] samples and returns the last one, which
/// may overlap. Level start never blocks on a crowded arena.
pub fn find_safe_spawn(
    width: f32,
    height: f32,
    arena_width: f32,
    arena_height: f32,
    avoid: &Rect,
    rng: &mut impl Rng,
) -> Rect {
    let mut candidate = sample(width, height, arena_width, arena_height, rng);
    for _ in 1..SPAWN_ATTEMPTS {
        if !overlaps(&candidate, avoid) {
            return candidate;
        }
        candidate = sample(width, height, arena_width, arena_height, rng);
    }
    if overlaps(&candidate, avoid) {
        debug!(
            width,
            height,
            x = candidate.x,
            y = candidate.y,
            "spawn attempts exhausted; accepting overlapping position"
        );
    }
    candidate
}

fn sample(width: f32, height: f32, arena_width: f32, arena_height: f32, rng: &mut impl Rng) -> Rect {
    let x = rng.gen::<f32>() * (arena_width - width).max(0.0);
    let y = rng.gen::<f32>() * (arena_height - height).max(0.0);
    Rect::new(x, y, width, height)
}
