//! Session → draw commands.
//!
//! Commands are in arena pixels and in painter's order. The host decides how
//! to rasterize them; this module only decides what to draw and which
//! stand-in to use when a sprite has not loaded yet.

use crate::assets::{SpriteId, SpriteSheet};
use crate::collision::{Bounded, Rect};
use crate::entities::{GameSession, GameStatus};

/// Radius of the ink-shot stand-in circle.
pub const INK_FALLBACK_RADIUS: f32 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    Purple,
    Black,
    Orange,
    DarkOrange,
    Green,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Sprite {
        id: SpriteId,
        rect: Rect,
        mirrored: bool,
    },
    FillRect {
        rect: Rect,
        paint: Paint,
    },
    FillCircle {
        cx: f32,
        cy: f32,
        radius: f32,
        paint: Paint,
    },
}

const BACKGROUND_SPRITES: [SpriteId; 3] =
    [SpriteId::DeepOcean, SpriteId::CoralReef, SpriteId::SeaFloor];

fn sprite_or_rect(
    sprites: &SpriteSheet,
    id: SpriteId,
    rect: Rect,
    mirrored: bool,
    fallback: Paint,
) -> DrawCommand {
    if sprites.is_ready(id) {
        DrawCommand::Sprite { id, rect, mirrored }
    } else {
        DrawCommand::FillRect {
            rect,
            paint: fallback,
        }
    }
}

/// Build one frame's draw list.
pub fn frame(state: &GameSession, sprites: &SpriteSheet) -> Vec<DrawCommand> {
    let (w, h) = state.arena();
    let mut cmds = Vec::new();

    // Parallax: each layer is drawn twice so the wrap is seamless. A layer
    // whose art is not loaded draws nothing.
    for (layer, id) in state.backgrounds.iter().zip(BACKGROUND_SPRITES) {
        if !sprites.is_ready(id) {
            continue;
        }
        for x in [layer.offset, layer.offset + w] {
            cmds.push(DrawCommand::Sprite {
                id,
                rect: Rect::new(x, 0.0, w, h),
                mirrored: false,
            });
        }
    }

    for weed in &state.seaweed {
        cmds.push(sprite_or_rect(sprites, SpriteId::Seaweed, weed.bounds(), false, Paint::Green));
    }

    for shot in state.projectiles.iter().filter(|p| p.active) {
        let rect = shot.bounds();
        if sprites.is_ready(SpriteId::Ink) {
            cmds.push(DrawCommand::Sprite {
                id: SpriteId::Ink,
                rect,
                mirrored: shot.direction < 0.0,
            });
        } else {
            let (cx, cy) = rect.center();
            cmds.push(DrawCommand::FillCircle {
                cx,
                cy,
                radius: INK_FALLBACK_RADIUS,
                paint: Paint::Black,
            });
        }
    }

    for enemy in state.enemies.iter().filter(|e| e.alive) {
        cmds.push(sprite_or_rect(sprites, SpriteId::EnemyOrange, enemy.bounds(), false, Paint::Orange));
    }

    if let Some(boss) = state.boss.as_ref().filter(|b| b.alive) {
        cmds.push(sprite_or_rect(sprites, SpriteId::BossOrange, boss.bounds(), false, Paint::DarkOrange));
    }

    for item in state.collectibles.iter().filter(|c| !c.collected) {
        cmds.push(sprite_or_rect(sprites, SpriteId::OrangeSlice, item.bounds(), false, Paint::Orange));
    }

    cmds.push(sprite_or_rect(
        sprites,
        SpriteId::Octy,
        state.player.bounds(),
        state.player.facing < 0.0,
        Paint::Purple,
    ));

    cmds
}

/// Score and level counters, as shown in the HUD. The title screen has none.
pub fn hud(state: &GameSession) -> Option<(String, String)> {
    if state.status == GameStatus::Start {
        return None;
    }
    Some((
        format!("Score: {}", state.score),
        format!("Level: {}", state.level),
    ))
}
