use ink_reef::assets::{Sprite, SpriteId, SpriteSheet};
use ink_reef::collision::Rect;
use ink_reef::config::GameConfig;
use ink_reef::entities::*;
use ink_reef::render::{frame, hud, DrawCommand, Paint, INK_FALLBACK_RADIUS};

fn busy_state() -> GameSession {
    let mut s = GameSession::new(GameConfig::default());
    s.status = GameStatus::Gameplay;
    s.seaweed.push(Seaweed { x: 10.0, y: 536.0 });
    s.projectiles.push(Projectile { x: 200.0, y: 100.0, direction: -1.0, active: true });
    s.projectiles.push(Projectile { x: 250.0, y: 100.0, direction: 1.0, active: false });
    s.enemies.push(Enemy { x: 300.0, y: 50.0, speed: 1.0, direction: 1.0, alive: true });
    s.enemies.push(Enemy { x: 350.0, y: 50.0, speed: 1.0, direction: 1.0, alive: false });
    s.boss = Some(Boss { x: 500.0, y: 50.0, speed: 1.5, direction: 1.0, alive: true, hit_points: 5 });
    s.collectibles.push(Collectible { x: 600.0, y: 200.0, collected: false });
    s.collectibles.push(Collectible { x: 650.0, y: 200.0, collected: true });
    s
}

fn full_sheet() -> SpriteSheet {
    let mut sheet = SpriteSheet::new();
    for id in SpriteId::ALL {
        sheet.insert(id, Sprite::parse("#").unwrap());
    }
    sheet
}

#[test]
fn unloaded_sprites_fall_back_to_flat_colours() {
    let s = busy_state();
    let cmds = frame(&s, &SpriteSheet::new());
    assert_eq!(
        cmds,
        vec![
            DrawCommand::FillRect { rect: Rect::new(10.0, 536.0, 32.0, 64.0), paint: Paint::Green },
            DrawCommand::FillCircle {
                cx: 208.0,
                cy: 108.0,
                radius: INK_FALLBACK_RADIUS,
                paint: Paint::Black,
            },
            DrawCommand::FillRect { rect: Rect::new(300.0, 50.0, 48.0, 48.0), paint: Paint::Orange },
            DrawCommand::FillRect { rect: Rect::new(500.0, 50.0, 80.0, 80.0), paint: Paint::DarkOrange },
            DrawCommand::FillRect { rect: Rect::new(600.0, 200.0, 32.0, 32.0), paint: Paint::Orange },
            DrawCommand::FillRect { rect: Rect::new(100.0, 300.0, 64.0, 64.0), paint: Paint::Purple },
        ]
    );
}

#[test]
fn loaded_sprites_replace_fallbacks() {
    let s = busy_state();
    let cmds = frame(&s, &full_sheet());
    assert!(cmds.iter().all(|c| matches!(c, DrawCommand::Sprite { .. })));
    // 3 layers × 2 + seaweed + shot + enemy + boss + slice + player
    assert_eq!(cmds.len(), 12);
}

#[test]
fn background_layers_draw_twice_for_wraparound() {
    let mut s = busy_state();
    s.backgrounds[1].offset = -120.0;
    let cmds = frame(&s, &full_sheet());
    let layer_cmds: Vec<(SpriteId, f32)> = cmds[..6]
        .iter()
        .map(|c| match c {
            DrawCommand::Sprite { id, rect, .. } => (*id, rect.x),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(
        layer_cmds,
        vec![
            (SpriteId::DeepOcean, 0.0),
            (SpriteId::DeepOcean, 800.0),
            (SpriteId::CoralReef, -120.0),
            (SpriteId::CoralReef, 680.0),
            (SpriteId::SeaFloor, 0.0),
            (SpriteId::SeaFloor, 800.0),
        ]
    );
}

#[test]
fn missing_background_art_draws_nothing() {
    let mut sheet = full_sheet();
    let mut partial = SpriteSheet::new();
    for id in SpriteId::ALL {
        if id != SpriteId::CoralReef {
            partial.insert(id, sheet.get(id).unwrap().clone());
        }
    }
    sheet = partial;
    let cmds = frame(&busy_state(), &sheet);
    let bg = cmds
        .iter()
        .filter(|c| matches!(c, DrawCommand::Sprite { id: SpriteId::CoralReef, .. }))
        .count();
    assert_eq!(bg, 0);
    assert_eq!(cmds.len(), 10);
}

#[test]
fn left_facing_sprites_are_mirrored() {
    let mut s = busy_state();
    s.player.facing = -1.0;
    let cmds = frame(&s, &full_sheet());
    let player = cmds.last().unwrap();
    assert!(matches!(player, DrawCommand::Sprite { id: SpriteId::Octy, mirrored: true, .. }));
    assert!(cmds
        .iter()
        .any(|c| matches!(c, DrawCommand::Sprite { id: SpriteId::Ink, mirrored: true, .. })));
}

#[test]
fn hud_shows_score_and_level() {
    let mut s = busy_state();
    s.score = 125;
    s.level = 3;
    assert_eq!(hud(&s), Some(("Score: 125".to_string(), "Level: 3".to_string())));

    s.status = GameStatus::GameOver(Outcome::Win);
    assert!(hud(&s).is_some());
}

#[test]
fn hud_is_hidden_on_the_title_screen() {
    let mut s = busy_state();
    s.score = 40;
    s.status = GameStatus::Start;
    assert_eq!(hud(&s), None);
}
