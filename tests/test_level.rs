use ink_reef::collision::{overlaps, Bounded, Rect};
use ink_reef::config::{BossPolicy, GameConfig};
use ink_reef::entities::*;
use ink_reef::level::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

const HOME: Rect = Rect::new(100.0, 300.0, 64.0, 64.0);

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── scaling tables ────────────────────────────────────────────────────────────

#[test]
fn counts_scale_linearly_with_level() {
    assert_eq!(collectible_count(1), 6);
    assert_eq!(enemy_count(1), 4);
    assert_eq!(collectible_count(2), 7);
    assert_eq!(enemy_count(2), 5);
    assert_eq!(collectible_count(5), 10);
    assert_eq!(enemy_count(5), 8);
}

#[test]
fn boss_speed_scales_with_level() {
    assert_eq!(boss_speed(1), 1.5);
    assert_eq!(boss_speed(4), 3.0);
}

// ── build_level ───────────────────────────────────────────────────────────────

#[test]
fn level_one_layout_counts() {
    let mut rng = seeded_rng();
    let layout = build_level(1, &GameConfig::default(), &HOME, &mut rng);
    assert_eq!(layout.collectibles.len(), 6);
    assert_eq!(layout.enemies.len(), 4);
    assert_eq!(layout.seaweed.len(), SEAWEED_PER_LEVEL);
    assert!(layout.boss.is_none());
}

#[test]
fn collectibles_land_in_the_upper_band() {
    let mut rng = seeded_rng();
    for level in 1..=5 {
        let layout = build_level(level, &GameConfig::default(), &HOME, &mut rng);
        for c in &layout.collectibles {
            assert!(!c.collected);
            assert!(c.x >= 0.0 && c.x + COLLECTIBLE_SIZE <= 800.0);
            assert!(c.y >= 20.0 && c.y < 520.0);
        }
    }
}

#[test]
fn enemies_spawn_clear_of_the_player_and_inside_the_arena() {
    let mut rng = seeded_rng();
    for level in 1..=5 {
        let layout = build_level(level, &GameConfig::default(), &HOME, &mut rng);
        for e in &layout.enemies {
            assert!(e.alive);
            assert!(e.bounds().inside(800.0, 600.0));
            assert!(!overlaps(e, &HOME));
            assert!(e.speed >= 1.0 && e.speed < 2.0);
            assert!(e.direction == 1.0 || e.direction == -1.0);
        }
    }
}

#[test]
fn seaweed_grows_from_the_sea_floor() {
    let mut rng = seeded_rng();
    let layout = build_level(3, &GameConfig::default(), &HOME, &mut rng);
    for s in &layout.seaweed {
        assert_eq!(s.y, 600.0 - SEAWEED_HEIGHT);
        assert!(s.x >= 0.0 && s.x + SEAWEED_WIDTH <= 800.0);
    }
}

#[test]
fn immediate_policy_places_a_one_hit_boss() {
    let mut rng = seeded_rng();
    let config = GameConfig { boss_policy: BossPolicy::Immediate, ..GameConfig::default() };
    let layout = build_level(3, &config, &HOME, &mut rng);
    let boss = layout.boss.expect("boss placed at level start");
    assert!(boss.alive);
    assert_eq!(boss.hit_points, 1);
    assert_eq!(boss.speed, 2.5);
    assert_eq!(boss.direction, 1.0);
    assert!(!overlaps(&boss, &HOME));
}

#[test]
fn spawn_boss_uses_policy_hit_points() {
    let mut rng = seeded_rng();
    let boss = spawn_boss(2, &GameConfig::default(), &HOME, &mut rng);
    assert_eq!(boss.hit_points, 5);
    assert_eq!(boss.speed, 2.0);
    assert!(boss.bounds().inside(800.0, 600.0));
}

#[test]
fn layout_is_deterministic_for_a_seed() {
    let a = build_level(2, &GameConfig::default(), &HOME, &mut StdRng::seed_from_u64(5));
    let b = build_level(2, &GameConfig::default(), &HOME, &mut StdRng::seed_from_u64(5));
    assert_eq!(a.collectibles, b.collectibles);
    assert_eq!(a.enemies, b.enemies);
    assert_eq!(a.seaweed, b.seaweed);
}

// ── load_level ────────────────────────────────────────────────────────────────

#[test]
fn load_level_replaces_entities_and_keeps_progress() {
    let mut rng = seeded_rng();
    let mut s = GameSession::new(GameConfig::default());
    s.score = 40;
    s.level = 2;
    s.player.x = 321.0;
    s.projectiles.push(Projectile { x: 1.0, y: 1.0, direction: 1.0, active: true });
    s.boss = Some(spawn_boss(1, &s.config, &HOME, &mut rng));

    let layout = build_level(2, &s.config, &HOME, &mut rng);
    load_level(&mut s, layout);

    assert_eq!(s.collectibles.len(), 7);
    assert_eq!(s.enemies.len(), 5);
    assert!(s.boss.is_none());
    assert!(s.projectiles.is_empty());
    assert_eq!(s.score, 40);
    assert_eq!(s.level, 2);
    assert_eq!(s.player.x, 321.0);
}
