//! Text-art sprites, loaded off the frame loop.
//!
//! Sprites are requested at startup and arrive whenever the loader thread
//! gets to them. Until a sprite is in the `SpriteSheet` the renderer draws a
//! flat-colour stand-in, so a slow or missing asset never blocks a frame.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Octy,
    Ink,
    OrangeSlice,
    EnemyOrange,
    BossOrange,
    Seaweed,
    DeepOcean,
    CoralReef,
    SeaFloor,
}

impl SpriteId {
    pub const ALL: [SpriteId; 9] = [
        SpriteId::DeepOcean,
        SpriteId::CoralReef,
        SpriteId::SeaFloor,
        SpriteId::Octy,
        SpriteId::OrangeSlice,
        SpriteId::EnemyOrange,
        SpriteId::BossOrange,
        SpriteId::Seaweed,
        SpriteId::Ink,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            SpriteId::Octy => "octy.txt",
            SpriteId::Ink => "ink_shot.txt",
            SpriteId::OrangeSlice => "orange_slice.txt",
            SpriteId::EnemyOrange => "orange_enemy.txt",
            SpriteId::BossOrange => "orange_boss.txt",
            SpriteId::Seaweed => "seaweed.txt",
            SpriteId::DeepOcean => "bg_deep_ocean.txt",
            SpriteId::CoralReef => "bg_coral_reef.txt",
            SpriteId::SeaFloor => "bg_sea_floor.txt",
        }
    }
}

/// Rows of glyphs. Spaces are transparent when drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub rows: Vec<String>,
}

impl Sprite {
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<String> = text
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect();
        let last = rows.iter().rposition(|r| !r.is_empty());
        let Some(last) = last else {
            bail!("sprite has no visible glyphs");
        };
        Ok(Sprite {
            rows: rows[..=last].to_vec(),
        })
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Left-right mirror image, flipping glyphs that have a mirrored twin.
    pub fn mirrored(&self) -> Sprite {
        let width = self.width();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let padded: Vec<char> = row
                    .chars()
                    .chain(std::iter::repeat(' '))
                    .take(width)
                    .collect();
                let flipped: String = padded.into_iter().rev().map(mirror_glyph).collect();
                flipped.trim_end().to_string()
            })
            .collect();
        Sprite { rows }
    }
}

fn mirror_glyph(c: char) -> char {
    match c {
        '(' => ')',
        ')' => '(',
        '<' => '>',
        '>' => '<',
        '/' => '\\',
        '\\' => '/',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        other => other,
    }
}

pub fn load_sprite(dir: &Path, id: SpriteId) -> Result<Sprite> {
    let path = dir.join(id.file_name());
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read sprite {}", path.display()))?;
    Sprite::parse(&text).with_context(|| format!("bad sprite {}", path.display()))
}

/// Start a thread that loads every sprite in `dir` and sends each one as it
/// is ready. Failures are logged and the sprite is simply never sent.
pub fn spawn_loader(dir: PathBuf) -> mpsc::Receiver<(SpriteId, Sprite)> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for id in SpriteId::ALL {
            match load_sprite(&dir, id) {
                Ok(sprite) => {
                    debug!(?id, "sprite loaded");
                    if tx.send((id, sprite)).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(err) => warn!(?id, "{err:#}; using fallback"),
            }
        }
    });
    rx
}

/// The sprites that have arrived so far.
#[derive(Clone, Debug, Default)]
pub struct SpriteSheet {
    ready: HashMap<SpriteId, Sprite>,
}

impl SpriteSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: SpriteId, sprite: Sprite) {
        self.ready.insert(id, sprite);
    }

    /// Take whatever the loader has finished without waiting for the rest.
    pub fn poll(&mut self, rx: &mpsc::Receiver<(SpriteId, Sprite)>) -> usize {
        let mut received = 0;
        while let Ok((id, sprite)) = rx.try_recv() {
            self.insert(id, sprite);
            received += 1;
        }
        received
    }

    pub fn get(&self, id: SpriteId) -> Option<&Sprite> {
        self.ready.get(&id)
    }

    pub fn is_ready(&self, id: SpriteId) -> bool {
        self.ready.contains_key(&id)
    }
}
