//! Rendering layer — all terminal I/O lives here.
//!
//! The library hands us draw commands in arena pixels. They are rasterized
//! into a cell grid scaled to the terminal, then the grid is written out row
//! by row. No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use ink_reef::assets::{Sprite, SpriteId, SpriteSheet};
use ink_reef::collision::Rect;
use ink_reef::entities::{GameSession, GameStatus, Outcome};
use ink_reef::render::{self, DrawCommand, Paint};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_WATER: Color = Color::Rgb { r: 4, g: 24, b: 48 };
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;
const C_ORANGE: Color = Color::Rgb { r: 255, g: 165, b: 0 };
const C_DARK_ORANGE: Color = Color::Rgb { r: 255, g: 140, b: 0 };
const C_PURPLE: Color = Color::Rgb { r: 128, g: 0, b: 128 };

fn paint_color(paint: Paint) -> Color {
    match paint {
        Paint::Purple => C_PURPLE,
        Paint::Black => Color::Black,
        Paint::Orange => C_ORANGE,
        Paint::DarkOrange => C_DARK_ORANGE,
        Paint::Green => Color::Green,
    }
}

fn sprite_color(id: SpriteId) -> Color {
    match id {
        SpriteId::Octy => Color::Magenta,
        SpriteId::Ink => Color::Grey,
        SpriteId::OrangeSlice => Color::Yellow,
        SpriteId::EnemyOrange => C_ORANGE,
        SpriteId::BossOrange => Color::Red,
        SpriteId::Seaweed => Color::Green,
        SpriteId::DeepOcean => Color::DarkBlue,
        SpriteId::CoralReef => Color::DarkMagenta,
        SpriteId::SeaFloor => Color::DarkYellow,
    }
}

// ── Cell grid ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
struct Cell {
    glyph: char,
    color: Color,
}

const EMPTY: Cell = Cell {
    glyph: ' ',
    color: C_WATER,
};

/// The play field: terminal cells mapped onto the arena.
struct Canvas {
    cols: usize,
    rows: usize,
    /// Arena pixels per cell, horizontally and vertically.
    sx: f32,
    sy: f32,
    cells: Vec<Cell>,
}

impl Canvas {
    fn new(cols: usize, rows: usize, arena: (f32, f32)) -> Self {
        Canvas {
            cols,
            rows,
            sx: arena.0 / cols.max(1) as f32,
            sy: arena.1 / rows.max(1) as f32,
            cells: vec![EMPTY; cols * rows],
        }
    }

    fn put(&mut self, col: i32, row: i32, glyph: char, color: Color) {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return;
        }
        self.cells[row as usize * self.cols + col as usize] = Cell { glyph, color };
    }

    /// Cell span covered by a rectangle, at least one cell each way.
    fn span(&self, rect: &Rect) -> (i32, i32, i32, i32) {
        let c0 = (rect.x / self.sx).floor() as i32;
        let r0 = (rect.y / self.sy).floor() as i32;
        let c1 = ((rect.right() / self.sx).ceil() as i32).max(c0 + 1);
        let r1 = ((rect.bottom() / self.sy).ceil() as i32).max(r0 + 1);
        (c0, r0, c1, r1)
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        let (c0, r0, c1, r1) = self.span(rect);
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(col, row, '█', color);
            }
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        let bounds = Rect::new(cx - radius, cy - radius, radius * 2.0, radius * 2.0);
        let (c0, r0, c1, r1) = self.span(&bounds);
        for row in r0..r1 {
            for col in c0..c1 {
                let px = (col as f32 + 0.5) * self.sx;
                let py = (row as f32 + 0.5) * self.sy;
                if (px - cx).hypot(py - cy) <= radius {
                    self.put(col, row, '●', color);
                }
            }
        }
        // Always leave a mark, even when the circle is smaller than a cell.
        self.put((cx / self.sx) as i32, (cy / self.sy) as i32, '●', color);
    }

    /// Nearest-neighbour blit; spaces in the art are transparent.
    fn blit(&mut self, sprite: &Sprite, rect: &Rect, color: Color) {
        let (c0, r0, c1, r1) = self.span(rect);
        let (cw, ch) = ((c1 - c0) as usize, (r1 - r0) as usize);
        let (sw, sh) = (sprite.width(), sprite.height());
        if sw == 0 || sh == 0 {
            return;
        }
        let rows: Vec<Vec<char>> = sprite.rows.iter().map(|r| r.chars().collect()).collect();
        for dy in 0..ch {
            let src = &rows[dy * sh / ch];
            for dx in 0..cw {
                let glyph = src.get(dx * sw / cw).copied().unwrap_or(' ');
                if glyph != ' ' {
                    self.put(c0 + dx as i32, r0 + dy as i32, glyph, color);
                }
            }
        }
    }

    fn draw(&mut self, cmd: &DrawCommand, sprites: &SpriteSheet) {
        match cmd {
            DrawCommand::Sprite { id, rect, mirrored } => {
                if let Some(sprite) = sprites.get(*id) {
                    if *mirrored {
                        self.blit(&sprite.mirrored(), rect, sprite_color(*id));
                    } else {
                        self.blit(sprite, rect, sprite_color(*id));
                    }
                }
            }
            DrawCommand::FillRect { rect, paint } => self.fill_rect(rect, paint_color(*paint)),
            DrawCommand::FillCircle {
                cx,
                cy,
                radius,
                paint,
            } => self.fill_circle(*cx, *cy, *radius, paint_color(*paint)),
        }
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameSession,
    sprites: &SpriteSheet,
) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    // Row 0 is the HUD, the last row the controls hint.
    let play_rows = height.saturating_sub(2) as usize;
    let mut canvas = Canvas::new(width as usize, play_rows, state.arena());
    for cmd in render::frame(state, sprites) {
        canvas.draw(&cmd, sprites);
    }

    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_hud(out, state, width)?;
    draw_canvas(out, &canvas)?;
    draw_controls_hint(out, height)?;

    match state.status {
        GameStatus::Start => draw_title(out, state, width, height)?,
        GameStatus::GameOver(outcome) => draw_game_over(out, state, outcome, width, height)?,
        GameStatus::Gameplay => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn draw_canvas<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(C_WATER))?;
    for row in 0..canvas.rows {
        out.queue(cursor::MoveTo(0, row as u16 + 1))?;
        let mut current: Option<Color> = None;
        for cell in &canvas.cells[row * canvas.cols..(row + 1) * canvas.cols] {
            if current != Some(cell.color) {
                out.queue(style::SetForegroundColor(cell.color))?;
                current = Some(cell.color);
            }
            out.queue(Print(cell.glyph))?;
        }
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameSession, width: u16) -> std::io::Result<()> {
    let Some((score, level)) = render::hud(state) else {
        return Ok(());
    };

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&score))?;

    let lx = width.saturating_sub(level.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Arrows / WASD : Swim   SPACE : Ink   ENTER : Confirm   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    lines: &[(String, Color)],
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }
    Ok(())
}

fn draw_title<W: Write>(
    out: &mut W,
    state: &GameSession,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let mut lines = vec![
        ("╔════════════════════╗".to_string(), Color::Cyan),
        ("║      INK  REEF     ║".to_string(), Color::Cyan),
        ("╚════════════════════╝".to_string(), Color::Cyan),
        ("Collect every orange slice.".to_string(), Color::White),
        ("Hide in the seaweed. Ink the oranges.".to_string(), Color::White),
    ];
    if state.score > 0 {
        lines.push((format!("Last Score: {:>6}", state.score), Color::Yellow));
    }
    lines.push(("ENTER - Start   Q - Quit".to_string(), Color::White));
    draw_centered(out, &lines, width, height)
}

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameSession,
    outcome: Outcome,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let (banner, color) = match outcome {
        Outcome::Win => ("║      YOU  WIN!     ║", Color::Green),
        Outcome::Loss => ("║    GAME  OVER      ║", Color::Red),
    };
    let lines = [
        ("╔════════════════════╗".to_string(), color),
        (banner.to_string(), color),
        ("╚════════════════════╝".to_string(), color),
        (format!("Final Score: {:>6}", state.score), Color::Yellow),
        ("ENTER - Title   Q - Quit".to_string(), Color::White),
    ];
    draw_centered(out, &lines, width, height)
}
