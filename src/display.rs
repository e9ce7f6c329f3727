/// Terminal renderer. Nothing here changes the game state.
///
/// World pixels are squeezed onto the terminal grid; every entity becomes a
/// block of glyphs covering its display rect.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use glam::Vec2;

use as2d::entities::{Behavior, Entity, GamePhase, GameStateInfo};
use as2d::geometry::Rect;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_STAR: Color = Color::DarkGrey;
const C_HUD_LEVEL: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_HUD_FPS: Color = Color::Cyan;
const C_SHIP: Color = Color::White;
const C_SPHERE: Color = Color::Green;
const C_MISSILE: Color = Color::Cyan;
const C_EXPLOSION: Color = Color::Yellow;
const C_LIFE_ICON: Color = Color::Magenta;
const C_BANNER: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

const SPHERE_GLYPHS: [char; 4] = ['◐', '◓', '◑', '◒'];
const EXPLOSION_GLYPHS: [char; 5] = ['✶', '✷', '*', '+', '·'];
const STAR_COUNT: u32 = 48;

// ── World → terminal mapping ──────────────────────────────────────────────────

/// Row 0 holds the HUD and the last row the controls hint; the play field
/// is stretched over the rows in between.
struct Viewport {
    top: u16,
    cols: u16,
    rows: u16,
    scale_x: f32,
    scale_y: f32,
}

impl Viewport {
    fn new(cols: u16, term_rows: u16, world: Rect) -> Self {
        let rows = term_rows.saturating_sub(2).max(1);
        Viewport {
            top: 1,
            cols: cols.max(1),
            rows,
            scale_x: cols.max(1) as f32 / world.width.max(1.0),
            scale_y: rows as f32 / world.height.max(1.0),
        }
    }

    fn cell(&self, point: Vec2) -> Option<(u16, u16)> {
        let col = (point.x * self.scale_x).floor();
        let row = (point.y * self.scale_y).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f32 || row >= self.rows as f32 {
            return None;
        }
        Some((col as u16, self.top + row as u16))
    }

    /// Inclusive cell span covered by `rect`, clipped to the field; at least
    /// one cell for anything on screen.
    fn span(&self, rect: Rect) -> Option<(u16, u16, u16, u16)> {
        let left = (rect.x * self.scale_x).floor().max(0.0);
        let top = (rect.y * self.scale_y).floor().max(0.0);
        let right = ((rect.right() * self.scale_x).ceil() - 1.0).min(self.cols as f32 - 1.0);
        let bottom = ((rect.bottom() * self.scale_y).ceil() - 1.0).min(self.rows as f32 - 1.0);
        if left >= self.cols as f32 || top >= self.rows as f32 || right < 0.0 || bottom < 0.0 {
            return None;
        }
        let right = right.max(left);
        let bottom = bottom.max(top);
        Some((
            left as u16,
            self.top + top as u16,
            right as u16,
            self.top + bottom as u16,
        ))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame onto a terminal of `size` (columns, rows).
pub fn render<W: Write>(
    out: &mut W,
    state: &GameStateInfo,
    fps: f32,
    size: (u16, u16),
) -> std::io::Result<()> {
    let (cols, rows) = size;
    let view = Viewport::new(cols, rows, state.layout.display);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_stars(out, state, &view)?;
    for (_, entity) in state.entities.iter() {
        if entity.visible {
            draw_entity(out, entity, &view)?;
        }
    }
    draw_hud(out, state, fps, cols)?;
    draw_controls_hint(out, rows)?;

    // Cursor parked on the hint row.
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_stars<W: Write>(out: &mut W, state: &GameStateInfo, view: &Viewport) -> std::io::Result<()> {
    let width = state.layout.width().max(1.0);
    let height = state.background.scaled_height().max(1.0);
    let (first, second) = state.background.offsets();

    out.queue(style::SetForegroundColor(C_STAR))?;
    for i in 0..STAR_COUNT {
        // Fixed scatter pattern; both sky copies carry the same stars.
        let x = (i * 97 % 997) as f32 / 997.0 * width;
        let base = (i * 61 % 991) as f32 / 991.0 * height;
        for offset in [first, second] {
            if let Some((col, row)) = view.cell(Vec2::new(x, base + offset)) {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(Print('.'))?;
            }
        }
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn frame_of(entity: &Entity) -> u32 {
    entity
        .visual
        .animation
        .as_ref()
        .map(|a| a.frame_index())
        .unwrap_or(0)
}

fn frame_count_of(entity: &Entity) -> u32 {
    entity
        .visual
        .animation
        .as_ref()
        .map(|a| a.frame_count())
        .unwrap_or(1)
        .max(1)
}

fn draw_entity<W: Write>(out: &mut W, entity: &Entity, view: &Viewport) -> std::io::Result<()> {
    let rect = entity.display_rect();

    if let Behavior::Text(message) = &entity.behavior {
        return draw_banner(out, message, rect, view);
    }

    let Some((left, top, right, bottom)) = view.span(rect) else {
        return Ok(());
    };

    let frame = frame_of(entity);
    let (color, fill, cap) = match &entity.behavior {
        Behavior::Ship(ship) => (C_SHIP, if ship.moving { '▓' } else { '█' }, Some('▲')),
        Behavior::Sphere(_) => (C_SPHERE, SPHERE_GLYPHS[frame as usize % SPHERE_GLYPHS.len()], None),
        Behavior::Missile(_) => (C_MISSILE, if frame % 2 == 0 { '║' } else { '|' }, Some('^')),
        Behavior::Explosion => {
            let stage = frame as usize * EXPLOSION_GLYPHS.len() / frame_count_of(entity) as usize;
            (C_EXPLOSION, EXPLOSION_GLYPHS[stage.min(EXPLOSION_GLYPHS.len() - 1)], None)
        }
        Behavior::LifeIcon => (C_LIFE_ICON, '♥', None),
        Behavior::Text(_) => return Ok(()),
    };

    out.queue(style::SetForegroundColor(color))?;
    for row in top..=bottom {
        let glyph = match cap {
            Some(c) if row == top && bottom > top => c,
            _ => fill,
        };
        out.queue(cursor::MoveTo(left, row))?;
        let line: String = std::iter::repeat(glyph)
            .take((right - left + 1) as usize)
            .collect();
        out.queue(Print(line))?;
    }
    Ok(())
}

fn draw_banner<W: Write>(
    out: &mut W,
    message: &str,
    rect: Rect,
    view: &Viewport,
) -> std::io::Result<()> {
    let center = rect.center();
    let Some((col, row)) = view.cell(center) else {
        return Ok(());
    };
    let start = col.saturating_sub(message.chars().count() as u16 / 2);
    out.queue(style::SetForegroundColor(C_BANNER))?;
    out.queue(cursor::MoveTo(start, row))?;
    out.queue(Print(message))?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    state: &GameStateInfo,
    fps: f32,
    cols: u16,
) -> std::io::Result<()> {
    // Level, left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(format!("Level: {:>3}", state.level)))?;

    // Phase, centre
    let phase = match state.phase {
        GamePhase::Game => "",
        GamePhase::ShipDestruction => "[ SHIP DOWN ]",
        GamePhase::NewShip => "[ NEW SHIP ]",
        GamePhase::NewSwarm => "[ NEW SWARM ]",
        GamePhase::End => "[ GAME OVER ]",
    };
    if !phase.is_empty() {
        let px = (cols / 2).saturating_sub(phase.len() as u16 / 2);
        out.queue(cursor::MoveTo(px, 0))?;
        out.queue(style::SetForegroundColor(C_BANNER))?;
        out.queue(Print(phase))?;
    }

    // Lives and FPS, right
    let lives_text = format!("Lives: {}", state.lives);
    let fps_text = format!("FPS: {:>3.0}", fps);
    let right = format!("{}  {}", lives_text, fps_text);
    let rx = cols.saturating_sub(right.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_text))?;
    out.queue(style::SetForegroundColor(C_HUD_FPS))?;
    out.queue(Print(format!("  {}", fps_text)))?;

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Fire   ESC : Quit"))?;
    Ok(())
}
