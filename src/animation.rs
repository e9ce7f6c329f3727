/// Frame-rate independent timing: the elapsed-time accumulator every entity
/// uses for motion, the sprite-sheet cursor it drives, and the phase counter
/// used by explosions.

use glam::Vec2;

use crate::geometry::Rect;

/// Accumulates elapsed seconds and fires once per `interval`.
///
/// When it fires the accumulator drops back to zero; any surplus beyond the
/// interval is discarded rather than carried into the next period.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationTimer {
    interval: f32,
    elapsed: f32,
}

impl AnimationTimer {
    pub fn new(interval: f32) -> Self {
        debug_assert!(interval > 0.0, "animation interval must be positive");
        AnimationTimer {
            interval,
            elapsed: 0.0,
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn set_interval(&mut self, interval: f32) {
        debug_assert!(interval > 0.0, "animation interval must be positive");
        self.interval = interval;
    }

    /// Add `dt` seconds; returns `true` when the interval has been reached.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }
}

// ── Sprite sheets ─────────────────────────────────────────────────────────────

/// Cursor over a `columns x rows` grid of frames.
///
/// Frames advance along a row, then wrap to the next row, then back to the
/// first row. With a locked row the cursor cycles through that row only.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetAnimation {
    columns: u16,
    rows: u16,
    column: u16,
    row: u16,
    locked_row: Option<u16>,
    timer: AnimationTimer,
}

impl SheetAnimation {
    pub fn new(columns: u16, rows: u16, interval: f32) -> Self {
        SheetAnimation {
            columns: columns.max(1),
            rows: rows.max(1),
            column: 0,
            row: 0,
            locked_row: None,
            timer: AnimationTimer::new(interval),
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn column(&self) -> u16 {
        self.column
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    pub fn frame_count(&self) -> u32 {
        self.columns as u32 * self.rows as u32
    }

    pub fn frame_index(&self) -> u32 {
        self.row as u32 * self.columns as u32 + self.column as u32
    }

    /// Pin the cursor to one row (or release it with `None`).
    pub fn lock_row(&mut self, row: Option<u16>) {
        self.locked_row = row.map(|r| r.min(self.rows - 1));
        if let Some(r) = self.locked_row {
            self.row = r;
        }
    }

    /// Feed elapsed time; returns `true` if the visible frame changed.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.timer.advance(dt) {
            self.step();
            true
        } else {
            false
        }
    }

    fn step(&mut self) {
        self.column += 1;
        if self.column >= self.columns {
            self.column = 0;
            if self.locked_row.is_none() {
                self.row = (self.row + 1) % self.rows;
            }
        }
    }

    /// The cell of the sheet currently on display.
    pub fn source_rect(&self, frame_size: Vec2) -> Rect {
        Rect::new(
            self.column as f32 * frame_size.x,
            self.row as f32 * frame_size.y,
            frame_size.x,
            frame_size.y,
        )
    }
}

// ── Explosions ────────────────────────────────────────────────────────────────

/// Counts explosion phases; finished once every phase has elapsed.
#[derive(Clone, Debug, PartialEq)]
pub struct ExplosionClock {
    timer: AnimationTimer,
    phase: u32,
    phases: u32,
}

impl ExplosionClock {
    pub fn new(phases: u32, interval: f32) -> Self {
        ExplosionClock {
            timer: AnimationTimer::new(interval),
            phase: 0,
            phases,
        }
    }

    pub fn phase(&self) -> u32 {
        self.phase
    }

    pub fn phases(&self) -> u32 {
        self.phases
    }

    pub fn is_finished(&self) -> bool {
        self.phase >= self.phases
    }

    /// Advance by `dt`; returns `true` once the last phase has elapsed.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.is_finished() && self.timer.advance(dt) {
            self.phase += 1;
        }
        self.is_finished()
    }
}
