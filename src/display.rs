/// Rendering layer: all terminal output lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// world coordinates into terminal cells and cells into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{self, Color, Print},
    terminal,
    ExecutableCommand, QueueableCommand,
};

use crate::entities::{Bullet, Enemy, GameState, Player};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::White;
const C_PLAYER: Color = Color::Cyan;
const C_ENEMY: Color = Color::Red;
const C_BULLET: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;
const C_SHADE: Color = Color::DarkGrey;

/// Maps world units onto the play area of a terminal.
///
/// Row 0 is the HUD, row 1 and the second-to-last row are borders, the last
/// row holds the controls hint.  Everything in between is the arena.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    world_w: f32,
    world_h: f32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, state: &GameState) -> Self {
        Self { cols, rows, world_w: state.config.width, world_h: state.config.height }
    }

    fn arena_cols(&self) -> u16 {
        self.cols.saturating_sub(2).max(1)
    }

    fn arena_rows(&self) -> u16 {
        self.rows.saturating_sub(4).max(1)
    }

    /// Terminal column for world `x`, clamped inside the side walls.
    pub fn col(&self, x: f32) -> u16 {
        let c = (x / self.world_w * self.arena_cols() as f32).floor();
        1 + (c.max(0.0) as u16).min(self.arena_cols() - 1)
    }

    /// Terminal row for world `y`, or `None` when it falls outside the arena.
    pub fn row(&self, y: f32) -> Option<u16> {
        let r = (y / self.world_h * self.arena_rows() as f32).floor();
        if r < 0.0 || r >= self.arena_rows() as f32 {
            None
        } else {
            Some(2 + r as u16)
        }
    }

    /// Number of cells a world width spans, at least one.
    fn span(&self, w: f32) -> u16 {
        ((w / self.world_w * self.arena_cols() as f32).round() as u16).max(1)
    }

    fn rows_spanned(&self, y: f32, h: f32) -> Vec<u16> {
        let top = (y / self.world_h * self.arena_rows() as f32).floor() as i32;
        let bottom = ((y + h) / self.world_h * self.arena_rows() as f32).ceil() as i32;
        (top..bottom.max(top + 1))
            .filter(|r| *r >= 0 && *r < self.arena_rows() as i32)
            .map(|r| 2 + r as u16)
            .collect()
    }
}

// ── Terminal lifetime ─────────────────────────────────────────────────────────

/// Owns the output while the game has the terminal.  Raw mode, the alternate
/// screen and the hidden cursor are undone on drop, including when
/// [`TerminalGuard::enter`] itself fails half-way.
pub struct TerminalGuard<W: Write> {
    out: W,
    keyboard_enhanced: bool,
}

impl<W: Write> TerminalGuard<W> {
    pub fn enter(out: W) -> std::io::Result<Self> {
        let mut guard = Self { out, keyboard_enhanced: false };

        terminal::enable_raw_mode()?;
        guard.out.execute(terminal::EnterAlternateScreen)?;
        guard.out.execute(cursor::Hide)?;

        // Request key-release (and key-repeat) events from the terminal.
        // Terminals without the kitty protocol fall back to the hold window.
        guard.keyboard_enhanced = guard
            .out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();

        Ok(guard)
    }

    pub fn keyboard_enhanced(&self) -> bool {
        self.keyboard_enhanced
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if self.keyboard_enhanced {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame onto a `cols × rows` terminal.
pub fn render<W: Write>(out: &mut W, state: &GameState, cols: u16, rows: u16) -> std::io::Result<()> {
    let view = Viewport::new(cols, rows, state);
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if state.is_over() {
        draw_game_over(out, state, &view)?;
    } else {
        draw_border(out, &view)?;
        draw_hud(out, state)?;
        for enemy in &state.enemies {
            draw_enemy(out, enemy, &view)?;
        }
        for bullet in &state.bullets {
            draw_bullet(out, bullet, &view)?;
        }
        draw_player(out, &state.player, &view)?;
        draw_controls_hint(out, &view)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}", state.score)))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Upward triangle inscribed in the player's box:
///    ▲      ← top row (tip)
///   ◢█◣     ← lower rows (widening hull)
fn draw_player<W: Write>(out: &mut W, p: &Player, view: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_PLAYER))?;

    let left = view.col(p.x);
    let span = view.span(p.width);
    let centre = view.col(p.x + p.width / 2.0);
    let rows = view.rows_spanned(p.y, p.height);

    for (i, row) in rows.iter().enumerate() {
        out.queue(cursor::MoveTo(centre, *row))?;
        if i == 0 {
            out.queue(Print("▲"))?;
        } else if span >= 3 {
            out.queue(cursor::MoveTo(left, *row))?;
            let hull = "█".repeat(span.saturating_sub(2) as usize);
            out.queue(Print(format!("◢{hull}◣")))?;
        } else {
            out.queue(Print("█"))?;
        }
    }
    Ok(())
}

fn fill_rect<W: Write>(
    out: &mut W,
    view: &Viewport,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    glyph: &str,
) -> std::io::Result<()> {
    let col = view.col(x);
    let span = view.span(w).min(view.cols.saturating_sub(1).saturating_sub(col).max(1));
    for row in view.rows_spanned(y, h) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print(glyph.repeat(span as usize)))?;
    }
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, view: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_ENEMY))?;
    fill_rect(out, view, enemy.x, enemy.y, enemy.width, enemy.height, "█")
}

fn draw_bullet<W: Write>(out: &mut W, bullet: &Bullet, view: &Viewport) -> std::io::Result<()> {
    let Some(row) = view.row(bullet.y) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(C_BULLET))?;
    out.queue(cursor::MoveTo(view.col(bullet.x + bullet.width / 2.0), row))?;
    out.queue(Print("║"))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    // Translucent shade over the whole screen
    out.queue(style::SetForegroundColor(C_SHADE))?;
    let shade = "░".repeat(view.cols as usize);
    for row in 0..view.rows {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print(&shade))?;
    }

    let score_line = format!("Final Score: {:>6}", state.score);
    let hint = "R - Restart  Q - Quit";
    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║     GAME  OVER     ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (score_line.as_str(), Color::Yellow),
        (hint, Color::White),
    ];

    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
