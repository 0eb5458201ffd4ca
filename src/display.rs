//! Terminal rendering. All screen output lives here.
//!
//! The renderer receives an immutable snapshot each tick and translates it
//! into crossterm commands. No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use space_invaders::config::GlyphConfig;
use space_invaders::entities::{GameStatus, Snapshot};
use space_invaders::grid::Cell;
use space_invaders::session::RenderSink;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_WALL_BG: Color = Color::DarkBlue;
const C_DOT: Color = Color::DarkGrey;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_ALIEN: Color = Color::Green;
const C_LASER: Color = Color::Cyan;
const C_DEATH: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

pub struct TerminalRenderer<W: Write> {
    out: W,
    glyphs: GlyphConfig,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, glyphs: GlyphConfig) -> Self {
        Self { out, glyphs }
    }

    /// Terminal column of a grid column.
    fn screen_col(&self, col: usize) -> u16 {
        col as u16 * self.glyphs.cell_width()
    }

    fn put(&mut self, row: usize, col: usize, glyph: &str, color: Color) -> std::io::Result<()> {
        let x = self.screen_col(col);
        self.out.queue(cursor::MoveTo(x, row as u16))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(glyph))?;
        Ok(())
    }
}

impl<W: Write> RenderSink for TerminalRenderer<W> {
    /// Render one complete frame.
    fn present(&mut self, snap: &Snapshot<'_>) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;

        self.draw_grid(snap)?;

        let laser = self.glyphs.laser.clone();
        for l in snap.lasers {
            self.put(l.row, l.col, &laser, C_LASER)?;
        }
        let alien = self.glyphs.alien.clone();
        for a in snap.aliens {
            self.put(a.row, a.col, &alien, C_ALIEN)?;
        }

        // The death marker replaces the player on the final frame of a loss
        let (glyph, color) = if snap.status == GameStatus::Lost {
            (self.glyphs.death.clone(), C_DEATH)
        } else {
            (self.glyphs.player.clone(), C_PLAYER)
        };
        self.put(snap.player.row, snap.player.col, &glyph, color)?;

        self.draw_hud(snap)?;

        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, snap.grid.height() as u16 + 3))?;
        self.out.flush()
    }
}

impl<W: Write> TerminalRenderer<W> {
    // ── Level tiles ───────────────────────────────────────────────────────────

    fn draw_grid(&mut self, snap: &Snapshot<'_>) -> std::io::Result<()> {
        for (row, cells) in snap.grid.rows().enumerate() {
            self.out.queue(cursor::MoveTo(0, row as u16))?;
            for cell in cells {
                match cell {
                    Cell::Wall => {
                        self.out.queue(style::SetBackgroundColor(C_WALL_BG))?;
                        self.out.queue(Print(&self.glyphs.wall))?;
                        self.out.queue(style::SetBackgroundColor(Color::Reset))?;
                    }
                    Cell::Dot => {
                        self.out.queue(style::SetForegroundColor(C_DOT))?;
                        self.out.queue(Print(&self.glyphs.dot))?;
                    }
                    Cell::Open | Cell::Empty => {
                        self.out.queue(Print(&self.glyphs.space))?;
                    }
                }
            }
        }
        Ok(())
    }

    // ── HUD (below the grid) ──────────────────────────────────────────────────

    fn draw_hud(&mut self, snap: &Snapshot<'_>) -> std::io::Result<()> {
        let hud_row = snap.grid.height() as u16 + 1;

        self.out.queue(cursor::MoveTo(0, hud_row))?;
        self.out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
        self.out.queue(Print(format!("Score: {}", snap.score)))?;
        self.out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
        self.out.queue(Print(format!("\tLives: {}", snap.lives)))?;

        let (msg, color) = match snap.status {
            GameStatus::Running => ("← → : Move   ↑ ↓ SPACE : Fire   ESC : Quit", C_HINT),
            GameStatus::Won => ("YOU WIN", Color::Green),
            GameStatus::Lost => ("GAME OVER", C_DEATH),
        };
        self.out.queue(cursor::MoveTo(0, hud_row + 1))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(msg))?;
        Ok(())
    }
}
