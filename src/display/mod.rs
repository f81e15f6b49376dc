//! Rendering layer. All terminal I/O lives here.
//!
//! The world is 400x300 pixels; the terminal is whatever size it is.  Each
//! sprite is scaled to a cell position and drawn as a short glyph string.
//! No game logic is performed; this module only translates frames into
//! terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use term_invaders::entities::{AlienRow, GameStatus, Outcome, SpriteId};
use term_invaders::frame::{Draw, Frame, Screen};
use term_invaders::geometry::{Point, Size};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_CANNON: Color = Color::Green;
const C_ALIEN_TOP: Color = Color::Magenta;
const C_ALIEN_MIDDLE: Color = Color::Cyan;
const C_ALIEN_BOTTOM: Color = Color::Green;
const C_EXPLOSION: Color = Color::Yellow;
const C_BEAM: Color = Color::White;
const C_BOMB: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

/// Glyphs and colour for each sprite.
fn glyph(sprite: SpriteId) -> (&'static str, Color) {
    match sprite {
        SpriteId::Cannon => ("▄█▄", C_CANNON),
        SpriteId::CannonExplode => ("✸✸✸", C_EXPLOSION),
        SpriteId::Alien1 => ("/◉\\", C_ALIEN_TOP),
        SpriteId::Alien1Alt => ("\\◉/", C_ALIEN_TOP),
        SpriteId::Alien2 => ("{▀}", C_ALIEN_MIDDLE),
        SpriteId::Alien2Alt => ("}▀{", C_ALIEN_MIDDLE),
        SpriteId::Alien3 => ("«█»", C_ALIEN_BOTTOM),
        SpriteId::Alien3Alt => ("»█«", C_ALIEN_BOTTOM),
        SpriteId::AlienExplode => ("✶", C_EXPLOSION),
        SpriteId::Beam => ("│", C_BEAM),
        SpriteId::Bomb => ("↓", C_BOMB),
    }
}

pub struct TerminalScreen<W: Write> {
    out: W,
    world: Size,
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W, world: Size) -> Self {
        Self { out, world }
    }

    /// World pixel → terminal cell inside the border.  `None` if the point
    /// lies outside the world.
    fn to_cell(&self, p: Point, cols: u16, rows: u16) -> Option<(u16, u16)> {
        if p.x < 0 || p.y < 0 || p.x >= self.world.width || p.y >= self.world.height {
            return None;
        }
        let inner_w = i64::from(cols.saturating_sub(2));
        let inner_h = i64::from(rows.saturating_sub(4));
        let col = 1 + i64::from(p.x) * inner_w / i64::from(self.world.width);
        let row = 2 + i64::from(p.y) * inner_h / i64::from(self.world.height);
        Some((col as u16, row as u16))
    }

    fn draw_sprite(&mut self, draw: &Draw, cols: u16, rows: u16) -> std::io::Result<()> {
        let Some((col, row)) = self.to_cell(draw.position, cols, rows) else {
            return Ok(());
        };
        let (text, color) = glyph(draw.sprite);
        let room = usize::from(cols.saturating_sub(1).saturating_sub(col));
        let text: String = text.chars().take(room).collect();
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    /// Box around the playfield.  Row 0 stays free for the HUD and the last
    /// row for the controls hint.
    fn draw_border(&mut self, cols: u16, rows: u16) -> std::io::Result<()> {
        let top = 1;
        let bottom = rows.saturating_sub(2);
        let bar = "─".repeat(usize::from(cols.saturating_sub(2)));
        self.out.queue(style::SetForegroundColor(C_BORDER))?;
        for (row, left, right) in [(top, '┌', '┐'), (bottom, '└', '┘')] {
            self.out
                .queue(cursor::MoveTo(0, row))?
                .queue(Print(format!("{left}{bar}{right}")))?;
        }
        let right_wall = cols.saturating_sub(1);
        for row in top + 1..bottom {
            self.out.queue(cursor::MoveTo(0, row))?.queue(Print('│'))?;
            self.out
                .queue(cursor::MoveTo(right_wall, row))?
                .queue(Print('│'))?;
        }
        Ok(())
    }

    fn draw_hud(&mut self, score: u32) -> std::io::Result<()> {
        self.out.queue(cursor::MoveTo(1, 0))?;
        self.out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
        self.out.queue(Print(format!("SCORE:{:>6}", score)))?;
        Ok(())
    }

    fn draw_controls_hint(&mut self, rows: u16) -> std::io::Result<()> {
        self.out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out
            .queue(Print("← → / A D : Move   SPACE : Fire   Q : Quit"))?;
        Ok(())
    }

    /// Centred block of lines around the middle of the screen.
    fn draw_centered(
        &mut self,
        lines: &[(String, Color)],
        cols: u16,
        rows: u16,
    ) -> std::io::Result<()> {
        let cx = cols / 2;
        let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, (msg, color)) in lines.iter().enumerate() {
            let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
            self.out.queue(cursor::MoveTo(col, start_row + i as u16))?;
            self.out.queue(style::SetForegroundColor(*color))?;
            self.out.queue(Print(msg))?;
        }
        Ok(())
    }

    fn draw_game_over(&mut self, frame: &Frame, cols: u16, rows: u16) -> std::io::Result<()> {
        let reason = match frame.outcome {
            Some(Outcome::Quit) => "You quit",
            Some(Outcome::CannonDestroyed) => "Your cannon was destroyed",
            Some(Outcome::Invaded) => "The invaders have landed",
            Some(Outcome::Cleared) => "Wave cleared!",
            None => "",
        };
        let lines = [
            ("╔════════════════════╗".to_string(), Color::Red),
            ("║     GAME  OVER     ║".to_string(), Color::Red),
            ("╚════════════════════╝".to_string(), Color::Red),
            (reason.to_string(), Color::White),
            (format!("Final Score: {:>6}", frame.score), Color::Yellow),
        ];
        self.draw_centered(&lines, cols, rows)
    }

    /// Send the queued frame, leaving colours reset and the cursor on the
    /// hint row.
    fn flush_frame(&mut self, rows: u16) -> std::io::Result<()> {
        self.out
            .queue(style::ResetColor)?
            .queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
        self.out.flush()
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn show_start(&mut self) -> std::io::Result<()> {
        let (cols, rows) = terminal::size()?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;

        let mut lines = vec![
            ("★  SPACE  INVADERS  ★".to_string(), Color::Cyan),
            (String::new(), Color::White),
        ];
        for row in AlienRow::ALL {
            let (text, color) = glyph(row.sprites().0);
            lines.push((format!("{text} = {:>2} POINTS", row.points()), color));
        }
        lines.push((String::new(), Color::White));
        lines.push(("S : Start    Q : Quit".to_string(), Color::White));

        self.draw_centered(&lines, cols, rows)?;
        self.flush_frame(rows)
    }

    fn present(&mut self, frame: &Frame) -> std::io::Result<()> {
        let (cols, rows) = terminal::size()?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;

        self.draw_border(cols, rows)?;
        self.draw_hud(frame.score)?;
        for draw in &frame.draws {
            self.draw_sprite(draw, cols, rows)?;
        }
        self.draw_controls_hint(rows)?;

        if frame.status == GameStatus::GameOver {
            self.draw_game_over(frame, cols, rows)?;
        }
        self.flush_frame(rows)
    }
}
