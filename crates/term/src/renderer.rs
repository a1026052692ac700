//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is drawn in place. At startup the screen is cleared and the
//! cursor position is saved as the frame anchor (`ESC 7`). Each redraw jumps
//! back to that anchor (`ESC 8`), clears to the end of the line, re-saves the
//! anchor and prints the whole frame, so frames overwrite each other instead
//! of scrolling.
//!
//! The `encode_*` functions only build byte sequences; they never touch the
//! terminal and are what the tests exercise.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub const GAME_OVER_NOTICE: &str = "Game Over!";

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    raw_mode: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Render to an arbitrary writer. Raw mode is still toggled on the
    /// process terminal by [`enter`](Self::enter).
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(16 * 1024),
            raw_mode: false,
        }
    }

    /// Switch to raw/no-echo input, hide the cursor and save the frame anchor.
    ///
    /// If the startup sequence cannot be written, raw mode is left again
    /// before the error is returned.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.raw_mode = true;
        self.write_enter()
    }

    /// Restore attributes, show the cursor and leave raw mode.
    ///
    /// Raw mode is left even when the writer fails. Safe to call more than
    /// once.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        let written = encode_exit_into(&mut self.buf).and_then(|()| self.flush_buf());
        if self.raw_mode {
            terminal::disable_raw_mode()?;
            self.raw_mode = false;
        }
        written
    }

    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    /// Redraw the frame at the saved anchor.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(fb, &mut self.buf)?;
        self.flush_buf()
    }

    /// Print the end-of-game notice below the last frame.
    pub fn game_over(&mut self) -> Result<()> {
        self.buf.clear();
        encode_game_over_into(&mut self.buf)?;
        self.flush_buf()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn write_enter(&mut self) -> Result<()> {
        self.buf.clear();
        let written = encode_enter_into(&mut self.buf).and_then(|()| self.flush_buf());
        if written.is_err() {
            let _ = self.exit();
        }
        written
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Startup sequence: clear, home, hide cursor, save the anchor.
pub fn encode_enter_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(cursor::Hide)?;
    out.queue(cursor::SavePosition)?;
    Ok(())
}

/// Shutdown sequence: reset attributes and show the cursor again.
pub fn encode_exit_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(cursor::Show)?;
    Ok(())
}

/// Encode a full in-place redraw into `out`.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::RestorePosition)?;
    out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
    out.queue(cursor::SavePosition)?;

    for y in 0..fb.height() {
        let mut current_style: Option<CellStyle> = None;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        out.queue(SetAttribute(Attribute::Reset))?;
        // Raw mode disables output post-processing, so "\n" alone would not
        // return to column 0.
        out.queue(Print("\r\n"))?;
    }

    Ok(())
}

pub fn encode_game_over_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(Print("\r\n"))?;
    out.queue(Print(GAME_OVER_NOTICE))?;
    out.queue(Print("\r\n"))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn to_color(rgb: Option<Rgb>) -> Color {
    match rgb {
        Some(Rgb { r, g, b }) => Color::Rgb { r, g, b },
        None => Color::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn default_style_maps_to_terminal_default() {
        assert_eq!(to_color(None), Color::Reset);
        assert_eq!(
            to_color(Some(Rgb::new(1, 2, 3))),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn frame_starts_at_saved_anchor() {
        let fb = FrameBuffer::new(2, 1);
        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out).unwrap();
        assert!(out.starts_with(b"\x1b8\x1b[K\x1b7"));
        assert!(out.ends_with(b"\r\n"));
    }

    #[test]
    fn one_line_break_per_frame_row() {
        let mut fb = FrameBuffer::new(3, 4);
        fb.set(1, 2, Cell { ch: '┃', style: CellStyle::default() });
        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\r\n").count(), 4);
        assert!(text.contains('┃'));
    }

    #[test]
    fn enter_hides_cursor_and_saves_anchor() {
        let mut out = Vec::new();
        encode_enter_into(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[?25l"));
        assert!(text.ends_with("\x1b7"));

        let mut out = Vec::new();
        encode_exit_into(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("\x1b[?25h"));
    }

    #[test]
    fn draw_writes_through_custom_writer() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        term.draw(&FrameBuffer::new(1, 1)).unwrap();
        term.game_over().unwrap();
        let text = String::from_utf8(term.writer().clone()).unwrap();
        assert!(text.contains(GAME_OVER_NOTICE));
    }

    #[test]
    fn failed_enter_sequence_leaves_raw_mode() {
        let mut term = TerminalRenderer::with_writer(BrokenPipe);
        // State right after `enable_raw_mode` succeeded.
        term.raw_mode = true;
        assert!(term.write_enter().is_err());
        assert!(!term.is_raw_mode());
    }

    #[test]
    fn exit_leaves_raw_mode_when_writer_fails() {
        let mut term = TerminalRenderer::with_writer(BrokenPipe);
        term.raw_mode = true;
        assert!(term.exit().is_err());
        assert!(!term.is_raw_mode());
        assert!(term.exit().is_err());
        assert!(!term.is_raw_mode());
    }
}
