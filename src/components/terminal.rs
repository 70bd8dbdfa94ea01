//! ADM-3A terminal emulation
//!
//! An 80x24 character buffer driven one output byte at a time. The
//! ADM-3A is a "screen-edit" dumb terminal: cursor motion, home, clear
//! and direct cursor addressing all arrive in-band as control bytes.

use std::io::{self, Write};

/// Screen width in characters
pub const COLUMNS: usize = 80;
/// Screen height in rows
pub const ROWS: usize = 24;

/// Cursor offset at which output scrolls. The very last cell is never
/// written; reaching it scrolls instead.
const SCROLL_BOUNDARY: usize = COLUMNS * ROWS - 1;

/// ADM-3A terminal state
pub struct Terminal {
    /// Character cells, row-major, pre-filled with spaces
    buffer: [u8; COLUMNS * ROWS],
    /// 0-based cursor offset into the buffer
    cursor: usize,
    /// Escape sequence accumulator
    esc_sequence: Vec<u8>,
}

impl Terminal {
    /// Create a blank terminal
    pub fn new() -> Self {
        Self {
            buffer: [b' '; COLUMNS * ROWS],
            cursor: 0,
            esc_sequence: Vec::new(),
        }
    }

    /// The character buffer, row-major
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// One row of the buffer
    pub fn row(&self, row: usize) -> &[u8] {
        &self.buffer[row * COLUMNS..(row + 1) * COLUMNS]
    }

    /// Current cursor offset
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Process one output byte
    ///
    /// The high bit is always stripped. Control bytes follow the ADM-3A
    /// convention; `ESC = row col` (row and column biased by 0x20) sets
    /// the cursor, any other escape sequence is discarded. Control
    /// bytes the terminal does not handle fall through to host stdout.
    pub fn putch(&mut self, ch: u8) {
        let ch = ch & 0x7F;

        if ch == 0x1B {
            self.esc_sequence.clear();
            self.esc_sequence.push(ch);
            return;
        }
        if !self.esc_sequence.is_empty() {
            self.esc_sequence.push(ch);
            if self.esc_sequence[1] != b'=' {
                // Only cursor addressing is emulated
                self.esc_sequence.clear();
            } else if self.esc_sequence.len() >= 4 {
                let row = self.esc_sequence[2].wrapping_sub(0x20) as usize;
                let col = self.esc_sequence[3].wrapping_sub(0x20) as usize;
                self.cursor = (COLUMNS * row + col).min(COLUMNS * ROWS - 1);
                self.esc_sequence.clear();
            }
            return;
        }

        match ch {
            0x08 => self.cursor = self.cursor.saturating_sub(1),
            0x0A => {
                self.cursor += COLUMNS;
                if self.cursor >= SCROLL_BOUNDARY {
                    self.scroll_up();
                    self.cursor = COLUMNS * (ROWS - 1);
                }
            }
            0x0B => self.cursor = self.cursor.saturating_sub(COLUMNS),
            0x0C => self.cursor = (self.cursor + 1).min(COLUMNS * ROWS - 1),
            0x0D => self.cursor = self.cursor / COLUMNS * COLUMNS,
            0x1A => {
                self.buffer.fill(b' ');
                self.cursor = 0;
            }
            0x1E => self.cursor = 0,
            0x20..=0x7E => {
                if self.cursor >= SCROLL_BOUNDARY {
                    self.scroll_up();
                    self.cursor = COLUMNS * (ROWS - 1);
                }
                self.buffer[self.cursor] = ch;
                self.cursor += 1;
            }
            _ => {
                // Unhandled control bytes go to the host console
                print!("{}", ch as char);
                let _ = io::stdout().flush();
            }
        }
    }

    /// Discard the top row and open a blank row at the bottom
    fn scroll_up(&mut self) {
        self.buffer.copy_within(COLUMNS.., 0);
        self.buffer[COLUMNS * (ROWS - 1)..].fill(b' ');
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(term: &mut Terminal, bytes: &[u8]) {
        for &b in bytes {
            term.putch(b);
        }
    }

    #[test]
    fn test_printable_advances_cursor() {
        let mut term = Terminal::new();
        feed(&mut term, b"HELLO");
        assert_eq!(&term.row(0)[..5], b"HELLO");
        assert_eq!(term.cursor(), 5);
    }

    #[test]
    fn test_high_bit_stripped() {
        let mut term = Terminal::new();
        term.putch(b'A' | 0x80);
        assert_eq!(term.row(0)[0], b'A');
    }

    #[test]
    fn test_carriage_return_and_line_feed() {
        let mut term = Terminal::new();
        feed(&mut term, b"AB\r");
        assert_eq!(term.cursor(), 0);
        term.putch(0x0A);
        assert_eq!(term.cursor(), COLUMNS);
    }

    #[test]
    fn test_cursor_left_clamps_at_zero() {
        let mut term = Terminal::new();
        term.putch(0x08);
        assert_eq!(term.cursor(), 0);
        feed(&mut term, b"X");
        term.putch(0x08);
        assert_eq!(term.cursor(), 0);
    }

    #[test]
    fn test_cursor_up_and_right() {
        let mut term = Terminal::new();
        term.putch(0x0A);
        term.putch(0x0B);
        assert_eq!(term.cursor(), 0);
        term.putch(0x0C);
        assert_eq!(term.cursor(), 1);
    }

    #[test]
    fn test_line_feed_scrolls_on_last_row() {
        let mut term = Terminal::new();
        feed(&mut term, b"TOP");
        for _ in 0..ROWS - 1 {
            term.putch(0x0A);
        }
        assert_eq!(term.cursor(), COLUMNS * (ROWS - 1) + 3);
        // One more line feed pushes "TOP" off the screen
        term.putch(0x0A);
        assert_eq!(term.cursor(), COLUMNS * (ROWS - 1));
        assert_eq!(&term.row(0)[..3], b"   ");
    }

    #[test]
    fn test_printable_at_end_scrolls_first() {
        let mut term = Terminal::new();
        feed(&mut term, &[0x1B, b'=', 0x20 + 23, 0x20 + 79]);
        assert_eq!(term.cursor(), COLUMNS * ROWS - 1);
        term.putch(b'Z');
        // The write scrolled and landed at the start of the last row
        assert_eq!(term.cursor(), COLUMNS * (ROWS - 1) + 1);
        assert_eq!(term.row(ROWS - 1)[0], b'Z');
    }

    #[test]
    fn test_clear_screen() {
        let mut term = Terminal::new();
        feed(&mut term, b"JUNK");
        term.putch(0x1A);
        assert_eq!(term.cursor(), 0);
        assert!(term.buffer().iter().all(|&b| b == b' '));
    }

    #[test]
    fn test_home() {
        let mut term = Terminal::new();
        feed(&mut term, b"ABC");
        term.putch(0x1E);
        assert_eq!(term.cursor(), 0);
        // Home does not clear
        assert_eq!(&term.row(0)[..3], b"ABC");
    }

    #[test]
    fn test_cursor_addressing() {
        let mut term = Terminal::new();
        feed(&mut term, &[0x1B, b'=', 0x20 + 5, 0x20 + 10]);
        assert_eq!(term.cursor(), 5 * COLUMNS + 10);
        term.putch(b'*');
        assert_eq!(term.row(5)[10], b'*');
    }

    #[test]
    fn test_foreign_escape_sequence_discarded() {
        let mut term = Terminal::new();
        feed(&mut term, &[0x1B, b'A']);
        // Output resumes normally after the discarded sequence
        feed(&mut term, b"OK");
        assert_eq!(&term.row(0)[..2], b"OK");
    }

    #[test]
    fn test_scroll_preserves_rows() {
        let mut term = Terminal::new();
        feed(&mut term, b"FIRST");
        term.putch(0x0A);
        term.putch(0x0D);
        feed(&mut term, b"SECOND");
        // Drive the cursor to the bottom and force one scroll
        for _ in 0..ROWS - 1 {
            term.putch(0x0A);
        }
        assert_eq!(&term.row(0)[..6], b"SECOND");
    }
}
