use std::cell::{Cell, RefCell};
use std::io::stdout;

use crossterm::cursor::MoveTo;
use crossterm::style::Print;
use crossterm::ExecutableCommand;

use node_control::bsp::lcd::{Lcd, COLS, ROWS};

const BORDER: &str = "+----------------+";

/// 16x2 LCD which redraws itself with crossterm on every mutation, so the
/// slow blink of the display is visible in the terminal.
pub struct LcdScreen {
    rows: RefCell<[[char; COLS as usize]; ROWS as usize]>,
    cursor: Cell<(u8, u8)>,
    on: Cell<bool>,
}

impl LcdScreen {
    pub fn create() -> Self {
        LcdScreen {
            rows: RefCell::new([[' '; COLS as usize]; ROWS as usize]),
            cursor: Cell::new((0, 0)),
            on: Cell::new(false),
        }
    }

    fn redraw(&self) {
        // rendering failures only cost screen updates
        let _ = self.try_redraw();
    }

    fn try_redraw(&self) -> crossterm::Result<()> {
        let mut out = stdout();
        out.execute(MoveTo(0, 0))?.execute(Print(BORDER))?;
        for row in 0..ROWS {
            let text: String = if self.on.get() {
                self.rows.borrow()[row as usize].iter().collect()
            } else {
                " ".repeat(COLS as usize)
            };
            out.execute(MoveTo(0, 1 + u16::from(row)))?
                .execute(Print(format!("|{}|", text)))?;
        }
        out.execute(MoveTo(0, 1 + u16::from(ROWS)))?
            .execute(Print(BORDER))?;
        Ok(())
    }
}

impl Lcd for LcdScreen {
    fn clear(&self) {
        *self.rows.borrow_mut() = [[' '; COLS as usize]; ROWS as usize];
        self.cursor.set((0, 0));
        self.redraw();
    }

    fn set_cursor(&self, col: u8, row: u8) {
        self.cursor.set((col, row % ROWS));
    }

    fn print(&self, text: &str) {
        let (col, row) = self.cursor.get();
        {
            let mut rows = self.rows.borrow_mut();
            for (i, ch) in text.chars().enumerate() {
                let at = col as usize + i;
                if at < COLS as usize {
                    rows[(row % ROWS) as usize][at] = ch;
                }
            }
        }
        self.cursor.set((col.saturating_add(text.len() as u8), row));
        self.redraw();
    }

    fn display(&self) {
        self.on.set(true);
        self.redraw();
    }

    fn no_display(&self) {
        self.on.set(false);
        self.redraw();
    }
}
