use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::stdout;

use crossterm::cursor::MoveTo;
use crossterm::style::Print;
use crossterm::ExecutableCommand;

use node_control::bsp::serial::Serial;

const HISTORY: usize = 6;
const TOP_ROW: u16 = 8;

/// Serial console rendered as a scrolling window of the last few lines,
/// drawn below the LCD panel.
pub struct SerialMonitor {
    lines: RefCell<VecDeque<String>>,
}

impl SerialMonitor {
    pub fn create() -> Self {
        SerialMonitor {
            lines: RefCell::new(VecDeque::with_capacity(HISTORY)),
        }
    }

    fn try_redraw(&self) -> crossterm::Result<()> {
        let mut out = stdout();
        for (i, line) in self.lines.borrow().iter().enumerate() {
            out.execute(MoveTo(0, TOP_ROW + i as u16))?
                .execute(Print(format!("{:<48}", line)))?;
        }
        Ok(())
    }
}

impl Serial for SerialMonitor {
    fn println(&self, line: &str) {
        {
            let mut lines = self.lines.borrow_mut();
            if lines.len() == HISTORY {
                lines.pop_front();
            }
            lines.push_back(line.to_string());
        }
        let _ = self.try_redraw();
    }
}
