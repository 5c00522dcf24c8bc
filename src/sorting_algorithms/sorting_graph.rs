use colored::{ColoredString, Colorize};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    style::Print,
    terminal::{Clear, ClearType},
    QueueableCommand,
};
use std::io::{self, Write};

use crate::step::Role;

/// Gray shades cycled across unhighlighted columns.
const GRADIENTS: [(u8, u8, u8); 3] = [(128, 128, 128), (160, 160, 160), (192, 192, 192)];

/// Terminal bar chart of a sequence, redrawn after every step.
pub struct SortGraph {
    pub title: String,
    pub status: String,
    pub values: Vec<i32>,
    pub max_height: i32,
}

impl SortGraph {
    pub fn new(title: &str, values: &[i32], max_height: i32) -> Self {
        SortGraph {
            title: title.to_string(),
            status: String::new(),
            values: values.to_vec(),
            max_height: max_height.max(1),
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    pub fn update_values(&mut self, values: &[i32]) {
        self.values.clear();
        self.values.extend_from_slice(values);
    }

    /// Bar height in rows, proportional to the largest value on screen.
    pub fn bar_height(&self, value: i32) -> i32 {
        let max_value = self.values.iter().copied().max().unwrap_or(0).max(1) as i64;
        let value = value.max(0) as i64;
        let rows = (value * self.max_height as i64 + max_value - 1) / max_value;
        rows.min(self.max_height as i64) as i32
    }

    fn styled(symbol: &str, column: usize, role: Option<Role>) -> ColoredString {
        match role {
            Some(Role::Active) | Some(Role::Written) | Some(Role::Counted) => symbol.blue(),
            Some(Role::Comparison) | Some(Role::Examined) => symbol.red(),
            Some(Role::Placed) => symbol.bright_yellow(),
            Some(Role::Final) | Some(Role::Found) => symbol.green(),
            Some(Role::Pivot) => symbol.red().on_truecolor(128, 128, 128),
            None => {
                let (r, g, b) = GRADIENTS[column % GRADIENTS.len()];
                symbol.truecolor(r, g, b)
            }
        }
    }

    /// Renders the whole frame into one buffer, highlighting `marks`.
    pub fn render(&self, marks: &[(usize, Role)]) -> String {
        let mut buffer = String::new();
        buffer.push_str(&format!("{}\r\n", self.title.bold()));

        let heights: Vec<i32> = self.values.iter().map(|v| self.bar_height(*v)).collect();
        for y in 0..=self.max_height {
            let level = self.max_height - y;
            for (x, height) in heights.iter().enumerate() {
                let symbol = if *height > 0 && *height >= level {
                    "[x]"
                } else {
                    "   "
                };
                let role = marks.iter().find(|(idx, _)| *idx == x).map(|(_, r)| *r);
                buffer += &format!("{}", Self::styled(symbol, x, role));
            }
            buffer.push_str("\r\n");
        }
        buffer.push_str(&format!("{}\r\n", self.status));
        buffer
    }

    pub fn draw<W: Write>(&self, out: &mut W, marks: &[(usize, Role)]) -> io::Result<()> {
        // hide the cursor while drawing to avoid flickering
        out.queue(Hide)?
            .queue(MoveTo(0, 0))?
            .queue(Clear(ClearType::FromCursorDown))?
            .queue(Print(self.render(marks)))?
            .queue(Show)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_bars_to_largest_value() {
        let graph = SortGraph::new("t", &[10, 5, 0, 100], 20);
        assert_eq!(graph.bar_height(100), 20);
        assert_eq!(graph.bar_height(5), 1);
        assert_eq!(graph.bar_height(0), 0);
        assert_eq!(graph.bar_height(-3), 0);
    }

    #[test]
    fn frame_has_title_rows_and_status() {
        colored::control::set_override(false);
        let mut graph = SortGraph::new("Bubble Sort", &[1, 3, 2], 4);
        graph.set_status("Completed");
        let frame = graph.render(&[(0, Role::Active)]);
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines[0], "Bubble Sort");
        // title + max_height + 1 rows + status
        assert_eq!(lines.len(), 1 + 5 + 1);
        assert_eq!(lines[1], "   [x]   ");
        assert_eq!(lines[5], "[x][x][x]");
        assert_eq!(lines[6], "Completed");
    }

    #[test]
    fn empty_bars_leave_the_bottom_row_blank() {
        colored::control::set_override(false);
        let graph = SortGraph::new("t", &[0, 2, -4], 2);
        let frame = graph.render(&[]);
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines[1], "   [x]   ");
        assert_eq!(lines[3], "   [x]   ");
    }

    #[test]
    fn draw_writes_frame_to_writer() {
        colored::control::set_override(false);
        let graph = SortGraph::new("Merge Sort", &[2, 1], 2);
        let mut out: Vec<u8> = Vec::new();
        graph.draw(&mut out, &[]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Merge Sort"));
    }
}
