//! Canvas — fixed-width character grid that grows downward on demand.

use std::fmt;

use super::charset::{BoxChars, CharSet};

/// A 2D character grid used as a painting surface.
///
/// Every row holds exactly `width` cells. Rows are appended, filled with
/// spaces, whenever a write reaches below the current bottom; they are never
/// removed.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub width: usize,
    pub charset: CharSet,
    contents: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(width: usize, charset: CharSet) -> Self {
        Self {
            width,
            charset,
            contents: Vec::new(),
        }
    }

    /// Current number of rows.
    pub fn height(&self) -> usize {
        self.contents.len()
    }

    pub fn get(&self, col: usize, row: usize) -> char {
        self.contents
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(' ')
    }

    /// Append blank rows until there are at least `height` of them.
    pub fn ensure_height(&mut self, height: usize) {
        if self.contents.len() < height {
            let width = self.width;
            self.contents.resize_with(height, || vec![' '; width]);
        }
    }

    /// Overwrite row `y` starting at column `x` with `text`.
    ///
    /// At most `width - x + 1` characters are taken from `text`; the one that
    /// would land on column `width` is dropped so rows keep their width.
    pub fn write_text(&mut self, x: usize, y: usize, text: &str) {
        self.ensure_height(y + 1);
        let take = (self.width + 1).saturating_sub(x);
        let row = &mut self.contents[y];
        for (col, ch) in (x..).zip(text.chars().take(take)) {
            if let Some(cell) = row.get_mut(col) {
                *cell = ch;
            }
        }
    }

    /// Write `text` downward in column `x`, one character per row from row `y`.
    pub fn write_vertical(&mut self, x: usize, y: usize, text: &str) {
        let len = text.chars().count();
        self.ensure_height(y + len);
        if x >= self.width {
            return;
        }
        for (row, ch) in self.contents[y..].iter_mut().zip(text.chars()) {
            row[x] = ch;
        }
    }

    /// Draw an orthogonal line from `(x1, y1)` toward `(x2, y2)`.
    ///
    /// The line covers `|delta|` cells starting from the lower coordinate, so
    /// the far endpoint itself is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if the endpoints differ on both axes.
    pub fn draw_line(&mut self, x1: usize, y1: usize, x2: usize, y2: usize) {
        self.ensure_height(y1 + 1);
        self.ensure_height(y2 + 1);
        let bc = BoxChars::for_charset(self.charset);
        if x1 == x2 {
            let bar = bc.vertical.to_string().repeat(y1.abs_diff(y2));
            self.write_vertical(x1, y1.min(y2), &bar);
        } else if y1 == y2 {
            let bar = bc.horizontal.to_string().repeat(x1.abs_diff(x2));
            self.write_text(x1.min(x2), y1, &bar);
        } else {
            panic!("only orthogonal lines can be drawn: ({x1}, {y1}) -> ({x2}, {y2})");
        }
    }

    /// Rows joined with newlines, no trailing newline.
    pub fn render(&self) -> String {
        let lines: Vec<String> = self
            .contents
            .iter()
            .map(|row| row.iter().collect())
            .collect();
        lines.join("\n")
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_canvas.rs"]
mod tests;
