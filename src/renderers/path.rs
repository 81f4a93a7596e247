//! Draws scaled edge routes as connected orthogonal segments.

use tracing::debug;

use super::canvas::Canvas;
use super::charset::{BoxChars, Direction};
use crate::layout::types::Point;

/// Draws one route at a time onto a canvas, joining bends with corner glyphs.
pub struct PathRenderer<'a> {
    canvas: &'a mut Canvas,
    glyphs: BoxChars,
}

impl<'a> PathRenderer<'a> {
    pub fn new(canvas: &'a mut Canvas) -> Self {
        let glyphs = BoxChars::for_charset(canvas.charset);
        Self { canvas, glyphs }
    }

    /// Draw the route through `points`.
    ///
    /// Zero-length segments are skipped and do not reset the previous
    /// direction. Whenever the direction changes by a quarter turn the start
    /// cell of the new segment is overwritten with the matching corner.
    ///
    /// # Panics
    ///
    /// Panics if two consecutive distinct points are not axis-aligned.
    pub fn draw(&mut self, points: &[Point]) {
        let mut previous: Option<Direction> = None;
        for pair in points.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if from == to {
                continue;
            }
            debug!(%from, %to, "segment");
            self.canvas.draw_line(from.x, from.y, to.x, to.y);

            let direction = Direction::between(from, to);
            if let Some(corner) = previous.and_then(|prev| self.glyphs.corner(prev, direction)) {
                self.canvas
                    .write_text(from.x, from.y, corner.encode_utf8(&mut [0; 4]));
            }
            previous = Some(direction);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_path.rs"]
mod tests;
