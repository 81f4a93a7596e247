//! Text renderer: edges first, then node labels on top.

use tracing::debug;

use super::Renderer;
use super::canvas::Canvas;
use super::charset::CharSet;
use super::path::PathRenderer;
use crate::layout::types::{Label, ScaledLayout};

/// Renders a scaled layout with box-drawing (or ASCII) lines.
pub struct AsciiRenderer {
    pub charset: CharSet,
}

impl AsciiRenderer {
    pub fn new(charset: CharSet) -> Self {
        Self { charset }
    }
}

fn paint_label(canvas: &mut Canvas, label: &Label) {
    canvas.write_text(label.at.x, label.at.y, &label.text);
}

impl Renderer for AsciiRenderer {
    fn render(&self, layout: &ScaledLayout) -> String {
        let mut canvas = Canvas::new(layout.width, self.charset);

        let mut paths = PathRenderer::new(&mut canvas);
        for route in &layout.paths {
            paths.draw(route);
        }

        for label in &layout.labels {
            paint_label(&mut canvas, label);
        }

        debug!(
            width = canvas.width,
            height = canvas.height(),
            paths = layout.paths.len(),
            labels = layout.labels.len(),
            "rendered canvas"
        );
        canvas.render()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_ascii.rs"]
mod tests;
