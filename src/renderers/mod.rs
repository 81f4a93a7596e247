//! Renderer trait and the text renderer built on [`Canvas`].

pub mod ascii;
pub mod canvas;
pub mod charset;
pub mod path;

pub use ascii::AsciiRenderer;
pub use canvas::Canvas;
pub use path::PathRenderer;

use crate::layout::types::ScaledLayout;

/// Trait for layout renderers.
pub trait Renderer {
    /// Render a scaled layout to a string.
    fn render(&self, layout: &ScaledLayout) -> String;
}
