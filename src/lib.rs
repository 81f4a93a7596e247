//! tdot — render Graphviz JSON layouts as text for the terminal.
//!
//! Public API: [`render_json`] and [`render`]. The pipeline is
//! parse → scale to the terminal → draw edges → draw labels.

pub mod config;
pub mod error;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod syntax;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{LabelAnchor, RenderConfig, TermSize};
pub use error::{Error, Result};

use crate::layout::types::Geometry;
use crate::renderers::{AsciiRenderer, Renderer};

/// Parse Graphviz `-Tjson` output and render it for a `term`-sized terminal.
pub fn render_json(src: &str, term: TermSize, config: &RenderConfig) -> Result<String> {
    let geometry = parsers::parse(src, config.points_per_inch)?;
    render(&geometry, term, config)
}

/// Render already parsed geometry.
pub fn render(geometry: &Geometry, term: TermSize, config: &RenderConfig) -> Result<String> {
    let scaled = layout::scale(geometry, term, config)?;
    Ok(AsciiRenderer::new(config.charset).render(&scaled))
}

#[cfg(test)]
#[path = "../tests/rust/test_lib.rs"]
mod tests;
