//! WASM bindings for tdot.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::{LabelAnchor, RenderConfig, TermSize};
use crate::renderers::charset::CharSet;

/// Render Graphviz JSON into a `cols` x `rows` grid with default settings.
#[wasm_bindgen]
pub fn render(src: &str, cols: u16, rows: u16) -> Result<String, JsError> {
    crate::render_json(src, TermSize::new(cols, rows), &RenderConfig::default())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Render with full control over options.
///
/// - `ascii`: plain ASCII instead of box-drawing characters
/// - `centered`: anchor labels at node centers instead of lower-left corners
/// - `reserved_rows`: rows kept free below the drawing
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(
    src: &str,
    cols: u16,
    rows: u16,
    ascii: bool,
    centered: bool,
    reserved_rows: u16,
) -> Result<String, JsError> {
    let config = RenderConfig {
        charset: if ascii { CharSet::Ascii } else { CharSet::Unicode },
        label_anchor: if centered {
            LabelAnchor::Center
        } else {
            LabelAnchor::LowerLeft
        },
        reserved_rows,
        ..RenderConfig::default()
    };
    crate::render_json(src, TermSize::new(cols, rows), &config)
        .map_err(|e| JsError::new(&e.to_string()))
}
