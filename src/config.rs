//! Configuration for the rendering pipeline.
//!
//! There is no config file; the CLI and the wasm bindings fill this in.

use crate::renderers::charset::CharSet;

/// Terminal rows kept free for the shell prompt below the drawing.
pub const DEFAULT_RESERVED_ROWS: u16 = 2;

/// Graphviz reports node sizes in inches and positions in points.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Where a node's label is anchored relative to the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelAnchor {
    /// Label starts at the node's center position.
    Center,
    /// Label starts at the node's lower-left corner.
    #[default]
    LowerLeft,
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Box-drawing glyphs (Unicode) or plain ASCII.
    pub charset: CharSet,
    pub label_anchor: LabelAnchor,
    /// Rows subtracted from the terminal height before computing the vertical scale.
    pub reserved_rows: u16,
    /// Conversion factor from node size units to position units.
    pub points_per_inch: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            charset: CharSet::Unicode,
            label_anchor: LabelAnchor::LowerLeft,
            reserved_rows: DEFAULT_RESERVED_ROWS,
            points_per_inch: POINTS_PER_INCH,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// First-generation placement: centered labels on the full terminal height.
    pub fn centered() -> Self {
        Self {
            label_anchor: LabelAnchor::Center,
            reserved_rows: 0,
            ..Self::default()
        }
    }
}

/// Terminal dimensions in character cells, fixed for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub cols: u16,
    pub rows: u16,
}

impl TermSize {
    pub const FALLBACK: TermSize = TermSize { cols: 80, rows: 24 };

    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }
}
