//! Geometry types on both sides of the scale transform.

use std::fmt;

// ─── Point ───────────────────────────────────────────────────────────────────

/// A cell on the canvas: column `x`, row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ─── GraphPoint ──────────────────────────────────────────────────────────────

/// A position in graph units, y growing upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphPoint {
    pub x: f64,
    pub y: f64,
}

impl GraphPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── BoundingBox ─────────────────────────────────────────────────────────────

/// Extent of the layout. The origin is always (0, 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
}

// ─── Input geometry ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct NodeGeometry {
    pub name: String,
    pub center: GraphPoint,
    /// Width in graph units.
    pub width: f64,
    /// Height in graph units.
    pub height: f64,
}

impl NodeGeometry {
    pub fn lower_left(&self) -> GraphPoint {
        GraphPoint::new(
            self.center.x - self.width / 2.0,
            self.center.y - self.height / 2.0,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeGeometry {
    /// Used in diagnostics only.
    pub name: String,
    pub points: Vec<GraphPoint>,
}

/// Parsed and validated layout, still in graph units.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub bbox: BoundingBox,
    pub nodes: Vec<NodeGeometry>,
    pub edges: Vec<EdgeGeometry>,
}

// ─── Scaled output ───────────────────────────────────────────────────────────

/// A node label placed in cell space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub at: Point,
    pub text: String,
}

/// Everything the renderer needs, in cell space.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScaledLayout {
    /// Canvas width in columns.
    pub width: usize,
    pub labels: Vec<Label>,
    pub paths: Vec<Vec<Point>>,
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
