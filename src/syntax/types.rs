//! Serde structures for Graphviz JSON layout output.
//!
//! Only the fields the renderer reads are modelled; everything else in the
//! document (`_gvid`, `directed`, styling attributes, ...) is ignored.

use serde::Deserialize;

// ─── DotJson ─────────────────────────────────────────────────────────────────

/// Top-level layout document.
#[derive(Debug, Clone, Deserialize)]
pub struct DotJson {
    /// Bounding box as `"llx,lly,urx,ury"`.
    pub bb: String,
    #[serde(default)]
    pub objects: Vec<DotObject>,
    #[serde(default)]
    pub edges: Vec<DotEdge>,
}

// ─── DotObject ───────────────────────────────────────────────────────────────

/// A node or subgraph. Subgraphs carry no `pos`.
#[derive(Debug, Clone, Deserialize)]
pub struct DotObject {
    pub name: String,
    #[serde(default)]
    pub pos: Option<String>,
    #[serde(default)]
    pub width: Option<Dimension>,
    #[serde(default)]
    pub height: Option<Dimension>,
}

/// Graphviz writes sizes as strings (`"0.75"`); hand-written input often uses numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Number(f64),
    Text(String),
}

// ─── DotEdge ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct DotEdge {
    /// Spline control points, e.g. `"e,27,36.104 27,71.697 27,63.983 27,54.712"`.
    #[serde(default)]
    pub pos: Option<String>,
    /// `_gvid` of the tail object.
    #[serde(default)]
    pub tail: Option<usize>,
    /// `_gvid` of the head object.
    #[serde(default)]
    pub head: Option<usize>,
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_types.rs"]
mod tests;
