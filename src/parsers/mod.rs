//! Input parsing: Graphviz JSON text to validated [`Geometry`].

pub mod base;

use tracing::debug;

use crate::error::Result;
use crate::layout::types::{EdgeGeometry, Geometry, NodeGeometry};
use crate::syntax::types::{DotEdge, DotJson, DotObject};
use base::{parse_bb, parse_dimension, parse_point, parse_spline};

/// Parse a Graphviz JSON document.
pub fn parse(src: &str, points_per_inch: f64) -> Result<Geometry> {
    let dot: DotJson = serde_json::from_str(src)?;
    from_dot(&dot, points_per_inch)
}

/// Convert an already deserialized document.
pub fn from_dot(dot: &DotJson, points_per_inch: f64) -> Result<Geometry> {
    let bbox = parse_bb(&dot.bb)?;

    let mut nodes = Vec::with_capacity(dot.objects.len());
    for obj in &dot.objects {
        let Some(pos) = obj.pos.as_deref() else {
            debug!(name = %obj.name, "skipping object without a position");
            continue;
        };
        nodes.push(NodeGeometry {
            name: obj.name.clone(),
            center: parse_point(pos)?,
            width: parse_dimension(obj.width.as_ref(), points_per_inch)?,
            height: parse_dimension(obj.height.as_ref(), points_per_inch)?,
        });
    }

    let mut edges = Vec::with_capacity(dot.edges.len());
    for (i, edge) in dot.edges.iter().enumerate() {
        let name = edge_name(edge, i, &dot.objects);
        let Some(pos) = edge.pos.as_deref() else {
            debug!(edge = %name, "skipping edge without a spline");
            continue;
        };
        debug!(edge = %name, pos, "edge spline");
        edges.push(EdgeGeometry {
            name,
            points: parse_spline(pos)?,
        });
    }

    Ok(Geometry { bbox, nodes, edges })
}

/// `"tail -> head"` when the endpoints resolve, `"edge N"` otherwise.
fn edge_name(edge: &DotEdge, index: usize, objects: &[DotObject]) -> String {
    let lookup = |id: Option<usize>| id.and_then(|i| objects.get(i)).map(|o| o.name.as_str());
    match (lookup(edge.tail), lookup(edge.head)) {
        (Some(tail), Some(head)) => format!("{tail} -> {head}"),
        _ => format!("edge {index}"),
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers.rs"]
mod tests;
