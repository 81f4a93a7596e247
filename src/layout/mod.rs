//! Scaling of parsed geometry into cell space.

pub mod transform;
pub mod types;

pub use transform::Transform;
pub use types::{GraphPoint, Label, Point, ScaledLayout};

use tracing::debug;

use crate::config::{LabelAnchor, RenderConfig, TermSize};
use crate::error::{Error, Result};
use types::{EdgeGeometry, Geometry, NodeGeometry};

/// Transform every node anchor and edge route onto a `term`-sized grid.
///
/// `config.reserved_rows` are taken off the terminal height first. Routes
/// that are not axis-aligned once scaled are rejected.
pub fn scale(geometry: &Geometry, term: TermSize, config: &RenderConfig) -> Result<ScaledLayout> {
    let rows = term.rows.saturating_sub(config.reserved_rows);
    if term.cols == 0 || rows == 0 {
        return Err(Error::EmptyTerminal {
            cols: term.cols,
            rows: term.rows,
        });
    }
    let transform = Transform::new(geometry.bbox, term.cols, rows);
    debug!(
        scale_x = transform.scale_x,
        scale_y = transform.scale_y,
        cols = term.cols,
        rows,
        "computed scale"
    );

    let labels = geometry
        .nodes
        .iter()
        .map(|node| place_label(node, &transform, config.label_anchor))
        .collect();

    let paths = geometry
        .edges
        .iter()
        .map(|edge| scale_edge(edge, &transform))
        .collect::<Result<Vec<_>>>()?;

    Ok(ScaledLayout {
        width: usize::from(term.cols),
        labels,
        paths,
    })
}

fn place_label(node: &NodeGeometry, transform: &Transform, anchor: LabelAnchor) -> Label {
    let origin = match anchor {
        LabelAnchor::Center => node.center,
        LabelAnchor::LowerLeft => node.lower_left(),
    };
    Label {
        at: transform.to_cell(origin),
        text: node.name.clone(),
    }
}

fn scale_edge(edge: &EdgeGeometry, transform: &Transform) -> Result<Vec<Point>> {
    let route: Vec<Point> = edge.points.iter().map(|&p| transform.to_cell(p)).collect();
    for pair in route.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if from.x != to.x && from.y != to.y {
            return Err(Error::NonOrthogonalSegment {
                edge: edge.name.clone(),
                from,
                to,
            });
        }
    }
    Ok(route)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout.rs"]
mod tests;
