//! Token-level parsers for the string fields of Graphviz JSON.
//!
//! Graphviz encodes every coordinate as text: `"x,y"` points, a
//! `"llx,lly,urx,ury"` bounding box and space-separated spline control points.

use tracing::trace;

use crate::error::{Error, Result};
use crate::layout::types::{BoundingBox, GraphPoint};
use crate::syntax::types::Dimension;

/// Spline tokens starting with these prefixes mark arrowhead end/start points.
pub const SPLINE_MARKERS: &[&str] = &["e,", "s,"];

/// Parse a single finite float.
pub fn parse_number(token: &str) -> Result<f64> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| Error::Number {
            token: token.to_string(),
        })
}

/// Parse an `"x,y"` pair.
pub fn parse_point(token: &str) -> Result<GraphPoint> {
    let mut parts = token.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None) => Ok(GraphPoint::new(parse_number(x)?, parse_number(y)?)),
        _ => Err(Error::Point {
            token: token.to_string(),
        }),
    }
}

/// Parse `"0,0,W,H"`. A non-zero origin or an empty extent is rejected.
pub fn parse_bb(value: &str) -> Result<BoundingBox> {
    let invalid = |reason: &'static str| Error::BoundingBox {
        value: value.to_string(),
        reason,
    };
    let nums = value
        .split(',')
        .map(parse_number)
        .collect::<Result<Vec<f64>>>()?;
    let &[llx, lly, width, height] = nums.as_slice() else {
        return Err(invalid("expected four comma-separated numbers"));
    };
    if llx != 0.0 || lly != 0.0 {
        return Err(invalid("origin must be 0,0"));
    }
    if width <= 0.0 || height <= 0.0 {
        return Err(invalid("width and height must be positive"));
    }
    Ok(BoundingBox { width, height })
}

/// Parse a spline string into its control points, in order.
///
/// Arrowhead markers (`e,x,y` / `s,x,y`) are dropped.
pub fn parse_spline(pos: &str) -> Result<Vec<GraphPoint>> {
    let points = pos
        .split_whitespace()
        .filter(|token| !SPLINE_MARKERS.iter().any(|m| token.starts_with(m)))
        .map(parse_point)
        .collect::<Result<Vec<_>>>()?;
    trace!(pos, points = points.len(), "parsed spline");
    Ok(points)
}

/// Read a node size, converting from inches to graph units. Missing sizes are zero.
pub fn parse_dimension(dim: Option<&Dimension>, points_per_inch: f64) -> Result<f64> {
    let inches = match dim {
        None => 0.0,
        Some(Dimension::Number(n)) if n.is_finite() => *n,
        Some(Dimension::Number(n)) => {
            return Err(Error::Number {
                token: n.to_string(),
            });
        }
        Some(Dimension::Text(s)) => parse_number(s)?,
    };
    Ok(inches * points_per_inch)
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_base.rs"]
mod tests;
