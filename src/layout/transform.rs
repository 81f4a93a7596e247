//! Graph space to cell space.

use super::types::{BoundingBox, GraphPoint, Point};

/// Maps graph coordinates onto terminal cells, flipping the y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Graph units per column.
    pub scale_x: f64,
    /// Graph units per row.
    pub scale_y: f64,
    height: f64,
    cols: usize,
    rows: usize,
}

impl Transform {
    /// Fit `bbox` into `cols` x `rows` cells. Both must be non-zero.
    pub fn new(bbox: BoundingBox, cols: u16, rows: u16) -> Self {
        Self {
            scale_x: bbox.width / f64::from(cols),
            scale_y: bbox.height / f64::from(rows),
            height: bbox.height,
            cols: usize::from(cols),
            rows: usize::from(rows),
        }
    }

    /// Cell containing `p`, clamped to `[0, cols] x [0, rows]`.
    ///
    /// The box's right and bottom edges map to column `cols` and row `rows`,
    /// so those stay reachable; anything further out lands on them.
    pub fn to_cell(&self, p: GraphPoint) -> Point {
        Point::new(
            cell_index(p.x / self.scale_x, self.cols),
            cell_index((self.height - p.y) / self.scale_y, self.rows),
        )
    }
}

fn cell_index(v: f64, limit: usize) -> usize {
    // float-to-int `as` saturates, so negatives become 0
    (v.floor() as usize).min(limit)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_transform.rs"]
mod tests;
