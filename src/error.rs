//! Error type shared by parsing, transform and rendering.

use crate::layout::types::Point;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid bounding box '{value}': {reason}")]
    BoundingBox { value: String, reason: &'static str },

    #[error("invalid number '{token}'")]
    Number { token: String },

    #[error("invalid point '{token}': expected \"x,y\"")]
    Point { token: String },

    #[error("terminal has no room to draw ({cols}x{rows})")]
    EmptyTerminal { cols: u16, rows: u16 },

    #[error("edge {edge} has a diagonal segment {from} -> {to} after scaling")]
    NonOrthogonalSegment { edge: String, from: Point, to: Point },
}

pub type Result<T> = std::result::Result<T, Error>;
