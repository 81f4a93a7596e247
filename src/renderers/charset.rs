//! Box-drawing character sets and the corner table.

use crate::layout::types::Point;

// ─── CharSet ─────────────────────────────────────────────────────────────────

/// Which character set to use for lines and corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Unicode,
    Ascii,
}

// ─── BoxChars ────────────────────────────────────────────────────────────────

/// Line and corner glyphs for one character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BoxChars {
    pub const fn unicode() -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
        }
    }

    pub const fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
        }
    }

    pub const fn for_charset(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => Self::unicode(),
            CharSet::Ascii => Self::ascii(),
        }
    }

    /// Glyph joining a segment travelling `incoming` to one travelling `outgoing`.
    ///
    /// Straight continuations and reversals have no corner.
    pub fn corner(&self, incoming: Direction, outgoing: Direction) -> Option<char> {
        use Direction::*;
        match (incoming, outgoing) {
            (Down, Right) | (Left, Up) => Some(self.bottom_left),
            (Down, Left) | (Right, Up) => Some(self.bottom_right),
            (Up, Right) | (Left, Down) => Some(self.top_left),
            (Up, Left) | (Right, Down) => Some(self.top_right),
            _ => None,
        }
    }
}

// ─── Direction ───────────────────────────────────────────────────────────────

/// Direction of travel of an axis-aligned segment in cell space (rows grow downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Direction from `from` to `to`. Horizontal movement is checked first.
    ///
    /// Identical points report `Down`; callers skip those segments.
    pub fn between(from: Point, to: Point) -> Self {
        if to.x < from.x {
            Direction::Left
        } else if to.x > from.x {
            Direction::Right
        } else if to.y < from.y {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_charset.rs"]
mod tests;
