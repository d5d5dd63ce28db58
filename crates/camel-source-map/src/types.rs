//! Core position types.
//!
//! Both types here are 1-based. Conversion to the 0-based convention of
//! editor protocols happens in exactly one place, in the consumer crate.

use serde::{Deserialize, Serialize};

/// A line/column pair in source text (1-indexed).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Point {
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed, in UTF-16 code units)
    pub column: u32,
}

impl Point {
    /// Create a new point.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// The extent of an element as reported by a line-tracking parser.
///
/// Both ends are inclusive. `start` is never after `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: Point,
    pub end: Point,
}

impl Span {
    /// Create a span from its two points.
    ///
    /// The points are swapped if given out of order.
    pub fn new(start: Point, end: Point) -> Self {
        if end < start {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    pub fn start_line(&self) -> u32 {
        self.start.line
    }

    pub fn start_column(&self) -> u32 {
        self.start.column
    }

    pub fn end_line(&self) -> u32 {
        self.end.line
    }

    pub fn end_column(&self) -> u32 {
        self.end.column
    }

    /// Check if a 1-based line falls within this span.
    pub fn contains_line(&self, line: u32) -> bool {
        self.start.line <= line && line <= self.end.line
    }
}
