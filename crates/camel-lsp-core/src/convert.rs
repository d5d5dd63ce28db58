//! Conversion from parser coordinates to editor coordinates.
//!
//! The XML parser reports 1-based lines and columns; editor positions are
//! 0-based. This module is the only place where the two meet.

use camel_source_map::{Point, Span};

use crate::types::{Position, Range};

/// Convert a 1-based parser point to a 0-based position.
pub fn point_to_position(point: Point) -> Position {
    Position::new(point.line.saturating_sub(1), point.column.saturating_sub(1))
}

/// Convert a 1-based inclusive span to a 0-based range.
pub fn span_to_range(span: &Span) -> Range {
    Range::new(point_to_position(span.start), point_to_position(span.end))
}
