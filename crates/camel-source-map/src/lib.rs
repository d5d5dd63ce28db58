//! Line and column tracking for Camel XML documents.
//!
//! Parsers report element boundaries as byte offsets. Editor tooling wants
//! line/column pairs. This crate sits between the two:
//!
//! - [`LineIndex`]: scans a document once and converts byte offsets to
//!   [`Point`]s in O(log n)
//! - [`Point`]: a 1-based line/column pair, the convention used by
//!   line-tracking XML parsers
//! - [`Span`]: a pair of points, inclusive on both ends
//!
//! # Example
//!
//! ```rust
//! use camel_source_map::{LineIndex, Point};
//!
//! let index = LineIndex::new("<a>\n  <b/>\n</a>");
//!
//! // Offset 10 is just after `<b/>` on the second line
//! assert_eq!(index.point_at(10), Some(Point::new(2, 7)));
//! ```

pub mod line_index;
pub mod types;

pub use line_index::LineIndex;
pub use types::{Point, Span};
