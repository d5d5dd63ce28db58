//! Offset to line/column conversion.

use crate::types::Point;

/// Line start table for a document, used to turn byte offsets into [`Point`]s.
///
/// `\n`, `\r\n` and a lone `\r` each terminate one line, matching how XML
/// parsers normalize line endings before reporting locations. Columns count
/// UTF-16 code units so that they line up with editor protocol positions.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,

    /// Byte offset of the first character of each line
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    /// Build the index by scanning the content once.
    ///
    /// # Example
    ///
    /// ```
    /// use camel_source_map::LineIndex;
    ///
    /// let index = LineIndex::new("line 1\r\nline 2\rline 3");
    /// assert_eq!(index.line_count(), 3);
    /// ```
    pub fn new(source: &'a str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0];

        let mut idx = 0;
        while idx < bytes.len() {
            match bytes[idx] {
                b'\n' => line_starts.push(idx + 1),
                b'\r' => {
                    if bytes.get(idx + 1) == Some(&b'\n') {
                        idx += 1;
                    }
                    line_starts.push(idx + 1);
                }
                _ => {}
            }
            idx += 1;
        }

        Self {
            source,
            line_starts,
        }
    }

    /// Convert a byte offset to a 1-based [`Point`].
    ///
    /// Returns `None` if the offset is past the end of the source or does not
    /// fall on a character boundary.
    ///
    /// # Example
    ///
    /// ```
    /// use camel_source_map::{LineIndex, Point};
    ///
    /// let index = LineIndex::new("hello\nworld");
    /// assert_eq!(index.point_at(6), Some(Point::new(2, 1)));
    /// ```
    pub fn point_at(&self, offset: usize) -> Option<Point> {
        if offset > self.source.len() {
            return None;
        }

        // line_starts[0] == 0, so partition_point is always >= 1
        let row = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[row];
        let prefix = self.source.get(line_start..offset)?;
        let column = prefix.encode_utf16().count();

        Some(Point::new(
            u32::try_from(row + 1).ok()?,
            u32::try_from(column + 1).ok()?,
        ))
    }

    /// The text of a 1-based line, without its line terminator.
    ///
    /// # Example
    ///
    /// ```
    /// use camel_source_map::LineIndex;
    ///
    /// let index = LineIndex::new("first\r\nsecond\n");
    /// assert_eq!(index.line(2), Some("second"));
    /// assert_eq!(index.line(3), Some(""));
    /// assert_eq!(index.line(4), None);
    /// ```
    pub fn line(&self, line: u32) -> Option<&'a str> {
        let row = usize::try_from(line).ok()?.checked_sub(1)?;
        let start = *self.line_starts.get(row)?;
        let end = self
            .line_starts
            .get(row + 1)
            .copied()
            .unwrap_or(self.source.len());
        let text = &self.source[start..end];

        Some(
            text.strip_suffix("\r\n")
                .or_else(|| text.strip_suffix('\n'))
                .or_else(|| text.strip_suffix('\r'))
                .unwrap_or(text),
        )
    }

    /// Number of lines in the source. An empty source has one line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
