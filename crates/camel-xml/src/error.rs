//! Error types for XML parsing with source locations.

use camel_source_map::Point;

/// Result type alias for camel-xml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during XML parsing.
///
/// Every variant means the document is not well-formed. Callers that only
/// care about relevant content treat any of them as "nothing to report".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// XML syntax error from quick-xml.
    #[error("XML syntax error{}: {message}", located(.point))]
    XmlSyntax {
        message: String,
        point: Option<Point>,
    },

    /// Unexpected end of input.
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// What was expected when EOF was encountered.
        expected: String,
        point: Option<Point>,
    },

    /// Mismatched end tag.
    #[error("Mismatched end tag{}: expected </{expected}>, found </{found}>", located(.point))]
    MismatchedEndTag {
        expected: String,
        found: String,
        point: Option<Point>,
    },

    /// Invalid XML structure.
    #[error("Invalid XML structure{}: {message}", located(.point))]
    InvalidStructure {
        message: String,
        point: Option<Point>,
    },

    /// Empty document (no root element).
    #[error("Empty XML document: no root element found")]
    EmptyDocument,

    /// Multiple root elements.
    #[error("Invalid XML{}: multiple root elements", located(.point))]
    MultipleRoots { point: Option<Point> },
}

impl Error {
    /// Where in the source the error was detected, if known.
    pub fn point(&self) -> Option<Point> {
        match self {
            Error::XmlSyntax { point, .. }
            | Error::UnexpectedEof { point, .. }
            | Error::MismatchedEndTag { point, .. }
            | Error::InvalidStructure { point, .. }
            | Error::MultipleRoots { point } => *point,
            Error::EmptyDocument => None,
        }
    }
}

fn located(point: &Option<Point>) -> String {
    match point {
        Some(p) => format!(" at {}:{}", p.line, p.column),
        None => String::new(),
    }
}
