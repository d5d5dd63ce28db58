//! Document abstraction for language analysis.
//!
//! A [`Document`] is a read-only snapshot handed over by the transport layer
//! for the duration of one request. Analysis never keeps a snapshot, or
//! anything parsed from it, once the request has been answered.

use camel_source_map::LineIndex;

/// Language id used when the transport does not provide one.
pub const DEFAULT_LANGUAGE_ID: &str = "xml";

/// A document snapshot for language analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The document's URI or path.
    uri: String,
    /// The language id reported by the editor (e.g. `xml`).
    language_id: String,
    /// The document content.
    content: String,
    /// Version number for tracking changes (optional, used by LSP).
    version: Option<i32>,
}

impl Document {
    /// Create a new XML document with the given URI and content.
    pub fn new(uri: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            language_id: DEFAULT_LANGUAGE_ID.to_string(),
            content: content.into(),
            version: None,
        }
    }

    /// Create a new document with an explicit language id.
    pub fn with_language(
        uri: impl Into<String>,
        language_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            language_id: language_id.into(),
            content: content.into(),
            version: None,
        }
    }

    /// Set the version number of this snapshot.
    pub fn versioned(mut self, version: i32) -> Self {
        self.version = Some(version);
        self
    }

    /// Get the document's URI.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Get the document's language id.
    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    /// Get the document's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the document's version, if set.
    pub fn version(&self) -> Option<i32> {
        self.version
    }

    /// Text of a 0-based line, without its line terminator.
    pub fn line(&self, line: u32) -> Option<&str> {
        LineIndex::new(&self.content).line(line.checked_add(1)?)
    }
}
