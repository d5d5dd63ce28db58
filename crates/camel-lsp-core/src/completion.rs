//! Context for completion inside an endpoint uri.
//!
//! The catalog of component suggestions lives elsewhere. This module only
//! answers whether the cursor is inside a uri value and, if so, which Camel
//! element the value belongs to.

use camel_xml::XmlElement;

use crate::dialect::DialectConfig;
use crate::document::Document;
use crate::locator::corresponding_element_for_completion_with_config;
use crate::types::Position;
use crate::uri_attribute::{component_uri_at, position_in_uri};

/// What a completion provider needs to suggest uri completions.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionTrigger {
    /// The full uri value under the cursor.
    pub uri: String,

    /// Cursor offset from the start of the uri value.
    pub position_in_uri: u32,

    /// The Camel element enclosing the cursor line, if the document is a
    /// well-formed Camel document.
    pub element: Option<XmlElement>,
}

/// Build the completion context at a position, using the default dialect.
pub fn completion_context(doc: &Document, position: Position) -> Option<CompletionTrigger> {
    completion_context_with_config(doc, position, &DialectConfig::default())
}

/// Build the completion context at a position.
///
/// Returns `None` unless the cursor is inside a `uri="…"` value. The element
/// lookup parses the document and tolerates a document that is currently
/// malformed: the uri is still reported, without an element.
pub fn completion_context_with_config(
    doc: &Document,
    position: Position,
    dialect: &DialectConfig,
) -> Option<CompletionTrigger> {
    let line = doc.line(position.line)?;
    let uri = component_uri_at(line, position.character)?;
    let offset = position_in_uri(line, position.character)?;

    Some(CompletionTrigger {
        uri: uri.to_string(),
        position_in_uri: u32::try_from(offset).ok()?,
        element: corresponding_element_for_completion_with_config(doc, position.line, dialect),
    })
}
