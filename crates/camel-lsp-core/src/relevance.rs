//! Deciding whether a document contains Camel routes at all.
//!
//! Everything downstream (outline, completion) is skipped for XML files that
//! merely happen to be open in the editor, such as Maven poms or plain Spring
//! bean definitions.

use camel_xml::XmlDocument;
use tracing::debug;

use crate::dialect::DialectConfig;
use crate::document::Document;

/// Check whether a document contains Camel elements, using the default dialect.
///
/// A document that is not well-formed XML is reported as not relevant.
pub fn is_relevant(doc: &Document) -> bool {
    is_relevant_with_config(doc, &DialectConfig::default())
}

/// Check whether a document contains elements of the given dialect.
pub fn is_relevant_with_config(doc: &Document, dialect: &DialectConfig) -> bool {
    match camel_xml::parse(doc.content()) {
        Ok(xml) => has_dialect_elements(&xml, dialect),
        Err(err) => {
            debug!(uri = %doc.uri(), error = %err, "Document is not well-formed XML");
            false
        }
    }
}

/// Check a parsed tree for a recognized element bound to a dialect namespace.
///
/// Element names are compared as written, so a prefixed `camel:from` is not
/// recognized even when `camel` is bound to a Camel namespace.
pub fn has_dialect_elements(xml: &XmlDocument, dialect: &DialectConfig) -> bool {
    xml.elements().any(|element| {
        dialect.is_recognized_tag(&element.name)
            && element
                .namespace
                .as_deref()
                .is_some_and(|ns| dialect.is_dialect_namespace(ns))
    })
}

/// Parse a document and keep the tree only if it is relevant.
///
/// Returns `Ok(None)` for well-formed documents without dialect elements.
pub(crate) fn parse_relevant(
    doc: &Document,
    dialect: &DialectConfig,
) -> camel_xml::Result<Option<XmlDocument>> {
    let xml = camel_xml::parse(doc.content())?;
    if has_dialect_elements(&xml, dialect) {
        Ok(Some(xml))
    } else {
        debug!(uri = %doc.uri(), "No Camel elements found");
        Ok(None)
    }
}
