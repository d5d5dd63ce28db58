//! Resolving a line to the Camel element that encloses it.

use camel_xml::XmlElement;
use tracing::warn;

use crate::convert::span_to_range;
use crate::dialect::DialectConfig;
use crate::document::Document;
use crate::relevance::parse_relevant;

/// Find the recognized element enclosing a 0-based line.
///
/// The search descends from `node` and stops at the first element whose name
/// is recognized, even if a recognized descendant also contains the line.
/// At each level only the first child (in document order) whose span contains
/// the line is followed, so siblings sharing a boundary line resolve to the
/// earlier one.
///
/// # Example
///
/// ```rust
/// use camel_lsp_core::{DialectConfig, find_element_at_line};
///
/// let xml = camel_xml::parse("<route>\n  <from uri=\"direct:a\"/>\n</route>").unwrap();
/// let found = find_element_at_line(&xml.root, 1, &DialectConfig::default());
/// assert_eq!(found.map(|e| e.name.as_str()), Some("from"));
/// ```
pub fn find_element_at_line<'a>(
    node: &'a XmlElement,
    line: u32,
    dialect: &DialectConfig,
) -> Option<&'a XmlElement> {
    if dialect.is_recognized_tag(&node.name) {
        return Some(node);
    }

    let child = node
        .children
        .iter()
        .find(|child| span_to_range(&child.span).contains_line(line))?;
    find_element_at_line(child, line, dialect)
}

/// Find the element to anchor completion at a 0-based line, using the
/// default dialect.
pub fn corresponding_element_for_completion(doc: &Document, line: u32) -> Option<XmlElement> {
    corresponding_element_for_completion_with_config(doc, line, &DialectConfig::default())
}

/// Find the element to anchor completion at a 0-based line.
///
/// Returns `None` for documents without dialect elements and for documents
/// that fail to parse (the failure is logged). The element is cloned out of
/// the tree, which is dropped before returning.
pub fn corresponding_element_for_completion_with_config(
    doc: &Document,
    line: u32,
    dialect: &DialectConfig,
) -> Option<XmlElement> {
    match parse_relevant(doc, dialect) {
        Ok(Some(xml)) => find_element_at_line(&xml.root, line, dialect).cloned(),
        Ok(None) => None,
        Err(err) => {
            warn!(uri = %doc.uri(), error = %err, "Exception while trying to parse the file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camel_xml::parse;

    const ROUTES: &str = concat!(
        "<camelContext id=\"camel\" xmlns=\"http://camel.apache.org/schema/spring\">\r\n",
        "\r\n",
        "    <route id=\"a route\">\r\n",
        "      <from uri=\"direct:cafe\"/>\r\n",
        "      <split>\r\n",
        "        <method bean=\"orderSplitter\"/>\r\n",
        "        <to uri=\"direct:drink\"/>\r\n",
        "      </split>\r\n",
        "    </route>\r\n",
        "\r\n",
        "    <route id=\"another Route\">\r\n",
        "      <from uri=\"direct:drink\"/>\r\n",
        "      <recipientList>\r\n",
        "        <method bean=\"drinkRouter\"/>\r\n",
        "      </recipientList>\r\n",
        "    </route>\n",
        "</camelContext>\n",
    );

    fn dialect() -> DialectConfig {
        DialectConfig::default()
    }

    #[test]
    fn finds_endpoint_on_its_line() {
        let xml = parse(ROUTES).unwrap();

        let from = find_element_at_line(&xml.root, 3, &dialect()).unwrap();
        assert_eq!(from.name, "from");
        assert_eq!(from.get_attribute("uri"), Some("direct:cafe"));

        let to = find_element_at_line(&xml.root, 6, &dialect()).unwrap();
        assert_eq!(to.get_attribute("uri"), Some("direct:drink"));
    }

    #[test]
    fn line_without_endpoint_resolves_to_none() {
        let xml = parse(ROUTES).unwrap();

        // `<method bean="orderSplitter"/>` inside the split
        assert_eq!(find_element_at_line(&xml.root, 5, &dialect()), None);
        // blank line between the routes
        assert_eq!(find_element_at_line(&xml.root, 9, &dialect()), None);
        // past the end of the document
        assert_eq!(find_element_at_line(&xml.root, 40, &dialect()), None);
    }

    #[test]
    fn start_tag_line_of_route_is_not_covered() {
        // The route's span starts after its start tag, on that same line,
        // but the first endpoint sits on the next line.
        let xml = parse(ROUTES).unwrap();
        assert_eq!(find_element_at_line(&xml.root, 2, &dialect()), None);
    }

    #[test]
    fn recognized_ancestor_wins() {
        let xml = parse("<to uri=\"a\">\n  <from uri=\"b\"/>\n</to>").unwrap();
        let found = find_element_at_line(&xml.root, 1, &dialect()).unwrap();
        assert_eq!(found.name, "to");
    }

    #[test]
    fn first_sibling_wins_on_shared_line() {
        let xml = parse("<route>\n  <from uri=\"a\"/><to uri=\"b\"/>\n</route>").unwrap();
        let found = find_element_at_line(&xml.root, 1, &dialect()).unwrap();
        assert_eq!(found.name, "from");
    }

    #[test]
    fn lookup_is_idempotent() {
        let xml = parse(ROUTES).unwrap();
        let first = find_element_at_line(&xml.root, 11, &dialect()).unwrap();
        let second = find_element_at_line(&xml.root, 11, &dialect()).unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn completion_element_from_document() {
        let doc = Document::new("file:///camel.xml", ROUTES);
        let element = corresponding_element_for_completion(&doc, 11).unwrap();
        assert_eq!(element.name, "from");
        assert_eq!(element.get_attribute("uri"), Some("direct:drink"));
    }

    #[test]
    fn completion_element_requires_relevant_document() {
        let doc = Document::new("file:///pom.xml", "<project>\n  <from uri=\"a\"/>\n</project>");
        assert_eq!(corresponding_element_for_completion(&doc, 1), None);

        let broken = Document::new("file:///camel.xml", "<camelContext>\n  <from uri=\"a\">");
        assert_eq!(corresponding_element_for_completion(&broken, 1), None);
    }
}
