//! Document symbol extraction for outline/navigation.
//!
//! Each Camel `route` element becomes one flat symbol named after its `id`.
//! Symbols are listed in document order whatever their nesting depth.

use std::future::Future;
use std::sync::Arc;

use camel_xml::XmlDocument;
use tokio::runtime::Handle;
use tracing::{debug, error};

use crate::convert::span_to_range;
use crate::dialect::DialectConfig;
use crate::document::Document;
use crate::relevance::parse_relevant;
use crate::types::{Location, SymbolInformation, SymbolKind};

/// Get route symbols for outline/navigation, using the default dialect.
///
/// Never fails: a document that does not parse or has no Camel elements
/// yields no symbols.
///
/// # Example
///
/// ```rust
/// use camel_lsp_core::{Document, get_symbols};
///
/// let doc = Document::new("test.xml", "<beans/>");
/// assert!(get_symbols(&doc).is_empty());
/// ```
pub fn get_symbols(doc: &Document) -> Vec<SymbolInformation> {
    get_symbols_with_config(doc, &DialectConfig::default())
}

/// Get route symbols for outline/navigation.
pub fn get_symbols_with_config(doc: &Document, dialect: &DialectConfig) -> Vec<SymbolInformation> {
    match parse_relevant(doc, dialect) {
        Ok(Some(xml)) => extract_route_symbols(doc, &xml, dialect),
        Ok(None) => Vec::new(),
        Err(err) => {
            error!(uri = %doc.uri(), error = %err, "Cannot determine document symbols");
            Vec::new()
        }
    }
}

/// Extract route symbols from an already parsed tree.
///
/// The tree is not checked for relevance; every element named like the
/// dialect's route tag is listed.
pub fn extract_route_symbols(
    doc: &Document,
    xml: &XmlDocument,
    dialect: &DialectConfig,
) -> Vec<SymbolInformation> {
    xml.elements_by_tag_name(&dialect.route_tag)
        .into_iter()
        .map(|route| {
            let name = route
                .get_attribute(&dialect.id_attribute)
                .unwrap_or(dialect.missing_id_placeholder.as_str());
            let location = Location::new(doc.uri(), span_to_range(&route.span));
            SymbolInformation::new(name, SymbolKind::Field, location)
        })
        .collect()
}

/// Compute route symbols off the caller's task, using the default dialect.
///
/// See [`document_symbols_with_config`].
pub fn document_symbols(
    doc: Arc<Document>,
) -> impl Future<Output = Vec<SymbolInformation>> + Send + 'static {
    document_symbols_with_config(doc, Arc::new(DialectConfig::default()))
}

/// Compute route symbols on tokio's blocking pool.
///
/// The work starts as soon as this function is called; the returned future
/// only waits for it. The future always resolves to a list: if the work
/// panics, the failure is logged and the list is empty.
///
/// Outside a tokio runtime the symbols are computed before returning and
/// the future is already complete.
pub fn document_symbols_with_config(
    doc: Arc<Document>,
    dialect: Arc<DialectConfig>,
) -> impl Future<Output = Vec<SymbolInformation>> + Send + 'static {
    let uri = doc.uri().to_string();
    let work = move || get_symbols_with_config(&doc, &dialect);

    let (task, inline) = match Handle::try_current() {
        Ok(runtime) => (Some(runtime.spawn_blocking(work)), Vec::new()),
        Err(_) => {
            debug!(uri = %uri, "No tokio runtime, computing document symbols inline");
            (None, work())
        }
    };

    async move {
        let Some(task) = task else {
            return inline;
        };
        match task.await {
            Ok(symbols) => symbols,
            Err(err) => {
                error!(uri = %uri, error = %err, "Cannot determine document symbols");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Position, Range};

    fn spring(routes: &str) -> Document {
        Document::new(
            "file:///camel.xml",
            format!(
                "<camelContext xmlns=\"http://camel.apache.org/schema/spring\">\n{}</camelContext>\n",
                routes
            ),
        )
    }

    #[test]
    fn route_name_comes_from_id() {
        let doc = spring("  <route id=\"orders\">\n    <from uri=\"direct:orders\"/>\n  </route>\n");
        let symbols = get_symbols(&doc);

        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "orders");
        assert_eq!(symbols[0].kind, SymbolKind::Field);
        assert_eq!(symbols[0].location.uri, "file:///camel.xml");
        assert_eq!(
            symbols[0].location.range,
            Range::new(Position::new(1, 21), Position::new(3, 10))
        );
    }

    #[test]
    fn route_without_id_uses_placeholder() {
        let doc = spring("  <route>\n    <from uri=\"direct:a\"/>\n  </route>\n");
        let symbols = get_symbols(&doc);
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "<no id>");
    }

    #[test]
    fn nested_routes_are_listed_in_document_order() {
        let doc = spring(
            "  <route id=\"outer\">\n    <route>\n      <route id=\"inner\">\n        <from uri=\"direct:a\"/>\n      </route>\n    </route>\n  </route>\n",
        );
        let names: Vec<String> = get_symbols(&doc).into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["outer", "<no id>", "inner"]);
    }

    #[test]
    fn empty_route_element() {
        let doc = spring("  <route id=\"empty\"/>\n  <route><from uri=\"timer:t\"/></route>\n");
        let symbols = get_symbols(&doc);
        assert_eq!(symbols.len(), 2);
        assert_eq!(
            symbols[0].location.range,
            Range::new(Position::new(1, 21), Position::new(1, 21))
        );
    }

    #[test]
    fn irrelevant_or_broken_documents_have_no_symbols() {
        let plain = Document::new("pom.xml", "<project><route id=\"x\"/></project>");
        assert!(get_symbols(&plain).is_empty());

        let broken = spring("  <route id=\"x\">\n    <from uri=\"direct:a\"/>\n");
        assert!(get_symbols(&broken).is_empty());
    }

    #[test]
    fn custom_placeholder() {
        let dialect = DialectConfig::from_json(r#"{"missingIdPlaceholder": "anonymous"}"#).unwrap();
        let doc = spring("  <route><from uri=\"direct:a\"/></route>\n");
        let symbols = get_symbols_with_config(&doc, &dialect);
        assert_eq!(symbols[0].name, "anonymous");
    }

    #[tokio::test]
    async fn symbols_are_computed_in_background() {
        let doc = Arc::new(spring(
            "  <route id=\"a\"><from uri=\"direct:a\"/></route>\n  <route id=\"b\"><from uri=\"direct:b\"/></route>\n",
        ));

        let symbols = document_symbols(doc).await;
        let names: Vec<&str> = symbols.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn symbols_without_runtime() {
        let doc = Arc::new(spring("  <route id=\"a\"><from uri=\"direct:a\"/></route>\n"));
        let symbols = pollster::block_on(document_symbols(doc));
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "a");
    }

    #[test]
    fn doctype_entity_in_route_id() {
        let doc = Document::new(
            "file:///camel.xml",
            concat!(
                "<!DOCTYPE c [<!ENTITY e \"x\">]>\n",
                "<camelContext xmlns=\"http://camel.apache.org/schema/spring\">\n",
                "<route id=\"r&e;\"><from uri=\"a\"/></route>\n",
                "</camelContext>\n",
            ),
        );
        let names: Vec<String> = get_symbols(&doc).into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["rx"]);
    }

    #[test]
    fn undeclared_prefix_makes_document_unusable() {
        let doc = spring("  <route id=\"a\"><from uri=\"direct:a\"/></route>\n  <x:foo/>\n");
        assert!(get_symbols(&doc).is_empty());
    }

    #[tokio::test]
    async fn background_failure_resolves_to_empty() {
        let doc = Arc::new(Document::new("broken.xml", "<camelContext"));
        assert!(document_symbols(doc).await.is_empty());
    }
}
