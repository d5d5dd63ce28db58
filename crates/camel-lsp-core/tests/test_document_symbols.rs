//! Route outlines for complete Camel XML documents.

use std::sync::Arc;

use camel_lsp_core::{
    Document, Position, Range, SymbolInformation, completion_context, document_symbols,
    get_symbols, is_relevant,
};

const URI: &str = "file:///dummy.xml";

const TWO_ROUTES: &str = concat!(
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

const THREE_ROUTES: &str = concat!(
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
    "    <route>\r\n",
    "      <from uri=\"direct:drink\"/>\r\n",
    "      <recipientList>\r\n",
    "        <method bean=\"drinkRouter\"/>\r\n",
    "      </recipientList>\r\n",
    "    </route>\n",
    "</camelContext>\n",
);

const PREFIXED_ROUTES: &str = concat!(
    "<camel:camelContext id=\"camel\" xmlns:camel=\"http://camel.apache.org/schema/spring\">\r\n",
    "\r\n",
    "    <camel:route id=\"a route\">\r\n",
    "      <camel:from uri=\"direct:cafe\"/>\r\n",
    "    </camel:route>\r\n",
    "</camel:camelContext>\n",
);

fn render(symbols: &[SymbolInformation]) -> String {
    symbols
        .iter()
        .map(|s| {
            let Range { start, end } = s.location.range;
            format!(
                "{} ({}) {}:{}..{}:{}",
                s.name,
                s.kind.lsp_value(),
                start.line,
                start.character,
                end.line,
                end.character
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_routes_provided_as_document_symbols() {
    let doc = Document::new(URI, TWO_ROUTES);
    let symbols = get_symbols(&doc);

    assert_eq!(symbols.len(), 2);
    let first = &symbols[0];
    assert_eq!(first.name, "a route");
    assert_eq!(first.location.uri, URI);
    assert_eq!(
        first.location.range,
        Range::new(Position::new(2, 24), Position::new(8, 12))
    );
}

#[test]
fn test_routes_without_id() {
    let doc = Document::new(URI, THREE_ROUTES);
    insta::assert_snapshot!(render(&get_symbols(&doc)), @r"
    a route (8) 2:24..8:12
    another Route (8) 10:30..15:12
    <no id> (8) 16:11..21:12
    ");
}

#[test]
fn test_empty_camel_context_has_no_symbols() {
    let doc = Document::new(
        URI,
        "<camelContext id=\"camel\" xmlns=\"http://camel.apache.org/schema/spring\">\r\n</camelContext>\n",
    );
    assert!(!is_relevant(&doc));
    assert!(get_symbols(&doc).is_empty());
}

#[test]
fn test_prefixed_elements_are_not_recognized() {
    // Only unprefixed tag names are matched against the dialect.
    let doc = Document::new(URI, PREFIXED_ROUTES);
    assert!(!is_relevant(&doc));
    assert!(get_symbols(&doc).is_empty());
}

#[test]
fn test_blueprint_routes() {
    let doc = Document::new(
        URI,
        concat!(
            "<blueprint xmlns=\"http://www.osgi.org/xmlns/blueprint/v1.0.0\">\n",
            "  <camelContext xmlns=\"http://camel.apache.org/schema/blueprint\">\n",
            "    <route id=\"bp\">\n",
            "      <from uri=\"timer:tick\"/>\n",
            "    </route>\n",
            "  </camelContext>\n",
            "</blueprint>\n",
        ),
    );
    insta::assert_snapshot!(render(&get_symbols(&doc)), @"bp (8) 2:19..4:12");
}

#[test]
fn test_completion_inside_route_document() {
    let doc = Document::new(URI, TWO_ROUTES);
    // `        <to uri="direct:drink"/>` on line 6
    let trigger = completion_context(&doc, Position::new(6, 24)).unwrap();

    assert_eq!(trigger.uri, "direct:drink");
    assert_eq!(trigger.position_in_uri, 7);
    assert_eq!(trigger.element.map(|e| e.name), Some("to".to_string()));
}

#[tokio::test]
async fn test_document_symbols_future() {
    let symbols = document_symbols(Arc::new(Document::new(URI, THREE_ROUTES))).await;
    let names: Vec<&str> = symbols.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["a route", "another Route", "<no id>"]);
}
