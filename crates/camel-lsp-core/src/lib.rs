//! Transport-agnostic language analysis for Camel XML route documents.
//!
//! This crate holds the analysis behind editor features for Apache Camel
//! routes written in Spring or Blueprint XML, without any LSP protocol
//! dependencies. A transport layer owns the session and document
//! synchronization and calls into this crate with a [`Document`] snapshot.
//!
//! # Architecture
//!
//! ```text
//!            Document snapshot (uri, language id, text)
//!                              │
//!               ┌──────────────┴──────────────┐
//!               ▼                             ▼
//!      relevance filter               uri attribute locator
//!  (Camel namespace present?)       (textual, one line only)
//!               │                             │
//!               ▼                             │
//!     camel-xml line-annotated tree           │
//!               │                             │
//!       ┌───────┴────────┐                    │
//!       ▼                ▼                    ▼
//!  route symbols    node locator ────► completion trigger
//! ```
//!
//! Every call parses its own snapshot and drops the tree before returning.
//! Nothing is cached between calls.
//!
//! # Usage
//!
//! ```rust
//! use camel_lsp_core::{Document, get_symbols};
//!
//! let doc = Document::new(
//!     "file:///routes.xml",
//!     r#"<camelContext xmlns="http://camel.apache.org/schema/spring">
//!   <route id="orders">
//!     <from uri="direct:orders"/>
//!   </route>
//! </camelContext>"#,
//! );
//!
//! let symbols = get_symbols(&doc);
//! assert_eq!(symbols.len(), 1);
//! assert_eq!(symbols[0].name, "orders");
//! assert_eq!(symbols[0].location.range.start.line, 1);
//! ```

pub mod completion;
pub mod convert;
pub mod dialect;
pub mod document;
pub mod locator;
pub mod relevance;
pub mod symbols;
pub mod types;
pub mod uri_attribute;

// Re-export main types and functions for convenience
pub use completion::{CompletionTrigger, completion_context, completion_context_with_config};
pub use dialect::{ConfigError, DialectConfig};
pub use document::Document;
pub use locator::{
    corresponding_element_for_completion, corresponding_element_for_completion_with_config,
    find_element_at_line,
};
pub use relevance::{has_dialect_elements, is_relevant, is_relevant_with_config};
pub use symbols::{
    document_symbols, document_symbols_with_config, extract_route_symbols, get_symbols,
    get_symbols_with_config,
};
pub use types::{Location, Position, Range, SymbolInformation, SymbolKind};
pub use uri_attribute::{
    component_uri_at, find_uri_value, is_within_uri, position_in_uri, uri_start_offset,
};
