//! Line-annotated, namespace-aware XML parsing for Camel route documents.
//!
//! This crate wraps [`quick-xml`]'s namespace reader to build a tree of
//! [`XmlElement`]s. Every element records the namespace URI its name resolves
//! to and a [`Span`] locating it in the original text.
//!
//! # Overview
//!
//! The main types are:
//! - [`XmlDocument`]: The parsed document, owning the root element
//! - [`XmlElement`]: An element with its name, namespace, attributes, children and span
//! - [`XmlAttribute`]: A qualified attribute name with its unescaped value
//!
//! # Example
//!
//! ```rust
//! use camel_xml::parse;
//!
//! let xml = parse(r#"<camelContext xmlns="http://camel.apache.org/schema/spring">
//!   <route id="orders">
//!     <from uri="direct:orders"/>
//!   </route>
//! </camelContext>"#).unwrap();
//!
//! assert_eq!(xml.root.name, "camelContext");
//! assert_eq!(
//!     xml.root.namespace.as_deref(),
//!     Some("http://camel.apache.org/schema/spring")
//! );
//!
//! let routes = xml.elements_by_tag_name("route");
//! assert_eq!(routes.len(), 1);
//! assert_eq!(routes[0].get_attribute("id"), Some("orders"));
//! ```
//!
//! # Position Tracking
//!
//! Spans follow the convention of line-tracking SAX parsers: an element
//! starts at the character just after its start tag and ends at the
//! character just after its end tag. Lines and columns are 1-based.
//!
//! ```rust
//! use camel_xml::parse;
//!
//! let xml = parse("<root>\n  <child/>\n</root>").unwrap();
//! let child = &xml.root.children[0];
//!
//! assert_eq!(child.span.start_line(), 2);
//! assert_eq!(child.span.start_column(), 11);
//! assert_eq!(child.span.end, child.span.start);
//! ```

mod dtd;
pub mod error;
pub mod parser;
pub mod types;

// Re-export main types
pub use camel_source_map::{Point, Span};
pub use error::{Error, Result};
pub use parser::parse;
pub use types::{Descendants, XmlAttribute, XmlDocument, XmlElement};
