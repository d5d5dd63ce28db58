//! XML parser that builds line-annotated XmlDocument trees.

use std::collections::HashMap;

use crate::dtd::internal_entities;
use crate::{Error, Result, XmlAttribute, XmlDocument, XmlElement};
use camel_source_map::{LineIndex, Point, Span};
use quick_xml::NsReader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::ResolveResult;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parse XML from a string, producing a line-annotated XmlDocument tree.
///
/// # Example
///
/// ```rust
/// use camel_xml::parse;
///
/// let xml = parse("<root><child/></root>").unwrap();
/// assert_eq!(xml.root.name, "root");
/// ```
///
/// # Errors
///
/// Returns an error if the XML is not well-formed.
pub fn parse(content: &str) -> Result<XmlDocument> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let mut parser = XmlParser::new(content);
    parser.parse()
}

/// Internal parser state.
struct XmlParser<'a> {
    /// The namespace-aware quick-xml reader.
    reader: NsReader<&'a [u8]>,

    /// Offset to line/column table for the content.
    lines: LineIndex<'a>,

    /// Stack of elements whose end tag has not been seen yet.
    stack: Vec<XmlElement>,

    /// Internal entities declared in the DOCTYPE.
    entities: HashMap<String, String>,
}

impl<'a> XmlParser<'a> {
    fn new(source: &'a str) -> Self {
        let mut reader = NsReader::from_str(source);
        reader.config_mut().trim_text_start = false;
        reader.config_mut().trim_text_end = false;

        Self {
            reader,
            lines: LineIndex::new(source),
            stack: Vec::new(),
            entities: HashMap::new(),
        }
    }

    fn parse(&mut self) -> Result<XmlDocument> {
        let mut root: Option<XmlElement> = None;

        loop {
            let read = self
                .reader
                .read_resolved_event()
                .map(|(ns, event)| (namespace_uri(&ns), event));

            let (namespace, event) = match read {
                Ok(resolved) => resolved,
                Err(e) => {
                    let point = self.point_at(self.reader.error_position() as usize);
                    return Err(Error::XmlSyntax {
                        message: e.to_string(),
                        point,
                    });
                }
            };
            let namespace = namespace.map_err(|prefix| Error::InvalidStructure {
                message: format!("Undeclared namespace prefix '{}'", prefix),
                point: self.current_point(),
            })?;

            match event {
                Event::Start(e) => {
                    if self.stack.is_empty() && root.is_some() {
                        return Err(Error::MultipleRoots {
                            point: self.current_point(),
                        });
                    }
                    let element = self.open_element(&e, namespace)?;
                    self.stack.push(element);
                }
                Event::End(e) => {
                    let element = self.close_element(&e)?;
                    self.attach(element, &mut root);
                }
                Event::Empty(e) => {
                    if self.stack.is_empty() && root.is_some() {
                        return Err(Error::MultipleRoots {
                            point: self.current_point(),
                        });
                    }
                    // An empty element ends where it starts
                    let element = self.open_element(&e, namespace)?;
                    self.attach(element, &mut root);
                }
                Event::Text(e) => {
                    self.handle_text(&e)?;
                }
                Event::CData(_) | Event::Comment(_) | Event::PI(_) | Event::Decl(_) => {
                    // Not part of the element tree
                }
                Event::DocType(e) => {
                    self.entities = internal_entities(&String::from_utf8_lossy(&e));
                }
                Event::Eof => break,
            }
        }

        // Check for unclosed elements
        if let Some(node) = self.stack.last() {
            return Err(Error::UnexpectedEof {
                expected: format!("closing tag </{}>", node.name),
                point: Some(node.span.start),
            });
        }

        let root = root.ok_or(Error::EmptyDocument)?;
        Ok(XmlDocument::new(root))
    }

    /// Build an element from a start tag. Its span is provisional: both ends
    /// sit just after the start tag until the end tag is read.
    fn open_element(&self, e: &BytesStart<'_>, namespace: Option<String>) -> Result<XmlElement> {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let attributes = self.parse_attributes(e)?;
        let start = self.current_point().unwrap_or_default();

        let element = XmlElement::new(name, attributes, Span::new(start, start));
        Ok(match namespace {
            Some(uri) => element.with_namespace(uri),
            None => element,
        })
    }

    fn close_element(&mut self, e: &BytesEnd<'_>) -> Result<XmlElement> {
        let end_name = String::from_utf8_lossy(e.name().as_ref()).into_owned();

        let mut node = self.stack.pop().ok_or_else(|| Error::InvalidStructure {
            message: format!("Unexpected closing tag </{}>", end_name),
            point: self.current_point(),
        })?;

        // quick-xml checks end names by default; this guards configurations
        // where it does not
        if node.name != end_name {
            return Err(Error::MismatchedEndTag {
                expected: node.name,
                found: end_name,
                point: self.current_point(),
            });
        }

        let end = self.current_point().unwrap_or(node.span.start);
        node.span = Span::new(node.span.start, end);
        Ok(node)
    }

    /// Add a finished element to its parent, or make it the root.
    fn attach(&mut self, element: XmlElement, root: &mut Option<XmlElement>) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None => *root = Some(element),
        }
    }

    fn handle_text(&self, e: &BytesText<'_>) -> Result<()> {
        let text = e
            .unescape_with(|entity| self.resolve_entity(entity))
            .map_err(|err| Error::XmlSyntax {
                message: format!("Invalid text content: {}", err),
                point: self.current_point(),
            })?;

        if self.stack.is_empty() && !text.trim().is_empty() {
            return Err(Error::InvalidStructure {
                message: "Text content outside of the root element".to_string(),
                point: self.current_point(),
            });
        }
        Ok(())
    }

    fn parse_attributes(&self, e: &BytesStart<'_>) -> Result<Vec<XmlAttribute>> {
        let mut attributes = Vec::new();

        for attr_result in e.attributes() {
            let attr = attr_result.map_err(|err| Error::XmlSyntax {
                message: format!("Attribute error: {}", err),
                point: self.current_point(),
            })?;

            let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value_with(|entity| self.resolve_entity(entity))
                .map_err(|err| Error::XmlSyntax {
                    message: format!("Invalid attribute value: {}", err),
                    point: self.current_point(),
                })?;

            attributes.push(XmlAttribute::new(name, value.into_owned()));
        }

        Ok(attributes)
    }

    /// Predefined XML entities first, then those declared in the DOCTYPE.
    fn resolve_entity(&self, name: &str) -> Option<&str> {
        resolve_predefined_entity(name).or_else(|| self.entities.get(name).map(String::as_str))
    }

    /// The point just after the last event read, which is where a
    /// line-tracking SAX locator sits when it reports a tag.
    fn current_point(&self) -> Option<Point> {
        self.point_at(self.reader.buffer_position() as usize)
    }

    fn point_at(&self, offset: usize) -> Option<Point> {
        self.lines.point_at(offset)
    }
}

/// The namespace an element name is bound to, or the undeclared prefix as
/// the error.
fn namespace_uri(resolved: &ResolveResult<'_>) -> std::result::Result<Option<String>, String> {
    match resolved {
        ResolveResult::Bound(ns) => Ok(Some(String::from_utf8_lossy(ns.as_ref()).into_owned())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(String::from_utf8_lossy(prefix).into_owned()),
    }
}
