//! Core types for line-annotated XML trees.

use camel_source_map::Span;

/// A parsed XML document.
///
/// The tree is owned by whoever parsed it and is meant to be dropped once the
/// request that needed it has produced its answer.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    /// The document element.
    pub root: XmlElement,
}

/// An XML element annotated with its position in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    /// The qualified name as written in the source (e.g. `camel:route`).
    pub name: String,

    /// The name without its namespace prefix.
    pub local_name: String,

    /// Namespace prefix, if any.
    pub prefix: Option<String>,

    /// The namespace URI the element name resolves to.
    ///
    /// `None` when the element is in no namespace or uses an undeclared prefix.
    pub namespace: Option<String>,

    /// Attributes in source order. Names are unique within an element.
    pub attributes: Vec<XmlAttribute>,

    /// Child elements in document order. Text, comments and processing
    /// instructions are not kept.
    pub children: Vec<XmlElement>,

    /// Location of the element, 1-based and inclusive.
    pub span: Span,
}

/// An XML attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    /// The qualified attribute name as written in the source.
    pub name: String,

    /// The attribute value (after unescaping XML entities).
    pub value: String,
}

impl XmlDocument {
    /// Create a new document from its root element.
    pub fn new(root: XmlElement) -> Self {
        Self { root }
    }

    /// Iterate over every element in document order, starting with the root.
    pub fn elements(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![&self.root],
        }
    }

    /// All elements with the given qualified name, in document order.
    ///
    /// Matching is on the name as written: `route` does not match
    /// `camel:route`.
    pub fn elements_by_tag_name(&self, name: &str) -> Vec<&XmlElement> {
        self.elements().filter(|e| e.name == name).collect()
    }
}

impl XmlElement {
    /// Create a new element without children.
    pub fn new(name: impl Into<String>, attributes: Vec<XmlAttribute>, span: Span) -> Self {
        let name = name.into();
        let (prefix, local_name) = match name.split_once(':') {
            Some((prefix, local)) => (Some(prefix.to_string()), local.to_string()),
            None => (None, name.clone()),
        };

        Self {
            name,
            local_name,
            prefix,
            namespace: None,
            attributes,
            children: Vec::new(),
            span,
        }
    }

    /// Set the resolved namespace URI.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Append a child element.
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Get an attribute value by qualified name.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Check if this element has child elements.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Get child elements by qualified name.
    pub fn get_children(&self, name: &str) -> Vec<&XmlElement> {
        self.children.iter().filter(|e| e.name == name).collect()
    }

    /// Iterate over all descendants in document order, excluding `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }
}

impl XmlAttribute {
    /// Create a new attribute.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Pre-order iterator over a subtree.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<&'a XmlElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}
