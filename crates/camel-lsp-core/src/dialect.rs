//! The Camel XML dialect: namespaces and element names the analysis keys on.
//!
//! [`DialectConfig::default`] describes Camel as shipped. Editors may overlay
//! settings from JSON with [`DialectConfig::from_json`]; keys that are absent
//! keep their default values.

use serde::{Deserialize, Serialize};

/// Namespace of Camel routes embedded in Spring XML.
pub const CAMEL_SPRING_NAMESPACE: &str = "http://camel.apache.org/schema/spring";

/// Namespace of Camel routes embedded in OSGi Blueprint XML.
pub const CAMEL_BLUEPRINT_NAMESPACE: &str = "http://camel.apache.org/schema/blueprint";

/// Element names that carry an endpoint uri and anchor completion.
pub const ENDPOINT_TAGS: &[&str] = &[
    "from",
    "to",
    "toD",
    "toF",
    "endpoint",
    "pollEnrich",
    "enrich",
    "wireTap",
    "interceptFrom",
    "interceptSendToEndpoint",
];

/// Element name of a route.
pub const ROUTE_TAG: &str = "route";

/// Attribute holding a route's display name.
pub const ID_ATTRIBUTE: &str = "id";

/// Display name for a route without an id.
pub const NO_ID_PLACEHOLDER: &str = "<no id>";

/// Errors raised while loading a dialect configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid dialect configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dialect configuration must name at least one {0}")]
    Empty(&'static str),
}

/// Names and namespaces that make a document part of the Camel dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DialectConfig {
    /// Namespace URIs that identify Camel elements.
    pub namespaces: Vec<String>,

    /// Element names the node locator stops at.
    pub recognized_tags: Vec<String>,

    /// Element name listed in the document outline.
    pub route_tag: String,

    /// Attribute used as the outline entry name.
    pub id_attribute: String,

    /// Outline entry name when the attribute is missing.
    pub missing_id_placeholder: String,
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self {
            namespaces: vec![
                CAMEL_SPRING_NAMESPACE.to_string(),
                CAMEL_BLUEPRINT_NAMESPACE.to_string(),
            ],
            recognized_tags: ENDPOINT_TAGS.iter().map(|t| t.to_string()).collect(),
            route_tag: ROUTE_TAG.to_string(),
            id_attribute: ID_ATTRIBUTE.to_string(),
            missing_id_placeholder: NO_ID_PLACEHOLDER.to_string(),
        }
    }
}

impl DialectConfig {
    /// Load a configuration from JSON, filling absent keys with defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use camel_lsp_core::DialectConfig;
    ///
    /// let config = DialectConfig::from_json(r#"{"missingIdPlaceholder": "(anonymous)"}"#).unwrap();
    /// assert_eq!(config.missing_id_placeholder, "(anonymous)");
    /// assert_eq!(config.route_tag, "route");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.namespaces.is_empty() {
            return Err(ConfigError::Empty("namespace"));
        }
        if config.recognized_tags.is_empty() {
            return Err(ConfigError::Empty("recognized tag"));
        }
        Ok(config)
    }

    /// Whether a namespace URI belongs to the dialect.
    pub fn is_dialect_namespace(&self, uri: &str) -> bool {
        self.namespaces.iter().any(|ns| ns == uri)
    }

    /// Whether a qualified element name is one the locator stops at.
    pub fn is_recognized_tag(&self, name: &str) -> bool {
        self.recognized_tags.iter().any(|tag| tag == name)
    }
}
