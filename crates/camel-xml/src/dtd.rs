//! Internal entity declarations from a `<!DOCTYPE …>` subset.
//!
//! Only general entities with a quoted literal value are collected.
//! Parameter entities and external entities (`SYSTEM` / `PUBLIC`) are skipped,
//! so a reference to one of them still fails to unescape.

use std::collections::HashMap;

const ENTITY_DECL: &str = "<!ENTITY";

/// Collect `<!ENTITY name "value">` declarations from DOCTYPE content.
///
/// When a name is declared twice the first declaration is kept. Values are
/// stored as written; references inside them are not expanded.
pub(crate) fn internal_entities(doctype: &str) -> HashMap<String, String> {
    let mut entities = HashMap::new();
    let mut rest = doctype;

    while let Some(at) = rest.find(ENTITY_DECL) {
        rest = rest[at + ENTITY_DECL.len()..].trim_start();

        // Parameter entity
        if rest.starts_with('%') {
            continue;
        }

        let name_len = rest
            .find(|c: char| c.is_whitespace() || c == '"' || c == '\'' || c == '>')
            .unwrap_or(rest.len());
        let name = &rest[..name_len];
        rest = rest[name_len..].trim_start();

        let Some(quote) = rest.chars().next().filter(|c| matches!(c, '"' | '\'')) else {
            continue;
        };
        let body = &rest[quote.len_utf8()..];
        let Some(close) = body.find(quote) else {
            break;
        };

        if !name.is_empty() {
            entities
                .entry(name.to_string())
                .or_insert_with(|| body[..close].to_string());
        }
        rest = &body[close + quote.len_utf8()..];
    }

    entities
}
