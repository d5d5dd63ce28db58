//! Locating the `uri` attribute value on a single line of text.
//!
//! Completion is triggered on every keystroke, so this works directly on the
//! raw line instead of parsing the document. No XML rules apply here: entities
//! are not decoded and only the first `uri="` on the line is considered.
//!
//! Offsets are editor character offsets (UTF-16 code units).

const URI_ATTRIBUTE: &str = "uri=\"";

/// A quoted uri value found on a line.
struct UriValue<'a> {
    value: &'a str,
    /// Offset of the first character of the value.
    start: u32,
    /// Offset of the closing quote.
    closing: u32,
}

impl UriValue<'_> {
    /// A cursor is in the value from just after the opening quote up to and
    /// including the position of the closing quote.
    fn contains(&self, character: u32) -> bool {
        self.start <= character && character <= self.closing
    }
}

fn locate(line: &str) -> Option<UriValue<'_>> {
    let value_start = line.find(URI_ATTRIBUTE)? + URI_ATTRIBUTE.len();
    let value_len = line[value_start..].find('"')?;
    let value = &line[value_start..value_start + value_len];

    let start = utf16_len(&line[..value_start]);
    Some(UriValue {
        value,
        start,
        closing: start.saturating_add(utf16_len(value)),
    })
}

fn utf16_len(text: &str) -> u32 {
    u32::try_from(text.encode_utf16().count()).unwrap_or(u32::MAX)
}

/// The value of the first `uri="…"` attribute on the line.
///
/// # Example
///
/// ```rust
/// use camel_lsp_core::find_uri_value;
///
/// assert_eq!(find_uri_value(r#"      <from uri="direct:cafe"/>"#), Some("direct:cafe"));
/// assert_eq!(find_uri_value(r#"<to uri="direct:"#), None);
/// ```
pub fn find_uri_value(line: &str) -> Option<&str> {
    locate(line).map(|uri| uri.value)
}

/// Offset of the first character of the uri value, whether or not the value
/// is closed.
pub fn uri_start_offset(line: &str) -> Option<u32> {
    let attribute = line.find(URI_ATTRIBUTE)?;
    Some(utf16_len(&line[..attribute + URI_ATTRIBUTE.len()]))
}

/// Check whether a cursor offset falls inside the uri value.
///
/// The range is inclusive at both ends: the offset of the first value
/// character and the offset of the closing quote itself both count, so a
/// cursor right after the last value character still triggers completion.
/// The offset of the opening quote and anything past the closing quote do
/// not. For `      <from uri="direct:cafe"/>` that is 17..=28.
pub fn is_within_uri(line: &str, character: u32) -> bool {
    locate(line).is_some_and(|uri| uri.contains(character))
}

/// The uri value, if the cursor is inside it.
pub fn component_uri_at(line: &str, character: u32) -> Option<&str> {
    locate(line)
        .filter(|uri| uri.contains(character))
        .map(|uri| uri.value)
}

/// Cursor offset relative to the start of the uri value.
///
/// Negative when the cursor is before the value. `None` when the line has no
/// `uri="` attribute.
pub fn position_in_uri(line: &str, character: u32) -> Option<i64> {
    uri_start_offset(line).map(|start| i64::from(character) - i64::from(start))
}
