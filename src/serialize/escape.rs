//! The swappable escape hook.
//!
//! Escaping is an injected strategy, not a hard-coded branch of the
//! serializer: the same function is applied to text nodes
//! (`attr_mode == false`) and attribute values (`attr_mode == true`), and
//! is exposed standalone so other consumers can apply identical semantics
//! outside full-tree serialization.

/// Signature of the escape hook: `(text, attr_mode) -> text`.
pub type EscapeFn = fn(&str, bool) -> String;

/// The shipped default: an identity pass-through.
///
/// This is a compatibility/round-trip hook, not correct HTML escaping.
/// It exists so that markup carried through a parse/decorate/serialize
/// round trip comes back byte-for-byte. Consumers emitting untrusted
/// content should plug [`escape_entities`] through
/// [`SerializeOpts::escape`](crate::serialize::SerializeOpts).
pub fn escape_string(text: &str, _attr_mode: bool) -> String {
    text.to_string()
}

/// Entity-escaping suitable for untrusted content.
///
/// `&` and U+00A0 are always escaped; attribute mode additionally escapes
/// `"`, text mode additionally escapes `<` and `>`.
pub fn escape_entities(text: &str, attr_mode: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' if attr_mode => out.push_str("&quot;"),
            '<' if !attr_mode => out.push_str("&lt;"),
            '>' if !attr_mode => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_string_is_identity() {
        assert_eq!(escape_string("<a & b>", false), "<a & b>");
        assert_eq!(escape_string("\"quoted\"", true), "\"quoted\"");
    }

    #[test]
    fn test_escape_entities_text_mode() {
        assert_eq!(escape_entities("a < b > c & d", false), "a &lt; b &gt; c &amp; d");
        assert_eq!(escape_entities("\"quoted\"", false), "\"quoted\"");
    }

    #[test]
    fn test_escape_entities_attr_mode() {
        assert_eq!(escape_entities("\"quoted\"", true), "&quot;quoted&quot;");
        assert_eq!(escape_entities("a < b", true), "a < b");
        assert_eq!(escape_entities("a\u{a0}b", true), "a&nbsp;b");
    }
}
