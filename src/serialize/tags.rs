//! Static tag tables and namespace URLs used during emission.

pub const NS_HTML: &str = "http://www.w3.org/1999/xhtml";
pub const NS_XML: &str = "http://www.w3.org/XML/1998/namespace";
pub const NS_XMLNS: &str = "http://www.w3.org/2000/xmlns/";
pub const NS_XLINK: &str = "http://www.w3.org/1999/xlink";

/// Void elements never have children and never emit a closing tag.
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "basefont"
            | "bgsound"
            | "br"
            | "col"
            | "embed"
            | "frame"
            | "hr"
            | "img"
            | "input"
            | "keygen"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Raw-text elements whose textual content is emitted verbatim, bypassing
/// the escape hook.
pub fn is_raw_text_element(tag: &str) -> bool {
    matches!(
        tag,
        "style" | "script" | "xmp" | "iframe" | "noembed" | "noframes" | "plaintext" | "noscript"
    )
}
