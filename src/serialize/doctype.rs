//! Doctype content formatting.

/// Render the inner content of a doctype declaration (everything between
/// `<` and `>`).
///
/// A public id renders as ` PUBLIC "<id>"`; a system id without a public
/// id renders as ` SYSTEM "<id>"`. Ids containing `"` are quoted with `'`
/// instead.
pub fn doctype_content(name: &str, public_id: Option<&str>, system_id: Option<&str>) -> String {
    let mut out = String::from("!DOCTYPE ");

    if !name.is_empty() {
        out.push_str(name);
    }

    if let Some(public_id) = public_id {
        out.push_str(" PUBLIC ");
        out.push_str(&enquote(public_id));
    } else if system_id.is_some() {
        out.push_str(" SYSTEM");
    }

    if let Some(system_id) = system_id {
        out.push(' ');
        out.push_str(&enquote(system_id));
    }

    out
}

fn enquote(id: &str) -> String {
    if id.contains('"') {
        format!("'{id}'")
    } else {
        format!("\"{id}\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_only() {
        assert_eq!(doctype_content("html", None, None), "!DOCTYPE html");
    }

    #[test]
    fn test_public_and_system() {
        assert_eq!(
            doctype_content(
                "html",
                Some("-//W3C//DTD XHTML 1.1//EN"),
                Some("http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd"),
            ),
            "!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.1//EN\" \"http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd\""
        );
    }

    #[test]
    fn test_system_only() {
        assert_eq!(
            doctype_content("html", None, Some("about:legacy-compat")),
            "!DOCTYPE html SYSTEM \"about:legacy-compat\""
        );
    }

    #[test]
    fn test_quote_fallback() {
        assert_eq!(
            doctype_content("html", None, Some("a\"b")),
            "!DOCTYPE html SYSTEM 'a\"b'"
        );
    }
}
