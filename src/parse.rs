//! Parsing front end: html5ever driver wired to the decorated DOM.
//!
//! Parsing lives outside the serializer core; the serializer only ever
//! sees the tree through [`crate::serialize::TreeAdapter`]. These
//! functions exist so the crate round-trips markup on its own.

use html5ever::QualName;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{ParseOpts, local_name, namespace_url, ns};

use crate::dom::sink::DomSink;
use crate::dom::{Handle, Node, NodeData};

fn parse_opts() -> ParseOpts {
    ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: false,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Parse a complete HTML document into a decorated DOM tree.
///
/// Lenient, browser-style parsing; the doctype is preserved.
pub fn parse_document(html: &str) -> Handle {
    let sink = DomSink::new();
    html5ever::parse_document(sink, parse_opts())
        .from_utf8()
        .one(html.as_bytes())
        .document()
}

/// Parse a fragment of HTML (body context) into a decorated DOM tree.
///
/// The parsed nodes are re-parented under a single `Fragment` root, so
/// serializing the returned handle reproduces exactly the input markup
/// (no synthetic `<html>`/`<body>` wrappers).
pub fn parse_fragment(html: &str) -> Handle {
    let sink = DomSink::new();
    let document = html5ever::parse_fragment(
        sink,
        parse_opts(),
        QualName::new(None, ns!(html), local_name!("body")),
        Vec::new(),
        false,
    )
    .from_utf8()
    .one(html.as_bytes())
    .document();

    // html5ever hangs fragment contents off a synthetic <html> element.
    let fragment = Node::new(NodeData::Fragment);
    let root = document
        .children
        .borrow()
        .iter()
        .find(|c| matches!(&c.data, NodeData::Element { name, .. } if name.local.as_ref() == "html"))
        .cloned();

    if let Some(root) = root {
        let children = std::mem::take(&mut *root.children.borrow_mut());
        for child in children {
            Node::append(&fragment, child);
        }
    }

    fragment
}
