//! Structural-fidelity round trips: for trees without decorations or
//! hidden attributes, serializing a parse reproduces the input.

use proptest::prelude::*;

use veneer::{parse_document, parse_fragment, serialize};

fn assert_fragment_roundtrip(markup: &str) {
    let fragment = parse_fragment(markup);
    assert_eq!(serialize(&fragment), markup, "fragment: {markup}");
}

#[test]
fn test_fragment_roundtrips() {
    assert_fragment_roundtrip("<div><p>hello</p></div>");
    assert_fragment_roundtrip("<div>\n    <p>indented</p>\n</div>");
    assert_fragment_roundtrip("<span>a</span><span>b</span>");
    assert_fragment_roundtrip("<div class=\"box\" id=\"main\">x</div>");
    assert_fragment_roundtrip("<div><br><img src=\"x.png\" alt=\"pic\"></div>");
    assert_fragment_roundtrip("<ul><li>one</li><li>two</li></ul>");
    assert_fragment_roundtrip("<div><!-- note --><em>y</em></div>");
    assert_fragment_roundtrip("plain text only");
}

#[test]
fn test_document_roundtrip() {
    let markup =
        "<!DOCTYPE html><html><head><title>t</title></head><body><p>hi</p></body></html>";
    let doc = parse_document(markup);
    assert_eq!(serialize(&doc), markup);
}

// ---------------------------------------------------------------------------
// Property: generated nesting-safe fragments round-trip byte-for-byte.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum GenNode {
    Text(String),
    Element {
        tag: &'static str,
        class: Option<String>,
        children: Vec<GenNode>,
    },
}

// Tags chosen so the HTML parser never reorders or auto-closes them when
// nested in any combination.
const SAFE_TAGS: &[&str] = &["div", "span", "b", "i", "em", "strong", "section"];

fn render(node: &GenNode, out: &mut String) {
    match node {
        GenNode::Text(text) => out.push_str(text),
        GenNode::Element {
            tag,
            class,
            children,
        } => {
            out.push('<');
            out.push_str(tag);
            if let Some(class) = class {
                out.push_str(" class=\"");
                out.push_str(class);
                out.push('"');
            }
            out.push('>');
            for child in children {
                render(child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

fn gen_node() -> impl Strategy<Value = GenNode> {
    let leaf = prop_oneof![
        "[a-z0-9 ]{1,12}".prop_map(GenNode::Text),
        (0..SAFE_TAGS.len(), proptest::option::of("[a-z]{1,8}")).prop_map(|(tag, class)| {
            GenNode::Element {
                tag: SAFE_TAGS[tag],
                class,
                children: Vec::new(),
            }
        }),
    ];

    leaf.prop_recursive(3, 16, 4, |inner| {
        (
            0..SAFE_TAGS.len(),
            proptest::option::of("[a-z]{1,8}"),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(tag, class, children)| GenNode::Element {
                tag: SAFE_TAGS[tag],
                class,
                children,
            })
    })
}

proptest! {
    #[test]
    fn prop_generated_fragment_roundtrips(node in gen_node()) {
        let mut markup = String::new();
        render(&node, &mut markup);

        let fragment = parse_fragment(&markup);
        prop_assert_eq!(serialize(&fragment), markup);
    }
}
