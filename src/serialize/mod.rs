//! Markup serialization with decoration preservation.
//!
//! The serializer walks a tree depth-first through the [`TreeAdapter`]
//! seam and emits markup into a string. At every sibling level it first
//! runs the decoration-redistribution pass (see [`plan_redistribution`]),
//! then dispatches each child by kind.
//!
//! # Mutation contract
//!
//! Serialization is **consuming**: the redistribution pass rewrites the
//! `lead`/`trail` decoration fields of sibling nodes in the caller's tree
//! before emission. A tree that has been serialized once is not the tree
//! that was passed in, and serializing it again can produce different
//! output when redistribution fired. Callers that need repeatable output
//! must re-parse or serialize from a copy. The plan/apply split
//! ([`plan_redistribution`] / [`apply_redistribution`]) exposes exactly
//! which fields change.
//!
//! # Compatibility notes
//!
//! - The default escape hook is the identity pass-through
//!   ([`escape_string`]); [`escape_entities`] is the opt-in entity
//!   escaping.
//! - Void elements emit their trailing decoration unconditionally, while
//!   non-void elements suppress the closing tag in favor of the trailing
//!   decoration when `text_only` is set. The asymmetry is intentional
//!   compatibility behavior and is preserved exactly.

mod adapter;
mod doctype;
mod escape;
mod redistribute;
mod tags;

use std::io;

pub use adapter::{AttrEntry, DomAdapter, NodeKind, TreeAdapter};
pub use doctype::doctype_content;
pub use escape::{EscapeFn, escape_entities, escape_string};
pub use redistribute::{DecorEdit, apply_redistribution, plan_redistribution};
pub use tags::{NS_HTML, NS_XLINK, NS_XML, NS_XMLNS, is_raw_text_element, is_void_element};

use crate::dom::Handle;

/// Serialization options: the tree adapter and the escape hook.
pub struct SerializeOpts<A: TreeAdapter = DomAdapter> {
    pub adapter: A,
    pub escape: EscapeFn,
}

impl Default for SerializeOpts<DomAdapter> {
    fn default() -> Self {
        Self {
            adapter: DomAdapter,
            escape: escape_string,
        }
    }
}

/// Serialize the children of `node` with the default adapter and the
/// identity escape hook.
///
/// See the module docs for the mutation contract: the input tree's
/// decoration fields are rewritten in place.
pub fn serialize(node: &Handle) -> String {
    serialize_with(node, &SerializeOpts::default())
}

/// Serialize the children of `node` through an arbitrary tree adapter.
pub fn serialize_with<A: TreeAdapter>(node: &A::Handle, opts: &SerializeOpts<A>) -> String {
    let mut serializer = Serializer {
        adapter: &opts.adapter,
        escape: opts.escape,
        out: String::new(),
    };
    serializer.write_children(node);
    serializer.out
}

/// Serialize into an `io::Write` sink.
pub fn serialize_to<W: io::Write>(
    writer: &mut W,
    node: &Handle,
    opts: &SerializeOpts,
) -> crate::Result<()> {
    let markup = serialize_with(node, opts);
    writer.write_all(markup.as_bytes())?;
    Ok(())
}

struct Serializer<'a, A: TreeAdapter> {
    adapter: &'a A,
    escape: EscapeFn,
    out: String,
}

impl<A: TreeAdapter> Serializer<'_, A> {
    fn write_children(&mut self, parent: &A::Handle) {
        let children = self.adapter.child_nodes(parent);
        if children.is_empty() {
            return;
        }

        let edits = plan_redistribution(self.adapter, &children);
        apply_redistribution(self.adapter, &children, &edits);

        for child in &children {
            match self.adapter.node_kind(child) {
                NodeKind::Element => self.write_element(child),
                NodeKind::Text => self.write_text(child),
                NodeKind::Comment => self.write_comment(child),
                NodeKind::Doctype => self.write_doctype(child),
                // Container kinds never render as children.
                NodeKind::Document => {}
            }
        }
    }

    fn write_element(&mut self, node: &A::Handle) {
        let tag = self.adapter.tag_name(node);
        let ns = self.adapter.namespace_uri(node);
        let text_only = self.adapter.is_text_only(node);

        match self.adapter.lead_text(node) {
            Some(lead) if text_only => {
                // Decoration text stands in for the opening tag.
                self.out.push_str(&lead);
            }
            lead => {
                if let Some(lead) = lead {
                    self.out.push_str(&lead);
                }
                self.out.push('<');
                self.out.push_str(&tag);
                self.write_attributes(node);
                self.out.push('>');
            }
        }

        if is_void_element(&tag) {
            // No children, no closing tag; trailing decoration is emitted
            // unconditionally (see module docs on the asymmetry).
            if let Some(trail) = self.adapter.trail_text(node) {
                self.out.push_str(&trail);
            }
            return;
        }

        let holder = if tag == "template" && ns == NS_HTML {
            self.adapter
                .template_content(node)
                .unwrap_or_else(|| node.clone())
        } else {
            node.clone()
        };
        self.write_children(&holder);

        match self.adapter.trail_text(node) {
            Some(trail) if text_only => {
                // Decoration text stands in for the closing tag.
                self.out.push_str(&trail);
            }
            trail => {
                self.out.push_str("</");
                self.out.push_str(&tag);
                self.out.push('>');
                if let Some(trail) = trail {
                    self.out.push_str(&trail);
                }
            }
        }
    }

    fn write_attributes(&mut self, node: &A::Handle) {
        for attr in self.adapter.attributes(node) {
            if attr.hidden {
                continue;
            }

            self.out.push(' ');

            match attr.namespace.as_deref() {
                None => self.out.push_str(&attr.name),
                Some(NS_XML) => {
                    self.out.push_str("xml:");
                    self.out.push_str(&attr.name);
                }
                Some(NS_XMLNS) => {
                    if attr.name != "xmlns" {
                        self.out.push_str("xmlns:");
                    }
                    self.out.push_str(&attr.name);
                }
                Some(NS_XLINK) => {
                    self.out.push_str("xlink:");
                    self.out.push_str(&attr.name);
                }
                Some(_) => {
                    if let Some(prefix) = &attr.prefix {
                        self.out.push_str(prefix);
                        self.out.push(':');
                    }
                    self.out.push_str(&attr.name);
                }
            }

            self.out.push_str("=\"");
            self.out.push_str(&(self.escape)(&attr.value, true));
            self.out.push('"');
        }
    }

    fn write_text(&mut self, node: &A::Handle) {
        let content = self.adapter.text_content(node);

        let raw = self
            .adapter
            .parent_node(node)
            .filter(|p| self.adapter.node_kind(p) == NodeKind::Element)
            .is_some_and(|p| is_raw_text_element(&self.adapter.tag_name(&p)));

        if raw {
            self.out.push_str(&content);
        } else {
            self.out.push_str(&(self.escape)(&content, false));
        }
    }

    fn write_comment(&mut self, node: &A::Handle) {
        self.out.push_str("<!--");
        self.out.push_str(&self.adapter.comment_content(node));
        self.out.push_str("-->");
    }

    fn write_doctype(&mut self, node: &A::Handle) {
        let name = self.adapter.doctype_name(node);
        self.out.push('<');
        self.out.push_str(&doctype_content(&name, None, None));
        self.out.push('>');
    }
}
