//! The tree-adapter seam.
//!
//! The serializer never touches a concrete tree type: everything it needs
//! (child enumeration, node kinds, names, attributes, decoration fields)
//! goes through [`TreeAdapter`]. [`DomAdapter`] is the supplied
//! implementation for the crate's own DOM; callers with a different tree
//! representation implement the trait themselves.

use crate::dom::{Handle, NodeData};

/// The closed set of node kinds the serializer dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Container roots (documents, fragments). Never emitted when they
    /// appear in a child list.
    Document,
    Element,
    Text,
    Comment,
    Doctype,
}

/// An attribute as the serializer sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct AttrEntry {
    pub prefix: Option<String>,
    pub namespace: Option<String>,
    pub name: String,
    pub value: String,
    /// Hidden attributes stay in the model but are never rendered.
    pub hidden: bool,
}

/// Read access to a markup tree, plus write access to the decoration
/// fields the redistribution pass rewrites.
///
/// Accessors are total: calling an element accessor on a non-element
/// returns an empty/absent value rather than failing, and the decoration
/// setters are no-ops on node kinds that carry no decoration.
pub trait TreeAdapter {
    type Handle: Clone;

    /// Ordered child list; render order.
    fn child_nodes(&self, node: &Self::Handle) -> Vec<Self::Handle>;

    fn node_kind(&self, node: &Self::Handle) -> NodeKind;

    /// Local tag name of an element; empty for other kinds.
    fn tag_name(&self, node: &Self::Handle) -> String;

    /// Namespace URI of an element; empty for other kinds.
    fn namespace_uri(&self, node: &Self::Handle) -> String;

    fn attributes(&self, node: &Self::Handle) -> Vec<AttrEntry>;

    fn text_content(&self, node: &Self::Handle) -> String;

    fn comment_content(&self, node: &Self::Handle) -> String;

    fn doctype_name(&self, node: &Self::Handle) -> String;

    fn parent_node(&self, node: &Self::Handle) -> Option<Self::Handle>;

    /// The document fragment holding a `<template>` element's parsed
    /// contents, when the tree tracks one.
    fn template_content(&self, node: &Self::Handle) -> Option<Self::Handle>;

    fn lead_text(&self, node: &Self::Handle) -> Option<String>;

    fn trail_text(&self, node: &Self::Handle) -> Option<String>;

    fn is_text_only(&self, node: &Self::Handle) -> bool;

    fn set_lead_text(&self, node: &Self::Handle, text: Option<String>);

    fn set_trail_text(&self, node: &Self::Handle, text: Option<String>);
}

/// [`TreeAdapter`] over the crate's decorated DOM.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomAdapter;

impl TreeAdapter for DomAdapter {
    type Handle = Handle;

    fn child_nodes(&self, node: &Handle) -> Vec<Handle> {
        node.children.borrow().clone()
    }

    fn node_kind(&self, node: &Handle) -> NodeKind {
        match &node.data {
            NodeData::Document | NodeData::Fragment => NodeKind::Document,
            NodeData::Element { .. } => NodeKind::Element,
            NodeData::Text { .. } => NodeKind::Text,
            NodeData::Comment { .. } => NodeKind::Comment,
            NodeData::Doctype { .. } => NodeKind::Doctype,
        }
    }

    fn tag_name(&self, node: &Handle) -> String {
        match &node.data {
            NodeData::Element { name, .. } => name.local.to_string(),
            _ => String::new(),
        }
    }

    fn namespace_uri(&self, node: &Handle) -> String {
        match &node.data {
            NodeData::Element { name, .. } => name.ns.to_string(),
            _ => String::new(),
        }
    }

    fn attributes(&self, node: &Handle) -> Vec<AttrEntry> {
        match &node.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .map(|a| AttrEntry {
                    prefix: a.name.prefix.as_ref().map(|p| p.to_string()),
                    namespace: (!a.name.ns.is_empty()).then(|| a.name.ns.to_string()),
                    name: a.name.local.to_string(),
                    value: a.value.clone(),
                    hidden: a.hidden,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    fn text_content(&self, node: &Handle) -> String {
        match &node.data {
            NodeData::Text { contents } => contents.borrow().clone(),
            _ => String::new(),
        }
    }

    fn comment_content(&self, node: &Handle) -> String {
        match &node.data {
            NodeData::Comment { contents } => contents.clone(),
            _ => String::new(),
        }
    }

    fn doctype_name(&self, node: &Handle) -> String {
        match &node.data {
            NodeData::Doctype { name, .. } => name.clone(),
            _ => String::new(),
        }
    }

    fn parent_node(&self, node: &Handle) -> Option<Handle> {
        node.parent_node()
    }

    fn template_content(&self, node: &Handle) -> Option<Handle> {
        match &node.data {
            NodeData::Element {
                template_contents, ..
            } => template_contents.borrow().clone(),
            _ => None,
        }
    }

    fn lead_text(&self, node: &Handle) -> Option<String> {
        node.lead_text()
    }

    fn trail_text(&self, node: &Handle) -> Option<String> {
        node.trail_text()
    }

    fn is_text_only(&self, node: &Handle) -> bool {
        node.is_text_only()
    }

    fn set_lead_text(&self, node: &Handle, text: Option<String>) {
        node.set_lead_text(text);
    }

    fn set_trail_text(&self, node: &Handle, text: Option<String>) {
        node.set_trail_text(text);
    }
}
