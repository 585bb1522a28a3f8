//! Decorated DOM tree.
//!
//! An `Rc`-based node tree in the rcdom mold, with two additions the
//! serializer depends on:
//!
//! - elements carry [`Decor`] fields: opaque template-directive text that
//!   is re-emitted immediately outside the element's tag boundaries;
//! - attributes carry a `hidden` flag that keeps them in the model while
//!   suppressing them from serialized output.
//!
//! Nodes are created by the parser (see [`crate::parse`]); decoration
//! fields may be set by any caller between parse and serialize.

pub mod sink;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use html5ever::QualName;
use html5ever::{namespace_url, ns};

/// Shared reference to a node.
pub type Handle = Rc<Node>;

/// Weak reference used for parent back-links.
pub type WeakHandle = Weak<Node>;

/// A single node in the tree.
pub struct Node {
    pub data: NodeData,
    /// Parent back-reference. Used to inspect the parent's tag name during
    /// text serialization, never to mutate.
    pub parent: RefCell<Option<WeakHandle>>,
    /// Ordered child list; order is render order.
    pub children: RefCell<Vec<Handle>>,
}

/// The closed set of node kinds this crate models.
pub enum NodeData {
    /// Root of a parsed document.
    Document,
    /// Root of a parsed fragment (also used for template contents).
    Fragment,
    Doctype {
        name: String,
        public_id: String,
        system_id: String,
    },
    Text {
        contents: RefCell<String>,
    },
    Comment {
        contents: String,
    },
    Element {
        name: QualName,
        attrs: RefCell<Vec<Attribute>>,
        /// Contents of a `<template>` element, parsed into a separate
        /// fragment per the HTML parsing algorithm.
        template_contents: RefCell<Option<Handle>>,
        decor: RefCell<Decor>,
    },
}

/// An element attribute. `hidden` attributes stay in the model but never
/// reach serialized markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
    pub hidden: bool,
}

/// Decoration text attached to an element.
///
/// `lead` is emitted immediately before the opening tag, `trail`
/// immediately after the closing tag. When `text_only` is set, the
/// decoration text replaces the structural tags instead of surrounding
/// them. The strings are opaque: the serializer positions them but never
/// interprets their syntax.
///
/// Invariant: `lead`/`trail` are either absent or non-empty. The setters
/// on [`Node`] normalize empty strings to absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decor {
    pub lead: Option<String>,
    pub trail: Option<String>,
    pub text_only: bool,
}

impl Node {
    /// Create a new detached node.
    pub fn new(data: NodeData) -> Handle {
        Rc::new(Node {
            data,
            parent: RefCell::new(None),
            children: RefCell::new(Vec::new()),
        })
    }

    /// Create a detached element in the HTML namespace with no attributes.
    pub fn element(tag: &str) -> Handle {
        Node::new(NodeData::Element {
            name: QualName::new(None, ns!(html), tag.into()),
            attrs: RefCell::new(Vec::new()),
            template_contents: RefCell::new(None),
            decor: RefCell::new(Decor::default()),
        })
    }

    /// Create a detached text node.
    pub fn text(contents: &str) -> Handle {
        Node::new(NodeData::Text {
            contents: RefCell::new(contents.to_string()),
        })
    }

    /// Append `child` to `parent`, updating the parent back-link.
    pub fn append(parent: &Handle, child: Handle) {
        *child.parent.borrow_mut() = Some(Rc::downgrade(parent));
        parent.children.borrow_mut().push(child);
    }

    /// The parent node, if it is still alive.
    pub fn parent_node(&self) -> Option<Handle> {
        self.parent.borrow().as_ref().and_then(Weak::upgrade)
    }

    fn decor_field(&self) -> Option<&RefCell<Decor>> {
        match &self.data {
            NodeData::Element { decor, .. } => Some(decor),
            _ => None,
        }
    }

    /// Decoration text emitted before the opening tag, if any.
    pub fn lead_text(&self) -> Option<String> {
        self.decor_field().and_then(|d| d.borrow().lead.clone())
    }

    /// Decoration text emitted after the closing tag, if any.
    pub fn trail_text(&self) -> Option<String> {
        self.decor_field().and_then(|d| d.borrow().trail.clone())
    }

    /// Whether decoration text replaces the structural tags.
    pub fn is_text_only(&self) -> bool {
        self.decor_field().is_some_and(|d| d.borrow().text_only)
    }

    /// Set or clear the leading decoration text. Empty strings are
    /// normalized to absent. No-op on non-element nodes.
    pub fn set_lead_text(&self, text: Option<String>) {
        if let Some(decor) = self.decor_field() {
            decor.borrow_mut().lead = text.filter(|t| !t.is_empty());
        }
    }

    /// Set or clear the trailing decoration text. Empty strings are
    /// normalized to absent. No-op on non-element nodes.
    pub fn set_trail_text(&self, text: Option<String>) {
        if let Some(decor) = self.decor_field() {
            decor.borrow_mut().trail = text.filter(|t| !t.is_empty());
        }
    }

    /// Set whether decoration text replaces the structural tags. No-op on
    /// non-element nodes.
    pub fn set_text_only(&self, text_only: bool) {
        if let Some(decor) = self.decor_field() {
            decor.borrow_mut().text_only = text_only;
        }
    }

    /// Append an un-namespaced attribute to an element. No-op on
    /// non-element nodes.
    pub fn add_attribute(&self, name: &str, value: &str) {
        if let NodeData::Element { attrs, .. } = &self.data {
            attrs.borrow_mut().push(Attribute {
                name: QualName::new(None, ns!(), name.into()),
                value: value.to_string(),
                hidden: false,
            });
        }
    }

    /// Mark every attribute with the given local name as hidden. Returns
    /// true if any attribute matched.
    pub fn hide_attribute(&self, name: &str) -> bool {
        let mut hid = false;
        if let NodeData::Element { attrs, .. } = &self.data {
            for attr in attrs.borrow_mut().iter_mut() {
                if attr.name.local.as_ref() == name {
                    attr.hidden = true;
                    hid = true;
                }
            }
        }
        hid
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            NodeData::Document => write!(f, "Document"),
            NodeData::Fragment => write!(f, "Fragment"),
            NodeData::Doctype { name, .. } => write!(f, "Doctype({name})"),
            NodeData::Text { contents } => write!(f, "Text({:?})", contents.borrow()),
            NodeData::Comment { contents } => write!(f, "Comment({contents:?})"),
            NodeData::Element { name, .. } => write!(f, "Element({})", name.local),
        }
    }
}

/// Get the first element with the given local name, depth-first.
pub fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &handle.data
        && name.local.as_ref() == tag
    {
        return Some(handle.clone());
    }

    for child in handle.children.borrow().iter() {
        if let Some(found) = find_element(child, tag) {
            return Some(found);
        }
    }

    None
}

/// Get text content from a node and its descendants (ignoring tags).
pub fn text_content(handle: &Handle) -> String {
    let mut text = String::new();
    collect_text(handle, &mut text);
    text
}

fn collect_text(handle: &Handle, text: &mut String) {
    match &handle.data {
        NodeData::Text { contents } => text.push_str(&contents.borrow()),
        _ => {
            for child in handle.children.borrow().iter() {
                collect_text(child, text);
            }
        }
    }
}
