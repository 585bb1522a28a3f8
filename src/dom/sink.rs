//! html5ever TreeSink implementation for the decorated DOM.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use html5ever::tendril::StrTendril;
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{Attribute as HtmlAttribute, QualName};
use html5ever::{local_name, namespace_url, ns};

use super::{Attribute, Decor, Handle, Node, NodeData};

/// TreeSink implementation that builds a decorated DOM tree.
///
/// Methods take `&self` per the html5ever trait, so mutation goes through
/// the interior mutability already present on [`Node`].
pub struct DomSink {
    document: Handle,
    quirks_mode: Cell<QuirksMode>,
}

impl Default for DomSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DomSink {
    pub fn new() -> Self {
        Self {
            document: Node::new(NodeData::Document),
            quirks_mode: Cell::new(QuirksMode::NoQuirks),
        }
    }

    /// The document node this sink has been building.
    pub fn document(&self) -> Handle {
        self.document.clone()
    }

    fn append_text(&self, parent: &Handle, text: &str) {
        // Merge with a preceding text node so tokenizer chunking does not
        // fragment the tree.
        if let Some(last) = parent.children.borrow().last()
            && let NodeData::Text { contents } = &last.data
        {
            contents.borrow_mut().push_str(text);
            return;
        }
        Node::append(parent, Node::text(text));
    }
}

impl TreeSink for DomSink {
    type Handle = Handle;
    type Output = Self;
    type ElemName<'a>
        = &'a QualName
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        self
    }

    fn parse_error(&self, _msg: std::borrow::Cow<'static, str>) {
        // Ignore parse errors - be lenient like browsers
    }

    fn get_document(&self) -> Self::Handle {
        self.document.clone()
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        static EMPTY: QualName = QualName {
            prefix: None,
            ns: ns!(),
            local: local_name!(""),
        };

        match &target.data {
            NodeData::Element { name, .. } => name,
            _ => &EMPTY,
        }
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<HtmlAttribute>,
        flags: ElementFlags,
    ) -> Self::Handle {
        let converted_attrs: Vec<Attribute> = attrs
            .into_iter()
            .map(|a| Attribute {
                name: a.name,
                value: a.value.to_string(),
                hidden: false,
            })
            .collect();

        Node::new(NodeData::Element {
            name,
            attrs: RefCell::new(converted_attrs),
            template_contents: RefCell::new(if flags.template {
                Some(Node::new(NodeData::Fragment))
            } else {
                None
            }),
            decor: RefCell::new(Decor::default()),
        })
    }

    fn create_comment(&self, text: StrTendril) -> Self::Handle {
        Node::new(NodeData::Comment {
            contents: text.to_string(),
        })
    }

    fn create_pi(&self, _target: StrTendril, data: StrTendril) -> Self::Handle {
        // Processing instructions only arise from XML-ish input; coerce to
        // a comment like the rest of the lenient pipeline.
        Node::new(NodeData::Comment {
            contents: data.to_string(),
        })
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        match child {
            NodeOrText::AppendNode(node) => Node::append(parent, node),
            NodeOrText::AppendText(text) => self.append_text(parent, &text),
        }
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        if element.parent_node().is_some() {
            self.append_before_sibling(element, child);
        } else {
            self.append(prev_element, child);
        }
    }

    fn append_doctype_to_document(
        &self,
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    ) {
        let doctype = Node::new(NodeData::Doctype {
            name: name.to_string(),
            public_id: public_id.to_string(),
            system_id: system_id.to_string(),
        });
        Node::append(&self.document, doctype);
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        if let NodeData::Element {
            template_contents, ..
        } = &target.data
            && let Some(contents) = template_contents.borrow().as_ref()
        {
            return contents.clone();
        }
        target.clone()
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        Rc::ptr_eq(x, y)
    }

    fn set_quirks_mode(&self, mode: QuirksMode) {
        self.quirks_mode.set(mode);
    }

    fn append_before_sibling(&self, sibling: &Self::Handle, new_node: NodeOrText<Self::Handle>) {
        let Some(parent) = sibling.parent_node() else {
            return;
        };

        let index = parent
            .children
            .borrow()
            .iter()
            .position(|c| Rc::ptr_eq(c, sibling));
        let Some(index) = index else {
            return;
        };

        let node = match new_node {
            NodeOrText::AppendNode(node) => node,
            NodeOrText::AppendText(text) => {
                // Merge with a preceding text sibling when possible.
                if index > 0 {
                    let children = parent.children.borrow();
                    if let NodeData::Text { contents } = &children[index - 1].data {
                        contents.borrow_mut().push_str(&text);
                        return;
                    }
                }
                Node::text(&text)
            }
        };

        *node.parent.borrow_mut() = Some(Rc::downgrade(&parent));
        parent.children.borrow_mut().insert(index, node);
    }

    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<HtmlAttribute>) {
        if let NodeData::Element {
            attrs: existing, ..
        } = &target.data
        {
            let mut existing = existing.borrow_mut();
            for attr in attrs {
                if !existing.iter().any(|a| a.name == attr.name) {
                    existing.push(Attribute {
                        name: attr.name,
                        value: attr.value.to_string(),
                        hidden: false,
                    });
                }
            }
        }
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        let Some(parent) = target.parent_node() else {
            return;
        };
        parent
            .children
            .borrow_mut()
            .retain(|c| !Rc::ptr_eq(c, target));
        *target.parent.borrow_mut() = None;
    }

    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle) {
        let children = std::mem::take(&mut *node.children.borrow_mut());
        for child in &children {
            *child.parent.borrow_mut() = Some(Rc::downgrade(new_parent));
        }
        new_parent.children.borrow_mut().extend(children);
    }
}
