//! Arena-backed element tree implementing [`Document`].

use std::collections::{BTreeMap, HashMap};

use super::{Document, Selector};
use crate::constants::dom::ACTIVE_CLASS;

/// Handle to an element in a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A child of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    /// Plain text.
    Text(String),
    /// Decorative icon marker, carries no text.
    Icon(String),
    /// Nested element.
    Element(NodeId),
}

/// A single element of the tree.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    children: Vec<Child>,
    visible: bool,
    progress: Option<f64>,
    removed: bool,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            visible: true,
            progress: None,
            removed: false,
        }
    }

    /// Tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Element id, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Whether the element carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Child nodes in order.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Visibility flag set through [`Document::set_visible`].
    pub const fn is_visible(&self) -> bool {
        self.visible && !self.removed
    }

    /// Progress fill width in percent, if one was set.
    pub const fn progress(&self) -> Option<f64> {
        self.progress
    }

    fn matches(&self, selector: Selector) -> bool {
        match selector {
            Selector::Class(class) => self.has_class(class),
            Selector::Attribute(name) => self.attributes.contains_key(name),
            Selector::Tags(tags) => tags.iter().any(|t| *t == self.tag),
        }
    }
}

/// In-memory document built from a deck file.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    elements: Vec<Element>,
    ids: HashMap<String, NodeId>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Create a document holding only a `body` root.
    pub fn new() -> Self {
        Self {
            elements: vec![Element::new("body")],
            ids: HashMap::new(),
        }
    }

    /// The root element.
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a new element under `parent` and return its handle.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let node = NodeId(self.elements.len());
        self.elements.push(Element::new(tag));
        if let Some(p) = self.elements.get_mut(parent.0) {
            p.children.push(Child::Element(node));
        }
        node
    }

    /// Append a text node.
    pub fn append_text(&mut self, node: NodeId, text: &str) {
        if let Some(el) = self.elements.get_mut(node.0) {
            el.children.push(Child::Text(text.to_string()));
        }
    }

    /// Append a decorative icon.
    pub fn append_icon(&mut self, node: NodeId, icon: &str) {
        if let Some(el) = self.elements.get_mut(node.0) {
            el.children.push(Child::Icon(icon.to_string()));
        }
    }

    /// Assign an id, replacing any previous owner of it.
    pub fn set_id(&mut self, node: NodeId, id: &str) {
        if let Some(el) = self.elements.get_mut(node.0) {
            el.id = Some(id.to_string());
            self.ids.insert(id.to_string(), node);
        }
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.elements.get_mut(node.0) {
            if !el.has_class(class) {
                el.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.elements.get_mut(node.0) {
            el.classes.retain(|c| c != class);
        }
    }

    /// Borrow an attached element.
    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node.0).filter(|el| !el.removed)
    }

    /// Whether the element carries `class`.
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|el| el.has_class(class))
    }

    /// Whether the element is attached and not hidden.
    pub fn is_visible(&self, node: NodeId) -> bool {
        self.element(node).is_some_and(Element::is_visible)
    }

    /// Direct child elements, skipping text and icons.
    pub fn child_elements(&self, node: NodeId) -> Vec<NodeId> {
        self.element(node)
            .map(|el| {
                el.children
                    .iter()
                    .filter_map(|c| match c {
                        Child::Element(id) => Some(*id),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether `node` lies inside the subtree rooted at `ancestor`.
    pub fn is_within(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut stack = vec![ancestor];
        while let Some(current) = stack.pop() {
            if current == node {
                return true;
            }
            stack.extend(self.child_elements(current));
        }
        false
    }

    fn detach_subtree(&mut self, node: NodeId) {
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            let Some(el) = self.elements.get_mut(current.0) else {
                continue;
            };
            el.removed = true;
            if let Some(id) = el.id.take() {
                if self.ids.get(&id) == Some(&current) {
                    self.ids.remove(&id);
                }
            }
            for child in &el.children {
                if let Child::Element(c) = child {
                    stack.push(*c);
                }
            }
        }
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let Some(el) = self.element(node) else {
            return;
        };
        for child in &el.children {
            match child {
                Child::Text(t) => out.push_str(t),
                Child::Icon(_) => {}
                Child::Element(c) => self.collect_text(*c, out),
            }
        }
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied().filter(|n| self.element(*n).is_some())
    }

    fn find_all(&self, selector: Selector) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            let Some(el) = self.element(node) else {
                continue;
            };
            if node != self.root() && el.matches(selector) {
                found.push(node);
            }
            // Reverse push keeps pre-order.
            for child in el.children.iter().rev() {
                if let Child::Element(c) = child {
                    stack.push(*c);
                }
            }
        }
        found
    }

    fn text(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        let Some(el) = self.element(node) else {
            return;
        };
        let nested: Vec<NodeId> = el
            .children
            .iter()
            .filter_map(|c| match c {
                Child::Element(id) => Some(*id),
                _ => None,
            })
            .collect();
        for child in nested {
            self.detach_subtree(child);
        }
        if let Some(el) = self.elements.get_mut(node.0) {
            el.children = vec![Child::Text(text.to_string())];
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)
            .and_then(|el| el.attributes.get(name))
            .map(String::as_str)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(el) = self.elements.get_mut(node.0).filter(|el| !el.removed) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) {
        if let Some(el) = self.elements.get_mut(node.0).filter(|el| !el.removed) {
            el.visible = visible;
        }
    }

    fn set_active(&mut self, node: NodeId, active: bool) {
        if active {
            self.add_class(node, ACTIVE_CLASS);
        } else {
            self.remove_class(node, ACTIVE_CLASS);
        }
    }

    fn set_progress(&mut self, node: NodeId, percent: f64) {
        if let Some(el) = self.elements.get_mut(node.0).filter(|el| !el.removed) {
            el.progress = Some(percent);
        }
    }

    fn icon(&self, node: NodeId) -> Option<String> {
        self.element(node)?.children.iter().find_map(|c| match c {
            Child::Icon(name) => Some(name.clone()),
            _ => None,
        })
    }

    fn prepend_icon(&mut self, node: NodeId, icon: &str) {
        if let Some(el) = self.elements.get_mut(node.0).filter(|el| !el.removed) {
            el.children.insert(0, Child::Icon(icon.to_string()));
        }
    }

    fn remove(&mut self, node: NodeId) {
        if node == self.root() || self.element(node).is_none() {
            return;
        }
        for el in &mut self.elements {
            el.children.retain(|c| *c != Child::Element(node));
        }
        self.detach_subtree(node);
    }
}
