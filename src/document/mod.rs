//! Document capability interface.
//!
//! The navigator, translator and prompt form only ever talk to a [`Document`].
//! The terminal front end backs it with [`MemoryDocument`]; tests use the same
//! type headlessly.

mod memory;

pub use memory::{Child, Element, MemoryDocument, NodeId};

/// Query used by [`Document::find_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Elements carrying the given class.
    Class(&'static str),
    /// Elements carrying the given attribute, whatever its value.
    Attribute(&'static str),
    /// Elements whose tag is one of the given names.
    Tags(&'static [&'static str]),
}

/// Operations the view logic needs from its host document.
///
/// Lookups that miss return `None` or an empty list; mutations on unknown
/// nodes are silently ignored.
pub trait Document {
    /// Handle to an element of this document.
    type Node: Copy + Eq + std::fmt::Debug;

    /// Find the element with the given id.
    fn find_by_id(&self, id: &str) -> Option<Self::Node>;

    /// All elements matching `selector`, in document order.
    fn find_all(&self, selector: Selector) -> Vec<Self::Node>;

    /// Concatenated descendant text.
    fn text(&self, node: Self::Node) -> String;

    /// Replace every child of `node` with a single text node.
    fn set_text(&mut self, node: Self::Node, text: &str);

    /// Value of an attribute.
    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;

    /// Set or overwrite an attribute.
    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    /// Show or hide an element.
    fn set_visible(&mut self, node: Self::Node, visible: bool);

    /// Add or remove the active marker on a panel.
    fn set_active(&mut self, node: Self::Node, active: bool);

    /// Set the fill width of a progress element, in percent.
    fn set_progress(&mut self, node: Self::Node, percent: f64);

    /// First decorative icon among the element's direct children.
    fn icon(&self, node: Self::Node) -> Option<String>;

    /// Insert a decorative icon as the element's first child.
    fn prepend_icon(&mut self, node: Self::Node, icon: &str);

    /// Detach an element from the document.
    fn remove(&mut self, node: Self::Node);
}
