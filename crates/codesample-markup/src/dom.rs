//! # Document Tree
//!
//! An arena-allocated, mutable markup tree. Nodes are addressed by [`NodeId`]
//! handles that stay valid after a node has been detached. Cloning a document
//! preserves every handle, which is what lets an editor keep undo levels as
//! whole-document copies and still restore a selection by id.
//!
//! Content dropped by [`Document::remove`], [`Document::clear_children`],
//! [`Document::set_text_content`] or [`Document::set_inner_markup`] goes back
//! to the arena and its slots are reused. Handles to dropped nodes become
//! stale; [`Document::contains`] tells them apart from live ones.

use crate::{parser, serialize};

/// Handle to a node inside a [`Document`]. The generation tells a reused
/// slot apart from the node that used to live there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

/// A single `name="value"` pair on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Element name plus attributes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attrs: Vec<Attribute>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            attrs: Vec::new(),
        }
    }

    /// Lower-cased element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .map(|a| a.value.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self
            .attrs
            .iter_mut()
            .find(|a| a.name.eq_ignore_ascii_case(name))
        {
            Some(existing) => existing.value = value.to_string(),
            None => self.attrs.push(Attribute {
                name: name.to_ascii_lowercase(),
                value: value.to_string(),
            }),
        }
    }

    /// Returns true when the attribute was present.
    pub fn remove_attr(&mut self, name: &str) -> bool {
        let before = self.attrs.len();
        self.attrs.retain(|a| !a.name.eq_ignore_ascii_case(name));
        self.attrs.len() != before
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Element(Element),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    generation: u32,
}

/// Elements that never take children and have no end tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name))
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    free: Vec<usize>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                kind: NodeKind::Root,
                parent: None,
                children: Vec::new(),
                generation: 0,
            }],
            free: Vec::new(),
        }
    }

    /// Parse a markup fragment into a fresh document.
    pub fn parse(markup: &str) -> Self {
        let mut doc = Self::new();
        let root = doc.root();
        parser::parse_into(&mut doc, root, markup);
        doc
    }

    pub fn root(&self) -> NodeId {
        NodeId {
            index: 0,
            generation: 0,
        }
    }

    /// False for handles whose node has been dropped.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.index)
            .is_some_and(|n| n.generation == id.generation)
    }

    /// Arena slots in use or waiting for reuse.
    pub fn node_slots(&self) -> usize {
        self.nodes.len()
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index].kind
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id.index].kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[id.index].kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Element name, `None` for text, comment and root nodes.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(Element::name)
    }

    pub fn is_element(&self, id: NodeId, name: &str) -> bool {
        self.name(id).is_some_and(|n| n.eq_ignore_ascii_case(name))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index].children
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    /// True when the node is reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.contains(id) && self.self_and_ancestors(id).any(|n| n == self.root())
    }

    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.push(NodeKind::Element(Element::new(name)))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Comment(text.to_string()))
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.nodes[index];
            slot.kind = kind;
            return NodeId {
                index,
                generation: slot.generation,
            };
        }
        let id = NodeId {
            index: self.nodes.len(),
            generation: 0,
        };
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
            generation: 0,
        });
        id
    }

    /// Drop `id` and its subtree. Their handles go stale and their slots are
    /// reused. No-op on the root and on stale handles.
    pub fn remove(&mut self, id: NodeId) {
        if id == self.root() || !self.contains(id) {
            return;
        }
        self.detach(id);
        self.release(id);
    }

    fn release(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            let slot = &mut self.nodes[node.index];
            stack.append(&mut slot.children);
            slot.parent = None;
            slot.kind = NodeKind::Text(String::new());
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(node.index);
        }
    }

    /// Remove a node from its parent. The node and its subtree stay addressable.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.index].parent.take() {
            self.nodes[parent.index].children.retain(|&c| c != id);
        }
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.index].parent = Some(parent);
        self.nodes[parent.index].children.push(child);
    }

    /// Insert `child` at `index` among `parent`'s children, clamped to the end.
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) {
        self.detach(child);
        let siblings = &mut self.nodes[parent.index].children;
        let index = index.min(siblings.len());
        siblings.insert(index, child);
        self.nodes[child.index].parent = Some(parent);
    }

    /// Insert `node` directly after `reference`. Appends to the root when
    /// `reference` is detached.
    pub fn insert_after(&mut self, reference: NodeId, node: NodeId) {
        match self.parent(reference) {
            Some(parent) => {
                let index = self
                    .index_in_parent(reference)
                    .map_or(usize::MAX, |i| i + 1);
                self.insert_child(parent, index, node);
            }
            None => self.append_child(self.root(), node),
        }
    }

    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&c| c == id)
    }

    /// Put `replacement` where `old` was. Returns false when `old` has no parent.
    pub fn replace_node(&mut self, old: NodeId, replacement: NodeId) -> bool {
        let (Some(parent), Some(index)) = (self.parent(old), self.index_in_parent(old)) else {
            return false;
        };
        self.detach(old);
        self.insert_child(parent, index, replacement);
        true
    }

    /// Drop every child of `id`; see [`Document::remove`].
    pub fn clear_children(&mut self, id: NodeId) {
        let children = std::mem::take(&mut self.nodes[id.index].children);
        for child in children {
            self.release(child);
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.attr(name))
    }

    /// No-op on non-element nodes.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(element) = self.element_mut(id) {
            element.set_attr(name, value);
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> bool {
        self.element_mut(id).is_some_and(|e| e.remove_attr(name))
    }

    /// Raw `class` attribute, empty when absent.
    pub fn class_name(&self, id: NodeId) -> &str {
        self.attr(id, "class").unwrap_or("")
    }

    pub fn set_class_name(&mut self, id: NodeId, class: &str) {
        self.set_attr(id, "class", class);
    }

    /// Concatenated text of every descendant text node, in document order.
    /// Comments do not contribute.
    pub fn text_content(&self, id: NodeId) -> String {
        match self.kind(id) {
            NodeKind::Text(text) | NodeKind::Comment(text) => text.clone(),
            NodeKind::Root | NodeKind::Element(_) => self
                .descendants(id)
                .filter_map(|n| match self.kind(n) {
                    NodeKind::Text(text) => Some(text.as_str()),
                    _ => None,
                })
                .collect(),
        }
    }

    /// Replace all children with a single text node (none for empty text).
    /// An existing sole text child is updated in place.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) {
        if let NodeKind::Text(existing) | NodeKind::Comment(existing) = &mut self.nodes[id.index].kind {
            *existing = text.to_string();
            return;
        }
        let sole_text = match self.children(id) {
            [only] if matches!(self.kind(*only), NodeKind::Text(_)) => Some(*only),
            _ => None,
        };
        if !text.is_empty()
            && let Some(only) = sole_text
        {
            self.set_text_content(only, text);
            return;
        }
        self.clear_children(id);
        if !text.is_empty() {
            let text_node = self.create_text(text);
            self.append_child(id, text_node);
        }
    }

    /// Replace all children with the nodes parsed from `markup`.
    pub fn set_inner_markup(&mut self, id: NodeId, markup: &str) {
        self.clear_children(id);
        parser::parse_into(self, id, markup);
    }

    pub fn inner_markup(&self, id: NodeId) -> String {
        let mut out = String::new();
        for &child in self.children(id) {
            serialize::write_node(self, child, &mut out);
        }
        out
    }

    pub fn outer_markup(&self, id: NodeId) -> String {
        let mut out = String::new();
        serialize::write_node(self, id, &mut out);
        out
    }

    /// Serialize the whole document.
    pub fn to_markup(&self) -> String {
        self.inner_markup(self.root())
    }

    /// Pre-order walk over the subtree below `id`, excluding `id` itself.
    ///
    /// The iterator is lazy and cheap to clone; cloning it restarts nothing,
    /// calling `descendants` again restarts the walk.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            doc: self,
            stack: self.children(id).iter().rev().copied().collect(),
        }
    }

    /// `id`, then its parent, up to the root (or the top of a detached subtree).
    pub fn self_and_ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |&n| self.parent(n))
    }

    /// Descendant elements named `name`, in document order.
    pub fn elements_by_name<'a>(
        &'a self,
        id: NodeId,
        name: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.descendants(id).filter(move |&n| self.is_element(n, name))
    }
}

/// Lazy pre-order iterator returned by [`Document::descendants`].
#[derive(Clone)]
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let next = self.stack.pop()?;
        self.stack
            .extend(self.doc.children(next).iter().rev().copied());
        Some(next)
    }
}
