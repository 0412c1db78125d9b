//! # Editor Host
//!
//! The editing surface code blocks live in: a [`Document`], a [`Selection`],
//! plugin [`Settings`], the injected [`HighlightEngine`] and an undo history.
//!
//! ## Lifecycle
//!
//! - [`Editor::set_content`]: content *enters* the surface. The markup is
//!   parsed, every code block is decorated and the undo history starts over.
//! - [`Editor::get_content`]: content *leaves* the surface. A copy of the
//!   document is canonicalized and serialized; the live document and its undo
//!   history are untouched.
//!
//! ## Transactions
//!
//! [`Editor::transact`] groups any number of mutations into one undo level.
//! Nested calls join the outer transaction, so helpers can call `transact`
//! freely. A transaction that leaves the markup unchanged records nothing.

mod undo;

use std::fmt;

use codesample_markup::{Document, NodeId, NodeKind};

use crate::canonicalize;
use crate::decorate;
use crate::dialog::LanguageOption;
use crate::highlight::{HighlightEngine, NoopHighlighter};

pub use undo::UndoManager;
use undo::Level;

/// Containers that hold inline text only; a block inserted at a caret inside
/// one of these goes after it instead.
const TEXT_BLOCKS: &[&str] = &["p", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Plugin settings, the equivalent of the host editor's init options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Custom language list; `None` uses [`crate::dialog::default_languages`].
    pub languages: Option<Vec<LanguageOption>>,
    /// Line-numbers value offered when inserting a new block.
    pub line_numbers_default: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            languages: None,
            line_numbers_default: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    /// Collapsed caret before child `index` of `parent`.
    Caret { parent: NodeId, index: usize },
    /// A whole node is selected.
    Node(NodeId),
}

pub struct Editor {
    doc: Document,
    selection: Selection,
    settings: Settings,
    highlighter: Box<dyn HighlightEngine>,
    undo: UndoManager,
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("doc", &self.doc.to_markup())
            .field("selection", &self.selection)
            .field("settings", &self.settings)
            .field("undo_depth", &self.undo.undo_depth())
            .finish_non_exhaustive()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Settings::default(), NoopHighlighter)
    }
}

impl Editor {
    pub fn new(settings: Settings, highlighter: impl HighlightEngine + 'static) -> Self {
        Self {
            doc: Document::new(),
            selection: Selection::None,
            settings,
            highlighter: Box::new(highlighter),
            undo: UndoManager::default(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Direct access for edits made outside the plugin (typing, pasting).
    /// Such edits are not recorded in the undo history unless wrapped in
    /// [`Editor::transact`].
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn undo_manager(&self) -> &UndoManager {
        &self.undo
    }

    pub(crate) fn highlight_parts(&mut self) -> (&mut Document, &dyn HighlightEngine) {
        (&mut self.doc, self.highlighter.as_ref())
    }

    /// Content entering the editing surface: parse `markup` as the new
    /// document, decorate every code block, then reset history and
    /// selection. The decorated document is the first state undo can reach.
    pub fn set_content(&mut self, markup: &str) {
        self.doc = Document::parse(markup);
        self.selection = Selection::None;
        let decorated = decorate::decorate(self);
        self.undo.clear();
        log::debug!("set_content decorated {decorated} code block(s)");
    }

    /// Content leaving the editing surface: the canonical serialization of
    /// the current document.
    pub fn get_content(&self) -> String {
        let mut copy = self.doc.clone();
        let count = canonicalize::canonicalize_document(&mut copy);
        log::debug!("get_content canonicalized {count} code block(s)");
        copy.to_markup()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn select(&mut self, node: NodeId) {
        self.selection = Selection::Node(node);
    }

    pub fn set_caret(&mut self, parent: NodeId, index: usize) {
        self.selection = Selection::Caret { parent, index };
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    /// The node the selection sits in: the selected node, or the caret's
    /// container.
    pub fn selected_node(&self) -> Option<NodeId> {
        match self.selection {
            Selection::None => None,
            Selection::Caret { parent, .. } => Some(parent),
            Selection::Node(node) => Some(node),
        }
    }

    /// Place a detached block-level `node` at the selection: at the caret,
    /// after a selected node, or at the end of the document. Blocks never
    /// land inside a paragraph or heading; they go after it instead.
    pub fn insert_block(&mut self, node: NodeId) {
        let root = self.doc.root();
        match self.selection {
            Selection::Caret { parent, index } if self.doc.is_attached(parent) => {
                if let Some(text_block) = self.enclosing_text_block(parent) {
                    self.doc.insert_after(text_block, node);
                    return;
                }
                match self.doc.kind(parent) {
                    NodeKind::Text(_) => self.split_text_at(parent, index, node),
                    NodeKind::Comment(_) => self.doc.insert_after(parent, node),
                    NodeKind::Root | NodeKind::Element(_) => {
                        self.doc.insert_child(parent, index, node)
                    }
                }
            }
            Selection::Node(selected) if selected != root && self.doc.is_attached(selected) => {
                let anchor = self.enclosing_text_block(selected).unwrap_or(selected);
                self.doc.insert_after(anchor, node);
            }
            _ => self.doc.append_child(root, node),
        }
    }

    fn enclosing_text_block(&self, node: NodeId) -> Option<NodeId> {
        self.doc
            .self_and_ancestors(node)
            .find(|&n| TEXT_BLOCKS.iter().any(|t| self.doc.is_element(n, t)))
    }

    /// Insert `node` at character `index` of a text node, splitting it.
    fn split_text_at(&mut self, text_node: NodeId, index: usize, node: NodeId) {
        let text = self.doc.text_content(text_node);
        let at = text.char_indices().nth(index).map_or(text.len(), |(i, _)| i);

        if at == 0 {
            match (self.doc.parent(text_node), self.doc.index_in_parent(text_node)) {
                (Some(parent), Some(i)) => self.doc.insert_child(parent, i, node),
                _ => self.doc.insert_after(text_node, node),
            }
            return;
        }
        if at < text.len() {
            let tail = self.doc.create_text(&text[at..]);
            self.doc.set_text_content(text_node, &text[..at]);
            self.doc.insert_after(text_node, tail);
        }
        self.doc.insert_after(text_node, node);
    }

    /// Run `f` as one atomic, undoable step.
    pub fn transact<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        if self.undo.in_transaction() {
            return f(self);
        }

        let before = Level {
            doc: self.doc.clone(),
            selection: self.selection,
        };
        let before_markup = before.doc.to_markup();

        self.undo.begin();
        let result = f(self);
        self.undo.end();

        if self.doc.to_markup() != before_markup {
            self.undo.record(before);
        }
        result
    }

    /// Step back one transaction. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let current = self.take_level();
        match self.undo.undo(current) {
            Ok(previous) => {
                self.restore_level(previous);
                true
            }
            Err(current) => {
                self.restore_level(current);
                false
            }
        }
    }

    /// Re-apply an undone transaction. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let current = self.take_level();
        match self.undo.redo(current) {
            Ok(next) => {
                self.restore_level(next);
                true
            }
            Err(current) => {
                self.restore_level(current);
                false
            }
        }
    }

    fn take_level(&mut self) -> Level {
        Level {
            doc: std::mem::take(&mut self.doc),
            selection: self.selection,
        }
    }

    fn restore_level(&mut self, level: Level) {
        self.doc = level.doc;
        self.selection = level.selection;
    }
}
