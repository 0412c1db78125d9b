//! # Edit Session
//!
//! Bridges the edit form and the document. The read side fills the form from
//! the current selection; [`EditSession::commit`] writes the form back as one
//! undoable step and leaves the selection on the resulting block.
//!
//! ```
//! use codesample_engine::{Editor, EditSession};
//!
//! let mut editor = Editor::default();
//! let mut session = EditSession::new(&mut editor);
//! assert_eq!(session.current_language(), "");
//! assert!(session.current_line_numbers());
//!
//! session.commit("python", "print(\"hi\")", true);
//! assert_eq!(session.current_language(), "python");
//! ```

use codesample_markup::{NodeId, escape};

use crate::block::{BLOCK_ELEMENT, BlockState, CodeClass, closest_code_block, has_line_numbers};
use crate::decorate;
use crate::editor::Editor;

/// The code block the selection is on or inside, if any.
pub fn selected_code_block(editor: &Editor) -> Option<NodeId> {
    let node = editor.selected_node()?;
    let doc = editor.document();
    if !doc.is_attached(node) {
        return None;
    }
    closest_code_block(doc, node)
}

pub struct EditSession<'e> {
    editor: &'e mut Editor,
}

impl<'e> EditSession<'e> {
    pub fn new(editor: &'e mut Editor) -> Self {
        Self { editor }
    }

    pub fn selected(&self) -> Option<NodeId> {
        selected_code_block(self.editor)
    }

    /// Language tag of the selected block, or `""`.
    pub fn current_language(&self) -> String {
        self.selected()
            .and_then(|node| CodeClass::parse(self.editor.document().class_name(node)))
            .map(|class| class.language().to_string())
            .unwrap_or_default()
    }

    /// Plain text of the selected block, or `""`.
    pub fn current_code(&self) -> String {
        self.selected()
            .map(|node| self.editor.document().text_content(node))
            .unwrap_or_default()
    }

    /// Line-numbers flag of the selected block. With nothing selected this is
    /// the insertion default from [`crate::editor::Settings`].
    pub fn current_line_numbers(&self) -> bool {
        match self.selected() {
            Some(node) => has_line_numbers(self.editor.document(), node),
            None => self.editor.settings().line_numbers_default,
        }
    }

    /// Write `code` into the selected block, or insert a new block at the
    /// caret. Returns the block, which is also left selected.
    pub fn commit(&mut self, language: &str, code: &str, line_numbers: bool) -> NodeId {
        let class = CodeClass::new(language, line_numbers).serialize();
        let escaped = escape::encode(code);

        self.editor.transact(|editor| {
            let node = match selected_code_block(editor) {
                Some(node) => {
                    log::debug!("updating code block as {class:?}");
                    let doc = editor.document_mut();
                    doc.set_class_name(node, &class);
                    doc.set_inner_markup(node, &escaped);
                    node
                }
                None => {
                    log::debug!("inserting code block as {class:?}");
                    let doc = editor.document_mut();
                    let node = doc.create_element(BLOCK_ELEMENT);
                    doc.set_class_name(node, &class);
                    doc.set_inner_markup(node, &escaped);
                    editor.insert_block(node);
                    node
                }
            };

            BlockState::Decorated.mark(editor.document_mut(), node);
            let (doc, engine) = editor.highlight_parts();
            decorate::wrap_and_highlight(doc, engine, node);
            editor.select(node);
            node
        })
    }
}
