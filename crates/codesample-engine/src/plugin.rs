//! # Plugin Surface
//!
//! The entry points a host editor wires up: the `codesample` command, its
//! toolbar button, the double-click shortcut and the form's submit action.
//!
//! The plugin never renders anything. Opening the form means returning a
//! [`DialogSpec`]; the host shows it and hands the values back to
//! [`CodeSamplePlugin::submit`].

use codesample_markup::NodeId;

use crate::dialog::{DIALOG_TITLE, DialogData, DialogSpec};
use crate::editor::Editor;
use crate::session::EditSession;

pub const COMMAND: &str = "codesample";

/// Toolbar button registration data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSpec {
    pub name: &'static str,
    pub command: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const BUTTON: ButtonSpec = ButtonSpec {
    name: COMMAND,
    command: COMMAND,
    title: DIALOG_TITLE,
    text: "Code Sample",
};

#[derive(Debug, Default)]
pub struct CodeSamplePlugin {
    editor: Editor,
}

impl CodeSamplePlugin {
    pub fn new(editor: Editor) -> Self {
        Self { editor }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn into_editor(self) -> Editor {
        self.editor
    }

    /// The form for `command`, or `None` if the command isn't ours.
    pub fn execute_command(&mut self, command: &str) -> Option<DialogSpec> {
        if command != COMMAND {
            log::debug!("ignoring unknown command {command:?}");
            return None;
        }
        Some(DialogSpec::for_selection(&mut self.editor))
    }

    /// Double-clicking inside a code block selects it and opens its form.
    pub fn on_double_click(&mut self, target: NodeId) -> Option<DialogSpec> {
        let doc = self.editor.document();
        if !doc.is_attached(target) {
            return None;
        }
        let block = crate::block::closest_code_block(doc, target)?;
        self.editor.select(block);
        Some(DialogSpec::for_selection(&mut self.editor))
    }

    /// Apply submitted form values. Returns the written block.
    pub fn submit(&mut self, data: &DialogData) -> NodeId {
        EditSession::new(&mut self.editor).commit(&data.language, &data.code, data.line_numbers)
    }
}
