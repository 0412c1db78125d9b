//! The edit form as plain data.
//!
//! Rendering belongs to whichever front end hosts the editor; this module
//! only describes the form and carries its values in and out.

use serde::{Deserialize, Serialize};

use crate::editor::Editor;
use crate::session::EditSession;

pub const DIALOG_TITLE: &str = "Insert/Edit code sample";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    pub text: String,
    pub value: String,
}

impl LanguageOption {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

/// Languages offered when the settings don't name any.
pub fn default_languages() -> Vec<LanguageOption> {
    [
        ("HTML/XML", "markup"),
        ("JavaScript", "javascript"),
        ("CSS", "css"),
        ("PHP", "php"),
        ("Ruby", "ruby"),
        ("Python", "python"),
        ("Java", "java"),
        ("C", "c"),
        ("C#", "csharp"),
        ("C++", "cpp"),
    ]
    .into_iter()
    .map(|(text, value)| LanguageOption::new(text, value))
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DialogField {
    SelectBox {
        name: String,
        label: String,
        items: Vec<LanguageOption>,
    },
    Checkbox {
        name: String,
        label: String,
    },
    TextArea {
        name: String,
        label: String,
    },
}

impl DialogField {
    pub fn name(&self) -> &str {
        match self {
            Self::SelectBox { name, .. } | Self::Checkbox { name, .. } | Self::TextArea { name, .. } => {
                name
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonKind {
    Cancel,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogButton {
    pub kind: ButtonKind,
    pub text: String,
    pub primary: bool,
}

/// Values flowing into and out of the form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DialogData {
    pub language: String,
    pub line_numbers: bool,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogSpec {
    pub title: String,
    pub fields: Vec<DialogField>,
    pub buttons: Vec<DialogButton>,
    pub initial_data: DialogData,
}

impl DialogSpec {
    /// The form for whatever is selected in `editor`, prefilled from the
    /// selected code block or from the insertion defaults.
    pub fn for_selection(editor: &mut Editor) -> Self {
        let languages = editor
            .settings()
            .languages
            .clone()
            .unwrap_or_else(default_languages);

        let session = EditSession::new(editor);
        let initial_data = DialogData {
            language: session.current_language(),
            line_numbers: session.current_line_numbers(),
            code: session.current_code(),
        };

        Self {
            title: DIALOG_TITLE.to_string(),
            fields: vec![
                DialogField::SelectBox {
                    name: "language".to_string(),
                    label: "Language".to_string(),
                    items: languages,
                },
                DialogField::Checkbox {
                    name: "line_numbers".to_string(),
                    label: "Show line numbers".to_string(),
                },
                DialogField::TextArea {
                    name: "code".to_string(),
                    label: "Code view".to_string(),
                },
            ],
            buttons: vec![
                DialogButton {
                    kind: ButtonKind::Cancel,
                    text: "Close".to_string(),
                    primary: false,
                },
                DialogButton {
                    kind: ButtonKind::Submit,
                    text: "Save".to_string(),
                    primary: true,
                },
            ],
            initial_data,
        }
    }

    pub fn languages(&self) -> &[LanguageOption] {
        self.fields
            .iter()
            .find_map(|field| match field {
                DialogField::SelectBox { items, .. } => Some(items.as_slice()),
                _ => None,
            })
            .unwrap_or_default()
    }
}
