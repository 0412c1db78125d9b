use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use codesample_markup::{Document, NodeId};
use tempfile::TempDir;

use crate::editor::{Editor, Settings};
use crate::highlight::HighlightEngine;

/// Create a temporary content directory
pub fn create_test_content_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content
pub fn create_test_file(content_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = content_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

pub fn editor_with_highlighter(engine: impl HighlightEngine + 'static) -> Editor {
    Editor::new(Settings::default(), engine)
}

/// Wraps every space-separated word in `<span class="token">`, like a very
/// small tokenizer would.
pub struct SpanHighlighter;

impl HighlightEngine for SpanHighlighter {
    fn highlight(&self, doc: &mut Document, wrapper: NodeId, _language: &str) {
        let text = doc.text_content(wrapper);
        doc.clear_children(wrapper);
        for (i, word) in text.split(' ').enumerate() {
            if i > 0 {
                let space = doc.create_text(" ");
                doc.append_child(wrapper, space);
            }
            if word.is_empty() {
                continue;
            }
            let span = doc.create_element("span");
            doc.set_class_name(span, "token");
            doc.set_text_content(span, word);
            doc.append_child(wrapper, span);
        }
    }
}

/// What the engine was handed on one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightCall {
    pub language: String,
    pub wrapper_name: String,
    pub inner_markup: String,
    pub block_wrappers: usize,
}

/// Records every call and leaves the wrapper untouched.
#[derive(Clone, Default)]
pub struct RecordingHighlighter {
    pub calls: Rc<RefCell<Vec<HighlightCall>>>,
}

impl HighlightEngine for RecordingHighlighter {
    fn highlight(&self, doc: &mut Document, wrapper: NodeId, language: &str) {
        let block_wrappers = doc
            .parent(wrapper)
            .map_or(0, |block| doc.elements_by_name(block, "code").count());
        self.calls.borrow_mut().push(HighlightCall {
            language: language.to_string(),
            wrapper_name: doc.name(wrapper).unwrap_or_default().to_string(),
            inner_markup: doc.inner_markup(wrapper),
            block_wrappers,
        });
    }
}
