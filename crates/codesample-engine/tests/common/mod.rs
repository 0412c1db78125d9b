// Shared by several integration test binaries; each uses a different subset.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use codesample_engine::{Editor, HighlightEngine, Settings};
use codesample_markup::{Document, NodeId};

/// Wraps the wrapper's entire content in one more span on every call, so a
/// second run over unflattened input would visibly nest.
pub struct NestingHighlighter;

impl HighlightEngine for NestingHighlighter {
    fn highlight(&self, doc: &mut Document, wrapper: NodeId, language: &str) {
        let children = doc.children(wrapper).to_vec();
        let span = doc.create_element("span");
        doc.set_class_name(span, &format!("token {language}"));
        for child in children {
            doc.append_child(span, child);
        }
        doc.append_child(wrapper, span);
    }
}

/// What the engine saw on one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seen {
    pub language: String,
    pub inner_markup: String,
    pub wrappers_in_block: usize,
}

#[derive(Clone, Default)]
pub struct Recorder {
    pub seen: Rc<RefCell<Vec<Seen>>>,
}

impl HighlightEngine for Recorder {
    fn highlight(&self, doc: &mut Document, wrapper: NodeId, language: &str) {
        let wrappers_in_block = doc
            .parent(wrapper)
            .map_or(0, |block| doc.elements_by_name(block, "code").count());
        self.seen.borrow_mut().push(Seen {
            language: language.to_string(),
            inner_markup: doc.inner_markup(wrapper),
            wrappers_in_block,
        });
    }
}

pub fn nesting_editor() -> Editor {
    Editor::new(Settings::default(), NestingHighlighter)
}

pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}
