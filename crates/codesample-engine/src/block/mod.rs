//! # Code Block Model
//!
//! Everything needed to recognise a code block and read its state without
//! touching the document:
//!
//! - **`class`**: [`CodeClass`], the parsed value behind the class string
//! - **`classify`**: pure predicates over document nodes
//! - **`state`**: [`BlockState`], the raw/decorated state machine
//! - **`walk`**: [`CodeBlocks`], a lazy filtered tree walk

pub mod class;
pub mod classify;
pub mod state;
pub mod walk;

use codesample_markup::{Document, NodeId};
use serde::Serialize;

pub use class::{CodeClass, LANGUAGE_PREFIX, LINE_NUMBERS_CLASS, normalize_class};
pub use classify::{BLOCK_ELEMENT, closest_code_block, has_line_numbers, is_code_block};
pub use state::{BlockState, EDITABLE_ATTR};
pub use walk::{CodeBlocks, code_blocks};

/// Element wrapping the escaped text inside a code block.
pub const WRAPPER_ELEMENT: &str = "code";

/// Read-only view of one code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    #[serde(skip)]
    pub node: NodeId,
    pub class: CodeClass,
    pub state: BlockState,
    pub raw_text: String,
}

impl CodeBlock {
    /// `None` when `node` is not a code block.
    pub fn read(doc: &Document, node: NodeId) -> Option<Self> {
        if !doc.is_element(node, BLOCK_ELEMENT) {
            return None;
        }
        let class = CodeClass::parse(doc.class_name(node))?;
        Some(Self {
            node,
            class,
            state: BlockState::of(doc, node),
            raw_text: doc.text_content(node),
        })
    }

    /// The single wrapper element, if the block has exactly one child and it
    /// is a wrapper.
    pub fn wrapper(doc: &Document, node: NodeId) -> Option<NodeId> {
        match doc.children(node) {
            [only] if doc.is_element(*only, WRAPPER_ELEMENT) => Some(*only),
            _ => None,
        }
    }
}
