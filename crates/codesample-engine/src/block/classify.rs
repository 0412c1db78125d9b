//! Pure predicates deciding whether a node is a code block.
//!
//! A code block is a `pre` element whose class string carries a
//! `language-` token. Anything else, including a `pre` with a malformed
//! class, is ordinary content and every pass leaves it alone.

use codesample_markup::{Document, NodeId};

use super::class::{CodeClass, LINE_NUMBERS_CLASS};

/// Element name of a code block container.
pub const BLOCK_ELEMENT: &str = "pre";

pub fn is_code_block(doc: &Document, node: NodeId) -> bool {
    doc.is_element(node, BLOCK_ELEMENT) && CodeClass::parse(doc.class_name(node)).is_some()
}

pub fn has_line_numbers(doc: &Document, node: NodeId) -> bool {
    doc.class_name(node)
        .split_whitespace()
        .any(|token| token == LINE_NUMBERS_CLASS)
}

/// The code block at `node` or enclosing it, e.g. for a click on a
/// highlighting span.
pub fn closest_code_block(doc: &Document, node: NodeId) -> Option<NodeId> {
    doc.self_and_ancestors(node).find(|&n| is_code_block(doc, n))
}
