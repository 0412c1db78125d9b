//! # Decorator
//!
//! Expands code blocks into their in-editor form in two phases.
//!
//! ## Phase 1: materialize (`Raw` blocks only)
//!
//! `br` elements become literal newlines (the highlighter counts lines by
//! `\n`), the non-editable marker is set, the content is replaced by its own
//! escaped text, and the class string is normalized. All blocks change in one
//! transaction.
//!
//! ## Phase 2: wrap and highlight (every block)
//!
//! Each block ends up with exactly one `code` wrapper. An existing wrapper is
//! reused, never nested. The wrapper is reset to its plain text before the
//! [`HighlightEngine`] runs, so the engine always sees unhighlighted input and
//! repeated passes cannot stack highlighting markup.
//!
//! [`HighlightEngine`]: crate::highlight::HighlightEngine

use codesample_markup::{Document, NodeId, NodeKind, escape};

use crate::block::{BlockState, CodeBlock, CodeClass, WRAPPER_ELEMENT, code_blocks, normalize_class};
use crate::editor::Editor;
use crate::highlight::HighlightEngine;

const LINE_BREAK_ELEMENT: &str = "br";

/// Run both phases over the whole document. Returns the number of blocks
/// materialized in phase 1.
pub fn decorate(editor: &mut Editor) -> usize {
    let materialized = editor.transact(|editor| materialize_document(editor.document_mut()));

    let (doc, engine) = editor.highlight_parts();
    let blocks: Vec<NodeId> = code_blocks(doc, doc.root()).collect();
    for &node in &blocks {
        wrap_and_highlight(doc, engine, node);
    }
    log::debug!(
        "decorated {} code block(s), {materialized} newly materialized",
        blocks.len()
    );
    materialized
}

/// Phase 1 over every `Raw` code block in `doc`.
pub fn materialize_document(doc: &mut Document) -> usize {
    let raw: Vec<NodeId> = code_blocks(doc, doc.root())
        .filter(|&node| BlockState::of(doc, node).decorate().is_some())
        .collect();

    for &node in &raw {
        materialize_block(doc, node);
    }
    raw.len()
}

/// Phase 1 for one block. No-op on blocks already `Decorated`.
pub fn materialize_block(doc: &mut Document, node: NodeId) {
    let Some(next) = BlockState::of(doc, node).decorate() else {
        return;
    };

    let line_breaks: Vec<NodeId> = doc.elements_by_name(node, LINE_BREAK_ELEMENT).collect();
    for line_break in line_breaks {
        let newline = doc.create_text("\n");
        doc.replace_node(line_break, newline);
        doc.remove(line_break);
    }

    next.mark(doc, node);
    let text = doc.text_content(node);
    doc.set_inner_markup(node, &escape::encode(&text));

    let class = normalize_class(doc.class_name(node));
    doc.set_class_name(node, &class);
    log::trace!("materialized block with class {class:?}");
}

/// Make sure `node` has exactly one wrapper and return it. An existing sole
/// wrapper is kept; any other content is collapsed into a fresh one.
pub fn ensure_wrapper(doc: &mut Document, node: NodeId) -> NodeId {
    if let Some(wrapper) = CodeBlock::wrapper(doc, node) {
        return wrapper;
    }
    let text = doc.text_content(node);
    doc.clear_children(node);
    let wrapper = doc.create_element(WRAPPER_ELEMENT);
    doc.set_text_content(wrapper, &text);
    doc.append_child(node, wrapper);
    wrapper
}

/// Phase 2 for one block.
pub fn wrap_and_highlight(doc: &mut Document, engine: &dyn HighlightEngine, node: NodeId) {
    let wrapper = ensure_wrapper(doc, node);

    let plain = match doc.children(wrapper) {
        [] => true,
        [only] => matches!(doc.kind(*only), NodeKind::Text(_)),
        _ => false,
    };
    if !plain {
        let text = doc.text_content(wrapper);
        doc.set_text_content(wrapper, &text);
    }

    let language = CodeClass::parse(doc.class_name(node))
        .map(|class| class.language().to_string())
        .unwrap_or_default();
    engine.highlight(doc, wrapper, &language);
}
