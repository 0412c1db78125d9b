//! # Canonicalizer
//!
//! Collapses decorated code blocks back to the persisted form:
//!
//! ```text
//! <pre class="language-js line-numbers" contenteditable="false">
//!   <code><span class="token keyword">let</span> x;</code>
//! </pre>
//!            │
//!            ▼
//! <pre class="language-js line-numbers"><code>let x;</code></pre>
//! ```
//!
//! Only blocks in the `Decorated` state are touched, which makes the pass
//! idempotent: its own output is `Raw` and is skipped next time.

use codesample_markup::{Document, NodeId};

use crate::block::{BlockState, WRAPPER_ELEMENT, code_blocks, normalize_class};
use crate::editor::Editor;

/// Canonicalize every decorated block as one undoable step. Returns the
/// number of blocks changed.
pub fn canonicalize(editor: &mut Editor) -> usize {
    editor.transact(|editor| canonicalize_document(editor.document_mut()))
}

/// Canonicalize every decorated block in `doc`, outside any transaction.
/// Used on serialization copies.
pub fn canonicalize_document(doc: &mut Document) -> usize {
    let decorated: Vec<NodeId> = code_blocks(doc, doc.root())
        .filter(|&node| BlockState::of(doc, node).canonicalize().is_some())
        .collect();

    for &node in &decorated {
        canonicalize_block(doc, node);
    }
    log::debug!("canonicalized {} code block(s)", decorated.len());
    decorated.len()
}

/// Collapse one block to `Raw`: plain text inside a single wrapper, normalized
/// class, marker cleared.
pub fn canonicalize_block(doc: &mut Document, node: NodeId) {
    let Some(next) = BlockState::of(doc, node).canonicalize() else {
        return;
    };

    let raw_text = doc.text_content(node);
    let class = normalize_class(doc.class_name(node));
    doc.set_class_name(node, &class);
    next.mark(doc, node);

    doc.clear_children(node);
    let wrapper = doc.create_element(WRAPPER_ELEMENT);
    doc.set_text_content(wrapper, &raw_text);
    doc.append_child(node, wrapper);
    log::trace!("canonicalized block with class {class:?}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HIGHLIGHTED: &str = concat!(
        r#"<pre class=" language-js  line-numbers " contenteditable="false">"#,
        r#"<code><span class="token keyword">if</span> (a &lt; b) {<span class="token punctuation">}</span>"#,
        "\n</code></pre>",
    );

    #[test]
    fn strips_highlighting_and_marker() {
        let mut doc = Document::parse(HIGHLIGHTED);

        assert_eq!(canonicalize_document(&mut doc), 1);

        assert_eq!(
            doc.to_markup(),
            "<pre class=\"language-js line-numbers\"><code>if (a &lt; b) {}\n</code></pre>"
        );
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let mut doc = Document::parse(HIGHLIGHTED);
        canonicalize_document(&mut doc);
        let once = doc.to_markup();

        assert_eq!(canonicalize_document(&mut doc), 0);
        assert_eq!(doc.to_markup(), once);
    }

    #[test]
    fn raw_blocks_are_left_alone() {
        let markup = r#"<pre class="  language-c ">int  x;<br>x++;</pre>"#;
        let mut doc = Document::parse(markup);

        assert_eq!(canonicalize_document(&mut doc), 0);
        assert_eq!(doc.to_markup(), markup);
    }

    #[test]
    fn marked_non_code_blocks_are_left_alone() {
        let markup = r#"<pre contenteditable="false"><span>x</span></pre><div contenteditable="false" class="language-a">y</div>"#;
        let mut doc = Document::parse(markup);

        assert_eq!(canonicalize_document(&mut doc), 0);
        assert_eq!(doc.to_markup(), markup);
    }

    #[test]
    fn editor_pass_is_one_undo_step() {
        let mut editor = Editor::default();
        *editor.document_mut() = Document::parse(&HIGHLIGHTED.repeat(3));

        assert_eq!(canonicalize(&mut editor), 3);
        assert_eq!(editor.undo_manager().undo_depth(), 1);

        editor.undo();
        let original = Document::parse(&HIGHLIGHTED.repeat(3)).to_markup();
        assert_eq!(editor.document().to_markup(), original);
    }
}
