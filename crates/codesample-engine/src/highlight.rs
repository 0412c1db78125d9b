//! The syntax-highlighting capability, injected into the [`Editor`].
//!
//! The engine itself is external. This crate only guarantees what it hands
//! over: a single wrapper element whose only child is the block's plain text,
//! plus the block's language tag. The engine may rewrite the wrapper's
//! children however it likes.
//!
//! [`Editor`]: crate::editor::Editor

use codesample_markup::{Document, NodeId};

pub trait HighlightEngine {
    /// Rewrite the children of `wrapper` to add highlighting markup.
    ///
    /// Unknown `language` tags are the engine's business; it should leave the
    /// wrapper untouched rather than fail.
    fn highlight(&self, doc: &mut Document, wrapper: NodeId, language: &str);
}

/// Leaves the wrapper as plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHighlighter;

impl HighlightEngine for NoopHighlighter {
    fn highlight(&self, _doc: &mut Document, _wrapper: NodeId, _language: &str) {}
}

impl<F> HighlightEngine for F
where
    F: Fn(&mut Document, NodeId, &str),
{
    fn highlight(&self, doc: &mut Document, wrapper: NodeId, language: &str) {
        self(doc, wrapper, language)
    }
}
