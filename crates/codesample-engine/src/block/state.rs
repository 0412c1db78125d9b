//! Decorated-ness as an explicit two-state machine.
//!
//! ```text
//!            decorate
//!   Raw ─────────────────▶ Decorated
//!    ▲                        │
//!    └────────────────────────┘
//!           canonicalize
//! ```
//!
//! Both transitions are total: `decorate` on `Decorated` and `canonicalize`
//! on `Raw` yield `None`, meaning "nothing to do".

use codesample_markup::{Document, NodeId};
use serde::Serialize;

/// Host marker for content the user cannot type into directly.
pub const EDITABLE_ATTR: &str = "contenteditable";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockState {
    /// Canonical or freshly authored: text only, no marker.
    Raw,
    /// Marked non-editable, wrapped and highlighted.
    Decorated,
}

impl BlockState {
    /// Read the state from the node's marker attribute.
    pub fn of(doc: &Document, node: NodeId) -> Self {
        let marked = doc
            .attr(node, EDITABLE_ATTR)
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("false"));
        if marked { Self::Decorated } else { Self::Raw }
    }

    pub fn decorate(self) -> Option<Self> {
        match self {
            Self::Raw => Some(Self::Decorated),
            Self::Decorated => None,
        }
    }

    pub fn canonicalize(self) -> Option<Self> {
        match self {
            Self::Decorated => Some(Self::Raw),
            Self::Raw => None,
        }
    }

    /// Write this state's marker onto `node`.
    pub fn mark(self, doc: &mut Document, node: NodeId) {
        match self {
            Self::Decorated => doc.set_attr(node, EDITABLE_ATTR, "false"),
            Self::Raw => {
                doc.remove_attr(node, EDITABLE_ATTR);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"<pre contenteditable="false"></pre>"#, BlockState::Decorated)]
    #[case(r#"<pre contentEditable=" FALSE "></pre>"#, BlockState::Decorated)]
    #[case(r#"<pre contenteditable="true"></pre>"#, BlockState::Raw)]
    #[case("<pre></pre>", BlockState::Raw)]
    fn reads_state_from_marker(#[case] markup: &str, #[case] expected: BlockState) {
        let doc = Document::parse(markup);
        let pre = doc.first_child(doc.root()).unwrap();
        assert_eq!(BlockState::of(&doc, pre), expected);
    }

    #[test]
    fn transitions_are_total_and_idempotent() {
        assert_eq!(BlockState::Raw.decorate(), Some(BlockState::Decorated));
        assert_eq!(BlockState::Decorated.decorate(), None);
        assert_eq!(BlockState::Decorated.canonicalize(), Some(BlockState::Raw));
        assert_eq!(BlockState::Raw.canonicalize(), None);
    }

    #[test]
    fn mark_round_trips_through_the_attribute() {
        let mut doc = Document::parse("<pre></pre>");
        let pre = doc.first_child(doc.root()).unwrap();

        BlockState::Decorated.mark(&mut doc, pre);
        assert_eq!(BlockState::of(&doc, pre), BlockState::Decorated);

        BlockState::Raw.mark(&mut doc, pre);
        assert_eq!(BlockState::of(&doc, pre), BlockState::Raw);
        assert_eq!(doc.to_markup(), "<pre></pre>");
    }
}
