use codesample_markup::{Descendants, Document, NodeId};

use super::classify::is_code_block;

/// Lazy walk over the code blocks below a node, in document order.
///
/// Borrowing the document means passes that mutate must collect first; call
/// [`code_blocks`] again to restart the walk.
#[derive(Clone)]
pub struct CodeBlocks<'a> {
    doc: &'a Document,
    inner: Descendants<'a>,
}

pub fn code_blocks(doc: &Document, root: NodeId) -> CodeBlocks<'_> {
    CodeBlocks {
        doc,
        inner: doc.descendants(root),
    }
}

impl Iterator for CodeBlocks<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let doc = self.doc;
        self.inner.find(|&node| is_code_block(doc, node))
    }
}
