//! # codesample-engine
//!
//! Keeps code blocks in a rich-text document consistent between two forms:
//!
//! - **canonical**: what gets saved.
//!   `<pre class="language-x"><code>escaped text</code></pre>`
//! - **decorated**: what the editing surface shows. The block is marked
//!   non-editable and the wrapper carries highlighting markup.
//!
//! Content entering the surface goes through [`decorate()`]; content leaving
//! it goes through [`canonicalize()`]. Both passes are idempotent, so any
//! number of save/reload cycles leave the text unchanged.
//!
//! ```
//! use codesample_engine::Editor;
//!
//! let mut editor = Editor::default();
//! editor.set_content("<pre class=\" language-c \">a &lt; b<br>c</pre>");
//!
//! assert_eq!(
//!     editor.get_content(),
//!     "<pre class=\"language-c\"><code>a &lt; b\nc</code></pre>"
//! );
//! ```

pub mod block;
pub mod canonicalize;
pub mod decorate;
pub mod dialog;
pub mod editor;
pub mod highlight;
pub mod io;
pub mod plugin;
pub mod session;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use block::{BlockState, CodeBlock, CodeBlocks, CodeClass, code_blocks, has_line_numbers, is_code_block};
pub use canonicalize::canonicalize;
pub use decorate::decorate;
pub use dialog::{DialogData, DialogSpec, LanguageOption, default_languages};
pub use editor::{Editor, Selection, Settings};
pub use highlight::{HighlightEngine, NoopHighlighter};
pub use io::*;
pub use plugin::CodeSamplePlugin;
pub use session::EditSession;
