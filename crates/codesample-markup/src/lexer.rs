//! # Lexer - Tokenizing Markup Fragments
//!
//! The first stage of reading a rich-text fragment: breaking source text into
//! tokens using the [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! **Every byte in the input appears in exactly one token.** Nothing is
//! skipped, so a fragment that fails to look like markup still survives as
//! text:
//!
//! ```
//! use codesample_markup::lexer::lex;
//!
//! let input = "<pre class=\"language-c\">if (a < b) {}</pre>";
//! let tokens = lex(input);
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Token Design
//!
//! Tags are lexed whole. A start tag token covers `<name attr="v" ...>`
//! including its attributes; splitting the attributes out is the parser's job.
//! A `<` that does not open a well-formed tag becomes [`TokenKind::Text`].

use logos::Logos;

/// Token kinds produced by the Logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `<name ...>` or `<name ... />`
    #[regex(r#"<[a-zA-Z][a-zA-Z0-9:-]*(\s+[^\s"'>/=]+(\s*=\s*("[^"]*"|'[^']*'|[^\s"'=<>`]+))?)*\s*/?>"#)]
    StartTag,

    /// `</name>`
    #[regex(r"</[a-zA-Z][a-zA-Z0-9:-]*\s*>")]
    EndTag,

    /// `<!-- ... -->`, running to end of input when unterminated
    #[token("<!--", comment_body)]
    Comment,

    /// `<!DOCTYPE ...>` and similar declarations
    #[regex(r"<![a-zA-Z][^>]*>")]
    Declaration,

    /// Character data between tags
    #[regex(r"[^<]+")]
    Text,
}

fn comment_body(lexer: &mut logos::Lexer<TokenKind>) -> bool {
    let remainder = lexer.remainder();
    let consumed = remainder
        .find("-->")
        .map_or(remainder.len(), |end| end + "-->".len());
    lexer.bump(consumed);
    true
}

/// A lexed token with its kind and text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that all bytes from the input appear in the output tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    lex_with_spans(input)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Lex and return tokens along with their byte spans.
pub fn lex_with_spans(input: &str) -> Vec<(Token<'_>, std::ops::Range<usize>)> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        // Logos error means a stray `<` or an unterminated tag - treat as text
        let kind = result.unwrap_or(TokenKind::Text);
        tokens.push((Token { kind, text }, span));
    }

    tokens
}
