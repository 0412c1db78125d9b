use std::fmt;

use serde::Serialize;

/// Prefix of the class token carrying the language tag.
pub const LANGUAGE_PREFIX: &str = "language-";

/// Class token requesting line numbers.
pub const LINE_NUMBERS_CLASS: &str = "line-numbers";

/// Parsed form of a code block's class string.
///
/// Holds exactly one language tag, the line-numbers flag, and any unrelated
/// tokens the author put on the block (kept in their original order, without
/// duplicates).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeClass {
    language: String,
    line_numbers: bool,
    extra: Vec<String>,
}

impl CodeClass {
    /// Build a class for `language`. Whitespace is stripped from the tag since
    /// it would split the token.
    pub fn new(language: &str, line_numbers: bool) -> Self {
        Self {
            language: language.chars().filter(|c| !c.is_whitespace()).collect(),
            line_numbers,
            extra: Vec::new(),
        }
    }

    /// Parse a raw class string. Returns `None` when no `language-` token is
    /// present; such nodes are not code blocks.
    ///
    /// The first `language-` token wins; later ones are dropped.
    pub fn parse(class: &str) -> Option<Self> {
        let mut language = None;
        let mut line_numbers = false;
        let mut extra: Vec<String> = Vec::new();

        for token in class.split_whitespace() {
            if let Some(tag) = token.strip_prefix(LANGUAGE_PREFIX) {
                if language.is_none() {
                    language = Some(tag.to_string());
                } else {
                    log::debug!("dropping extra language token {token:?} from {class:?}");
                }
            } else if token == LINE_NUMBERS_CLASS {
                line_numbers = true;
            } else if !extra.iter().any(|t| t == token) {
                extra.push(token.to_string());
            }
        }

        Some(Self {
            language: language?,
            line_numbers,
            extra,
        })
    }

    /// The tag without the `language-` prefix.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn line_numbers(&self) -> bool {
        self.line_numbers
    }

    pub fn extra(&self) -> &[String] {
        &self.extra
    }

    /// Canonical class string: language token, extra tokens, then
    /// `line-numbers` when set.
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{LANGUAGE_PREFIX}{}", self.language)?;
        for token in &self.extra {
            write!(f, " {token}")?;
        }
        if self.line_numbers {
            write!(f, " {LINE_NUMBERS_CLASS}")?;
        }
        Ok(())
    }
}

/// Normalize any class string: trimmed, single-spaced, no duplicate tokens.
/// Code block classes are additionally put in canonical token order.
pub fn normalize_class(class: &str) -> String {
    if let Some(parsed) = CodeClass::parse(class) {
        return parsed.serialize();
    }
    let mut tokens: Vec<&str> = Vec::new();
    for token in class.split_whitespace() {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens.join(" ")
}
