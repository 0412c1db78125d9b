//! # Parser - Tolerant Tree Construction
//!
//! Turns the token stream from [`crate::lexer`] into nodes of a
//! [`Document`]. Real content is messy (pasted fragments, half-closed tags,
//! stray `<` in prose), so the parser never fails:
//!
//! - void elements (`br`, `hr`, `img`, ...) and `<x/>` never take children
//! - an end tag closes the nearest open element with that name, and is
//!   dropped when nothing matches
//! - elements still open at end of input are closed implicitly
//! - text and attribute values are entity-decoded; adjacent text merges

use std::sync::OnceLock;

use regex::Regex;

use crate::dom::{Document, NodeId, NodeKind, is_void_element};
use crate::escape;
use crate::lexer::{TokenKind, lex};

fn tag_name_regex() -> &'static Regex {
    static TAG_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    TAG_NAME_REGEX
        .get_or_init(|| Regex::new(r"^</?([a-zA-Z][a-zA-Z0-9:-]*)").expect("Invalid tag regex"))
}

fn attribute_regex() -> &'static Regex {
    static ATTRIBUTE_REGEX: OnceLock<Regex> = OnceLock::new();
    ATTRIBUTE_REGEX.get_or_init(|| {
        Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
            .expect("Invalid attribute regex")
    })
}

/// A start tag split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub self_closing: bool,
}

/// Split a lexed start tag (`<name a="b" c>`) into name, attributes and the
/// self-closing flag. Returns `None` when `text` is not a start tag.
pub fn parse_start_tag(text: &str) -> Option<StartTag> {
    let name_match = tag_name_regex().captures(text)?.get(1)?;
    let body = text.get(name_match.end()..)?.strip_suffix('>')?.trim_end();
    let (body, self_closing) = match body.strip_suffix('/') {
        Some(rest) => (rest, true),
        None => (body, false),
    };

    let attrs = attribute_regex()
        .captures_iter(body)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().to_ascii_lowercase();
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map_or("", |m| m.as_str());
            Some((name, escape::decode(value).into_owned()))
        })
        .collect();

    Some(StartTag {
        name: name_match.as_str().to_ascii_lowercase(),
        attrs,
        self_closing,
    })
}

/// Parse `markup` and append the resulting nodes to `parent`.
pub fn parse_into(doc: &mut Document, parent: NodeId, markup: &str) {
    let mut open: Vec<NodeId> = vec![parent];

    for token in lex(markup) {
        let current = *open.last().unwrap_or(&parent);
        match token.kind {
            TokenKind::Text => append_text(doc, current, &escape::decode(token.text)),
            TokenKind::StartTag => {
                let Some(tag) = parse_start_tag(token.text) else {
                    append_text(doc, current, token.text);
                    continue;
                };
                let element = doc.create_element(&tag.name);
                for (name, value) in &tag.attrs {
                    doc.set_attr(element, name, value);
                }
                doc.append_child(current, element);
                if !tag.self_closing && !is_void_element(&tag.name) {
                    open.push(element);
                }
            }
            TokenKind::EndTag => {
                let name = tag_name_regex()
                    .captures(token.text)
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str())
                    .unwrap_or_default();
                // Index 0 is the insertion parent and is never closed by the fragment
                match open
                    .iter()
                    .skip(1)
                    .rposition(|&id| doc.is_element(id, name))
                {
                    Some(position) => open.truncate(position + 1),
                    None => log::trace!("dropping unmatched end tag {}", token.text),
                }
            }
            TokenKind::Comment => {
                let body = token.text.trim_start_matches("<!--");
                let body = body.strip_suffix("-->").unwrap_or(body);
                let comment = doc.create_comment(body);
                doc.append_child(current, comment);
            }
            TokenKind::Declaration => log::trace!("ignoring declaration {}", token.text),
        }
    }
}

fn append_text(doc: &mut Document, parent: NodeId, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(&last) = doc.children(parent).last()
        && let NodeKind::Text(existing) = doc.kind(last)
    {
        let merged = format!("{existing}{text}");
        doc.set_text_content(last, &merged);
        return;
    }
    let node = doc.create_text(text);
    doc.append_child(parent, node);
}
