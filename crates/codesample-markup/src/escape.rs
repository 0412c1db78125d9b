//! Markup-safe entity escaping.
//!
//! One rule is used everywhere text enters or leaves markup: `&`, `<`, `>`,
//! `"` and `'` are replaced by entities, and decoding undoes any named or
//! numeric entity. Encoding then decoding is the identity for all input.

use std::borrow::Cow;

/// Escape `text` for placement in markup.
pub fn encode(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Resolve entities in `text`.
pub fn decode(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("a < b", "a &lt; b")]
    #[case("x && y", "x &amp;&amp; y")]
    #[case(r#"print("hi")"#, "print(&quot;hi&quot;)")]
    #[case("<div>", "&lt;div&gt;")]
    #[case("plain", "plain")]
    fn encodes_markup_characters(#[case] raw: &str, #[case] escaped: &str) {
        assert_eq!(encode(raw), escaped);
    }

    #[test]
    fn decode_handles_named_and_numeric_entities() {
        assert_eq!(decode("&lt;&#62;&#x26;&quot;&amp;lt;"), "<>&\"&lt;");
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(encode("no specials"), Cow::Borrowed(_)));
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(text in any::<String>()) {
            let encoded = encode(&text);
            prop_assert_eq!(decode(&encoded), text.as_str());
        }
    }
}
