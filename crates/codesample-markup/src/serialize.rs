//! Tree → markup serialization.

use crate::dom::{Document, NodeId, NodeKind, is_void_element};
use crate::escape;

pub(crate) fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    match doc.kind(id) {
        NodeKind::Root => {
            for &child in doc.children(id) {
                write_node(doc, child, out);
            }
        }
        NodeKind::Text(text) => out.push_str(&escape::encode(text)),
        NodeKind::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        NodeKind::Element(element) => {
            out.push('<');
            out.push_str(element.name());
            for attr in element.attrs() {
                out.push(' ');
                out.push_str(&attr.name);
                out.push_str("=\"");
                out.push_str(&html_escape::encode_double_quoted_attribute(&attr.value));
                out.push('"');
            }
            out.push('>');

            if is_void_element(element.name()) {
                return;
            }

            for &child in doc.children(id) {
                write_node(doc, child, out);
            }
            out.push_str("</");
            out.push_str(element.name());
            out.push('>');
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Document;
    use insta::assert_snapshot;

    #[test]
    fn serializes_attributes_in_source_order() {
        let doc = Document::parse(r#"<pre contenteditable="false" class="language-c"></pre>"#);
        assert_snapshot!(doc.to_markup(), @r#"<pre contenteditable="false" class="language-c"></pre>"#);
    }

    #[test]
    fn bare_attributes_get_empty_values() {
        let doc = Document::parse("<input disabled>");
        assert_snapshot!(doc.to_markup(), @r#"<input disabled="">"#);
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut doc = crate::Document::new();
        let p = doc.create_element("p");
        doc.set_attr(p, "title", r#"a "quoted" <value>"#);
        doc.append_child(doc.root(), p);
        assert_snapshot!(doc.to_markup(), @r#"<p title="a &quot;quoted&quot; &lt;value&gt;"></p>"#);
    }

    #[test]
    fn text_is_escaped_once() {
        let doc = Document::parse("<code>&lt;b&gt; &amp;amp;</code>");
        assert_snapshot!(doc.to_markup(), @"<code>&lt;b&gt; &amp;amp;</code>");
    }

    #[test]
    fn comments_survive() {
        let doc = Document::parse("<p>a<!-- note -->b</p>");
        assert_snapshot!(doc.to_markup(), @"<p>a<!-- note -->b</p>");
    }
}
