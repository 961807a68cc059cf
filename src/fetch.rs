//! Page retrieval and paragraph text extraction.

use scraper::node::Node;
use scraper::Html;
use tracing::debug;

use crate::error::WebgistError;

/// Subtrees that never contribute visible paragraph text.
const SKIP_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Fetch `url` and return its paragraph text as one flat string.
///
/// Blocking GET; transport failures, unsupported schemes, and non-2xx
/// responses all map to [`WebgistError::Fetch`]. A page without paragraph
/// text fails with [`WebgistError::EmptyContent`]. There are no retries
/// and no crate-imposed timeout; callers needing resilience wrap this.
pub fn fetch_article_text(url: &str) -> Result<String, WebgistError> {
    let html = reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|source| WebgistError::Fetch {
            url: url.to_owned(),
            source,
        })?;
    debug!(url, bytes = html.len(), "fetched page");
    let text = extract_paragraph_text(&html);
    if text.trim().is_empty() {
        return Err(WebgistError::EmptyContent);
    }
    Ok(text)
}

/// Concatenate the text of every `<p>` element, in document order, joined
/// with single spaces.
///
/// Each paragraph contributes the text of all its descendant text nodes;
/// [`SKIP_TAGS`] subtrees are ignored wherever they appear. A document
/// without `<p>` elements yields an empty string.
pub fn extract_paragraph_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let mut paragraphs = Vec::new();
    walk(doc.tree.root(), &mut paragraphs);
    debug!(paragraphs = paragraphs.len(), "extracted paragraph text");
    paragraphs.join(" ")
}

/// Recursively search for `<p>` elements, collecting one string per paragraph.
fn walk(node: ego_tree::NodeRef<Node>, paragraphs: &mut Vec<String>) {
    match node.value() {
        Node::Element(el) => {
            let tag = el.name();
            if SKIP_TAGS.contains(&tag) {
                return;
            }
            if tag == "p" {
                let mut text = String::new();
                for child in node.children() {
                    collect_text(child, &mut text);
                }
                paragraphs.push(text);
            } else {
                for child in node.children() {
                    walk(child, paragraphs);
                }
            }
        }
        Node::Document | Node::Fragment => {
            for child in node.children() {
                walk(child, paragraphs);
            }
        }
        _ => {}
    }
}

/// Gather descendant text below a paragraph, skipping blacklisted subtrees.
fn collect_text(node: ego_tree::NodeRef<Node>, out: &mut String) {
    match node.value() {
        Node::Element(el) => {
            if SKIP_TAGS.contains(&el.name()) {
                return;
            }
            for child in node.children() {
                collect_text(child, out);
            }
        }
        Node::Text(text) => out.push_str(&text.text),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_join_in_document_order() {
        let html = "<html><body><p>First.</p><div><p>Second.</p></div><p>Third.</p></body></html>";
        assert_eq!(extract_paragraph_text(html), "First. Second. Third.");
    }

    #[test]
    fn test_inline_markup_contributes_text() {
        let html = "<html><body><p>Hello <em>brave</em> <a href=\"/w\">world</a></p></body></html>";
        assert_eq!(extract_paragraph_text(html), "Hello brave world");
    }

    #[test]
    fn test_script_inside_paragraph_is_skipped() {
        let html = "<html><body><p>Visible<script>var x = 1;</script> text</p></body></html>";
        assert_eq!(extract_paragraph_text(html), "Visible text");
    }

    #[test]
    fn test_script_paragraphs_elsewhere_are_skipped() {
        let html = "<html><body><script><p>not content</p></script><p>Real.</p></body></html>";
        assert_eq!(extract_paragraph_text(html), "Real.");
    }

    #[test]
    fn test_text_outside_paragraphs_is_ignored() {
        let html = "<html><body><h1>Title</h1><div>loose text</div><p>Body.</p></body></html>";
        assert_eq!(extract_paragraph_text(html), "Body.");
    }

    #[test]
    fn test_no_paragraphs_yields_empty() {
        assert_eq!(extract_paragraph_text("<html><body><div>x</div></body></html>"), "");
        assert_eq!(extract_paragraph_text(""), "");
    }

    #[test]
    fn test_empty_paragraphs_yield_whitespace_only() {
        let html = "<html><body><p></p><p></p></body></html>";
        assert_eq!(extract_paragraph_text(html), " ");
    }

    #[test]
    fn test_entities_are_decoded() {
        let html = "<html><body><p>Tom &amp; Jerry</p></body></html>";
        assert_eq!(extract_paragraph_text(html), "Tom & Jerry");
    }
}
