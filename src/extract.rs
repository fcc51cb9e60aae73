//! Body extraction and text cleaning over tolerant HTML parsing
//!
//! Both functions are pure: malformed markup is repaired best-effort by
//! the parser and never raises.

use scraper::{Html, Node, Selector};

/// Serialized `<body>` subtree of a document, or `None` when the source
/// has no body content.
///
/// The parser synthesizes a body node even for documents that never
/// declared one, so a childless body is treated as absent rather than
/// returned as an empty `<body></body>` shell. This means a literal
/// `<body></body>` in the source also comes back as `None`; the two
/// cases are indistinguishable here, and both reduce to no text
/// downstream.
pub fn extract_body(markup: &str) -> Option<String> {
    let doc = Html::parse_document(markup);
    let selector = Selector::parse("body").ok()?;
    doc.select(&selector)
        .next()
        .filter(|body| body.has_children())
        .map(|body| body.html())
}

/// Reduce an HTML fragment to its visible text.
///
/// `script` and `style` subtrees are dropped entirely, remaining text
/// nodes are joined in document order with newlines, and every line is
/// trimmed with blank lines removed.
pub fn clean_text(fragment: &str) -> String {
    let doc = Html::parse_fragment(fragment);

    let mut parts: Vec<String> = Vec::new();
    let mut stack: Vec<_> = doc.tree.root().children().rev().collect();
    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Element(el) if matches!(el.name(), "script" | "style") => {}
            Node::Text(text) => parts.push(text.text.to_string()),
            _ => stack.extend(node.children().rev()),
        }
    }

    parts
        .join("\n")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
