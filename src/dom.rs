//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate, named for what the bookmark
//! walker needs: tag names, trimmed text, attributes, element children and
//! list-container depth.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse HTML string into document
///
/// Bookmark exports are not valid HTML (`<DT>` and `<p>` are never closed);
/// the html5ever tree builder closes them the way browsers do, which leaves
/// each nested `<DL>` inside the `<DT>` of its folder.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Check the tag name of a single node, ignoring ASCII case.
#[must_use]
pub fn node_is(node: &NodeRef, tag: &str) -> bool {
    node.is_element() && node.node_name().is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content with surrounding whitespace removed.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    text_content(sel).trim().to_string()
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// First direct element child with the given tag name.
#[must_use]
pub fn child_element<'a>(sel: &Selection<'a>, tag: &str) -> Option<Selection<'a>> {
    sel.children()
        .nodes()
        .iter()
        .find(|node| node_is(node, tag))
        .map(|node| Selection::from(*node))
}

/// Count the `tag` elements above `node`, nearest first.
///
/// For a bookmark `<DT>` this is its nesting depth: the `<DL>` it sits in
/// counts as 1, every enclosing folder list adds one.
#[must_use]
pub fn count_ancestors(node: &NodeRef, tag: &str) -> usize {
    let mut count = 0;
    let mut current = node.parent();

    while let Some(n) = current {
        if node_is(&n, tag) {
            count += 1;
        }
        current = n.parent();
    }

    count
}
