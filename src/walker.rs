//! Tree Walker
//!
//! Linearizes the nested bookmark markup into a stream of markers. A
//! Netscape-format export looks like this once parsed:
//!
//! ```text
//! <DL>
//!   <DT><H3>Work</H3>            -> Category { "Work", depth 1 }
//!       <DL>
//!         <DT><A HREF=..>Site</A> -> Link { "Site", href }
//!         <DT><H3>Tools</H3>      -> Category { "Tools", depth 2 }
//!             <DL>...</DL>
//!       </DL>
//! </DL>
//! ```
//!
//! Every `<DT>` is visited in document order. Nothing is grouped or
//! reordered here; attaching links to categories is the normalizer's job.

use log::{debug, trace};

use crate::dom::{self, Document, NodeRef, Selection};

/// A marker produced while walking the bookmark tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkNode {
    /// Start of a folder. `depth` is 1 for folders in the outermost list.
    Category { title: String, depth: usize },
    /// A bookmark belonging to the nearest preceding category.
    Link { text: String, href: String },
}

impl BookmarkNode {
    /// Convenience constructor for a category marker.
    #[must_use]
    pub fn category(title: impl Into<String>, depth: usize) -> Self {
        Self::Category {
            title: title.into(),
            depth,
        }
    }

    /// Convenience constructor for a link marker.
    #[must_use]
    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            href: href.into(),
        }
    }
}

/// Lazy iterator over the markers of one document.
///
/// Created by [`walk`]. It borrows the document and cannot be restarted;
/// walk again to get a fresh stream.
pub struct TreeWalker<'a> {
    terms: std::vec::IntoIter<NodeRef<'a>>,
    emitted: usize,
    skipped: usize,
}

impl<'a> TreeWalker<'a> {
    /// Prepare a walk over every `<dt>` in `document`.
    #[must_use]
    pub fn new(document: &'a Document) -> Self {
        let terms = document.select("dt").nodes().to_vec();
        trace!("walking {} definition terms", terms.len());

        Self {
            terms: terms.into_iter(),
            emitted: 0,
            skipped: 0,
        }
    }
}

impl Iterator for TreeWalker<'_> {
    type Item = BookmarkNode;

    fn next(&mut self) -> Option<BookmarkNode> {
        for term in self.terms.by_ref() {
            if let Some(marker) = marker_for(&term) {
                trace!("marker: {marker:?}");
                self.emitted += 1;
                return Some(marker);
            }
            self.skipped += 1;
        }

        if self.emitted + self.skipped > 0 {
            debug!(
                "walk finished: {} markers, {} entries skipped",
                self.emitted, self.skipped
            );
            self.emitted = 0;
            self.skipped = 0;
        }
        None
    }
}

/// Walk `document`, yielding markers in document order.
#[must_use]
pub fn walk(document: &Document) -> TreeWalker<'_> {
    TreeWalker::new(document)
}

/// Interpret one `<dt>`. A heading wins over a link.
fn marker_for(term: &NodeRef) -> Option<BookmarkNode> {
    let term_sel = Selection::from(*term);

    if let Some(heading) = dom::child_element(&term_sel, "h3") {
        return Some(BookmarkNode::Category {
            title: dom::trimmed_text(&heading),
            depth: dom::count_ancestors(term, "dl"),
        });
    }

    let anchor = dom::child_element(&term_sel, "a")?;
    let href = dom::get_attribute(&anchor, "href")?;
    let href = href.trim();
    let text = dom::trimmed_text(&anchor);

    if href.is_empty() || text.is_empty() {
        return None;
    }

    Some(BookmarkNode::Link {
        text,
        href: href.to_string(),
    })
}
