//! Category Normalizer
//!
//! Folds the walker's marker stream into the final category list:
//!
//! - root-container folders ("Bookmarks", "收藏夹", ...) and blank titles are
//!   skipped without touching the current category,
//! - depth-1 folders are [`Level::Primary`] and become the parent for
//!   everything deeper,
//! - deeper folders are [`Level::Secondary`] and keyed as `parent-title`,
//! - a second folder with an already-seen key is dropped together with the
//!   links that follow it,
//! - links are attached to the current category, exact duplicates removed.
//!
//! Anchors are derived here and nowhere else, so every renderer links to the
//! same, collision-free fragment ids.

use std::collections::HashSet;

use log::{debug, trace};
use serde::Serialize;

use crate::options::Options;
use crate::patterns::ANCHOR_SEPARATOR;
use crate::walker::BookmarkNode;

/// Anchor used when a key has no characters an anchor may keep.
const FALLBACK_ANCHOR: &str = "category";

/// Heading level of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// A folder directly under the root container.
    Primary,
    /// A folder nested inside a primary folder, at any depth.
    Secondary,
}

/// One bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Link {
    pub text: String,
    pub href: String,
}

impl Link {
    #[must_use]
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

/// A bookmark folder with its links, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Folder title, trimmed.
    pub title: String,
    /// Dedup key: the title for primary folders, `parent-title` otherwise.
    pub unique_id: String,
    pub level: Level,
    /// Fragment id, unique within one category list.
    pub anchor: String,
    /// Links in first-seen order, without duplicates.
    pub links: Vec<Link>,
}

impl Category {
    /// Whether this is a top-level folder.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.level == Level::Primary
    }
}

/// Single-pass accumulator for [`normalize`].
#[derive(Default)]
struct Accumulator {
    categories: Vec<Category>,
    /// Index into `categories` that links attach to.
    current: Option<usize>,
    parent_title: String,
    seen_ids: HashSet<String>,
    issued_anchors: HashSet<String>,
    /// Per-category `(text, href)` pairs, parallel to `categories`.
    seen_links: Vec<HashSet<Link>>,
    dropped_links: usize,
}

impl Accumulator {
    fn step(mut self, marker: BookmarkNode, options: &Options) -> Self {
        match marker {
            BookmarkNode::Category { title, depth } => self.open_category(&title, depth, options),
            BookmarkNode::Link { text, href } => self.add_link(Link { text, href }),
        }
        self
    }

    fn open_category(&mut self, title: &str, depth: usize, options: &Options) {
        let title = title.trim();
        if title.is_empty() || is_root_label(title, options) {
            trace!("skipping container folder {title:?}");
            return;
        }

        let (level, unique_id) = if depth <= 1 {
            self.parent_title = title.to_string();
            (Level::Primary, title.to_string())
        } else if self.parent_title.is_empty() {
            (Level::Secondary, title.to_string())
        } else {
            (Level::Secondary, format!("{}-{title}", self.parent_title))
        };

        if self.seen_ids.contains(&unique_id) {
            // Links under the repeated folder are lost, matching the
            // behaviour users of existing exports rely on.
            debug!("duplicate category {unique_id:?}; following links dropped");
            self.current = None;
            return;
        }

        let anchor = self.issue_anchor(&unique_id);
        self.seen_ids.insert(unique_id.clone());
        self.categories.push(Category {
            title: title.to_string(),
            unique_id,
            level,
            anchor,
            links: Vec::new(),
        });
        self.seen_links.push(HashSet::new());
        self.current = Some(self.categories.len() - 1);
    }

    fn add_link(&mut self, link: Link) {
        let Some(index) = self.current else {
            self.dropped_links += 1;
            return;
        };

        if self.seen_links[index].insert(link.clone()) {
            self.categories[index].links.push(link);
        }
    }

    /// Derive an anchor and suffix it until it is unused.
    fn issue_anchor(&mut self, unique_id: &str) -> String {
        let base = derive_anchor(unique_id);
        let mut anchor = base.clone();
        let mut ordinal = 2;

        while self.issued_anchors.contains(&anchor) {
            anchor = format!("{base}-{ordinal}");
            ordinal += 1;
        }

        if anchor != base {
            debug!("anchor {base:?} already used; {unique_id:?} gets {anchor:?}");
        }
        self.issued_anchors.insert(anchor.clone());
        anchor
    }
}

/// Build the category list from a marker stream.
///
/// Never fails: markers that do not fit (links before any category, repeated
/// folders, root containers) are dropped.
///
/// # Example
///
/// ```rust
/// use bookmark_pages::{normalize, BookmarkNode, Level, Options};
///
/// let categories = normalize(
///     [
///         BookmarkNode::category("Work", 1),
///         BookmarkNode::link("Site A", "http://a"),
///         BookmarkNode::category("Tools", 2),
///         BookmarkNode::link("Site B", "http://b"),
///     ],
///     &Options::default(),
/// );
///
/// assert_eq!(categories[1].unique_id, "Work-Tools");
/// assert_eq!(categories[1].level, Level::Secondary);
/// ```
pub fn normalize<I>(markers: I, options: &Options) -> Vec<Category>
where
    I: IntoIterator<Item = BookmarkNode>,
{
    let acc = markers
        .into_iter()
        .fold(Accumulator::default(), |acc, marker| acc.step(marker, options));

    if acc.dropped_links > 0 {
        debug!("{} links had no category and were dropped", acc.dropped_links);
    }
    debug!("normalized {} categories", acc.categories.len());

    acc.categories
}

/// Derive the fragment id for a category key.
///
/// Runs of characters other than ASCII letters, ASCII digits, `_` and CJK
/// ideographs become one `-`; leading and trailing `-` are trimmed and ASCII
/// letters lower-cased. This alone is not injective (`"A B"` and `"A-B"`
/// both give `"a-b"`); [`normalize`] adds numeric suffixes on collision.
///
/// ```rust
/// use bookmark_pages::derive_anchor;
///
/// assert_eq!(derive_anchor("Work-Dev Tools!"), "work-dev-tools");
/// assert_eq!(derive_anchor("常用-开发 工具"), "常用-开发-工具");
/// ```
#[must_use]
pub fn derive_anchor(unique_id: &str) -> String {
    let anchor = ANCHOR_SEPARATOR
        .replace_all(unique_id, "-")
        .trim_matches('-')
        .to_ascii_lowercase();

    if anchor.is_empty() {
        FALLBACK_ANCHOR.to_string()
    } else {
        anchor
    }
}

/// Whether `title` names a browser's root container.
#[must_use]
pub fn is_root_label(title: &str, options: &Options) -> bool {
    let title = title.trim().to_lowercase();
    options
        .root_labels
        .iter()
        .any(|label| label.to_lowercase() == title)
}
