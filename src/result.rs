//! Result types for extraction output.
//!
//! A [`BookmarkDocument`] is what every renderer consumes: the export's title
//! and its normalized categories.

use serde::Serialize;

use crate::normalizer::Category;

/// A bookmark export reduced to its title and category list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookmarkDocument {
    /// `<title>` of the export, or the configured default title.
    pub title: String,

    /// Categories in document order.
    pub categories: Vec<Category>,
}

impl BookmarkDocument {
    /// Total number of links across all categories.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.categories.iter().map(|c| c.links.len()).sum()
    }

    /// Top-level categories only.
    pub fn primary_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.is_primary())
    }
}
