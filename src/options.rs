//! Configuration options for bookmark conversion.
//!
//! The `Options` struct controls which container folders are ignored and how
//! the renderers label their output.

/// Folder titles that browsers use for the export's root container.
///
/// These never become categories.
pub const DEFAULT_ROOT_LABELS: &[&str] = &["bookmarks", "收藏夹", "收藏栏", "书签栏"];

/// Title used when the bookmark file has no usable `<title>`.
pub const DEFAULT_TITLE: &str = "书签导航";

/// Configuration options for bookmark conversion.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use bookmark_pages::Options;
///
/// let options = Options {
///     root_labels: vec!["bookmarks bar".to_string(), "other bookmarks".to_string()],
///     ..Options::default()
/// };
/// assert!(options.markdown_anchor_tags);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Root-container folder titles to skip, compared case-insensitively.
    ///
    /// Default: [`DEFAULT_ROOT_LABELS`]
    pub root_labels: Vec<String>,

    /// Document title used when the input has no `<title>` text.
    ///
    /// Default: `"书签导航"`
    pub default_title: String,

    /// Heading of the table-of-contents block in Markdown and page output.
    ///
    /// Default: `"目录"`
    pub toc_heading: String,

    /// Emit `<a id="..."></a>` before every Markdown heading.
    ///
    /// Markdown viewers derive heading ids on their own, and their rules
    /// rarely match our anchors. The explicit tag makes TOC links resolve.
    ///
    /// Default: `true`
    pub markdown_anchor_tags: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root_labels: DEFAULT_ROOT_LABELS.iter().map(|s| (*s).to_string()).collect(),
            default_title: DEFAULT_TITLE.to_string(),
            toc_heading: "目录".to_string(),
            markdown_anchor_tags: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert_eq!(opts.root_labels, vec!["bookmarks", "收藏夹", "收藏栏", "书签栏"]);
        assert_eq!(opts.default_title, "书签导航");
        assert_eq!(opts.toc_heading, "目录");
        assert!(opts.markdown_anchor_tags);
    }

    #[test]
    fn test_struct_update_keeps_other_defaults() {
        let opts = Options {
            markdown_anchor_tags: false,
            ..Options::default()
        };

        assert!(!opts.markdown_anchor_tags);
        assert_eq!(opts.root_labels.len(), DEFAULT_ROOT_LABELS.len());
    }
}
