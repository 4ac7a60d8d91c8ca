//! # bookmark-pages
//!
//! Turns a browser bookmark export (the Netscape `<DL>`/`<DT>` format every
//! major browser writes) into readable pages: Markdown with a table of
//! contents, a single HTML page, or a two-pane searchable navigator.
//!
//! ## Quick Start
//!
//! ```rust
//! use bookmark_pages::{convert, extract, OutputFormat};
//!
//! let html = r#"<TITLE>Bookmarks</TITLE>
//! <DL><p>
//!     <DT><H3>Work</H3>
//!     <DL><p>
//!         <DT><A HREF="https://example.com">Example</A>
//!     </DL><p>
//! </DL><p>"#;
//!
//! let document = extract(html);
//! assert_eq!(document.categories[0].title, "Work");
//!
//! let markdown = convert(html, OutputFormat::Markdown)?;
//! assert!(markdown.contains("- [Example](https://example.com)"));
//! # Ok::<(), bookmark_pages::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Tree Walker** ([`walker`]): `<DT>` entries become category and link
//!   markers, each category tagged with its `<DL>` depth.
//! - **Category Normalizer** ([`normalizer`]): markers become a deduplicated
//!   list of categories with unique anchors.
//! - **Renderers** ([`render`]): the list becomes Markdown, HTML or JSON.

mod error;
mod options;
mod patterns;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Bookmark tree linearization.
pub mod walker;

/// Category dedup, hierarchy and anchors.
pub mod normalizer;

/// Markdown, HTML and JSON output.
pub mod render;

/// Input validation and output naming for the CLI.
pub mod files;

// Public API - re-exports
pub use error::{Error, Result};
pub use normalizer::{derive_anchor, is_root_label, normalize, Category, Level, Link};
pub use options::{Options, DEFAULT_ROOT_LABELS, DEFAULT_TITLE};
pub use render::{render, OutputFormat};
pub use result::BookmarkDocument;
pub use walker::{walk, BookmarkNode, TreeWalker};

/// Extracts the category list from a bookmark export using default options.
///
/// Never fails; markup that does not look like bookmarks yields an empty
/// category list.
#[must_use]
pub fn extract(html: &str) -> BookmarkDocument {
    extract_with_options(html, &Options::default())
}

/// Extracts the category list from a bookmark export with custom options.
///
/// # Example
///
/// ```rust
/// use bookmark_pages::{extract_with_options, Options};
///
/// let html = "<DL><DT><H3>Bookmarks bar</H3><DL><DT><H3>News</H3></DL></DL>";
/// let options = Options {
///     root_labels: vec!["bookmarks bar".to_string()],
///     ..Options::default()
/// };
///
/// let document = extract_with_options(html, &options);
/// assert_eq!(document.categories.len(), 1);
/// assert_eq!(document.categories[0].title, "News");
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> BookmarkDocument {
    log::debug!("parsing bookmark export ({} bytes)", html.len());

    let document = dom::parse(html);
    let title = dom::trimmed_text(&document.select("title").first());
    let title = if title.is_empty() {
        options.default_title.clone()
    } else {
        title
    };

    let categories = normalize(walk(&document), options);

    BookmarkDocument { title, categories }
}

/// Extracts the category list from raw file bytes.
///
/// The encoding is detected from a byte order mark or the export's meta tags
/// (see [`encoding::detect_encoding`]) before parsing.
pub fn extract_bytes(bytes: &[u8], options: &Options) -> Result<BookmarkDocument> {
    if bytes.is_empty() {
        return Err(Error::EmptyInput);
    }

    let html = encoding::decode_to_utf8(bytes);
    Ok(extract_with_options(&html, options))
}

/// Extracts and renders in one step using default options.
pub fn convert(html: &str, format: OutputFormat) -> Result<String> {
    let options = Options::default();
    render(&extract_with_options(html, &options), format, &options)
}

/// Extracts from raw bytes and renders in one step.
pub fn convert_bytes(bytes: &[u8], format: OutputFormat, options: &Options) -> Result<String> {
    let document = extract_bytes(bytes, options)?;
    render(&document, format, options)
}
