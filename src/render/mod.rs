//! Renderers for a [`BookmarkDocument`].
//!
//! Each renderer turns the normalized category list into one text artifact.
//! Anchors always come from [`Category::anchor`](crate::Category::anchor);
//! renderers never derive their own.

use std::fmt;

use crate::error::Result;
use crate::options::Options;
use crate::result::BookmarkDocument;

/// Markdown document with a table of contents.
pub mod markdown;

/// Single-page HTML with the table of contents on top.
pub mod page;

/// Two-pane HTML navigator with client-side search.
pub mod navigator;

/// Output artifact to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown with a table of contents.
    #[default]
    Markdown,
    /// Single HTML page, table of contents on top.
    Page,
    /// Two-pane HTML navigator with search.
    Navigator,
    /// Normalized categories as JSON.
    Json,
}

impl OutputFormat {
    /// Suffix appended to the input's file stem when naming the output.
    #[must_use]
    pub fn file_suffix(self) -> &'static str {
        match self {
            Self::Markdown => ".md",
            Self::Page => "_top.html",
            Self::Navigator => "_tree.html",
            Self::Json => ".json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Markdown => "markdown",
            Self::Page => "page",
            Self::Navigator => "navigator",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

/// Render `document` in the requested format.
///
/// Only JSON serialization can fail.
pub fn render(document: &BookmarkDocument, format: OutputFormat, options: &Options) -> Result<String> {
    log::debug!(
        "rendering {} categories / {} links as {format}",
        document.categories.len(),
        document.link_count()
    );

    Ok(match format {
        OutputFormat::Markdown => markdown::render(document, options),
        OutputFormat::Page => page::render(document, options),
        OutputFormat::Navigator => navigator::render(document),
        OutputFormat::Json => serde_json::to_string_pretty(document)?,
    })
}

/// Escape text for an HTML text node.
pub(crate) fn html_text(text: &str) -> std::borrow::Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Escape text for a double-quoted HTML attribute value.
pub(crate) fn html_attr(value: &str) -> std::borrow::Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}
