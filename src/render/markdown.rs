//! Markdown output.
//!
//! Layout:
//!
//! ```text
//! # {title}
//!
//! ## 目录
//!
//! - [Work](#work)
//!   - [Tools](#work-tools)
//!
//! ## Work
//!
//! - [Site A](http://a)
//! ```
//!
//! PRIMARY categories get `##`, SECONDARY get `###`.

use crate::normalizer::Level;
use crate::options::Options;
use crate::patterns::WHITESPACE_RUN;
use crate::result::BookmarkDocument;

/// Characters that have special meaning in Markdown and need escaping.
const MARKDOWN_SPECIAL_CHARS: &[char] = &['\\', '*', '_', '[', ']', '<', '>'];

/// Escape Markdown special characters in text content.
///
/// Bookmark titles are arbitrary page titles; without escaping, a title like
/// `[WIP] *draft*` would break the surrounding link syntax.
///
/// # Characters Escaped
///
/// - `\` `*` `_` `[` `]` `<` `>`
///
/// # Examples
///
/// ```
/// use bookmark_pages::render::markdown::escape_markdown;
///
/// assert_eq!(escape_markdown("[WIP] *draft*"), r"\[WIP\] \*draft\*");
/// assert_eq!(escape_markdown("my_site"), r"my\_site");
/// ```
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 4);

    for ch in text.chars() {
        if MARKDOWN_SPECIAL_CHARS.contains(&ch) {
            result.push('\\');
        }
        result.push(ch);
    }

    result
}

/// Escaped text on a single line.
fn inline(text: &str) -> String {
    escape_markdown(&WHITESPACE_RUN.replace_all(text, " "))
}

/// Link destination, wrapped in `<...>` when it would end the link early.
#[must_use]
pub fn link_destination(href: &str) -> String {
    if href.contains(|c: char| c.is_whitespace() || c == '(' || c == ')') {
        format!("<{}>", href.replace('<', "%3C").replace('>', "%3E"))
    } else {
        href.to_string()
    }
}

/// Render the document as Markdown.
#[must_use]
pub fn render(document: &BookmarkDocument, options: &Options) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# {}\n", inline(&document.title)));

    // Table of contents
    lines.push(format!("## {}\n", inline(&options.toc_heading)));
    for cat in &document.categories {
        let indent = match cat.level {
            Level::Primary => "",
            Level::Secondary => "  ",
        };
        lines.push(format!("{indent}- [{}](#{})", inline(&cat.title), cat.anchor));
    }
    lines.push("\n".to_string());

    // Sections
    for cat in &document.categories {
        if options.markdown_anchor_tags {
            lines.push(format!("<a id=\"{}\"></a>", cat.anchor));
        }

        let marker = match cat.level {
            Level::Primary => "##",
            Level::Secondary => "###",
        };
        lines.push(format!("{marker} {}\n", inline(&cat.title)));

        if !cat.links.is_empty() {
            for link in &cat.links {
                lines.push(format!("- [{}]({})", inline(&link.text), link_destination(&link.href)));
            }
            lines.push("\n".to_string());
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::{Category, Link};

    fn category(title: &str, unique_id: &str, level: Level, anchor: &str, links: Vec<Link>) -> Category {
        Category {
            title: title.to_string(),
            unique_id: unique_id.to_string(),
            level,
            anchor: anchor.to_string(),
            links,
        }
    }

    fn sample() -> BookmarkDocument {
        BookmarkDocument {
            title: "Bookmarks".to_string(),
            categories: vec![
                category("Work", "Work", Level::Primary, "work", vec![Link::new("Site A", "http://a")]),
                category("Tools", "Work-Tools", Level::Secondary, "work-tools", vec![]),
            ],
        }
    }

    #[test]
    fn test_escape_markdown_plain_text_unchanged() {
        assert_eq!(escape_markdown("Hello World 中文"), "Hello World 中文");
        assert_eq!(escape_markdown(""), "");
    }

    #[test]
    fn test_escape_markdown_backslash() {
        assert_eq!(escape_markdown(r"C:\path"), r"C:\\path");
    }

    #[test]
    fn test_link_destination_wraps_parentheses() {
        assert_eq!(link_destination("http://a/b"), "http://a/b");
        assert_eq!(
            link_destination("https://en.wikipedia.org/wiki/Rust_(language)"),
            "<https://en.wikipedia.org/wiki/Rust_(language)>"
        );
    }

    #[test]
    fn test_render_layout_without_anchor_tags() {
        let options = Options {
            markdown_anchor_tags: false,
            ..Options::default()
        };
        let md = render(&sample(), &options);

        let expected = "# Bookmarks\n\n\
                        ## 目录\n\n\
                        - [Work](#work)\n  \
                        - [Tools](#work-tools)\n\n\n\
                        ## Work\n\n\
                        - [Site A](http://a)\n\n\n\
                        ### Tools\n";
        assert_eq!(md, expected);
    }

    #[test]
    fn test_render_emits_anchor_tags_by_default() {
        let md = render(&sample(), &Options::default());

        assert!(md.contains("<a id=\"work\"></a>\n## Work"));
        assert!(md.contains("<a id=\"work-tools\"></a>\n### Tools"));
    }

    #[test]
    fn test_render_escapes_titles_and_flattens_newlines() {
        let doc = BookmarkDocument {
            title: "T".to_string(),
            categories: vec![category(
                "a_b",
                "a_b",
                Level::Primary,
                "a_b",
                vec![Link::new("[x]\nnext", "http://x")],
            )],
        };
        let md = render(&doc, &Options::default());

        assert!(md.contains(r"## a\_b"));
        assert!(md.contains(r"- [\[x\] next](http://x)"));
    }
}
