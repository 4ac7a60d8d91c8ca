//! Single-page HTML output: a table of contents block on top, then one
//! heading and ordered list per category.

use crate::normalizer::Level;
use crate::options::Options;
use crate::result::BookmarkDocument;

use super::{html_attr, html_text};

const STYLE: &[&str] = &[
    "body { font-family: Arial, sans-serif; margin: 20px; }",
    ".toc { background: #f5f5f5; padding: 15px; margin-bottom: 20px; border-radius: 5px; }",
    ".toc h2 { margin-top: 0; }",
    ".toc a { text-decoration: none; color: #0066cc; display: inline-block; margin: 5px 0; }",
    ".toc a:hover { text-decoration: underline; }",
    ".toc-h3 { padding-left: 20px; }",
    "h2 { color: #333; border-bottom: 2px solid #0066cc; padding-bottom: 5px; }",
    "h3 { color: #666; margin-top: 25px; }",
    "ol { margin-bottom: 20px; }",
    "li { margin-bottom: 5px; }",
];

/// Render the document as a single HTML page.
#[must_use]
pub fn render(document: &BookmarkDocument, options: &Options) -> String {
    let mut out: Vec<String> = vec![
        "<!DOCTYPE html>".to_string(),
        "<html lang=\"zh-CN\">".to_string(),
        "<head>".to_string(),
        "<meta charset=\"UTF-8\">".to_string(),
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">".to_string(),
        format!("<title>{}</title>", html_text(&document.title)),
        "<style>".to_string(),
    ];
    out.extend(STYLE.iter().map(|rule| (*rule).to_string()));
    out.push("</style>".to_string());
    out.push("</head>".to_string());
    out.push("<body>".to_string());

    out.push("<div class=\"toc\">".to_string());
    out.push(format!("<h2>{}</h2>", html_text(&options.toc_heading)));
    out.push("<div class=\"toc-content\">".to_string());
    for cat in &document.categories {
        let class = match cat.level {
            Level::Primary => "",
            Level::Secondary => " class=\"toc-h3\"",
        };
        out.push(format!(
            "<a href=\"#{}\"{class}>{}</a>",
            html_attr(&cat.anchor),
            html_text(&cat.title)
        ));
    }
    out.push("</div>".to_string());
    out.push("</div>".to_string());

    for cat in &document.categories {
        let tag = match cat.level {
            Level::Primary => "h2",
            Level::Secondary => "h3",
        };
        out.push(format!(
            "<{tag} id=\"{}\">{}</{tag}>",
            html_attr(&cat.anchor),
            html_text(&cat.title)
        ));

        if !cat.links.is_empty() {
            out.push("<ol>".to_string());
            for link in &cat.links {
                out.push(format!(
                    "<li>{}：<a href=\"{}\" target=\"_blank\">{}</a></li>",
                    html_text(&link.text),
                    html_attr(&link.href),
                    html_text(&link.href)
                ));
            }
            out.push("</ol>".to_string());
        }
    }

    out.push("</body>".to_string());
    out.push("</html>".to_string());

    out.join("\n")
}
