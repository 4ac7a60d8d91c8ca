//! Two-pane HTML navigator.
//!
//! A fixed header shows the export title. The left pane holds a search box
//! and the PRIMARY categories; the right pane holds every category with its
//! links. Secondary folders are reachable by scrolling but are not listed in
//! the navigation pane.

use crate::normalizer::Level;
use crate::result::BookmarkDocument;

use super::{html_attr, html_text};

const STYLE: &str = r##"
        * {
            box-sizing: border-box;
        }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            margin: 0;
            padding: 0;
            background-color: #ffffff;
            height: 100vh;
            overflow: hidden;
        }
        .header {
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            height: 60px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            display: flex;
            align-items: center;
            padding: 0 20px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
            z-index: 1000;
        }
        .header h1 {
            margin: 0;
            font-size: 20px;
            font-weight: 600;
            display: flex;
            align-items: center;
        }
        .header .icon {
            margin-right: 12px;
            font-size: 24px;
        }
        .container {
            display: flex;
            width: 100%;
            height: 100vh;
            padding-top: 60px;
        }
        .navigation-panel {
            width: 300px;
            flex-shrink: 0;
            background: #f8f9fa;
            padding: 20px;
            overflow-y: auto;
            border-right: 1px solid #e9ecef;
            box-shadow: 2px 0 4px rgba(0,0,0,0.1);
            height: calc(100vh - 60px);
        }
        .navigation-panel h2 {
            margin-top: 0;
            color: #212529;
            border-bottom: 2px solid #007bff;
            padding-bottom: 8px;
            margin-bottom: 20px;
            font-size: 18px;
            font-weight: 600;
        }
        #nav-search {
            width: 100%;
            padding: 10px 12px;
            margin-bottom: 20px;
            border: 1px solid #ced4da;
            border-radius: 6px;
            font-size: 14px;
            transition: border-color 0.15s ease-in-out, box-shadow 0.15s ease-in-out;
        }
        #nav-search:focus {
            outline: none;
            border-color: #007bff;
            box-shadow: 0 0 0 0.2rem rgba(0, 123, 255, 0.25);
        }
        .nav-tree ul {
            list-style: none;
            padding-left: 0;
            margin: 0;
        }
        .nav-tree li {
            margin: 3px 0;
        }
        .nav-tree li a {
            text-decoration: none;
            color: #495057;
            display: block;
            padding: 8px 12px;
            border-radius: 4px;
            white-space: nowrap;
            overflow: hidden;
            text-overflow: ellipsis;
            font-size: 14px;
            transition: all 0.2s ease;
        }
        .nav-tree li a:hover {
            background-color: #e9ecef;
            color: #007bff;
        }
        .nav-tree li.hidden {
            display: none;
        }
        .content-panel {
            flex-grow: 1;
            padding: 30px;
            overflow-y: auto;
            background-color: #ffffff;
            height: calc(100vh - 60px);
        }
        .content-panel h2, .content-panel h3 {
            color: #212529;
            border-bottom: 2px solid #007bff;
            padding-bottom: 8px;
            margin-top: 40px;
            margin-bottom: 20px;
            font-weight: 600;
        }
        .content-panel h2:first-child {
            margin-top: 0;
        }
        .content-panel ol {
            margin-bottom: 25px;
            padding-left: 20px;
        }
        .content-panel li {
            margin-bottom: 8px;
            line-height: 1.6;
        }
        .content-panel li a {
            color: #007bff;
            text-decoration: none;
            word-break: break-all;
        }
        .content-panel li a:hover {
            text-decoration: underline;
        }
        #scrollToTopBtn {
            display: none;
            position: fixed;
            bottom: 30px;
            right: 30px;
            z-index: 99;
            border: none;
            outline: none;
            background-color: #007bff;
            color: white;
            cursor: pointer;
            padding: 15px;
            border-radius: 10px;
            font-size: 18px;
            box-shadow: 0 4px 8px rgba(0,0,0,0.2);
            transition: background-color 0.3s, transform 0.3s;
        }
        #scrollToTopBtn:hover {
            background-color: #0056b3;
            transform: translateY(-2px);
        }
        @media (max-width: 768px) {
            .header h1 { font-size: 16px; }
            .header .icon { font-size: 20px; margin-right: 8px; }
            .container { flex-direction: column; }
            .navigation-panel {
                width: 100%;
                height: auto;
                max-height: 40vh;
                border-right: none;
                border-bottom: 1px solid #e9ecef;
            }
            .content-panel { padding: 20px; height: auto; }
            #scrollToTopBtn { bottom: 20px; right: 20px; padding: 12px; font-size: 16px; }
        }
        .navigation-panel::-webkit-scrollbar, .content-panel::-webkit-scrollbar { width: 6px; }
        .navigation-panel::-webkit-scrollbar-track, .content-panel::-webkit-scrollbar-track { background: #f1f1f1; }
        .navigation-panel::-webkit-scrollbar-thumb, .content-panel::-webkit-scrollbar-thumb { background: #c1c1c1; border-radius: 3px; }
        .navigation-panel::-webkit-scrollbar-thumb:hover, .content-panel::-webkit-scrollbar-thumb:hover { background: #a8a8a8; }
"##;

const SCRIPT: &str = r##"
        document.addEventListener("DOMContentLoaded", function() {
            const navSearch = document.getElementById("nav-search");
            const navTree = document.querySelector(".nav-tree");
            const navLinks = navTree.querySelectorAll("a");
            const contentPanel = document.querySelector(".content-panel");
            const scrollToTopBtn = document.getElementById("scrollToTopBtn");

            navSearch.addEventListener("input", function() {
                const term = navSearch.value.toLowerCase().trim();
                navLinks.forEach(link => {
                    const item = link.closest("li");
                    const match = term === "" || link.textContent.toLowerCase().includes(term);
                    item.classList.toggle("hidden", !match);
                });
            });

            navLinks.forEach(link => {
                link.addEventListener("click", function(e) {
                    e.preventDefault();
                    const target = document.getElementById(this.getAttribute("href").substring(1));
                    if (!target) {
                        return;
                    }
                    contentPanel.scrollTo({
                        top: target.offsetTop - contentPanel.offsetTop,
                        behavior: "smooth"
                    });
                    navLinks.forEach(l => {
                        l.style.backgroundColor = "";
                        l.style.color = "";
                    });
                    this.style.backgroundColor = "#007bff";
                    this.style.color = "#ffffff";
                    setTimeout(() => {
                        this.style.backgroundColor = "";
                        this.style.color = "";
                    }, 3000);
                });
            });

            contentPanel.addEventListener("scroll", function() {
                scrollToTopBtn.style.display = contentPanel.scrollTop > 20 ? "block" : "none";
            });

            window.scrollToTop = function() {
                contentPanel.scrollTo({ top: 0, behavior: "smooth" });
            };

            document.addEventListener("keydown", function(e) {
                if (e.ctrlKey && e.key === "f") {
                    e.preventDefault();
                    navSearch.focus();
                }
            });
        });
"##;

/// Navigation pane: PRIMARY categories only.
fn nav_list(document: &BookmarkDocument) -> String {
    let mut html = String::from("<ul>");
    for cat in document.primary_categories() {
        html.push_str(&format!(
            "<li><a href=\"#{}\">{}</a></li>",
            html_attr(&cat.anchor),
            html_text(&cat.title)
        ));
    }
    html.push_str("</ul>");
    html
}

/// Content pane: every category with its links.
fn content(document: &BookmarkDocument) -> String {
    let mut html = String::new();
    for cat in &document.categories {
        let tag = match cat.level {
            Level::Primary => "h2",
            Level::Secondary => "h3",
        };
        html.push_str(&format!(
            "<{tag} id=\"{}\">{}</{tag}>",
            html_attr(&cat.anchor),
            html_text(&cat.title)
        ));

        if cat.links.is_empty() {
            continue;
        }
        html.push_str("<ol>");
        for link in &cat.links {
            html.push_str(&format!(
                "<li>{}：<a href=\"{}\" target=\"_blank\">{}</a></li>",
                html_text(&link.text),
                html_attr(&link.href),
                html_text(&link.href)
            ));
        }
        html.push_str("</ol>");
    }
    html
}

/// Render the document as a two-pane navigator page.
#[must_use]
pub fn render(document: &BookmarkDocument) -> String {
    let title = html_text(&document.title);
    let mut html = String::with_capacity(STYLE.len() + SCRIPT.len() + 4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"zh-CN\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("    <title>{title}</title>\n"));
    html.push_str(&format!("    <style>{STYLE}    </style>\n"));
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!(
        "    <div class=\"header\">\n        <h1>\n            <span class=\"icon\">📚</span>\n            {title}\n        </h1>\n    </div>\n"
    ));

    html.push_str("    <div class=\"container\">\n");
    html.push_str("        <div class=\"navigation-panel\">\n");
    html.push_str("            <h2>📚 目录导航</h2>\n");
    html.push_str("            <input type=\"text\" id=\"nav-search\" placeholder=\"🔍 搜索导航...\">\n");
    html.push_str(&format!(
        "            <div class=\"nav-tree\">\n                {}\n            </div>\n",
        nav_list(document)
    ));
    html.push_str("        </div>\n");
    html.push_str(&format!(
        "        <div class=\"content-panel\">\n            {}\n        </div>\n",
        content(document)
    ));
    html.push_str("    </div>\n");
    html.push_str("    <button onclick=\"scrollToTop()\" id=\"scrollToTopBtn\" title=\"回到顶部\">⬆️</button>\n");

    html.push_str(&format!("    <script>{SCRIPT}    </script>\n"));
    html.push_str("</body>\n</html>");

    html
}
