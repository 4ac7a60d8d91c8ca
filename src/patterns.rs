//! Compiled regex patterns.
//!
//! All patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// A maximal run of characters that may not appear in an anchor.
///
/// Anchors keep ASCII letters, ASCII digits, `_` and CJK unified ideographs
/// (U+4E00..=U+9FFF); everything else collapses to a single `-`.
pub static ANCHOR_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-zA-Z0-9_\x{4e00}-\x{9fff}]+").expect("ANCHOR_SEPARATOR regex")
});

/// Runs of whitespace, used to flatten titles for single-line output.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));
