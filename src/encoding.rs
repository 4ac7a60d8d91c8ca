//! Character encoding detection and transcoding.
//!
//! Browser exports are usually UTF-8 and say so in a `http-equiv` meta tag,
//! but older exports (and hand-edited files) use legacy code pages or carry a
//! byte order mark. Everything is decoded to UTF-8 before parsing.

use encoding_rs::{Encoding, UTF_8};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Bytes examined when sniffing for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="text/html; charset=...">`
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#)
        .expect("valid regex")
});

/// Detect the character encoding of a bookmark file.
///
/// Order of precedence:
/// 1. A byte order mark (UTF-8, UTF-16LE, UTF-16BE)
/// 2. `<meta http-equiv="Content-Type" content="...; charset=...">`
///    (what Netscape-format exports write)
/// 3. `<meta charset="...">`
/// 4. UTF-8
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_LEN)]);

    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Charset label declared in the document head, if any.
fn declared_charset(head: &str) -> Option<String> {
    [&*HTTP_EQUIV_CHARSET_RE, &*META_CHARSET_RE]
        .into_iter()
        .find_map(|re| re.captures(head).and_then(|c| c.get(1)))
        .map(|m| m.as_str().to_string())
}

/// Decode bookmark file bytes into a UTF-8 string.
///
/// A leading byte order mark is stripped. Malformed sequences are replaced
/// with U+FFFD instead of failing.
///
/// # Examples
///
/// ```
/// use bookmark_pages::encoding::decode_to_utf8;
///
/// let bytes = b"\xEF\xBB\xBF<TITLE>Bookmarks</TITLE>";
/// assert_eq!(decode_to_utf8(bytes), "<TITLE>Bookmarks</TITLE>");
/// ```
#[must_use]
pub fn decode_to_utf8(bytes: &[u8]) -> String {
    let encoding = detect_encoding(bytes);
    let (decoded, _used, had_errors) = encoding.decode(bytes);

    if had_errors {
        debug!("input is not valid {}; malformed bytes replaced", encoding.name());
    }

    decoded.into_owned()
}
