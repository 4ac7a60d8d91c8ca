//! Input validation and output naming for the command-line front end.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::render::OutputFormat;

/// Extensions accepted as bookmark exports, compared case-insensitively.
const HTML_EXTENSIONS: &[&str] = &["html", "htm"];

/// Clean up a path typed or pasted at the prompt.
///
/// Strips surrounding whitespace and one pair of matching quotes, which
/// file managers add when copying a path.
#[must_use]
pub fn clean_input_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| trimmed.strip_prefix(*q).and_then(|s| s.strip_suffix(*q)))
        .unwrap_or(trimmed);
    PathBuf::from(unquoted)
}

/// Check that `path` exists and looks like an HTML export.
pub fn validate_input(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    let is_html = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| HTML_EXTENSIONS.iter().any(|h| ext.eq_ignore_ascii_case(h)));

    if !is_html {
        return Err(Error::UnsupportedExtension(path.to_path_buf()));
    }

    Ok(())
}

/// Output path beside `input`: `{stem}{suffix}` in the same directory.
#[must_use]
pub fn output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or(Cow::Borrowed("bookmarks"), |s| s.to_string_lossy());
    input.with_file_name(format!("{stem}{}", format.file_suffix()))
}

/// Read the input file as bytes after validating it.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    validate_input(path)?;
    Ok(fs::read(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_input_path_strips_quotes_and_whitespace() {
        assert_eq!(clean_input_path("  \"/tmp/a b.html\"\n"), PathBuf::from("/tmp/a b.html"));
        assert_eq!(clean_input_path("'/tmp/x.html'"), PathBuf::from("/tmp/x.html"));
        assert_eq!(clean_input_path("/tmp/plain.html"), PathBuf::from("/tmp/plain.html"));
    }

    #[test]
    fn clean_input_path_keeps_unbalanced_quote() {
        assert_eq!(clean_input_path("\"/tmp/x.html"), PathBuf::from("\"/tmp/x.html"));
    }

    #[test]
    fn output_path_uses_format_suffix() {
        let input = Path::new("/data/exports/bookmarks_2024.html");

        assert_eq!(output_path(input, OutputFormat::Markdown), Path::new("/data/exports/bookmarks_2024.md"));
        assert_eq!(output_path(input, OutputFormat::Page), Path::new("/data/exports/bookmarks_2024_top.html"));
        assert_eq!(
            output_path(input, OutputFormat::Navigator),
            Path::new("/data/exports/bookmarks_2024_tree.html")
        );
    }

    #[test]
    fn validate_input_reports_missing_file() {
        let err = validate_input(Path::new("/no/such/bookmarks.html")).unwrap_err();
        assert!(matches!(err, Error::InputNotFound(_)));
    }

    #[test]
    fn validate_input_rejects_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");
        fs::write(&path, "{}").unwrap();

        assert!(matches!(validate_input(&path), Err(Error::UnsupportedExtension(_))));
    }

    #[test]
    fn validate_input_accepts_uppercase_htm() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("BOOKMARKS.HTM");
        fs::write(&path, "<DL></DL>").unwrap();

        assert!(validate_input(&path).is_ok());
    }
}
