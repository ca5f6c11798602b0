//! Validation of Dropbox file references.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{DropboxError, Result};

/// Opaque file id as issued by the API, e.g. `id:MP8Ja5KjILAAAAAAAAAACg`.
static FILE_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^id:[a-zA-Z0-9_-]+$").expect("Invalid file id regex"));

/// Namespace-relative path, e.g. `nspath:4:/reports/q3.pdf`.
static NSPATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^nspath:[0-9]+:.+$").expect("Invalid nspath regex"));

/// Validate a caller-supplied file reference.
///
/// Accepts the reference shapes the sharing endpoints take:
/// - `id:<opaque id>`
/// - an absolute path such as `/folder/file.txt`
/// - `nspath:<namespace id>:<path>`
///
/// # Examples
///
/// ```
/// use dbx_members::file_id::parse_file_ref;
///
/// let file = parse_file_ref("id:MP8Ja5KjILAAAAAAAAAACg").unwrap();
/// assert_eq!(file, "id:MP8Ja5KjILAAAAAAAAAACg");
///
/// let file = parse_file_ref("/reports/q3.pdf").unwrap();
/// assert_eq!(file, "/reports/q3.pdf");
/// ```
pub fn parse_file_ref(input: &str) -> Result<String> {
    let trimmed = input.trim();

    if FILE_ID_REGEX.is_match(trimmed) {
        return Ok(trimmed.to_string());
    }

    if NSPATH_REGEX.is_match(trimmed) {
        return Ok(trimmed.to_string());
    }

    // Absolute path with at least one component
    if trimmed.starts_with('/') && trimmed.len() > 1 {
        return Ok(trimmed.to_string());
    }

    Err(DropboxError::InvalidFileRef(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id() {
        assert_eq!(
            parse_file_ref("id:MP8Ja5KjILAAAAAAAAAACg").unwrap(),
            "id:MP8Ja5KjILAAAAAAAAAACg"
        );
    }

    #[test]
    fn test_path() {
        assert_eq!(parse_file_ref("/folder/file.txt").unwrap(), "/folder/file.txt");
    }

    #[test]
    fn test_nspath() {
        assert_eq!(
            parse_file_ref("nspath:4:/shared/doc.pdf").unwrap(),
            "nspath:4:/shared/doc.pdf"
        );
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(parse_file_ref("  id:abc123  ").unwrap(), "id:abc123");
    }

    #[test]
    fn test_invalid_refs() {
        assert!(parse_file_ref("").is_err());
        assert!(parse_file_ref("   ").is_err());
        assert!(parse_file_ref("/").is_err());
        assert!(parse_file_ref("id:").is_err());
        assert!(parse_file_ref("not-a-reference").is_err());
        assert!(parse_file_ref("nspath:x:/bad-namespace").is_err());
    }
}
