//! Plain-text sequence utilities
//!
//! Whitespace stripping, newline removal, and case conversion. These
//! operate on any sequence regardless of alphabet.

use memchr::memchr2_iter;

/// Remove all whitespace (spaces, tabs, newlines) from a sequence
pub fn remove_whitespace(seq: &str) -> String {
    seq.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Remove every carriage-return and line-feed character
///
/// Spaces and all other characters are preserved. Uses a byte scan for the
/// newline positions; `\r` and `\n` are single bytes so slicing between
/// them stays on UTF-8 boundaries.
///
/// # Examples
/// ```
/// use biotools::core::text::remove_newlines;
///
/// assert_eq!(remove_newlines("AT\nCG"), "ATCG");
/// assert_eq!(remove_newlines("AT CG"), "AT CG");
/// ```
pub fn remove_newlines(seq: &str) -> String {
    let bytes = seq.as_bytes();
    let mut out = String::with_capacity(seq.len());
    let mut start = 0;
    for pos in memchr2_iter(b'\r', b'\n', bytes) {
        out.push_str(&seq[start..pos]);
        start = pos + 1;
    }
    out.push_str(&seq[start..]);
    out
}

/// Uppercase a sequence; length and non-letter characters preserved
pub fn uppercase(seq: &str) -> String {
    seq.to_uppercase()
}

/// Lowercase a sequence; length and non-letter characters preserved
pub fn lowercase(seq: &str) -> String {
    seq.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_whitespace() {
        assert_eq!(remove_whitespace("AT CG"), "ATCG");
        assert_eq!(remove_whitespace("A\tT\nC\rG"), "ATCG");
        assert_eq!(remove_whitespace(""), "");
        assert_eq!(remove_whitespace("ATCG"), "ATCG");
    }

    #[test]
    fn test_remove_newlines() {
        assert_eq!(remove_newlines("AT\nCG"), "ATCG");
        assert_eq!(remove_newlines("AT\r\nCG"), "ATCG");
        assert_eq!(remove_newlines("\nATCG\n"), "ATCG");
        assert_eq!(remove_newlines("ATCG"), "ATCG");
        assert_eq!(remove_newlines(""), "");
    }

    #[test]
    fn test_remove_newlines_keeps_spaces() {
        assert_eq!(remove_newlines("AT CG\n"), "AT CG");
        assert_eq!(remove_newlines(" \n "), "  ");
    }

    #[test]
    fn test_case_conversion() {
        assert_eq!(uppercase("atgc"), "ATGC");
        assert_eq!(lowercase("ATGC"), "atgc");
        assert_eq!(uppercase("AtGc-123"), "ATGC-123");
    }

    #[test]
    fn test_case_idempotent() {
        assert_eq!(uppercase(&uppercase("aTgC")), uppercase("aTgC"));
        assert_eq!(lowercase(&lowercase("aTgC")), lowercase("aTgC"));
    }
}
