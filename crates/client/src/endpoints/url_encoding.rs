//! URL encoding utilities for constructing safe API paths.
//!
//! Provides percent-encoding for URL path segments so that special
//! characters in caller-supplied identifiers (alias names, usernames,
//! space ids, saved-object ids) cannot cause path traversal or broken
//! URL resolution.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// Based on RFC 3986 section 3.3, plus characters with special meaning in
/// URLs that resource names must not smuggle through: slash (path
/// traversal), percent (double-encoding), question mark and hash (query and
/// fragment), and the usual quote/bracket suspects.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'~')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_simple() {
        assert_eq!(encode_path_segment("client_7_alias"), "client_7_alias");
        assert_eq!(encode_path_segment("my-index.v2"), "my-index.v2");
    }

    #[test]
    fn test_encode_slash() {
        // Prevents path traversal
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
    }

    #[test]
    fn test_encode_space_and_percent() {
        assert_eq!(encode_path_segment("client space"), "client%20space");
        assert_eq!(encode_path_segment("100%"), "100%25");
    }

    #[test]
    fn test_encode_query_chars() {
        assert_eq!(encode_path_segment("a?b"), "a%3Fb");
        assert_eq!(encode_path_segment("a#b"), "a%23b");
    }

    #[test]
    fn test_encode_unicode() {
        assert_eq!(encode_path_segment("caf\u{00e9}"), "caf%C3%A9");
    }
}
