//! Component escaping and index recognition.

/// Largest array index a pointer token may address.
pub const MAX_INDEX: usize = i32::MAX as usize;

/// Longest token that can still be an index (`i32::MAX` has 10 digits).
const MAX_INDEX_DIGITS: usize = 10;

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use json_nav_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("no-escapes"), "no-escapes");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 first, so that "~01" decodes to "~1" and not "/"
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
///
/// Per RFC 6901, `~` is replaced with `~0` and `/` is replaced with `~1`.
///
/// # Example
///
/// ```
/// use json_nav_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Check if a string is a canonical non-negative array index.
///
/// Digits only, no leading zero unless the token is exactly `"0"`.
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Interpret a token as an array index, if it can be one.
///
/// Returns `None` for tokens that are only usable as member names, including
/// `"-"`, tokens with leading zeros and values above [`MAX_INDEX`].
pub fn parse_index(token: &str) -> Option<usize> {
    if token.len() > MAX_INDEX_DIGITS || !is_valid_index(token) {
        return None;
    }
    let index: usize = token.parse().ok()?;
    (index <= MAX_INDEX).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_component() {
        assert_eq!(unescape_component("~01"), "~1");
        assert_eq!(unescape_component("~1~0"), "/~");
        assert_eq!(unescape_component(""), "");
    }

    #[test]
    fn test_escape_component() {
        assert_eq!(escape_component("~/"), "~0~1");
        assert_eq!(escape_component("plain"), "plain");
    }

    #[test]
    fn test_is_valid_index() {
        assert!(is_valid_index("0"));
        assert!(is_valid_index("42"));
        assert!(!is_valid_index(""));
        assert!(!is_valid_index("01"));
        assert!(!is_valid_index("-1"));
        assert!(!is_valid_index("1a"));
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("2147483647"), Some(MAX_INDEX));
        assert_eq!(parse_index("2147483648"), None);
        assert_eq!(parse_index("99999999999"), None);
        assert_eq!(parse_index("-"), None);
        assert_eq!(parse_index("007"), None);
    }
}
