//! Logging utilities
//!
//! Helpers for keeping diagnostic lines readable when raw payloads are large

/// Truncate a payload with a note about original length
///
/// Backs off to the previous char boundary so multi-byte payloads never panic.
pub fn truncate_payload(s: &str, max_len: usize) -> String {
    if s.len() > max_len {
        let mut end = max_len;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... ({} chars truncated)", &s[..end], s.len() - end)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_payload_untouched() {
        assert_eq!(truncate_payload("hello", 10), "hello");
    }

    #[test]
    fn test_long_payload_truncated() {
        let out = truncate_payload("abcdefghij", 4);
        assert_eq!(out, "abcd... (6 chars truncated)");
    }

    #[test]
    fn test_multibyte_boundary() {
        // é is two bytes; cutting at 1 would split it
        let out = truncate_payload("ééé", 1);
        assert!(out.starts_with("..."));
    }
}
