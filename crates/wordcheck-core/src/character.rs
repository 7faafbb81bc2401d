// Byte classification and normalization.
//
// Words are byte sequences drawn from a fixed alphabet: ASCII letters,
// ASCII digits, and every byte in 0x80-0xFF (so any non-ASCII UTF-8
// character is word material). ASCII uppercase letters are folded to
// lowercase before storage or lookup; all other bytes pass through
// unchanged. Every byte outside the alphabet acts as a token delimiter.

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Fold an ASCII uppercase letter to lowercase; leave every other byte
/// unchanged. Bytes >= 0x80 are never touched, so multi-byte UTF-8
/// sequences survive normalization intact.
#[inline]
pub fn normalize(b: u8) -> u8 {
    if b.is_ascii_uppercase() { b + 0x20 } else { b }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Check whether a byte belongs to the word alphabet:
/// `A-Z`, `a-z`, `0-9`, or `0x80-0xFF`.
#[inline]
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b >= 0x80
}

/// Char-level equivalent of [`is_word_byte`] for scanning UTF-8 text.
///
/// ASCII alphanumerics are word characters; every non-ASCII character is a
/// word character as well, since its UTF-8 encoding consists only of bytes
/// >= 0x80. All remaining ASCII characters are delimiters. On valid UTF-8
/// input this matches the byte rule exactly, and splitting on such
/// characters can never cut a multi-byte sequence in half.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || !c.is_ascii()
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Error for a word containing a byte outside the word alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid byte 0x{byte:02x} at position {position} in word")]
pub struct InvalidWordError {
    /// The offending byte (as it appeared in the input, before normalization).
    pub byte: u8,
    /// Byte offset of the offending byte within the word.
    pub position: usize,
}

/// Check that every byte of `word` belongs to the word alphabet.
///
/// The empty string is valid. Returns the first offending byte on failure.
pub fn validate_word(word: &str) -> Result<(), InvalidWordError> {
    match word.bytes().position(|b| !is_word_byte(b)) {
        None => Ok(()),
        Some(position) => Err(InvalidWordError {
            byte: word.as_bytes()[position],
            position,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- normalize --

    #[test]
    fn normalize_folds_ascii_uppercase() {
        assert_eq!(normalize(b'A'), b'a');
        assert_eq!(normalize(b'Z'), b'z');
        assert_eq!(normalize(b'M'), b'm');
    }

    #[test]
    fn normalize_leaves_lowercase_unchanged() {
        assert_eq!(normalize(b'a'), b'a');
        assert_eq!(normalize(b'z'), b'z');
    }

    #[test]
    fn normalize_leaves_digits_unchanged() {
        assert_eq!(normalize(b'0'), b'0');
        assert_eq!(normalize(b'9'), b'9');
    }

    #[test]
    fn normalize_leaves_high_bytes_unchanged() {
        assert_eq!(normalize(0x80), 0x80);
        assert_eq!(normalize(0xC3), 0xC3);
        assert_eq!(normalize(0xFF), 0xFF);
    }

    #[test]
    fn normalize_leaves_delimiters_unchanged() {
        assert_eq!(normalize(b' '), b' ');
        assert_eq!(normalize(b'!'), b'!');
        assert_eq!(normalize(b'['), b'[');
    }

    // -- is_word_byte --

    #[test]
    fn word_bytes_include_letters_digits_and_high_bytes() {
        assert!(is_word_byte(b'a'));
        assert!(is_word_byte(b'Z'));
        assert!(is_word_byte(b'5'));
        assert!(is_word_byte(0x80));
        assert!(is_word_byte(0xFF));
    }

    #[test]
    fn punctuation_and_whitespace_are_not_word_bytes() {
        for b in [b' ', b'\n', b'\t', b'.', b',', b'-', b'!', b'\'', b'"', b'_', 0x7F, 0x00] {
            assert!(!is_word_byte(b), "0x{b:02x} should be a delimiter");
        }
    }

    // -- is_word_char --

    #[test]
    fn word_chars_match_byte_rule_for_ascii() {
        for b in 0u8..0x80 {
            let c = b as char;
            assert_eq!(is_word_char(c), is_word_byte(b), "mismatch for {c:?}");
        }
    }

    #[test]
    fn non_ascii_chars_are_word_chars() {
        assert!(is_word_char('\u{00E4}')); // ä
        assert!(is_word_char('\u{00D6}')); // Ö
        assert!(is_word_char('\u{4E00}')); // CJK
    }

    // -- validate_word --

    #[test]
    fn valid_words_pass() {
        assert!(validate_word("hello").is_ok());
        assert!(validate_word("Hello123").is_ok());
        assert!(validate_word("\u{00E4}iti").is_ok());
    }

    #[test]
    fn empty_word_is_valid() {
        assert!(validate_word("").is_ok());
    }

    #[test]
    fn invalid_word_reports_first_offending_byte() {
        let err = validate_word("foo!bar").unwrap_err();
        assert_eq!(err.byte, b'!');
        assert_eq!(err.position, 3);
    }

    #[test]
    fn whitespace_is_rejected() {
        assert!(validate_word("two words").is_err());
        assert!(validate_word(" leading").is_err());
    }
}
