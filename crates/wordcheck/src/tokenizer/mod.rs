// Tokenizer: splits input text into candidate words.
//
// A token is a maximal run of word characters; every other character is a
// delimiter. The delimiter set is not baked in: callers supply a predicate
// (the default is `wordcheck_core::is_word_char`, which matches the byte
// alphabet the trie accepts). Because the default delimiters are all ASCII,
// splitting can never cut a multi-byte UTF-8 sequence, and every token is a
// valid sub-slice of the input.

use wordcheck_core::is_word_char;

/// Predicate deciding whether a character belongs to a word.
///
/// A plain `fn` pointer rather than a generic closure: the predicate has to
/// cross the channel to the worker thread, and a `fn` is trivially
/// `Send + 'static` and copyable.
pub type WordPredicate = fn(char) -> bool;

/// Lazy iterator over the tokens of a text, in input order.
///
/// Consecutive delimiters never produce an empty token; text consisting
/// only of delimiters yields nothing. Tokens are borrowed sub-slices of
/// the input, unnormalized (case folding happens at lookup time).
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
    is_word: WordPredicate,
}

impl<'a> Tokens<'a> {
    /// Tokenize with the default word-character predicate.
    pub fn new(text: &'a str) -> Self {
        Self::with_predicate(text, is_word_char)
    }

    /// Tokenize with a caller-supplied word-character predicate.
    pub fn with_predicate(text: &'a str, is_word: WordPredicate) -> Self {
        Self { rest: text, is_word }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let is_word = self.is_word;

        // Skip leading delimiters.
        let start = self.rest.find(|c: char| is_word(c))?;
        let rest = &self.rest[start..];

        // The token runs to the next delimiter or end of input.
        let end = rest
            .find(|c: char| !is_word(c))
            .unwrap_or(rest.len());

        self.rest = &rest[end..];
        Some(&rest[..end])
    }
}
