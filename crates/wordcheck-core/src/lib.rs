// wordcheck-core: shared byte classification and word validation.
//
// Everything else in the workspace agrees on what a "word byte" is through
// this crate: the trie normalizes through it before storing, the tokenizer
// splits on its complement, and the facade validates caller input with it.

pub mod character;

pub use character::{
    InvalidWordError, is_word_byte, is_word_char, normalize, validate_word,
};
