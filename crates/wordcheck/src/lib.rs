//! Dictionary-backed word validator.
//!
//! Callers load a set of known words into a [`Dictionary`], then submit
//! free-form text and receive, in document order, every token absent from
//! that set.
//!
//! # Architecture
//!
//! - [`tokenizer`] -- lazy token stream over input text (delimiter set is a
//!   configurable predicate)
//! - [`runner`] -- the task queue and the single worker thread that owns
//!   the word store exclusively
//! - [`handle`] -- the public [`Dictionary`] facade: argument validation,
//!   payload copying, task submission, lifecycle
//!
//! All mutations and lookups are serialized onto one background worker
//! through an unbounded FIFO channel, so the trie itself needs no locking.
//! `add_word` and `check` are asynchronous: they return once the task is
//! accepted into the queue, and misspelling callbacks fire later, on the
//! worker thread.
//!
//! ```no_run
//! use wordcheck::Dictionary;
//!
//! let mut dict = Dictionary::new()?;
//! dict.add_word("hello")?;
//! dict.check("Hello wrold", |word| println!("misspelled: {word}"))?;
//! dict.close()?; // drains pending work, joins the worker
//! # Ok::<(), wordcheck::DictionaryError>(())
//! ```

pub mod handle;
pub mod runner;
pub mod tokenizer;

pub use handle::{Dictionary, DictionaryError};
pub use wordcheck_core::InvalidWordError;
