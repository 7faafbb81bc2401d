// Dictionary: the public facade.
//
// Owns the task channel and the worker thread handle. The facade validates
// arguments, copies caller data, and enqueues tasks; the worker applies
// them to the trie in FIFO order. `add_word` and `check` are synchronous
// only up to "task accepted into the queue"; the actual mutation or
// lookup happens later on the worker thread.
//
// Lifecycle: created with a live worker; closed by enqueueing Shutdown and
// joining the worker, which guarantees every previously accepted task has
// run and nothing leaks. A closed dictionary tolerates further calls: they
// are no-ops reporting success, and a second close is harmless.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use wordcheck_core::{is_word_char, validate_word};

use crate::runner::{self, Task};
use crate::tokenizer::WordPredicate;

/// Error type for dictionary operations.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The word contains a byte outside {A-Z, a-z, 0-9, 0x80-0xFF}.
    /// Detected before the task is enqueued; the store is untouched.
    #[error("invalid word: {0}")]
    InvalidWord(#[from] wordcheck_core::InvalidWordError),

    /// The worker thread could not be spawned (resource exhaustion).
    /// Only `Dictionary::new` can fail this way.
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] io::Error),
}

/// A dictionary of known words plus the worker that owns it.
///
/// `add_word`, `check`, and `flush` take `&self` and may be called from
/// multiple threads concurrently; all tasks land in one global FIFO order
/// (two racing calls are ordered by whichever enqueued first; callers
/// needing a strict order between two specific calls must serialize those
/// calls themselves). `close` consumes exclusive access and is idempotent.
pub struct Dictionary {
    tasks: Sender<Task>,
    worker: Option<JoinHandle<()>>,
    closed: AtomicBool,
}

impl Dictionary {
    /// Create an empty dictionary and start its worker thread.
    ///
    /// Fails only if the thread cannot be created.
    pub fn new() -> Result<Self, DictionaryError> {
        Self::with_word_predicate(is_word_char)
    }

    /// Create a dictionary whose tokenizer uses a caller-supplied
    /// word-character predicate instead of the default alphabet.
    ///
    /// The predicate only affects how `check` splits text into tokens;
    /// `add_word` validation always uses the fixed word alphabet.
    pub fn with_word_predicate(is_word: WordPredicate) -> Result<Self, DictionaryError> {
        let (tasks, queue) = mpsc::channel();
        let worker = thread::Builder::new()
            .name("wordcheck-worker".into())
            .spawn(move || runner::worker_loop(queue, is_word))?;

        Ok(Self {
            tasks,
            worker: Some(worker),
            closed: AtomicBool::new(false),
        })
    }

    /// Add a word to the dictionary.
    ///
    /// The word is validated here, synchronously: any byte outside the word
    /// alphabet yields `DictionaryError::InvalidWord` and nothing is
    /// enqueued. A valid word is copied and handed to the worker; insertion
    /// itself happens asynchronously, and duplicates are accepted silently.
    /// On a closed dictionary this is a no-op success.
    pub fn add_word(&self, word: &str) -> Result<(), DictionaryError> {
        if self.is_closed() {
            return Ok(());
        }
        validate_word(word)?;
        self.submit(Task::AddWord(word.to_owned()));
        Ok(())
    }

    /// Spell-check a text.
    ///
    /// Returns as soon as the task is enqueued. Later, on the worker
    /// thread, the text is tokenized and `on_misspelled` is invoked once
    /// per token absent from the dictionary, in document order, duplicates
    /// included, each token already ASCII-lowercased. The callback runs on
    /// a foreign thread and may fire after this call has returned; use
    /// [`flush`](Self::flush) or [`close`](Self::close) to await it.
    /// On a closed dictionary this is a no-op success and the callback is
    /// never invoked.
    pub fn check<F>(&self, text: &str, on_misspelled: F) -> Result<(), DictionaryError>
    where
        F: FnMut(&str) + Send + 'static,
    {
        if self.is_closed() {
            return Ok(());
        }
        self.submit(Task::Check {
            text: text.to_owned(),
            report: Box::new(on_misspelled),
        });
        Ok(())
    }

    /// Block until every task enqueued before this call has been executed.
    ///
    /// On a closed dictionary this is a no-op success (close already
    /// drained the queue).
    pub fn flush(&self) -> Result<(), DictionaryError> {
        if self.is_closed() {
            return Ok(());
        }
        let (done, wait) = mpsc::sync_channel(1);
        if self.submit(Task::Flush(done)) {
            // A recv error means the worker exited mid-shutdown; the queue
            // is drained either way.
            let _ = wait.recv();
        }
        Ok(())
    }

    /// Close the dictionary: finish all pending tasks and stop the worker.
    ///
    /// Blocks until the worker thread has fully exited, so no accepted task
    /// is left unexecuted. Idempotent: a second close is a harmless
    /// success.
    pub fn close(&mut self) -> Result<(), DictionaryError> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        let _ = self.tasks.send(Task::Shutdown);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::error!("worker thread panicked during shutdown");
            }
        }
        Ok(())
    }

    /// Whether `close` has been initiated.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Enqueue a task. Returns false if the worker is gone, which is
    /// treated as "already closed", a benign condition, not an error.
    fn submit(&self, task: Task) -> bool {
        self.tasks.send(task).is_ok()
    }
}

impl Drop for Dictionary {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
