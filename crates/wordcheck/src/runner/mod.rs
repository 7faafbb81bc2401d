// Task queue and worker loop.
//
// All dictionary operations are funneled through one unbounded mpsc channel
// into a single dedicated worker thread. The worker is the only code that
// ever touches the trie, which is why the trie needs no internal locking.
// The channel gives the required ordering for free: tasks execute in
// exactly the order the queue observed them, regardless of which caller
// thread enqueued them, and the worker blocks on `recv()` when idle instead
// of polling.

use std::sync::mpsc::{Receiver, SyncSender};

use wordcheck_trie::Trie;

use crate::tokenizer::{Tokens, WordPredicate};

/// Callback invoked once per misspelled token, in document order.
pub type Reporter = Box<dyn FnMut(&str) + Send>;

/// One unit of work submitted by a caller.
///
/// Tasks are immutable once enqueued; payload ownership transfers from the
/// caller thread to the queue to the worker.
pub enum Task {
    /// Insert a word into the store.
    AddWord(String),
    /// Tokenize `text` and report every token absent from the store.
    Check {
        text: String,
        report: Reporter,
    },
    /// Completion barrier: signal once every task enqueued before this one
    /// has been executed.
    Flush(SyncSender<()>),
    /// Finish the current task backlog and exit the worker.
    Shutdown,
}

/// Worker loop: drain the queue sequentially until `Shutdown`.
///
/// Each task runs to completion before the next is observed. Failures on
/// this side of the queue cannot reach the caller that enqueued the task,
/// so they are logged and swallowed (the facade already validated the
/// payload before enqueue; see `handle`).
pub fn worker_loop(tasks: Receiver<Task>, is_word: WordPredicate) {
    let mut store = Trie::new();
    let mut lowered = String::new();

    loop {
        let task = match tasks.recv() {
            Ok(task) => task,
            Err(_) => {
                // Every sender gone without a Shutdown ever arriving. The
                // facade always sends Shutdown before dropping its sender,
                // so this indicates queue corruption.
                tracing::error!("task queue disconnected without shutdown");
                break;
            }
        };

        match task {
            Task::AddWord(word) => {
                if let Err(err) = store.insert(&word) {
                    // Unreachable through the facade, which rejects invalid
                    // words before they are enqueued.
                    tracing::warn!(%word, %err, "dropping invalid word");
                }
            }
            Task::Check { text, mut report } => {
                for token in Tokens::with_predicate(&text, is_word) {
                    if !store.contains(token) {
                        lowered.clear();
                        lowered.push_str(token);
                        lowered.make_ascii_lowercase();
                        report(&lowered);
                    }
                }
            }
            Task::Flush(done) => {
                // The waiter may have given up; that is fine.
                let _ = done.send(());
            }
            Task::Shutdown => break,
        }
    }

    tracing::debug!(words = store.len(), nodes = store.node_count(), "worker exiting");
}
