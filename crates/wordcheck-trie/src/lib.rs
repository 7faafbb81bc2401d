//! Prefix-tree ("trie") word store.
//!
//! Holds the set of known words and supports case-insensitive insertion and
//! membership tests. Each node represents one normalized byte position
//! shared by all words passing through it.
//!
//! # Representation
//!
//! Nodes live in a flat arena (`Vec<Node>`) and refer to their children by
//! `u32` index instead of owning boxed subtrees; the root is always index 0
//! and is created with the store. Child slots are a sparse map keyed by
//! normalized byte value, so the per-byte step stays O(1) amortized while
//! nodes cost memory proportional to their actual branching factor. Both
//! insertion and lookup are O(length of word).
//!
//! End-of-word is an explicit `terminal` flag per node: a prefix of a longer
//! word is not a member unless it was inserted as a word in its own right.
//!
//! The store is single-owner and does no locking; concurrent access is the
//! caller's problem (the `wordcheck` crate serializes everything through one
//! worker thread).

use hashbrown::HashMap;

use wordcheck_core::{InvalidWordError, is_word_byte, normalize, validate_word};

/// Index of a node within the arena.
///
/// A `u32` index caps the arena at 2^32 nodes. Each node costs at least
/// 48 bytes, so reaching the cap would require a ~200 GiB arena;
/// allocation fails long before `add_child` could overflow the index.
type NodeId = u32;

/// The root node is created with the store and never moves.
const ROOT: NodeId = 0;

/// One byte position in the tree.
#[derive(Debug, Default)]
struct Node {
    /// Children keyed by normalized byte value.
    children: HashMap<u8, NodeId>,
    /// Whether a stored word ends at this node.
    terminal: bool,
}

/// The word store.
#[derive(Debug)]
pub struct Trie {
    nodes: Vec<Node>,
    /// Number of distinct words stored (terminal nodes).
    words: usize,
}

impl Trie {
    /// Create an empty store holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            words: 0,
        }
    }

    /// Insert a word.
    ///
    /// Bytes are normalized (ASCII uppercase folded to lowercase) before
    /// storage. The word is rejected, without mutating the store, if any
    /// byte falls outside the word alphabet. Inserting a word that is
    /// already present is a silent success. The empty string is a valid,
    /// trivially-inserted word: it marks the root terminal.
    pub fn insert(&mut self, word: &str) -> Result<(), InvalidWordError> {
        // Validation completes before any node is touched, so a rejected
        // word leaves the store exactly as it was.
        validate_word(word)?;

        let mut node = ROOT;
        let mut bytes = word.bytes().map(normalize);

        // Walk the existing path as far as it goes.
        let mut pending = None;
        for b in bytes.by_ref() {
            match self.nodes[node as usize].children.get(&b) {
                Some(&child) => node = child,
                None => {
                    pending = Some(b);
                    break;
                }
            }
        }

        // Grow the missing suffix, one fresh node per remaining byte.
        if let Some(first) = pending {
            node = self.add_child(node, first);
            for b in bytes {
                node = self.add_child(node, b);
            }
        }

        if !self.nodes[node as usize].terminal {
            self.nodes[node as usize].terminal = true;
            self.words += 1;
        }
        Ok(())
    }

    /// Check whether a word is present.
    ///
    /// Uses the same normalization as [`insert`](Self::insert). Never errors
    /// and never mutates: a byte outside the word alphabet, or a path that
    /// ends early, simply yields `false`.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = ROOT;
        for b in word.bytes() {
            if !is_word_byte(b) {
                return false;
            }
            match self.nodes[node as usize].children.get(&normalize(b)) {
                Some(&child) => node = child,
                None => return false,
            }
        }
        self.nodes[node as usize].terminal
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether the store holds no words.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Total number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn add_child(&mut self, parent: NodeId, byte: u8) -> NodeId {
        debug_assert!(self.nodes.len() < NodeId::MAX as usize);
        let id = self.nodes.len() as NodeId;
        self.nodes.push(Node::default());
        self.nodes[parent as usize].children.insert(byte, id);
        id
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
