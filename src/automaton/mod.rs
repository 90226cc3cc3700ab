//! Aho-Corasick automaton over Unicode codepoints.
//!
//! The automaton finds every occurrence of any pattern from a fixed
//! vocabulary in a single pass over the input. It is built in two stages: a
//! prefix trie over the pattern set, then a breadth-first pass that adds
//! failure links so matching never rescans input after a mismatch.
//!
//! # Module Organization
//!
//! - `arena`: index-addressed node storage (`NodeId`, `TrieNode`, `NodeArena`)
//! - `trie`: trie construction from the pattern vocabulary
//! - `fail_links`: breadth-first failure-link computation
//! - `scanner`: the scan state machine and `Match` spans

mod arena;
mod fail_links;
mod scanner;
mod trie;

use arena::NodeArena;
use fail_links::link_failures;
use trie::TrieBuilder;

pub use scanner::{Match, Scanner};

/// A fully built Aho-Corasick automaton: the trie plus failure links.
///
/// Immutable once built. All nodes live in one arena owned by the
/// automaton, so the whole structure is torn down as a unit; scanning only
/// reads it, which is what lets any number of scans share one automaton.
///
/// ```
/// use acdetector::Automaton;
///
/// let automaton = Automaton::build(&["he", "she", "his", "hers"]);
/// let matches = automaton.find_all("ushers");
/// assert_eq!(matches.len(), 2);
/// assert_eq!((matches[0].start, matches[0].end, matches[0].pattern), (1, 4, 1));
/// assert_eq!((matches[1].start, matches[1].end, matches[1].pattern), (2, 6, 3));
/// ```
pub struct Automaton {
    arena: NodeArena,
}

impl Automaton {
    /// Build an automaton from a pattern vocabulary.
    ///
    /// Pattern indices reported in [`Match`] are positions in `patterns`;
    /// empty entries are never inserted but keep their position, so the
    /// index always maps straight back into the caller's list. Building
    /// from an empty or all-empty vocabulary is valid and yields an
    /// automaton that matches nothing.
    pub fn build<S: AsRef<str>>(patterns: &[S]) -> Automaton {
        let mut builder = TrieBuilder::new();
        for (index, pattern) in patterns.iter().enumerate() {
            builder.insert(pattern.as_ref(), index);
        }
        let mut arena = builder.into_arena();
        link_failures(&mut arena);
        Automaton { arena }
    }

    /// Find all pattern occurrences in `text`, longest match per run.
    ///
    /// Spans are codepoint offsets, reported in order of finalization.
    /// Never fails: any well-formed string, including the empty one, scans
    /// to a (possibly empty) list of matches.
    pub fn find_all(&self, text: &str) -> Vec<Match> {
        let mut scanner = Scanner::new(self);
        let mut matches = Vec::new();
        for ch in text.chars() {
            if let Some(m) = scanner.step(ch) {
                matches.push(m);
            }
        }
        if let Some(m) = scanner.finish() {
            matches.push(m);
        }
        matches
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// True if no pattern was inserted (scanning can never match).
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub(crate) fn arena(&self) -> &NodeArena {
        &self.arena
    }
}

impl std::fmt::Debug for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Automaton")
            .field("node_count", &self.arena.len())
            .finish()
    }
}
