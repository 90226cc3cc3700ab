//! Trie construction over the pattern vocabulary.
//!
//! Each pattern is inserted as a path of codepoint-labeled edges from root,
//! so shared prefixes are naturally deduplicated. Insertion works on
//! `char`s, never bytes: a multi-byte codepoint is one edge and one unit of
//! depth, which is what makes the reported match spans codepoint offsets.

use super::arena::{NodeArena, NodeId};

/// Builds the prefix trie that failure linking later turns into the full
/// automaton.
pub struct TrieBuilder {
    arena: NodeArena,
}

impl TrieBuilder {
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
        }
    }

    /// Insert one pattern, marking its terminal node with `index`.
    ///
    /// `index` is the pattern's position in the original vocabulary list.
    /// Empty patterns are skipped entirely - no node is created - but the
    /// caller still advances the index, so a reported match index always
    /// maps straight back into the caller's list. If the same pattern is
    /// inserted twice the later index overwrites the earlier one.
    pub fn insert(&mut self, pattern: &str, index: usize) {
        if pattern.is_empty() {
            return;
        }

        let mut node = NodeId::ROOT;
        for ch in pattern.chars() {
            node = match self.arena.child(node, ch) {
                Some(next) => next,
                None => {
                    let depth = self.arena[node].depth + 1;
                    let child = self.arena.alloc(depth);
                    self.arena[node].children.insert(ch, child);
                    child
                }
            };
        }
        self.arena[node].pattern = Some(index);
    }

    /// Hand the finished trie over for failure linking.
    pub fn into_arena(self) -> NodeArena {
        self.arena
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}
