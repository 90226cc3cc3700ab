//! Failure-link computation: the pass that turns a prefix trie into an
//! Aho-Corasick automaton.
//!
//! A node's failure link points at the node for the longest proper suffix
//! of its path that is also a prefix of some pattern, or root if there is
//! none. The traversal must be breadth-first: a node's link is derived from
//! its parent's link, so every shallower node has to be finalized first.

use std::collections::VecDeque;

use super::arena::{NodeArena, NodeId};

/// Compute failure links for every node in the arena.
///
/// Root fails to itself (the one permitted self-reference) and its direct
/// children fail to root. For any deeper child reached from `node` along
/// `ch`, the parent's failure chain is walked until some node has its own
/// `ch` child; that child becomes the failure target, unless it is the very
/// node being linked, in which case the target is root.
pub fn link_failures(arena: &mut NodeArena) {
    let mut queue = VecDeque::new();

    let root_children: Vec<NodeId> = arena[NodeId::ROOT].children.values().copied().collect();
    for child in root_children {
        arena[child].fail = NodeId::ROOT;
        queue.push_back(child);
    }

    while let Some(node) = queue.pop_front() {
        let edges: Vec<(char, NodeId)> = arena[node]
            .children
            .iter()
            .map(|(&ch, &child)| (ch, child))
            .collect();

        for (ch, child) in edges {
            queue.push_back(child);

            let mut candidate = arena[node].fail;
            let mut target = NodeId::ROOT;
            loop {
                if let Some(alternate) = arena.child(candidate, ch) {
                    if alternate != child {
                        target = alternate;
                    }
                    break;
                }
                if candidate.is_root() {
                    break;
                }
                candidate = arena[candidate].fail;
            }
            arena[child].fail = target;
        }
    }
}
