//! Arena-based node allocation for the Aho-Corasick trie.
//!
//! Trie edges are owning (tree-shaped) while failure links point back at
//! arbitrary shallower nodes, including root. Storing every node in one
//! contiguous arena and referencing them by index sidesteps the ownership
//! cycle: `NodeId` is just a u32, so a failure link can name any node
//! without sharing or weak references, and the arena frees everything at
//! once when the automaton is dropped.

use rustc_hash::FxHashMap;

/// A node identifier - an index into the arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node. The arena always allocates it first.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_root(self) -> bool {
        self.0 == 0
    }
}

/// One node of the trie: a distinct prefix across all inserted patterns.
#[derive(Debug)]
pub struct TrieNode {
    /// Outgoing codepoint-labeled edges.
    pub children: FxHashMap<char, NodeId>,
    /// Failure link: where matching resumes after a mismatch.
    /// Root is the only node allowed to fail to itself.
    pub fail: NodeId,
    /// Index of the pattern ending at this node, if any. When two identical
    /// patterns are inserted, the later index wins.
    pub pattern: Option<usize>,
    /// Path length from root, in codepoints. Root has depth 0.
    pub depth: usize,
}

impl TrieNode {
    fn new(depth: usize) -> Self {
        Self {
            children: FxHashMap::default(),
            fail: NodeId::ROOT,
            pattern: None,
            depth,
        }
    }
}

/// Owns every node of one automaton. Nodes never move once allocated and
/// never outlive the arena.
pub struct NodeArena {
    nodes: Vec<TrieNode>,
}

impl NodeArena {
    /// Create an arena holding just the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new(0)],
        }
    }

    /// Allocate a node at the given depth, returning its ID.
    pub fn alloc(&mut self, depth: usize) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(TrieNode::new(depth));
        id
    }

    /// Look up the child of `node` along the edge labeled `ch`.
    #[inline]
    pub fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[node.index()].children.get(&ch).copied()
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if only the root exists (no pattern was ever inserted).
    pub fn is_empty(&self) -> bool {
        self.nodes[NodeId::ROOT.index()].children.is_empty()
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<NodeId> for NodeArena {
    type Output = TrieNode;

    #[inline]
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}

impl std::ops::IndexMut<NodeId> for NodeArena {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.index()]
    }
}

impl std::fmt::Debug for NodeArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeArena")
            .field("node_count", &self.nodes.len())
            .finish()
    }
}
