/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` vertices.
This saves space compared to `usize` in the per-vertex arrays every search allocates
(discovery numbers, low-links, parents) and allows directly manipulating node values.
*/

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid; used as "no parent" marker in searches
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes. Indexed by `node as usize`.
pub type NodeBitSet = FixedBitSet;

/// Shorthands for working with [`NodeBitSet`] using [`Node`] instead of `usize`
pub trait NodeBitSetExt {
    /// Creates a bitset with room for `n` nodes, all cleared
    fn new_nodes(n: NumNodes) -> Self;

    /// Sets the bit of `u` and returns its previous value
    fn set_node(&mut self, u: Node) -> bool;

    /// Returns *true* if the bit of `u` is set
    fn has_node(&self, u: Node) -> bool;

    /// Iterates over all set nodes in ascending order
    fn iter_nodes(&self) -> impl Iterator<Item = Node> + '_;
}

impl NodeBitSetExt for NodeBitSet {
    fn new_nodes(n: NumNodes) -> Self {
        FixedBitSet::with_capacity(n as usize)
    }

    #[inline]
    fn set_node(&mut self, u: Node) -> bool {
        self.put(u as usize)
    }

    #[inline]
    fn has_node(&self, u: Node) -> bool {
        self.contains(u as usize)
    }

    fn iter_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.ones().map(|u| u as Node)
    }
}
