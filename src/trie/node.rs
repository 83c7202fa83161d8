//! Trie node with parallel sorted edge arrays.

use crate::trie::error::InsertError;
use crate::trie::reserve::reserve_one;
use crate::trie::search::lower_bound;

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// A single node of a [PrefixTree](crate::PrefixTree).
///
/// Outgoing edges are stored as two parallel vectors sharing one index
/// space: `labels` holds the edge labels in sorted order and `children`
/// holds one ownership slot per label. A `None` slot marks a terminal edge,
/// an edge that ends a path without a node below it. Keeping the labels
/// sorted makes edge lookup a binary search and the layout two compact
/// allocations per node, instead of a hash map.
///
/// # Invariants
/// - `labels.len() == children.len()` at all times
/// - `labels` is strictly ascending, so no duplicate label exists
/// - Each `Some` slot exclusively owns its child node; there is no sharing
///   and no back-reference to the parent
///
/// The two vectors are only ever mutated through the paired operations
/// [insert_edge_at](Node::insert_edge_at) and
/// [remove_edge_at](Node::remove_edge_at), never one without the other.
#[derive(Debug)]
pub struct Node<T> {
    /// Edge labels, strictly ascending
    labels: Vec<T>,
    /// Child slot per label; `None` marks a terminal edge
    children: Vec<Option<Box<Node<T>>>>,
}

// ============================================================================
// New, Getters / Accessors
// ============================================================================
impl<T> Node<T> {
    /// Creates a node with no edges. Does not allocate.
    pub(crate) fn new() -> Self {
        Node {
            labels: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a node holding exactly one edge, as used in chains.
    ///
    /// # Arguments
    /// * `label` - Label of the single edge
    /// * `child` - Child owned by the edge, or `None` for a terminal edge
    pub(crate) fn with_edge(
        label: T,
        child: Option<Box<Node<T>>>,
    ) -> Result<Self, InsertError> {
        let mut node = Node::new();
        node.insert_edge_at(0, label, child)?;
        Ok(node)
    }

    /// Returns the number of outgoing edges of this node.
    pub fn num_edges(&self) -> usize {
        self.labels.len()
    }

    /// Returns whether this node has no outgoing edges.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns a reference to the child at `index`,
    /// or `None` if the edge is terminal.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub(crate) fn child_at(&self, index: usize) -> Option<&Node<T>> {
        self.children[index].as_deref()
    }

    /// Returns a mutable reference to the child slot at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub(crate) fn child_slot_mut(&mut self, index: usize) -> &mut Option<Box<Node<T>>> {
        &mut self.children[index]
    }

    /// Iterates over the children this node owns, skipping terminal edges.
    pub(crate) fn children(&self) -> impl Iterator<Item = &Node<T>> {
        self.children.iter().filter_map(|slot| slot.as_deref())
    }
}

// ============================================================================
// Edge lookup
// ============================================================================
impl<T: Ord> Node<T> {
    /// Returns the edge index for `label`, or `None` if this node has no
    /// edge with that label. Pure binary search, no side effects.
    pub(crate) fn index_of(&self, label: &T) -> Option<usize> {
        let index = lower_bound(&self.labels, label);
        if index < self.labels.len() && self.labels[index] == *label {
            Some(index)
        } else {
            None
        }
    }

    /// Returns the index at which a new edge for `label` keeps the labels
    /// sorted.
    pub(crate) fn insertion_index(&self, label: &T) -> usize {
        lower_bound(&self.labels, label)
    }

    /// Checks this node's local invariants: parallel vector lengths and
    /// strictly ascending labels.
    pub(crate) fn is_valid(&self) -> bool {
        self.labels.len() == self.children.len()
            && self.labels.windows(2).all(|pair| pair[0] < pair[1])
    }
}

// ============================================================================
// Edge mutation (paired on both vectors)
// ============================================================================
impl<T> Node<T> {
    /// Inserts an edge at `index`, shifting later edges in both vectors.
    ///
    /// Both vectors are reserved before either is touched, so a failed
    /// reservation leaves the node unchanged.
    ///
    /// # Arguments
    /// * `index` - Insertion position; callers obtain it from
    ///   [insertion_index](Node::insertion_index) to keep the labels sorted
    /// * `label` - Label of the new edge
    /// * `child` - Child owned by the new edge, or `None` for a terminal edge
    ///
    /// # Panics
    /// Panics if `index > num_edges()`.
    pub(crate) fn insert_edge_at(
        &mut self,
        index: usize,
        label: T,
        child: Option<Box<Node<T>>>,
    ) -> Result<(), InsertError> {
        reserve_one(&mut self.labels)?;
        reserve_one(&mut self.children)?;
        self.labels.insert(index, label);
        self.children.insert(index, child);
        Ok(())
    }

    /// Removes the edge at `index` from both vectors, returning the child
    /// it owned. Rollback-only: the trie never removes a successfully
    /// inserted edge.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub(crate) fn remove_edge_at(&mut self, index: usize) -> Option<Box<Node<T>>> {
        self.labels.remove(index);
        self.children.remove(index)
    }

    /// Attaches `child` to the terminal edge at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub(crate) fn set_child_at(&mut self, index: usize, child: Box<Node<T>>) {
        debug_assert!(self.children[index].is_none());
        self.children[index] = Some(child);
    }
}

// ============================================================================
// Teardown
// ============================================================================
impl<T> Drop for Node<T> {
    /// Releases all owned descendants iteratively.
    ///
    /// The default recursive drop would need stack depth proportional to the
    /// longest stored sequence; chains make that depth unbounded, so the
    /// children are detached onto an explicit stack instead.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.children.drain(..).flatten().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain(..).flatten());
            // `node` drops here with no children left to recurse into
        }
    }
}
