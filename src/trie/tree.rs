//! Prefix tree over sequences of an ordered element type.

use crate::trie::chain;
use crate::trie::error::InsertError;
use crate::trie::node::Node;

// =#========================================================================#=
// PREFIX TREE
// =#========================================================================#=
/// A prefix tree (trie) whose nodes store their outgoing edges as parallel
/// sorted arrays, looked up by binary search.
///
/// The tree stores sequences of any element type `T` with a total order.
/// A path from the root whose edge labels equal `s[0], s[1], ..., s[k-1]`
/// represents the prefix `s[0..k]`; the root itself carries no label and
/// sits above the first element of every stored sequence.
///
/// Sequences are only ever added, never removed. Queries follow prefix-path
/// semantics: every non-empty prefix of an inserted sequence reports
/// [contains_prefix](PrefixTree::contains_prefix) as `true`, and the tree
/// keeps no marker distinguishing a completed insertion from a prefix of
/// one.
///
/// The structure is single-threaded: no internal locking, no suspension
/// points. Callers needing concurrent access must impose external mutual
/// exclusion.
///
/// # Example
/// ```
/// use sortrie::PrefixTree;
///
/// let mut parrots = PrefixTree::new();
/// parrots.insert(b"kaka")?;
/// parrots.insert(b"kakapo")?;
/// parrots.insert(b"kea")?;
///
/// assert!(parrots.contains_prefix(b"kakapo"));
/// assert!(parrots.contains_prefix(b"kak")); // prefixes count as present
/// assert!(!parrots.contains_prefix(b"kakariki"));
/// # Ok::<(), sortrie::InsertError>(())
/// ```
#[derive(Debug)]
pub struct PrefixTree<T> {
    /// Root node; has no label of its own
    root: Node<T>,
}

impl<T> PrefixTree<T> {
    /// Creates an empty tree. Does not allocate.
    pub fn new() -> Self {
        PrefixTree { root: Node::new() }
    }

    /// Returns whether no sequence has been inserted yet.
    ///
    /// Note that the empty sequence is nevertheless always
    /// [contained](PrefixTree::contains_prefix).
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns a reference to the root node.
    ///
    /// The root carries no label; its edges lead to the first element of
    /// every stored sequence, so its fan-out is the number of distinct
    /// first elements inserted so far.
    pub fn root(&self) -> &Node<T> {
        &self.root
    }
}

impl<T: Ord> PrefixTree<T> {
    /// Inserts a sequence into the tree.
    ///
    /// Descends one element at a time, following existing edges where they
    /// match. Once the descent reaches a point with no further structure,
    /// the whole remaining suffix is materialized as one batch-built chain
    /// of single-edge nodes instead of element-wise inserts.
    ///
    /// Inserting an empty sequence or a sequence that is already fully
    /// represented is a no-op success, so `insert` is idempotent.
    ///
    /// # Arguments
    /// * `sequence` - Elements of the sequence, cloned into the tree
    ///
    /// # Returns
    /// `Ok(())` on success. The only failure is [InsertError], allocation
    /// failure while growing a node or building a chain; in that case every
    /// mutation performed by this call has been rolled back and the tree is
    /// exactly in its pre-call state.
    pub fn insert(&mut self, sequence: &[T]) -> Result<(), InsertError>
    where
        T: Clone,
    {
        let mut node = &mut self.root;
        let mut depth = 0;

        while depth < sequence.len() {
            let label = &sequence[depth];
            let rest = &sequence[depth + 1..];

            let index = match node.index_of(label) {
                Some(index) => index,
                None => {
                    // No edge for this element yet: add one at the sorted
                    // position, then hang the remainder below it as a chain
                    let at = node.insertion_index(label);
                    node.insert_edge_at(at, label.clone(), None)?;
                    if !rest.is_empty() {
                        match chain::build_chain(rest) {
                            Ok(head) => node.set_child_at(at, head),
                            Err(error) => {
                                // Undo the edge this call added, restoring
                                // the pre-call state
                                node.remove_edge_at(at);
                                return Err(error);
                            }
                        }
                    }
                    return Ok(());
                }
            };

            match node.child_slot_mut(index) {
                Some(child) => {
                    node = &mut **child;
                    depth += 1;
                }
                slot @ None => {
                    // Existing edge ends here; a failed chain build leaves
                    // the terminal edge as it was
                    if !rest.is_empty() {
                        *slot = Some(chain::build_chain(rest)?);
                    }
                    return Ok(());
                }
            }
        }

        Ok(())
    }

    /// Tests whether a path for `sequence` exists in the tree.
    ///
    /// The empty sequence is always present. Otherwise the walk consumes
    /// all elements but the last, each requiring an edge that owns a child;
    /// the final element only requires an edge, terminal or not.
    ///
    /// This is a prefix query, not a stored-entry query: after inserting
    /// `"rockstar"`, the prefixes `"rock"` and `"rocks"` are present too.
    /// Pure read, O(sequence length x log(node fan-out)), cannot fail.
    ///
    /// # Arguments
    /// * `sequence` - Elements of the queried sequence
    pub fn contains_prefix(&self, sequence: &[T]) -> bool {
        let (last, inner) = match sequence.split_last() {
            Some(parts) => parts,
            None => return true,
        };

        let mut node = &self.root;
        for label in inner {
            let index = match node.index_of(label) {
                Some(index) => index,
                None => return false,
            };
            // An edge that terminates before the last element cannot
            // represent the queried sequence
            node = match node.child_at(index) {
                Some(child) => child,
                None => return false,
            };
        }

        node.index_of(last).is_some()
    }

    /// Validates the structural invariants of every node in the tree:
    /// parallel label/child vectors of equal length and strictly ascending
    /// labels.
    ///
    /// # Returns
    /// `true` if every node is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if !node.is_valid() {
                return false;
            }
            stack.extend(node.children());
        }

        true
    }
}

impl<T> Default for PrefixTree<T> {
    fn default() -> Self {
        Self::new()
    }
}
