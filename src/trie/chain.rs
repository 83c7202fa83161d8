//! Batch construction of node chains for newly diverging suffixes.
//!
//! When an insert walks past the last shared prefix of the tree, the whole
//! unseen remainder of the sequence is materialized here in one batch of
//! single-edge nodes, rather than by inserting one element at a time
//! through nodes that will never branch.

use crate::trie::error::InsertError;
use crate::trie::node::Node;

/// Builds a linked chain of single-edge nodes spelling `suffix`.
///
/// Node `k` of the chain holds the one label `suffix[k]` and its edge owns
/// node `k + 1`; the last node's edge is terminal. The chain is built back
/// to front, so every allocated node is immediately owned by its
/// predecessor-to-be: if an allocation fails partway through, the partial
/// chain is dropped as one unit and no orphaned fragment survives.
///
/// # Arguments
/// * `suffix` - Non-empty remainder of the sequence being inserted
///
/// # Returns
/// The first node of the chain, for the caller to attach as some edge's
/// child.
///
/// # Panics
/// Panics if `suffix` is empty.
pub(crate) fn build_chain<T: Clone>(suffix: &[T]) -> Result<Box<Node<T>>, InsertError> {
    let mut tail: Option<Box<Node<T>>> = None;
    for label in suffix[1..].iter().rev() {
        tail = Some(Box::new(Node::with_edge(label.clone(), tail)?));
    }

    Ok(Box::new(Node::with_edge(suffix[0].clone(), tail)?))
}
