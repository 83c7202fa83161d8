//! Sortrie is a prefix tree (trie) over sequences of any ordered element
//! type.
//!
//! Each node stores its outgoing edges as two parallel sorted arrays, one
//! of labels and one of optional child links, instead of a hash map. Edge
//! lookup is a binary search and a node's memory is two compact
//! allocations. Core functionality provided:
//! - Insert: descends along existing edges and materializes the unseen
//!   remainder of a sequence as one batch-built chain of single-edge nodes.
//!   Inserting an already-present sequence is a no-op, so insertion is
//!   idempotent.
//! - Prefix query: [contains_prefix](PrefixTree::contains_prefix) tests
//!   whether a path for the given sequence exists. Every non-empty prefix
//!   of an inserted sequence is reported as present, and the empty sequence
//!   is always present.
//! - Failure handling: the only error is allocation failure while growing
//!   the tree; a failed [insert](PrefixTree::insert) rolls its partial
//!   mutations back and leaves the tree exactly in its pre-call state.
//! - Generic elements: any `T: Ord + Clone` works as the element type,
//!   bytes and chars as well as larger token types.
//!
//! Limitations:
//! - No deletion of stored sequences
//! - No traversal or enumeration of stored sequences
//! - No concurrency control; callers needing concurrent access must impose
//!   external mutual exclusion
//! - No serialization format
//!
//! # Example
//! ```
//! use sortrie::PrefixTree;
//!
//! let mut birds = PrefixTree::new();
//! birds.insert(b"kaka")?;
//! birds.insert(b"kakapo")?;
//! birds.insert(b"kea")?;
//!
//! assert!(birds.contains_prefix(b"kakapo"));
//! assert!(birds.contains_prefix(b"kak")); // any prefix of an insertion
//! assert!(birds.contains_prefix(b""));    // the empty sequence, always
//! assert!(!birds.contains_prefix(b"kiwi"));
//! # Ok::<(), sortrie::InsertError>(())
//! ```
//!
//! Element types other than bytes work the same way:
//! ```
//! use sortrie::PrefixTree;
//!
//! let mut routes = PrefixTree::new();
//! routes.insert(&["api", "v1", "trees"])?;
//!
//! assert!(routes.contains_prefix(&["api", "v1"]));
//! assert!(!routes.contains_prefix(&["api", "v2"]));
//! # Ok::<(), sortrie::InsertError>(())
//! ```

pub mod trie;

pub use trie::error::InsertError;
pub use trie::node::Node;
pub use trie::search::lower_bound;
pub use trie::tree::PrefixTree;
