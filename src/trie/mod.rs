//! Core prefix tree implementation.
//!
//! # Structure
//! The tree is built from two pieces:
//! * [PrefixTree] - owns the root node and exposes the operation contract:
//!   [insert](PrefixTree::insert) and
//!   [contains_prefix](PrefixTree::contains_prefix).
//! * [Node] - one tree node, holding its outgoing edges as two parallel
//!   sorted vectors (labels and child slots) sharing one index space.
//!
//! Supporting modules:
//! * [search] - the lower-bound binary search both edge lookup and sorted
//!   edge insertion are built on.
//! * `chain` (crate-private) - batch construction of the single-edge node
//!   chains that represent newly diverging suffixes.
//! * `reserve` (crate-private) - the fallible-growth seam turning
//!   allocation failure into [InsertError] instead of an abort.
//!
//! # Ownership
//! Every child node is owned by exactly one edge slot of its parent; there
//! is no sharing and no back-reference. Dropping a tree releases all
//! descendants iteratively, so arbitrarily long chains tear down without
//! deep recursion.

pub(crate) mod chain;
pub mod error;
pub mod node;
pub(crate) mod reserve;
pub mod search;
pub mod tree;

pub use error::InsertError;
pub use node::Node;
pub use tree::PrefixTree;
