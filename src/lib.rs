//! Sapling - a balanced binary search tree over numeric keys
//!
//! A [`tree::Tree`] is built balanced from an unsorted array. Inserts and
//! deletes keep the search ordering but may unbalance it; [`tree::Tree::rebalance`]
//! rebuilds a balanced shape on demand.

pub mod output;
pub mod scenario;
pub mod tree;

pub use tree::{Key, Node, Traversal, Tree, TreeError};
