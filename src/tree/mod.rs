//! Binary search tree module

mod bst;
mod builder;
mod node;
mod traversal;

pub use bst::Tree;
pub use builder::TreeBuilder;
pub use node::{Key, Link, Node};
pub use traversal::{Traversal, TreeError};
