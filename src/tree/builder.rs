//! Balanced tree construction

use std::collections::BTreeSet;

use super::node::{Key, Link, Node};

/// Builds a balanced subtree from keys
pub struct TreeBuilder;

impl TreeBuilder {
    /// Build a balanced tree from arbitrary keys.
    ///
    /// Duplicates are dropped and the remaining keys sorted ascending before
    /// construction.
    pub fn build(keys: &[Key]) -> Link {
        let unique: Vec<Key> = keys
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self::build_sorted(&unique)
    }

    /// Build from keys that are already sorted and unique
    pub fn build_sorted(sorted: &[Key]) -> Link {
        if sorted.is_empty() {
            return None;
        }
        Self::build_range(sorted, 0, sorted.len() - 1)
    }

    /// `start..=end` is never empty on entry; the lower middle becomes the root
    fn build_range(sorted: &[Key], start: usize, end: usize) -> Link {
        let mid = start + (end - start) / 2;
        let mut node = Node::new(sorted[mid]);

        if mid > start {
            node.left = Self::build_range(sorted, start, mid - 1);
        }
        if mid < end {
            node.right = Self::build_range(sorted, mid + 1, end);
        }

        Some(Box::new(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(TreeBuilder::build(&[]).is_none());
    }

    #[test]
    fn test_lower_middle_becomes_root() {
        let root = TreeBuilder::build(&[4, 3, 2, 1]).expect("non-empty");
        assert_eq!(root.key(), 2);
        assert_eq!(root.left().map(Node::key), Some(1));

        let right = root.right().expect("right subtree");
        assert_eq!(right.key(), 3);
        assert!(right.left().is_none());
        assert_eq!(right.right().map(Node::key), Some(4));
    }

    #[test]
    fn test_duplicates_dropped() {
        let root = TreeBuilder::build(&[5, 5, 5]).expect("non-empty");
        assert_eq!(root.key(), 5);
        assert!(root.is_leaf());
    }

    #[test]
    fn test_concrete_array_root() {
        let root = TreeBuilder::build(&[1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 95, 28])
            .expect("non-empty");
        // 11 unique keys, index 5 of [1,3,4,5,7,8,9,23,28,67,95]
        assert_eq!(root.key(), 8);
        assert_eq!(root.left().map(Node::key), Some(4));
        assert_eq!(root.right().map(Node::key), Some(28));
    }
}
