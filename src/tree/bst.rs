//! The search tree and its structural algorithms

use std::cmp::Ordering;

use super::builder::TreeBuilder;
use super::node::{Key, Link, Node};

/// Binary search tree over unique keys.
///
/// Construction always yields a balanced shape. Later inserts and deletes
/// keep the ordering invariant but not balance; call [`Tree::rebalance`]
/// to restore it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    root: Link,
}

impl Tree {
    /// Build a balanced tree from unsorted keys, dropping duplicates
    pub fn new(keys: &[Key]) -> Self {
        Self {
            root: TreeBuilder::build(keys),
        }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of keys in the tree
    pub fn len(&self) -> usize {
        fn count(link: &Link) -> usize {
            match link {
                Some(node) => 1 + count(&node.left) + count(&node.right),
                None => 0,
            }
        }
        count(&self.root)
    }

    /// Insert `value`. A key already present leaves the tree unchanged.
    pub fn insert(&mut self, value: Key) {
        self.root = Self::insert_node(self.root.take(), value);
    }

    fn insert_node(link: Link, value: Key) -> Link {
        let Some(mut node) = link else {
            return Some(Box::new(Node::new(value)));
        };

        match value.cmp(&node.key) {
            Ordering::Less => node.left = Self::insert_node(node.left.take(), value),
            Ordering::Greater => node.right = Self::insert_node(node.right.take(), value),
            Ordering::Equal => log::debug!("insert: {} already present, skipping", value),
        }

        Some(node)
    }

    /// Delete `value`. An absent key leaves the tree unchanged.
    ///
    /// A node with two children takes its in-order successor's key, and the
    /// successor is then removed from the right subtree.
    pub fn delete(&mut self, value: Key) {
        self.root = Self::delete_node(self.root.take(), value);
    }

    fn delete_node(link: Link, value: Key) -> Link {
        let Some(mut node) = link else {
            log::debug!("delete: {} not found", value);
            return None;
        };

        match value.cmp(&node.key) {
            Ordering::Less => {
                node.left = Self::delete_node(node.left.take(), value);
                Some(node)
            }
            Ordering::Greater => {
                node.right = Self::delete_node(node.right.take(), value);
                Some(node)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => None,
                (Some(child), None) | (None, Some(child)) => Some(child),
                (Some(left), Some(right)) => {
                    let successor = Self::leftmost(&right).key;
                    log::trace!("delete: promoting successor {} over {}", successor, value);

                    node.set_key(successor);
                    node.left = Some(left);
                    node.right = Self::delete_node(Some(right), successor);
                    Some(node)
                }
            },
        }
    }

    fn leftmost(node: &Node) -> &Node {
        let mut current = node;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current
    }

    /// Locate the node holding `value`
    pub fn find(&self, value: Key) -> Option<&Node> {
        Self::find_node(self.root.as_deref(), value)
    }

    fn find_node(node: Option<&Node>, value: Key) -> Option<&Node> {
        let node = node?;
        match value.cmp(&node.key) {
            Ordering::Less => Self::find_node(node.left(), value),
            Ordering::Greater => Self::find_node(node.right(), value),
            Ordering::Equal => Some(node),
        }
    }

    /// Edges on the longest downward path from the node holding `value` to a leaf
    pub fn height(&self, value: Key) -> Option<usize> {
        let node = self.find(value)?;
        // a present node always has height >= 0
        usize::try_from(Self::subtree_height(Some(node))).ok()
    }

    /// Height of a subtree, -1 when empty
    fn subtree_height(node: Option<&Node>) -> isize {
        match node {
            Some(node) => {
                1 + Self::subtree_height(node.left()).max(Self::subtree_height(node.right()))
            }
            None => -1,
        }
    }

    /// Edges from the root to the node holding `value`
    pub fn depth(&self, value: Key) -> Option<usize> {
        let mut current = self.root.as_deref();
        let mut steps = 0;

        while let Some(node) = current {
            current = match value.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(steps),
            };
            steps += 1;
        }

        None
    }

    /// True when, at every node, the subtree heights differ by at most one
    pub fn is_balanced(&self) -> bool {
        Self::balanced_height(self.root.as_deref()).is_some()
    }

    /// Height of a balanced subtree, or `None` once any node is out of balance
    fn balanced_height(node: Option<&Node>) -> Option<isize> {
        let Some(node) = node else {
            return Some(-1);
        };

        let left = Self::balanced_height(node.left())?;
        let right = Self::balanced_height(node.right())?;

        if (left - right).abs() > 1 {
            return None;
        }
        Some(1 + left.max(right))
    }

    /// Rebuild the whole tree into a balanced shape
    pub fn rebalance(&mut self) {
        let keys = self.in_order_keys();
        log::debug!("rebalance: rebuilding {} keys", keys.len());
        self.root = TreeBuilder::build_sorted(&keys);
    }

    fn in_order_keys(&self) -> Vec<Key> {
        let mut keys = Vec::new();
        self.in_order_for_each(|node| keys.push(node.key()));
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [Key; 14] = [1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 95, 28];

    #[test]
    fn test_empty_tree() {
        let tree = Tree::default();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.is_balanced());
        assert!(tree.find(1).is_none());
        assert_eq!(tree.height(1), None);
        assert_eq!(tree.depth(1), None);
    }

    #[test]
    fn test_insert_into_empty_tree_sets_root() {
        let mut tree = Tree::new(&[]);
        tree.insert(10);
        assert_eq!(tree.root().map(Node::key), Some(10));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_insert_duplicate_is_noop() {
        let mut tree = Tree::new(&SAMPLE);
        let before = tree.clone();
        tree.insert(23);
        assert_eq!(tree, before);
    }

    #[test]
    fn test_insert_places_leaf() {
        let mut tree = Tree::new(&SAMPLE);
        tree.insert(6);
        let node = tree.find(6).expect("inserted");
        assert!(node.is_leaf());
        assert_eq!(tree.len(), 12);
    }

    #[test]
    fn test_delete_leaf() {
        let mut tree = Tree::new(&[1, 2, 3]);
        tree.delete(3);
        assert!(tree.find(3).is_none());
        assert_eq!(tree.root().and_then(Node::right), None);
    }

    #[test]
    fn test_delete_one_child() {
        let mut tree = Tree::new(&[1, 2, 3]);
        tree.insert(4);
        tree.delete(3);
        let root = tree.root().expect("root");
        assert_eq!(root.right().map(Node::key), Some(4));
    }

    #[test]
    fn test_delete_two_children_promotes_successor() {
        let mut tree = Tree::new(&SAMPLE);
        // root is 8, successor is 9
        tree.delete(8);
        let root = tree.root().expect("root");
        assert_eq!(root.key(), 9);
        assert!(tree.find(8).is_none());
        assert_eq!(tree.len(), 10);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut tree = Tree::new(&SAMPLE);
        let before = tree.clone();
        tree.delete(1000);
        assert_eq!(tree, before);
    }

    #[test]
    fn test_delete_last_key_empties_tree() {
        let mut tree = Tree::new(&[7]);
        tree.delete(7);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_height() {
        let tree = Tree::new(&SAMPLE);
        assert_eq!(tree.height(8), Some(3));
        assert_eq!(tree.height(1), Some(1));
        assert_eq!(tree.height(3), Some(0));
        assert_eq!(tree.height(4), Some(2));
        assert_eq!(tree.height(2), None);
    }

    #[test]
    fn test_depth() {
        let tree = Tree::new(&SAMPLE);
        assert_eq!(tree.depth(8), Some(0));
        assert_eq!(tree.depth(4), Some(1));
        assert_eq!(tree.depth(28), Some(1));
        assert_eq!(tree.depth(1), Some(2));
        assert_eq!(tree.depth(2), None);
    }

    #[test]
    fn test_unbalance_and_rebalance() {
        let mut tree = Tree::new(&SAMPLE);
        assert!(tree.is_balanced());

        for value in [555, 665, 777, 999] {
            tree.insert(value);
        }
        assert!(!tree.is_balanced());

        tree.rebalance();
        assert!(tree.is_balanced());
        assert_eq!(tree.len(), 15);
    }

    #[test]
    fn test_balance_checked_below_root() {
        // root heights match, but 1 -> 2 -> 3 is a chain
        let mut tree = Tree::new(&[10]);
        for value in [5, 15, 1, 20, 2, 25, 3, 30] {
            tree.insert(value);
        }
        assert!(!tree.is_balanced());
    }
}
