//! Tree cell type

/// Key type stored in the tree
pub type Key = i64;

/// An owned, possibly empty subtree
pub type Link = Option<Box<Node>>;

/// A single key with its two exclusively owned subtrees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) key: Key,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// True when neither child is present
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn set_key(&mut self, key: Key) {
        self.key = key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_leaf() {
        let node = Node::new(42);
        assert_eq!(node.key(), 42);
        assert!(node.left().is_none());
        assert!(node.right().is_none());
        assert!(node.is_leaf());
    }

    #[test]
    fn test_children_accessors() {
        let mut node = Node::new(5);
        node.left = Some(Box::new(Node::new(3)));
        assert!(!node.is_leaf());
        assert_eq!(node.left().map(Node::key), Some(3));
        assert!(node.right().is_none());

        node.set_key(6);
        assert_eq!(node.key(), 6);
    }
}
