//! Common test utilities

#![allow(dead_code)]

use sapling::{Key, Node, Traversal, Tree};

/// The array the demo driver starts from
pub const SAMPLE_KEYS: [Key; 14] = [1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 95, 28];

pub fn sample_tree() -> Tree {
    Tree::new(&SAMPLE_KEYS)
}

/// Sort and dedup, the expected in-order result for `keys`
pub fn sorted_unique(keys: &[Key]) -> Vec<Key> {
    let mut keys = keys.to_vec();
    keys.sort_unstable();
    keys.dedup();
    keys
}

/// Deterministic xorshift key sequence, values in `-range..range`
pub fn pseudo_random_keys(seed: u64, len: usize, range: i64) -> Vec<Key> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % (2 * range as u64)) as i64 - range
        })
        .collect()
}

/// Assert the search ordering holds at every node
pub fn assert_bst(tree: &Tree) {
    fn check(node: Option<&Node>, low: Option<Key>, high: Option<Key>) {
        let Some(node) = node else { return };
        if let Some(low) = low {
            assert!(node.key() > low, "{} is not above {}", node.key(), low);
        }
        if let Some(high) = high {
            assert!(node.key() < high, "{} is not below {}", node.key(), high);
        }
        check(node.left(), low, Some(node.key()));
        check(node.right(), Some(node.key()), high);
    }

    check(tree.root(), None, None);
}

pub fn in_order(tree: &Tree) -> Vec<Key> {
    tree.traversal_order(Traversal::In)
}
