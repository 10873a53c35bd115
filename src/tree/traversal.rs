//! Traversal orders and per-node visitors

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::bst::Tree;
use super::node::{Key, Node};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Order in which a traversal visits nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Breadth-first, left to right within a level
    Level,
    In,
    Pre,
    Post,
}

impl Traversal {
    pub const ALL: [Traversal; 4] = [
        Traversal::Level,
        Traversal::In,
        Traversal::Pre,
        Traversal::Post,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Traversal::Level => "level",
            Traversal::In => "in",
            Traversal::Pre => "pre",
            Traversal::Post => "post",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Traversal {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        let base = normalized.strip_suffix("order").unwrap_or(&normalized);

        match base {
            "level" | "bfs" => Ok(Traversal::Level),
            "in" => Ok(Traversal::In),
            "pre" => Ok(Traversal::Pre),
            "post" => Ok(Traversal::Post),
            _ => Err(TreeError::InvalidArgument(format!(
                "unknown traversal order '{}'",
                s
            ))),
        }
    }
}

impl Tree {
    /// Visit every node breadth-first
    pub fn level_order_for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&Node),
    {
        let mut queue: VecDeque<&Node> = self.root().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            visit(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }

    /// Visit every node in ascending key order
    pub fn in_order_for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&Node),
    {
        fn walk<F: FnMut(&Node)>(node: Option<&Node>, visit: &mut F) {
            if let Some(node) = node {
                walk(node.left(), visit);
                visit(node);
                walk(node.right(), visit);
            }
        }
        walk(self.root(), &mut visit);
    }

    pub fn pre_order_for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&Node),
    {
        fn walk<F: FnMut(&Node)>(node: Option<&Node>, visit: &mut F) {
            if let Some(node) = node {
                visit(node);
                walk(node.left(), visit);
                walk(node.right(), visit);
            }
        }
        walk(self.root(), &mut visit);
    }

    pub fn post_order_for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&Node),
    {
        fn walk<F: FnMut(&Node)>(node: Option<&Node>, visit: &mut F) {
            if let Some(node) = node {
                walk(node.left(), visit);
                walk(node.right(), visit);
                visit(node);
            }
        }
        walk(self.root(), &mut visit);
    }

    /// Run the traversal for `order` with a visitor chosen at runtime.
    ///
    /// A missing visitor is rejected before any node is visited.
    pub fn for_each(
        &self,
        order: Traversal,
        visitor: Option<&mut dyn FnMut(&Node)>,
    ) -> Result<(), TreeError> {
        let visit = visitor.ok_or_else(|| {
            TreeError::InvalidArgument(format!("{} order traversal requires a visitor", order))
        })?;

        match order {
            Traversal::Level => self.level_order_for_each(visit),
            Traversal::In => self.in_order_for_each(visit),
            Traversal::Pre => self.pre_order_for_each(visit),
            Traversal::Post => self.post_order_for_each(visit),
        }

        Ok(())
    }

    /// Keys in the order `order` visits them
    pub fn traversal_order(&self, order: Traversal) -> Vec<Key> {
        let mut keys = Vec::new();
        let mut collect = |node: &Node| keys.push(node.key());

        match order {
            Traversal::Level => self.level_order_for_each(&mut collect),
            Traversal::In => self.in_order_for_each(&mut collect),
            Traversal::Pre => self.pre_order_for_each(&mut collect),
            Traversal::Post => self.post_order_for_each(&mut collect),
        }

        keys
    }
}
