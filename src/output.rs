//! Tree shape rendering

use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::tree::{Node, Tree};

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Render a tree and write it to file
pub fn render_tree(tree: &Tree, output_path: &Path) -> Result<(), OutputError> {
    let content = render_to_string(tree);

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(output_path)?;
    file.write_all(content.as_bytes())?;

    Ok(())
}

/// Render a tree sideways: right subtree above each node, left subtree below
pub fn render_to_string(tree: &Tree) -> String {
    let mut output = String::new();
    if let Some(root) = tree.root() {
        render_node(root, &mut output, "", true);
    }
    output
}

fn render_node(node: &Node, output: &mut String, prefix: &str, is_left: bool) {
    if let Some(right) = node.right() {
        let child_prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        render_node(right, output, &child_prefix, false);
    }

    let connector = if is_left { "└── " } else { "┌── " };
    output.push_str(prefix);
    output.push_str(connector);
    output.push_str(&node.key().to_string());
    output.push('\n');

    if let Some(left) = node.left() {
        let child_prefix = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        render_node(left, output, &child_prefix, true);
    }
}
