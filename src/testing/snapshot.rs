//! Snapshot helpers: render the preview tree as plain text.

use std::fmt::Write as _;

use crate::preview::{NodeData, PreviewTree};

/// Render the tree as an indented outline, one node per line.
///
/// Each line shows the node's id (or role when anonymous), its display
/// token, and its text content when non-empty. Stable across runs, so the
/// output is suitable for snapshot-style assertions.
pub fn outline_to_string(tree: &PreviewTree) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root() {
        write_node(tree, root, 0, &mut out);
    }
    out
}

fn write_node(tree: &PreviewTree, id: crate::preview::NodeId, depth: usize, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(&describe(node));
    out.push('\n');
    for &child in tree.children(id) {
        write_node(tree, child, depth + 1, out);
    }
}

fn describe(node: &NodeData) -> String {
    let mut line = String::new();
    match &node.dom_id {
        Some(id) => line.push_str(id),
        None => {
            let _ = write!(line, "{:?}", node.role);
        }
    }
    let _ = write!(line, " [{}]", node.display.css_token());
    let text = node.text.trim();
    if !text.is_empty() && text != crate::preview::PLACEHOLDER_GLYPH {
        let _ = write!(line, " {text:?}");
    }
    line
}

// ===========================================================================
// Tests
// ===========================================================================
