//! Composite pattern: part-whole tree of named nodes
//! Example: building, pruning, and traversing a small tree
//!
//! Run with: cargo run --bin composite

use design_patterns::{Presenter, StdoutPresenter, TraceLog};

/// A node owns its children; leaves are just nodes without any.
struct TreeNode {
    name: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn new(name: impl Into<String>) -> Self {
        TreeNode {
            name: name.into(),
            children: Vec::new(),
        }
    }

    fn add(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    /// Detaches the first direct child with `name` and returns it.
    fn remove(&mut self, name: &str) -> Option<TreeNode> {
        let index = self.children.iter().position(|c| c.name == name)?;
        Some(self.children.remove(index))
    }

    fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

fn traverse(depth: usize, node: &TreeNode, log: &mut TraceLog) {
    log.add(format!("{}{}", "--".repeat(depth - 1), node.name));
    for child in &node.children {
        traverse(depth + 1, child, log);
    }
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();

    let mut left = TreeNode::new("left");
    left.add(TreeNode::new("leftleft"));
    left.add(TreeNode::new("leftright"));

    let mut right = TreeNode::new("right");
    right.add(TreeNode::new("rightleft"));
    right.add(TreeNode::new("rightright"));

    let mut tree = TreeNode::new("root");
    tree.add(left);
    tree.add(right);

    // Detach and reattach to exercise removal.
    if let Some(right) = tree.remove("right") {
        tree.add(right);
    }

    traverse(1, &tree, &mut log);
    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("Composite"));
}
