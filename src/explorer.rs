//! View-local directory expansion state for the explorer listing.
//!
//! Expansion flags belong to one view, not to the canonical tree: two panes
//! over the same session may disagree about which folders are unfolded. The
//! default is a usability heuristic, not an invariant: directories at depth
//! 0 and 1 start expanded, deeper nesting starts collapsed.

use crate::tree::{Node, NodeKind, WorkspaceTree};
use crate::types::NodeId;
use std::collections::HashMap;

/// Depth below which directories start expanded.
const DEFAULT_EXPANDED_DEPTH: usize = 2;

/// Per-directory expanded/collapsed flags for one explorer view.
#[derive(Debug, Clone)]
pub struct ExpansionState {
    expanded: HashMap<NodeId, bool>,
}

impl ExpansionState {
    /// Seed flags for every directory in the tree using the depth default.
    pub fn with_defaults(tree: &WorkspaceTree) -> Self {
        let mut expanded = HashMap::new();
        for (depth, node) in tree.walk() {
            if node.is_directory() {
                expanded.insert(node.id.clone(), depth < DEFAULT_EXPANDED_DEPTH);
            }
        }
        ExpansionState { expanded }
    }

    /// Whether a directory is currently unfolded. Unknown ids read as
    /// collapsed.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    /// Flip one directory's flag. No-op for ids that are not directories in
    /// this view's tree.
    pub fn toggle(&mut self, id: &str) {
        if let Some(flag) = self.expanded.get_mut(id) {
            *flag = !*flag;
        }
    }

    /// The rows an explorer pane would render: every node whose ancestors
    /// are all expanded, in pre-order, paired with its depth.
    pub fn visible_rows<'a>(&self, tree: &'a WorkspaceTree) -> Vec<(usize, &'a Node)> {
        let mut rows = Vec::new();
        self.collect_visible(tree.roots(), 0, &mut rows);
        rows
    }

    fn collect_visible<'a>(
        &self,
        nodes: &'a [Node],
        depth: usize,
        rows: &mut Vec<(usize, &'a Node)>,
    ) {
        for node in nodes {
            rows.push((depth, node));
            if let NodeKind::Directory { children } = &node.kind {
                if self.is_expanded(&node.id) {
                    self.collect_visible(children, depth + 1, rows);
                }
            }
        }
    }
}
