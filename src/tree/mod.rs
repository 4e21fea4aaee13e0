//! Canonical workspace tree and identity-based lookup.
//!
//! The tree is an ordered forest of [`Node`]s built once per session from a
//! snapshot and treated as read-only afterwards. All lookups resolve by id
//! in a fixed depth-first pre-order traversal: each top-level node in array
//! order, recursing into a directory's children before moving to the next
//! sibling.

pub mod node;

pub use node::{Node, NodeKind};

/// Read-only node forest for one session.
#[derive(Debug, Clone)]
pub struct WorkspaceTree {
    roots: Vec<Node>,
}

impl WorkspaceTree {
    pub fn new(roots: Vec<Node>) -> Self {
        WorkspaceTree { roots }
    }

    /// Top-level nodes in display order.
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Find a node by id.
    ///
    /// Returns the first pre-order match, so the result is unambiguous when
    /// ids are globally unique. With a duplicated id the first match wins;
    /// that is a documented ambiguity, not an error. Absence is `None`.
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        find_in(&self.roots, id)
    }

    /// Pre-order iterator over every node paired with its depth.
    /// Top-level nodes are at depth 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk::over(&self.roots)
    }

    /// Total node count, directories included.
    pub fn len(&self) -> usize {
        self.walk().count()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

fn find_in<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Node> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let NodeKind::Directory { children } = &node.kind {
            if let Some(found) = find_in(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Depth-first pre-order traversal over a node forest.
pub struct Walk<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> Walk<'a> {
    pub(crate) fn over(roots: &'a [Node]) -> Self {
        Walk {
            stack: roots.iter().rev().map(|n| (0, n)).collect(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        if let NodeKind::Directory { children } = &node.kind {
            for child in children.iter().rev() {
                self.stack.push((depth + 1, child));
            }
        }
        Some((depth, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> WorkspaceTree {
        WorkspaceTree::new(vec![
            Node::directory(
                "src",
                "src",
                "/src",
                vec![
                    Node::file("a", "a.ts", "/src/a.ts", Some("let a = 1;".into())),
                    Node::directory(
                        "nested",
                        "nested",
                        "/src/nested",
                        vec![Node::file("deep", "deep.ts", "/src/nested/deep.ts", None)],
                    ),
                    Node::file("b", "b.ts", "/src/b.ts", None),
                ],
            ),
            Node::file("readme", "readme.md", "/readme.md", Some("# hi".into())),
        ])
    }

    #[test]
    fn find_resolves_top_level_and_nested_nodes() {
        let tree = sample_tree();
        assert_eq!(tree.find_by_id("readme").unwrap().name, "readme.md");
        assert_eq!(tree.find_by_id("a").unwrap().name, "a.ts");
        assert_eq!(tree.find_by_id("deep").unwrap().name, "deep.ts");
    }

    #[test]
    fn find_returns_none_for_absent_id() {
        let tree = sample_tree();
        assert!(tree.find_by_id("missing").is_none());
    }

    #[test]
    fn walk_is_pre_order_with_children_before_next_sibling() {
        let tree = sample_tree();
        let order: Vec<(usize, &str)> = tree
            .walk()
            .map(|(depth, node)| (depth, node.id.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                (0, "src"),
                (1, "a"),
                (1, "nested"),
                (2, "deep"),
                (1, "b"),
                (0, "readme"),
            ]
        );
    }

    #[test]
    fn duplicate_id_resolves_to_first_pre_order_match() {
        let tree = WorkspaceTree::new(vec![
            Node::directory(
                "dir",
                "dir",
                "/dir",
                vec![Node::file("dup", "inner.ts", "/dir/inner.ts", None)],
            ),
            Node::file("dup", "outer.ts", "/outer.ts", None),
        ]);
        // The nested occurrence comes first in pre-order.
        assert_eq!(tree.find_by_id("dup").unwrap().name, "inner.ts");
    }

    #[test]
    fn empty_directory_is_legal_and_countable() {
        let tree = WorkspaceTree::new(vec![Node::directory("empty", ".bolt", "/.bolt", vec![])]);
        assert_eq!(tree.len(), 1);
        assert!(tree.find_by_id("empty").unwrap().children().is_empty());
    }
}
