//! Workspace node types.
//!
//! A node is either a file or a directory, distinguished by a tagged variant
//! so the payload rules hold structurally: only files carry content, only
//! directories carry children. An empty `children` vector is a legal state
//! (an empty folder).

use crate::types::NodeId;
use serde::{Deserialize, Serialize};

/// Kind-specific payload of a workspace node.
///
/// Serialized with a `type` tag of `"file"` or `"folder"`, matching the
/// snapshot wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeKind {
    /// A file, optionally carrying its text content. `None` means
    /// "no content loaded", which renders as an empty editor pane.
    #[serde(rename = "file")]
    File {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
    /// A directory with an ordered child sequence; insertion order is
    /// display order.
    #[serde(rename = "folder")]
    Directory {
        #[serde(default)]
        children: Vec<Node>,
    },
}

/// One entry in the hierarchical workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique across the entire tree, stable for the node's lifetime.
    pub id: NodeId,
    /// Display label, as it would appear in a listing.
    pub name: String,
    /// Slash-separated logical path. Informational only; lookups go by id.
    pub path: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl Node {
    /// Construct a file node.
    pub fn file(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        path: impl Into<String>,
        content: Option<String>,
    ) -> Self {
        Node {
            id: id.into(),
            name: name.into(),
            path: path.into(),
            kind: NodeKind::File { content },
        }
    }

    /// Construct a directory node.
    pub fn directory(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        path: impl Into<String>,
        children: Vec<Node>,
    ) -> Self {
        Node {
            id: id.into(),
            name: name.into(),
            path: path.into(),
            kind: NodeKind::Directory { children },
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// Text content of a file node; `None` for directories and for files
    /// with no content loaded.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => content.as_deref(),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Children of a directory node; empty slice for files.
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Directory { children } => children,
            NodeKind::File { .. } => &[],
        }
    }
}
