//! Session state: active file and open tabs over a workspace tree.
//!
//! A [`Session`] owns the tree for its lifetime and tracks which file is
//! active plus the ordered set of open tabs. Tab state holds ids only, never
//! node data, so a dangling id is inert: accessors resolve it to `None`.
//!
//! Tab lifecycle for one file: Closed -> Open (first `select_file`) ->
//! Open/Active <-> Open/Inactive (selecting other open files) -> Closed
//! (`close_file`). At most one file is active session-wide.

use crate::chat::ChatLog;
use crate::error::WorkbenchError;
use crate::snapshot::Snapshot;
use crate::tree::{Node, WorkspaceTree};
use crate::types::NodeId;
use tracing::{debug, warn};

/// One user session over a workspace snapshot.
pub struct Session {
    project: String,
    tree: WorkspaceTree,
    active: Option<NodeId>,
    open: Vec<NodeId>,
    chat: ChatLog,
}

impl Session {
    /// Build a session from a validated snapshot. No file starts open.
    pub fn new(snapshot: Snapshot) -> Self {
        let Snapshot { project, files } = snapshot;
        Session {
            project,
            tree: WorkspaceTree::new(files),
            active: None,
            open: Vec::new(),
            chat: ChatLog::new(),
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn tree(&self) -> &WorkspaceTree {
        &self.tree
    }

    /// Id of the active file, if any.
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The active file node. `None` when nothing is active or the active id
    /// no longer resolves.
    pub fn active_file(&self) -> Option<&Node> {
        self.tree.find_by_id(self.active.as_deref()?)
    }

    /// Open tab ids in insertion order.
    pub fn open_ids(&self) -> &[NodeId] {
        &self.open
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.iter().any(|open| open == id)
    }

    /// Make a file active, opening a tab for it if it has none.
    ///
    /// Selecting an already-open file only moves focus; it never reorders or
    /// duplicates the tab. Ids that resolve to a directory or to nothing are
    /// rejected and leave the state untouched.
    pub fn select_file(&mut self, id: &str) -> Result<(), WorkbenchError> {
        match self.tree.find_by_id(id) {
            None => {
                warn!(id, "selection rejected: unknown node");
                Err(WorkbenchError::UnknownNode(id.to_string()))
            }
            Some(node) if node.is_directory() => {
                warn!(id, "selection rejected: node is a directory");
                Err(WorkbenchError::NotAFile(id.to_string()))
            }
            Some(_) => {
                if !self.is_open(id) {
                    self.open.push(id.to_string());
                }
                self.active = Some(id.to_string());
                debug!(id, open_tabs = self.open.len(), "file selected");
                Ok(())
            }
        }
    }

    /// Close a tab. No-op if the id has no open tab.
    ///
    /// When the active tab closes, focus falls to the last remaining entry
    /// of the open list (most recently opened, by position), or to none when
    /// the list empties.
    pub fn close_file(&mut self, id: &str) {
        let before = self.open.len();
        self.open.retain(|open| open != id);
        if self.open.len() == before {
            return;
        }
        if self.active.as_deref() == Some(id) {
            self.active = self.open.last().cloned();
            debug!(
                id,
                new_active = self.active.as_deref().unwrap_or("<none>"),
                "active tab closed"
            );
        } else {
            debug!(id, "tab closed");
        }
    }

    pub fn chat(&self) -> &ChatLog {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatLog {
        &mut self.chat
    }
}
