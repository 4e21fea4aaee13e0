//! Error taxonomy for workbench operations.
//!
//! Absence of a node is not an error: `find_by_id` returns an `Option`, and
//! "no active file" is an ordinary state. Errors here cover caller contract
//! violations (selecting a directory, submitting while a reply is pending)
//! and the fallible edges of the system: snapshot loading, configuration,
//! and logging setup.

use crate::types::NodeId;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for session operations and tooling.
#[derive(Debug, Error)]
pub enum WorkbenchError {
    /// A selection referenced an id that resolves to no node in the tree.
    #[error("no node with id '{0}' exists in the workspace")]
    UnknownNode(NodeId),

    /// A selection referenced a directory; only files can be opened.
    #[error("node '{0}' is a directory and cannot be opened as a file")]
    NotAFile(NodeId),

    /// A chat submission arrived while a reply was still pending.
    #[error("a reply is already being generated; submission rejected")]
    ReplyPending,

    /// A chat submission was empty after trimming whitespace.
    #[error("chat submission is empty")]
    EmptyMessage,

    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading or validating a workspace snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Two nodes carry the same id. Ids must be unique across the whole
    /// tree, not just among siblings.
    #[error("duplicate node id '{0}' in snapshot")]
    DuplicateId(NodeId),

    #[error("failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read snapshot file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}
