//! Core identifier types for the workbench session state.

/// NodeId: stable identifier of a workspace node, unique across the whole tree
pub type NodeId = String;

/// MessageId: monotonically assigned identifier of a chat message
pub type MessageId = u64;
