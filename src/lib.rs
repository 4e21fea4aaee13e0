//! Workbench: In-Memory Workspace Session State
//!
//! Models the session core of an AI-assisted code studio shell: a read-only
//! workspace file tree with identity-based lookup, active-file and open-tab
//! tracking, explorer expansion state, and a simulated chat exchange.

pub mod chat;
pub mod config;
pub mod error;
pub mod explorer;
pub mod logging;
pub mod session;
pub mod snapshot;
pub mod tooling;
pub mod tree;
pub mod types;
