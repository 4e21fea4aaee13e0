//! CLI Tooling
//!
//! Command-line surface for inspecting a workspace snapshot and replaying
//! session operations against it. Every command loads the snapshot, runs to
//! completion, and prints the resulting state; nothing persists between
//! invocations.

use crate::config::WorkbenchConfig;
use crate::error::WorkbenchError;
use crate::explorer::ExpansionState;
use crate::session::Session;
use crate::snapshot::Snapshot;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

/// Workbench CLI - inspect an in-memory workspace session
#[derive(Parser)]
#[command(name = "workbench")]
#[command(about = "In-memory workspace session state for an AI-assisted code studio shell")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace snapshot JSON path (overrides config; default: built-in demo)
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the explorer listing with default expansion
    Tree {
        /// Ignore expansion state and list every node
        #[arg(long)]
        all: bool,
    },
    /// Print the content of a file node
    Cat {
        /// Node id to print
        id: String,
    },
    /// Check snapshot invariants (global id uniqueness)
    Validate {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Replay session operations and print the resulting tab state
    Session {
        /// Operations: select:<id> or close:<id>, applied in order
        #[arg(required = true)]
        ops: Vec<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Submit a chat prompt and print the simulated exchange
    Chat {
        /// Prompt text
        prompt: String,
    },
}

/// Loaded context shared by all commands.
pub struct CliContext {
    snapshot: Snapshot,
}

impl CliContext {
    /// Resolve the snapshot: CLI flag, then config, then the built-in demo.
    pub fn new(
        snapshot_path: Option<PathBuf>,
        config: &WorkbenchConfig,
    ) -> Result<Self, WorkbenchError> {
        let path = snapshot_path.or_else(|| config.snapshot.clone());
        let snapshot = match path {
            Some(path) => Snapshot::from_file(&path)?,
            None => Snapshot::demo(),
        };
        info!(
            project = snapshot.project.as_str(),
            nodes = snapshot.files.len(),
            "snapshot loaded"
        );
        Ok(CliContext { snapshot })
    }

    /// Execute a command and return its printable output.
    pub fn execute(&self, command: &Commands) -> Result<String, WorkbenchError> {
        match command {
            Commands::Tree { all } => self.execute_tree(*all),
            Commands::Cat { id } => self.execute_cat(id),
            Commands::Validate { format } => self.execute_validate(format),
            Commands::Session { ops, format } => self.execute_session(ops, format),
            Commands::Chat { prompt } => self.execute_chat(prompt),
        }
    }

    fn execute_tree(&self, all: bool) -> Result<String, WorkbenchError> {
        let tree = self.snapshot.clone().into_tree();
        let rows: Vec<String> = if all {
            tree.walk()
                .map(|(depth, node)| render_row(depth, node))
                .collect()
        } else {
            let expansion = ExpansionState::with_defaults(&tree);
            expansion
                .visible_rows(&tree)
                .into_iter()
                .map(|(depth, node)| render_row(depth, node))
                .collect()
        };
        let mut out = format!("{}\n", self.snapshot.project);
        for row in rows {
            out.push_str(&row);
            out.push('\n');
        }
        Ok(out.trim_end().to_string())
    }

    fn execute_cat(&self, id: &str) -> Result<String, WorkbenchError> {
        let tree = self.snapshot.clone().into_tree();
        let node = tree
            .find_by_id(id)
            .ok_or_else(|| WorkbenchError::UnknownNode(id.to_string()))?;
        if node.is_directory() {
            return Err(WorkbenchError::NotAFile(id.to_string()));
        }
        Ok(node.content().unwrap_or("(no content loaded)").to_string())
    }

    fn execute_validate(&self, format: &str) -> Result<String, WorkbenchError> {
        self.snapshot.validate()?;
        let node_count = self.snapshot.clone().into_tree().len();
        match format {
            "json" => {
                let body = json!({
                    "project": self.snapshot.project,
                    "nodes": node_count,
                    "valid": true,
                });
                Ok(serde_json::to_string_pretty(&body)?)
            }
            _ => Ok(format!(
                "ok: {} nodes, ids unique across the tree",
                node_count
            )),
        }
    }

    fn execute_session(&self, ops: &[String], format: &str) -> Result<String, WorkbenchError> {
        let mut session = Session::new(self.snapshot.clone());
        for op in ops {
            apply_session_op(&mut session, op)?;
        }
        match format {
            "json" => {
                let body = json!({
                    "project": session.project(),
                    "open": session.open_ids(),
                    "active": session.active_id(),
                });
                Ok(serde_json::to_string_pretty(&body)?)
            }
            _ => {
                let mut out = String::new();
                out.push_str("open tabs:");
                if session.open_ids().is_empty() {
                    out.push_str(" (none)");
                }
                out.push('\n');
                for id in session.open_ids() {
                    let marker = if session.active_id() == Some(id.as_str()) {
                        "*"
                    } else {
                        " "
                    };
                    out.push_str(&format!("{} {}\n", marker, id));
                }
                out.push_str(&format!(
                    "active: {}",
                    session.active_id().unwrap_or("(none)")
                ));
                Ok(out)
            }
        }
    }

    fn execute_chat(&self, prompt: &str) -> Result<String, WorkbenchError> {
        let mut session = Session::new(self.snapshot.clone());
        session.chat_mut().submit(prompt)?;
        session.chat_mut().deliver_pending();
        let mut out = String::new();
        for message in session.chat().messages() {
            let role = match message.role {
                crate::chat::Role::User => "user",
                crate::chat::Role::Assistant => "assistant",
            };
            out.push_str(&format!("{}: {}\n", role, message.content));
        }
        Ok(out.trim_end().to_string())
    }
}

fn render_row(depth: usize, node: &crate::tree::Node) -> String {
    let indent = "  ".repeat(depth);
    if node.is_directory() {
        format!("{}{}/", indent, node.name)
    } else {
        format!("{}{}", indent, node.name)
    }
}

fn apply_session_op(session: &mut Session, op: &str) -> Result<(), WorkbenchError> {
    match op.split_once(':') {
        Some(("select", id)) => session.select_file(id),
        Some(("close", id)) => {
            session.close_file(id);
            Ok(())
        }
        _ => Err(WorkbenchError::InvalidArgument(format!(
            "invalid session op '{}' (expected select:<id> or close:<id>)",
            op
        ))),
    }
}
