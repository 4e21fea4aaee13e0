//! Workspace snapshot: the seed data a session is built from.
//!
//! A snapshot is an ordered forest of node literals plus the project name.
//! It is loaded once at session start (from JSON or the built-in demo) and
//! validated before the tree is handed to a session: every id must be unique
//! across the entire forest, not just among siblings.

use crate::error::SnapshotError;
use crate::tree::{Node, NodeKind, WorkspaceTree};
use crate::types::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Serializable workspace seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Display name of the project.
    pub project: String,
    /// Top-level nodes in display order.
    pub files: Vec<Node>,
}

impl Snapshot {
    /// Parse and validate a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Read, parse, and validate a snapshot file.
    pub fn from_file(path: &Path) -> Result<Self, SnapshotError> {
        let json = std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Check the global id-uniqueness invariant.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let mut seen: HashSet<&NodeId> = HashSet::new();
        check_unique(&self.files, &mut seen)
    }

    /// Consume the snapshot and build the session tree.
    pub fn into_tree(self) -> WorkspaceTree {
        WorkspaceTree::new(self.files)
    }

    /// Built-in demo workspace: a small Vite/React project the shell can
    /// show without any snapshot file.
    pub fn demo() -> Self {
        Snapshot {
            project: "Zenflow - Productivity App".to_string(),
            files: vec![
                Node::directory("bolt", ".bolt", "/.bolt", vec![]),
                Node::directory(
                    "src",
                    "src",
                    "/src",
                    vec![Node::file(
                        "app-context",
                        "AppContext.tsx",
                        "/src/AppContext.tsx",
                        Some(concat!(
                            "import React, { createContext, useContext } from 'react';\n",
                            "\n",
                            "const AppContext = createContext(undefined);\n",
                            "\n",
                            "export function AppProvider({ children }) {\n",
                            "  return <AppContext.Provider>{children}</AppContext.Provider>;\n",
                            "}\n",
                        )
                        .to_string()),
                    )],
                ),
                Node::directory(
                    "hooks",
                    "hooks",
                    "/hooks",
                    vec![
                        Node::file(
                            "use-local-storage",
                            "useLocalStorage.ts",
                            "/hooks/useLocalStorage.ts",
                            Some(concat!(
                                "import { useState } from 'react';\n",
                                "\n",
                                "export function useLocalStorage(key, initialValue) {\n",
                                "  const [value, setValue] = useState(initialValue);\n",
                                "  return [value, setValue];\n",
                                "}\n",
                            )
                            .to_string()),
                        ),
                        Node::file(
                            "use-theme",
                            "useTheme.ts",
                            "/hooks/useTheme.ts",
                            Some(concat!(
                                "import { useLocalStorage } from './useLocalStorage';\n",
                                "\n",
                                "export function useTheme() {\n",
                                "  const [theme, setTheme] = useLocalStorage('theme', 'dark');\n",
                                "  return { theme, setTheme };\n",
                                "}\n",
                            )
                            .to_string()),
                        ),
                    ],
                ),
                Node::directory(
                    "types",
                    "types",
                    "/types",
                    vec![
                        Node::file(
                            "app-types",
                            "App.tsx",
                            "/types/App.tsx",
                            Some(concat!(
                                "export interface Task {\n",
                                "  id: string;\n",
                                "  title: string;\n",
                                "  completed: boolean;\n",
                                "}\n",
                            )
                            .to_string()),
                        ),
                        Node::file(
                            "vite-env-types",
                            "vite-env.d.ts",
                            "/types/vite-env.d.ts",
                            Some("/// <reference types=\"vite/client\" />\n".to_string()),
                        ),
                    ],
                ),
                Node::file(
                    "gitignore",
                    ".gitignore",
                    "/.gitignore",
                    Some("node_modules/\ndist/\n.env\n".to_string()),
                ),
                Node::file(
                    "index-html",
                    "index.html",
                    "/index.html",
                    Some(concat!(
                        "<!DOCTYPE html>\n",
                        "<html lang=\"en\">\n",
                        "<body>\n",
                        "  <div id=\"root\"></div>\n",
                        "</body>\n",
                        "</html>\n",
                    )
                    .to_string()),
                ),
                Node::file(
                    "package-json",
                    "package.json",
                    "/package.json",
                    Some(concat!(
                        "{\n",
                        "  \"name\": \"zenflow\",\n",
                        "  \"version\": \"1.0.0\",\n",
                        "  \"type\": \"module\"\n",
                        "}\n",
                    )
                    .to_string()),
                ),
                Node::file("vite-config", "vite.config.ts", "/vite.config.ts", None),
            ],
        }
    }
}

fn check_unique<'a>(
    nodes: &'a [Node],
    seen: &mut HashSet<&'a NodeId>,
) -> Result<(), SnapshotError> {
    for node in nodes {
        if !seen.insert(&node.id) {
            return Err(SnapshotError::DuplicateId(node.id.clone()));
        }
        if let NodeKind::Directory { children } = &node.kind {
            check_unique(children, seen)?;
        }
    }
    Ok(())
}
