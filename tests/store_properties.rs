//! Property tests for lookup determinism and tab-state invariants.

use proptest::prelude::*;
use workbench::session::Session;
use workbench::snapshot::Snapshot;
use workbench::tree::{Node, WorkspaceTree};

/// Shape a list of unique ids into a small forest: every third id becomes a
/// directory holding the following two ids as files. Exercises lookup across
/// nesting without modeling arbitrary tree shapes.
fn build_forest(ids: &[String]) -> Vec<Node> {
    let mut roots = Vec::new();
    for chunk in ids.chunks(3) {
        match chunk {
            [dir, rest @ ..] if rest.len() == 2 => {
                let children = rest
                    .iter()
                    .map(|id| Node::file(id.clone(), format!("{}.ts", id), format!("/{}", id), None))
                    .collect();
                roots.push(Node::directory(
                    dir.clone(),
                    dir.clone(),
                    format!("/{}", dir),
                    children,
                ));
            }
            _ => {
                for id in chunk {
                    roots.push(Node::file(
                        id.clone(),
                        format!("{}.ts", id),
                        format!("/{}", id),
                        None,
                    ));
                }
            }
        }
    }
    roots
}

fn file_ids(ids: &[String]) -> Vec<String> {
    // Ids not used as directories in build_forest's shaping.
    ids.iter()
        .enumerate()
        .filter(|(i, _)| i % 3 != 0 || ids.len() - (i - i % 3) < 3)
        .map(|(_, id)| id.clone())
        .collect()
}

fn unique_ids() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::hash_set(1u32..10_000, 1..24)
        .prop_map(|set| set.into_iter().map(|n| format!("n{}", n)).collect())
}

proptest! {
    #[test]
    fn present_ids_are_found_and_absent_ids_are_not(ids in unique_ids()) {
        let tree = WorkspaceTree::new(build_forest(&ids));
        for id in &ids {
            let node = tree.find_by_id(id);
            prop_assert!(node.is_some());
            prop_assert_eq!(&node.unwrap().id, id);
        }
        prop_assert!(tree.find_by_id("absent").is_none());
        prop_assert_eq!(tree.len(), ids.len());
    }

    #[test]
    fn selecting_distinct_files_opens_tabs_in_selection_order(ids in unique_ids()) {
        let files = file_ids(&ids);
        prop_assume!(!files.is_empty());
        let mut session = Session::new(Snapshot {
            project: "prop".to_string(),
            files: build_forest(&ids),
        });
        for id in &files {
            session.select_file(id).unwrap();
        }
        prop_assert_eq!(session.open_ids(), files.as_slice());
        prop_assert_eq!(session.active_id(), files.last().map(String::as_str));
    }

    #[test]
    fn reselecting_never_reorders_or_duplicates(ids in unique_ids(), pick in any::<prop::sample::Index>()) {
        let files = file_ids(&ids);
        prop_assume!(!files.is_empty());
        let mut session = Session::new(Snapshot {
            project: "prop".to_string(),
            files: build_forest(&ids),
        });
        for id in &files {
            session.select_file(id).unwrap();
        }
        let reselect = &files[pick.index(files.len())];
        session.select_file(reselect).unwrap();
        prop_assert_eq!(session.open_ids(), files.as_slice());
        prop_assert_eq!(session.active_id(), Some(reselect.as_str()));
    }

    #[test]
    fn closing_a_non_active_tab_keeps_the_active_file(ids in unique_ids(), pick in any::<prop::sample::Index>()) {
        let files = file_ids(&ids);
        prop_assume!(files.len() >= 2);
        let mut session = Session::new(Snapshot {
            project: "prop".to_string(),
            files: build_forest(&ids),
        });
        for id in &files {
            session.select_file(id).unwrap();
        }
        let active = files.last().unwrap().clone();
        let victim = files[pick.index(files.len() - 1)].clone();
        session.close_file(&victim);
        prop_assert_eq!(session.active_id(), Some(active.as_str()));
        prop_assert!(!session.is_open(&victim));
    }

    #[test]
    fn closing_the_active_tab_focuses_the_last_remaining(ids in unique_ids()) {
        let files = file_ids(&ids);
        prop_assume!(files.len() >= 2);
        let mut session = Session::new(Snapshot {
            project: "prop".to_string(),
            files: build_forest(&ids),
        });
        for id in &files {
            session.select_file(id).unwrap();
        }
        session.close_file(&files[files.len() - 1]);
        prop_assert_eq!(session.active_id(), Some(files[files.len() - 2].as_str()));
    }

    #[test]
    fn double_close_equals_single_close(ids in unique_ids(), pick in any::<prop::sample::Index>()) {
        let files = file_ids(&ids);
        prop_assume!(!files.is_empty());
        let mut session = Session::new(Snapshot {
            project: "prop".to_string(),
            files: build_forest(&ids),
        });
        for id in &files {
            session.select_file(id).unwrap();
        }
        let victim = files[pick.index(files.len())].clone();
        session.close_file(&victim);
        let open_after_one = session.open_ids().to_vec();
        let active_after_one = session.active_id().map(str::to_string);
        session.close_file(&victim);
        prop_assert_eq!(session.open_ids(), open_after_one.as_slice());
        prop_assert_eq!(session.active_id(), active_after_one.as_deref());
    }
}
