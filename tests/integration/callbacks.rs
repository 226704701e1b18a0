//! Integration tests for the per-file callback

use super::test_utils::populate_sample_tree;
use dirtree::{BuildOptions, TreeBuilder};
use regex::Regex;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Test that the callback fires exactly once per retained file
#[tokio::test]
async fn test_callback_fires_once_per_file() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    populate_sample_tree(&root);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    TreeBuilder::new(root)
        .on_file(move |node, _| sink.lock().unwrap().push(node.name().to_string()))
        .build()
        .await
        .unwrap()
        .unwrap();

    let mut names = Arc::try_unwrap(seen).unwrap().into_inner().unwrap();
    names.sort();
    assert_eq!(names, vec!["a.txt", "b.md", "c.txt", "d.log"]);
}

/// Test that the callback receives the node alongside its path
#[tokio::test]
async fn test_callback_receives_node_and_path() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::write(root.join("only.txt"), "123").unwrap();

    let seen: Arc<Mutex<Vec<(PathBuf, u64, Option<String>)>>> =
        Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    TreeBuilder::new(root.clone())
        .on_file(move |node, path| {
            assert_eq!(node.path(), path);
            sink.lock().unwrap().push((
                path.to_path_buf(),
                node.size(),
                node.extension().map(str::to_string),
            ));
        })
        .build()
        .await
        .unwrap()
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, root.join("only.txt"));
    assert_eq!(seen[0].1, 3);
    assert_eq!(seen[0].2.as_deref(), Some(".txt"));
}

/// Test that filtered-out files never reach the callback
#[tokio::test]
async fn test_callback_skips_filtered_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    populate_sample_tree(&root);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let options = BuildOptions {
        extensions: Some(Regex::new(r"\.txt$").unwrap()),
        ..Default::default()
    };
    TreeBuilder::new(root)
        .with_options(options)
        .on_file(move |node, _| sink.lock().unwrap().push(node.name().to_string()))
        .build()
        .await
        .unwrap()
        .unwrap();

    let mut names = Arc::try_unwrap(seen).unwrap().into_inner().unwrap();
    names.sort();
    assert_eq!(names, vec!["a.txt", "c.txt"]);
}

/// Test that excluded files never reach the callback
#[tokio::test]
async fn test_callback_skips_excluded_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    populate_sample_tree(&root);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let options = BuildOptions {
        exclude: vec![Regex::new(r"sub$").unwrap(), Regex::new(r"\.md$").unwrap()],
        ..Default::default()
    };
    TreeBuilder::new(root)
        .with_options(options)
        .on_file(move |node, _| sink.lock().unwrap().push(node.name().to_string()))
        .build()
        .await
        .unwrap()
        .unwrap();

    let names = Arc::try_unwrap(seen).unwrap().into_inner().unwrap();
    assert_eq!(names, vec!["a.txt"]);
}

/// Test that a directory root without retained files leaves the callback idle
#[tokio::test]
async fn test_callback_idle_for_empty_tree() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    fs::create_dir(root.join("hollow")).unwrap();

    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&seen);

    TreeBuilder::new(root)
        .on_file(move |node, _| sink.lock().unwrap().push(node.name().to_string()))
        .build()
        .await
        .unwrap()
        .unwrap();

    assert!(seen.lock().unwrap().is_empty());
}
