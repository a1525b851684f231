//! Integration tests for what does and does not change the fingerprint

use super::test_utils::{set_mtime_millis, Fixture};
use envhash::fingerprint::hasher::fold_hash;
use envhash::fs::MemoryFileSystem;
use envhash::{
    collect_directory_records, collect_file_records, compute_fingerprint, EnvHasher,
    FingerprintConfig, FingerprintError,
};
use std::fs;
use std::path::Path;

fn fixture_config(fixture: &Fixture) -> FingerprintConfig {
    FingerprintConfig::default()
        .with_files([
            fixture.file1.to_string_lossy().into_owned(),
            fixture.file2.to_string_lossy().into_owned(),
        ])
        .with_directories([
            fixture.dir1.to_string_lossy().into_owned(),
            fixture.dir2.to_string_lossy().into_owned(),
        ])
}

/// Test that the fingerprint is the two folded sub-hashes joined by '_'
#[tokio::test]
async fn test_fingerprint_is_joined_sub_hashes() {
    let fixture = Fixture::new();
    let config = fixture_config(&fixture);

    let fingerprint = compute_fingerprint(&config).await.unwrap();

    let files = collect_file_records(&[fixture.file1.clone(), fixture.file2.clone()])
        .await
        .unwrap();
    let directories = collect_directory_records(&[fixture.dir1.clone(), fixture.dir2.clone()])
        .await
        .unwrap();

    assert_eq!(
        fingerprint.to_string(),
        format!("{}_{}", fold_hash(&files), fold_hash(&directories))
    );
}

/// Test that two runs without changes agree
#[tokio::test]
async fn test_fingerprint_is_idempotent() {
    let fixture = Fixture::new();
    let config = fixture_config(&fixture);

    let first = compute_fingerprint(&config).await.unwrap();
    let second = compute_fingerprint(&config).await.unwrap();

    assert_eq!(first, second);
}

/// Test that relative references resolve against the configured root
#[tokio::test]
async fn test_relative_references_match_absolute() {
    let fixture = Fixture::new();
    let absolute = fixture_config(&fixture);
    let relative = FingerprintConfig::default()
        .with_root(&fixture.root)
        .with_files(["files/file1.txt", "files/file2.txt"])
        .with_directories(["dirs/dir1", "dirs/dir2"]);

    assert_eq!(
        compute_fingerprint(&absolute).await.unwrap(),
        compute_fingerprint(&relative).await.unwrap()
    );
}

/// Test that touching a file without editing it changes the fingerprint
#[tokio::test]
async fn test_mtime_change_changes_fingerprint() {
    let fixture = Fixture::new();
    let config = fixture_config(&fixture);
    set_mtime_millis(&fixture.file1, 1_600_000_000_000);

    let before = compute_fingerprint(&config).await.unwrap();
    set_mtime_millis(&fixture.file1, 1_600_000_000_001);
    let after = compute_fingerprint(&config).await.unwrap();

    assert_ne!(before.files, after.files);
    assert_eq!(before.directories, after.directories);
}

/// Test that editing content with the mtime pinned changes the fingerprint
#[tokio::test]
async fn test_content_change_changes_fingerprint() {
    let fs = MemoryFileSystem::new();
    fs.insert_file("/work/package.json", "{\"version\":\"1.0.0\"}", 5_000);
    fs.insert_dir("/work/node_modules", 5_000);
    let hasher = EnvHasher::with_filesystem(fs);
    let config = FingerprintConfig::default().with_root("/work");

    let before = hasher.compute_fingerprint(&config).await.unwrap();
    hasher
        .filesystem()
        .set_content(Path::new("/work/package.json"), "{\"version\":\"1.0.1\"}");
    let after = hasher.compute_fingerprint(&config).await.unwrap();

    assert_ne!(before.to_string(), after.to_string());
}

/// Test that adding a direct child changes the fingerprint
#[tokio::test]
async fn test_added_child_changes_fingerprint() {
    let fixture = Fixture::new();
    let config = fixture_config(&fixture);

    let before = compute_fingerprint(&config).await.unwrap();
    fs::create_dir(fixture.dir2.join("c")).unwrap();
    let after = compute_fingerprint(&config).await.unwrap();

    assert_eq!(before.files, after.files);
    assert_ne!(before.directories, after.directories);
}

/// Test that removing a direct child changes the fingerprint
#[tokio::test]
async fn test_removed_child_changes_fingerprint() {
    let fixture = Fixture::new();
    let config = fixture_config(&fixture);

    let before = compute_fingerprint(&config).await.unwrap();
    fs::remove_dir(&fixture.dir1b).unwrap();
    let after = compute_fingerprint(&config).await.unwrap();

    assert_ne!(before.directories, after.directories);
}

/// Test that an empty file list yields a leading underscore
#[tokio::test]
async fn test_no_files_has_empty_prefix() {
    let fixture = Fixture::new();
    let config = fixture_config(&fixture).with_files(Vec::<String>::new());

    let fingerprint = compute_fingerprint(&config).await.unwrap();

    assert!(fingerprint.to_string().starts_with('_'));
    assert_eq!(fingerprint.files, "");
}

/// Test that a missing file rejects with its path and no fingerprint
#[tokio::test]
async fn test_missing_file_rejects() {
    let fixture = Fixture::new();
    let missing = fixture.root.join("package.json");
    let config = FingerprintConfig::default()
        .with_root(&fixture.root)
        .with_directories([fixture.dir1.to_string_lossy().into_owned()]);

    let err = compute_fingerprint(&config).await.unwrap_err();

    assert!(matches!(err, FingerprintError::NotFound { .. }));
    assert_eq!(err.path(), missing.as_path());
}

/// Test that a missing directory rejects even when every file is readable
#[tokio::test]
async fn test_missing_directory_rejects() {
    let fixture = Fixture::new();
    let config = fixture_config(&fixture)
        .with_root(&fixture.root)
        .with_directories(["no_such_dir"]);

    let err = compute_fingerprint(&config).await.unwrap_err();

    assert_eq!(err.path(), fixture.root.join("no_such_dir").as_path());
}
