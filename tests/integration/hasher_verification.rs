//! Hasher Implementation Verification Tests
//!
//! Tests to verify that fold_hash drives a streaming XXH3-128 exactly as
//! documented: first key as seed, then each value after its key.

use envhash::fingerprint::hasher::{fold_hash, IncrementalHasher};
use xxhash_rust::xxh3::{xxh3_128, Xxh3};

/// Test that the incremental hasher matches XXH3 directly
#[test]
fn test_incremental_hasher_matches_xxh3() {
    let mut ours = IncrementalHasher::seeded("test1");
    ours.feed("10").feed("test2").feed("20");

    let mut direct = Xxh3::new();
    direct.update(b"test1");
    direct.update(b"10");
    direct.update(b"test2");
    direct.update(b"20");

    assert_eq!(ours.finalize(), hex::encode(direct.digest128().to_be_bytes()));
}

/// Test that streaming is equivalent to one-shot hashing of the concatenation
#[test]
fn test_stream_equals_one_shot() {
    let streamed = fold_hash(&[("test1", 10), ("test2", 20)]);
    let one_shot = hex::encode(xxh3_128(b"test110test220").to_be_bytes());
    assert_eq!(streamed, one_shot);
}

/// Test the documented two-element expansion
#[test]
fn test_fold_hash_two_elements() {
    let data = [("test1", 10), ("test2", 20)];

    let mut expected = IncrementalHasher::seeded("test1");
    expected.feed("10");
    expected.feed("test2");
    expected.feed("20");

    assert_eq!(fold_hash(&data), expected.finalize());
}

/// Test the empty-sequence sentinel
#[test]
fn test_fold_hash_empty() {
    let empty: Vec<(String, i64)> = Vec::new();
    assert_eq!(fold_hash(&empty), "");
}

/// Test that finalize does not consume the state
#[test]
fn test_finalize_is_repeatable() {
    let mut hasher = IncrementalHasher::seeded("seed");
    hasher.feed("part");
    assert_eq!(hasher.finalize(), hasher.finalize());
}

/// Test that owned and borrowed keys fold identically
#[test]
fn test_owned_and_borrowed_keys_agree() {
    let owned = vec![("a".to_string(), 1_i64), ("b".to_string(), 2_i64)];
    let borrowed = [("a", 1_i64), ("b", 2_i64)];
    assert_eq!(fold_hash(&owned), fold_hash(&borrowed));
}
