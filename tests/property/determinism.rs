//! Property-based tests for determinism guarantees

use envhash::fingerprint::hasher::{fold_hash, IncrementalHasher};
use proptest::prelude::*;

/// Test that folding is deterministic for any sequence
#[test]
fn test_fold_hash_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec((any::<String>(), any::<i64>()), 0..16),
            |sequence| {
                let hash1 = fold_hash(&sequence);
                let hash2 = fold_hash(&sequence);
                assert_eq!(hash1, hash2);

                // Only the empty sequence yields the empty sentinel
                assert_eq!(hash1.is_empty(), sequence.is_empty());

                Ok(())
            },
        )
        .unwrap();
}

/// Test that folding equals feeding the flattened parts in order
#[test]
fn test_fold_hash_matches_manual_stream_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec(("[a-z]{1,8}", any::<u32>()), 1..8),
            |sequence| {
                let (first_key, first_value) = &sequence[0];
                let mut expected = IncrementalHasher::seeded(first_key);
                expected.feed(&first_value.to_string());
                for (key, value) in &sequence[1..] {
                    expected.feed(key);
                    expected.feed(&value.to_string());
                }

                assert_eq!(fold_hash(&sequence), expected.finalize());
                Ok(())
            },
        )
        .unwrap();
}

/// Test that swapping two distinct pairs changes the hash
#[test]
fn test_fold_hash_order_sensitivity_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(("[a-z]{4}", 0..1_000_i64), ("[a-z]{4}", 0..1_000_i64)),
            |(first, second)| {
                prop_assume!(first != second);

                let forward = fold_hash(&[first.clone(), second.clone()]);
                let reversed = fold_hash(&[second, first]);

                // Collisions are theoretically possible but vanishingly rare
                prop_assert_ne!(forward, reversed);
                Ok(())
            },
        )
        .unwrap();
}
