//! Property-based tests for the incremental hasher

mod determinism;
