//! Merge domain: default policy and source composition.

pub mod merge_policy;
pub mod service;
