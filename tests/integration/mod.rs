//! Integration tests for envhash

mod fingerprint_sensitivity;
mod hasher_verification;
mod test_utils;
