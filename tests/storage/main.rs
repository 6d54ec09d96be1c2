//! Integration tests for the larder_storage crate.
//!
//! Tests for persistence:
//! - Snapshot encoding fidelity
//! - File store save and load behavior
//! - The catalog writing through its sink

mod persistence_tests;
