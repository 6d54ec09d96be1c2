//! Integration tests for the larder_engine crate.
//!
//! Tests for the grocery catalog and its sibling trackers:
//! - Multi-step grocery workflows across several commands
//! - Stock arithmetic properties
//! - Calorie log and profile behavior

mod stock_tests;
mod workflow_tests;
