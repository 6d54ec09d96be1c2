//! Larder - Text-command household tracker
//!
//! This crate re-exports all layers of the Larder system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: larder_runtime    - Shell, dispatcher, CLI
//! Layer 2: larder_engine     - Grocery catalog, queries, reports
//!          larder_storage    - MessagePack snapshots, file store
//! Layer 1: larder_parser     - Vocabulary, verb and detail splitting
//! Layer 0: larder_foundation - Records, location registry, errors
//! ```

pub use larder_engine as engine;
pub use larder_foundation as foundation;
pub use larder_parser as parser;
pub use larder_runtime as runtime;
pub use larder_storage as storage;
