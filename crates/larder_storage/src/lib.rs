//! File-backed persistence for the Larder catalog.
//!
//! This crate provides:
//! - [`Snapshot`] - The persisted form of the catalog, round-tripping every
//!   record field and the location registry
//! - [`FileStore`] - A [`SaveSink`](larder_engine::SaveSink) writing
//!   `MessagePack` snapshots to a single file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod snapshot;
pub mod store;

pub use snapshot::{Snapshot, from_bytes, to_bytes};
pub use store::FileStore;
