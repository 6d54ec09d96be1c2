//! The persistence sink seam.
//!
//! The catalog persists the full collection after every successful mutation,
//! but it neither knows nor cares where the bytes go. The file-backed
//! implementation lives in `larder_storage`; tests plug in recording or
//! failing sinks.

use larder_foundation::{Grocery, LocationRegistry, Result};

/// Receives the full ordered collection after every successful mutation.
pub trait SaveSink {
    /// Persists the groceries and the location registry.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails. The catalog swallows the error
    /// and keeps its in-memory state; the failure is surfaced to the user as
    /// a warning.
    fn save(&mut self, groceries: &[Grocery], locations: &LocationRegistry) -> Result<()>;
}

/// A sink that discards everything. Useful for tests and ephemeral sessions.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl SaveSink for NullSink {
    fn save(&mut self, _groceries: &[Grocery], _locations: &LocationRegistry) -> Result<()> {
        Ok(())
    }
}
