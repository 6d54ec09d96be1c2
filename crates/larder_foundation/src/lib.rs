//! Core record types, location registry, and errors for Larder.
//!
//! This crate provides:
//! - [`Grocery`] - One tracked household item and its attributes
//! - [`Location`] / [`LocationRegistry`] - Named storage places and their
//!   membership index
//! - [`Error`] - The shared error taxonomy for user-input validation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod grocery;
pub mod location;

pub use error::{Error, ErrorKind, Result};
pub use grocery::{DEFAULT_CATEGORY, Grocery};
pub use location::{Location, LocationRegistry};
