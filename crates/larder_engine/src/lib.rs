//! Grocery collection engine, queries, and reports for Larder.
//!
//! This crate provides:
//! - [`GroceryCatalog`] - The ordered collection of tracked groceries, with
//!   every edit, query, sort, and report operation
//! - [`Event`] - Structured results for the presentation layer
//! - [`SaveSink`] - The persistence seam the catalog writes through
//! - [`FoodLog`] / [`UserProfile`] - The simpler calories and profile modes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod event;
pub mod food;
pub mod profile;
pub mod sink;

pub use catalog::{EXPIRING_WINDOW_DAYS, GroceryCatalog};
pub use event::{Event, ListingKind, StockSignal};
pub use food::{Food, FoodLog};
pub use profile::UserProfile;
pub use sink::{NullSink, SaveSink};
