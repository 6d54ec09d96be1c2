//! Command vocabulary and detail parsing for Larder.
//!
//! This crate turns user input like "exp Milk d/2999-01-01" into structured
//! pieces the collection engine can act on:
//!
//! ```text
//! "exp Milk d/2999-01-01"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VERB SPLIT      │  → ("exp", "Milk d/2999-01-01")
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → GroceryCommand::Exp (kind: Edit, marker: "d/")
//! │ LOOKUP          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DETAIL SPLIT    │  → ("Milk", "2999-01-01")
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`input`] - Split a raw line into verb and rest-of-line
//! - [`vocabulary`] - Per-mode verb enumerations with explicit classification
//! - [`details`] - Split an edit command's detail string on its marker

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod details;
pub mod input;
pub mod vocabulary;

pub use details::split_details;
pub use input::split_verb;
pub use vocabulary::{
    CalCommand, CommandKind, CommonCommand, GroceryCommand, Mode, ProfileCommand,
};
