//! Interactive shell, dispatcher, and CLI for Larder.
//!
//! This crate provides:
//! - [`Shell`] - The read-dispatch-render loop and mode state machine
//! - [`Session`] - The explicit context object commands mutate
//! - [`LineEditor`] - Swappable line editing (rustyline by default)
//! - [`render`] - Console rendering of engine events

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod render;
pub mod session;
pub mod shell;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use session::Session;
pub use shell::Shell;
