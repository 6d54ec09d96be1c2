//! End-to-end tests across every layer.
//!
//! These drive the shell with a scripted line editor wired to a real file
//! store, the same assembly the binary builds, and check what survives a
//! restart.

mod session_tests;
