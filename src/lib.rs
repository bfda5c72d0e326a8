//! Greeter library
//!
//! Exposes the greeting function and the entry point plumbing for testing and reuse.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod greet;
