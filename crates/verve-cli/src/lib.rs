//! verve-cli
//!
//! The terminal host: screens, input translation, and the application
//! state machine. Exposed as a library so integration tests can drive
//! the controller directly without spawning the binary.

pub mod app;
pub mod config;
pub mod screens;
