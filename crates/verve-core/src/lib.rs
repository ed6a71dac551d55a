//! verve-core
//!
//! Pure domain types, validation, and storage key conventions. No I/O —
//! this is the shared vocabulary of the Verve system.

pub mod error;
pub mod models;
pub mod store_keys;
