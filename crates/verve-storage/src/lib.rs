//! verve-storage
//!
//! Local JSON persistence. Records live as individual files inside a
//! single data directory; writes are atomic (temp file + rename), and
//! reads of absent or unreadable records degrade to "nothing stored" so
//! the app always starts.

pub mod error;
pub mod state;
pub mod store;
