//! verve-coach
//!
//! Tip generation for Verve. Renders the fixed per-category template
//! catalog against a user profile to produce personalized wellness plans,
//! with configurable "thinking" delays so the host can pace the UI (or
//! switch them off entirely for tests).

pub mod context;
pub mod error;
pub mod generate;
pub mod templates;
