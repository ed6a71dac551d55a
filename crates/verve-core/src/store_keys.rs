//! Storage file-name conventions.
//!
//! Pure constants — no filesystem dependency. These define the canonical
//! layout of the two persisted records inside the Verve data directory.

/// The single current profile record.
pub const PROFILE: &str = "profile.json";

/// The full favorites list, rewritten on every mutation.
pub const FAVORITES: &str = "favorites.json";
