//! The tip store: profile and favorites records on local disk.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use uuid::Uuid;

use verve_core::models::profile::UserProfile;
use verve_core::models::tip::WellnessTip;
use verve_core::store_keys;

use crate::error::StorageError;
use crate::state::{read_json, write_json};

/// Persistence for the two Verve records: the current profile and the
/// favorites list.
///
/// Reads never fail: an absent, unreadable, or invalid record degrades to
/// `None` (profile) or an empty list (favorites). Writes report errors so
/// the caller can decide whether to surface them.
pub struct TipStore {
    data_dir: PathBuf,
}

impl TipStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn profile_path(&self) -> PathBuf {
        self.data_dir.join(store_keys::PROFILE)
    }

    fn favorites_path(&self) -> PathBuf {
        self.data_dir.join(store_keys::FAVORITES)
    }

    // ── Profile ─────────────────────────────────────────────────────────────

    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        write_json(&self.profile_path(), profile)?;
        info!(age = profile.age, "profile saved");
        Ok(())
    }

    /// Load the stored profile, if any.
    ///
    /// A record that fails validation (for example an out-of-range age
    /// edited by hand) is treated the same as no record at all.
    pub fn load_profile(&self) -> Option<UserProfile> {
        let profile: UserProfile = match read_json(&self.profile_path()) {
            Ok(profile) => profile,
            Err(StorageError::NotFound { .. }) => {
                debug!("no stored profile");
                return None;
            }
            Err(err) => {
                warn!(error = %err, "failed to load profile, ignoring record");
                return None;
            }
        };
        if let Err(err) = profile.validate() {
            warn!(error = %err, "stored profile is invalid, ignoring record");
            return None;
        }
        Some(profile)
    }

    // ── Favorites ───────────────────────────────────────────────────────────

    pub fn save_favorites(&self, favorites: &[WellnessTip]) -> Result<(), StorageError> {
        write_json(&self.favorites_path(), &favorites)?;
        debug!(count = favorites.len(), "favorites saved");
        Ok(())
    }

    pub fn load_favorites(&self) -> Vec<WellnessTip> {
        match read_json(&self.favorites_path()) {
            Ok(favorites) => favorites,
            Err(StorageError::NotFound { .. }) => {
                debug!("no stored favorites");
                Vec::new()
            }
            Err(err) => {
                warn!(error = %err, "failed to load favorites, starting empty");
                Vec::new()
            }
        }
    }

    /// Append a tip to the favorites list unless its id is already present.
    pub fn add_favorite(&self, tip: &WellnessTip) -> Result<(), StorageError> {
        let mut favorites = self.load_favorites();
        if favorites.iter().any(|t| t.id == tip.id) {
            debug!(id = %tip.id, "tip already in favorites");
            return Ok(());
        }
        favorites.push(tip.clone());
        self.save_favorites(&favorites)
    }

    /// Remove a tip from the favorites list. Removing an id that is not
    /// present leaves the list unchanged.
    pub fn remove_favorite(&self, id: Uuid) -> Result<(), StorageError> {
        let mut favorites = self.load_favorites();
        favorites.retain(|t| t.id != id);
        self.save_favorites(&favorites)
    }

    pub fn is_favorite(&self, id: Uuid) -> bool {
        self.load_favorites().iter().any(|t| t.id == id)
    }
}
