use std::path::{Path, PathBuf};

use tracing::info;

use verve_core::store_keys;

/// Resolve the data directory: the `--data-dir` flag when given, else the
/// platform data dir (e.g. `~/.local/share/verve`).
pub fn resolve_data_dir(flag: Option<PathBuf>) -> eyre::Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join("verve"))
}

/// Delete the stored profile and favorites records, if present.
pub fn reset_data(data_dir: &Path) -> eyre::Result<()> {
    for key in [store_keys::PROFILE, store_keys::FAVORITES] {
        let path = data_dir.join(key);
        if path.exists() {
            std::fs::remove_file(&path)?;
            info!(path = %path.display(), "record deleted");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn flag_overrides_platform_dir() {
        let dir = resolve_data_dir(Some(PathBuf::from("/tmp/verve-test"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/verve-test"));
    }

    #[test]
    fn reset_removes_both_records() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(store_keys::PROFILE), "{}").unwrap();
        std::fs::write(dir.path().join(store_keys::FAVORITES), "[]").unwrap();

        reset_data(dir.path()).unwrap();

        assert!(!dir.path().join(store_keys::PROFILE).exists());
        assert!(!dir.path().join(store_keys::FAVORITES).exists());
    }

    #[test]
    fn reset_tolerates_missing_records() {
        let dir = TempDir::new().unwrap();
        reset_data(dir.path()).unwrap();
    }
}
