//! Timestamped backups of the master file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;

use super::PatchError;

/// Suffix format: `YYYYMMDD_HHMMSS`.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// `<file>.bak_<YYYYMMDD_HHMMSS>` next to `path`.
pub fn backup_path(path: &Path, at: NaiveDateTime) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = at.format(BACKUP_TIMESTAMP_FORMAT);
    path.with_file_name(format!("{file_name}.bak_{suffix}"))
}

/// Copies `path` to its timestamped backup and returns the backup path.
pub fn create_backup(path: &Path, at: NaiveDateTime) -> Result<PathBuf, PatchError> {
    let target = backup_path(path, at);
    fs::copy(path, &target).map_err(|source| PatchError::Backup {
        from: path.to_path_buf(),
        to: target.clone(),
        source,
    })?;
    info!(from = %path.display(), to = %target.display(), "Master file backed up");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 2)
            .unwrap()
    }

    #[test]
    fn test_backup_path_format() {
        let path = Path::new("/maps/ru/regions.geojson");
        assert_eq!(
            backup_path(path, at()),
            PathBuf::from("/maps/ru/regions.geojson.bak_20240307_090502")
        );
    }

    #[test]
    fn test_create_backup_copies_bytes() {
        let dir = tempfile::TempDir::new().unwrap();
        let master = dir.path().join("regions.geojson");
        fs::write(&master, "{\"type\":\"FeatureCollection\",\"features\":[]}\n").unwrap();

        let backup = create_backup(&master, at()).unwrap();

        assert_eq!(fs::read(&backup).unwrap(), fs::read(&master).unwrap());
    }

    #[test]
    fn test_create_backup_missing_source() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = create_backup(&dir.path().join("absent.geojson"), at()).unwrap_err();
        assert!(matches!(err, PatchError::Backup { .. }));
    }
}
