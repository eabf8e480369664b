use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::debug;
use uuid::Uuid;

use super::KeyValueStorage;
use crate::error::{KineticError, Result, StorageResultExt};

/// Storage keeping one file per key inside a data directory.
///
/// Each write goes to its own uniquely named sibling file that is then
/// renamed into place, so a reader never observes a half-written value.
/// Concurrent writers do not coordinate: the last rename wins.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens storage rooted at `dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).storage_context(&dir)?;
        Ok(Self { dir })
    }

    /// Directory holding the key files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !key.starts_with('.');

        if !valid {
            return Err(KineticError::invalid_input("key")
                .with_reason(format!("'{key}' cannot be used as a storage file name")));
        }

        Ok(self.dir.join(key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KineticError::storage(path).with_source(e)),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_file_name(format!("{key}.{}.tmp", Uuid::new_v4().simple()));

        fs::write(&tmp, value).storage_context(&tmp)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(KineticError::storage(path).with_source(e));
        }

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KineticError::storage(path).with_source(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_round_trip_through_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut storage = FileStorage::open(temp_dir.path().join("data")).unwrap();

        assert_eq!(storage.get_item("ks_plans_v1").unwrap(), None);
        storage.set_item("ks_plans_v1", "[]").unwrap();
        assert_eq!(storage.get_item("ks_plans_v1").unwrap().as_deref(), Some("[]"));
        assert!(temp_dir.path().join("data").join("ks_plans_v1").exists());

        storage.remove_item("ks_plans_v1").unwrap();
        storage.remove_item("ks_plans_v1").unwrap();
        assert_eq!(storage.get_item("ks_plans_v1").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage = FileStorage::open(temp_dir.path()).unwrap();

        assert!(storage.path_for("../escape").is_err());
        assert!(storage.path_for("").is_err());
        assert!(storage.path_for(".hidden").is_err());
        assert!(storage.path_for("theme").is_ok());
    }

    #[test]
    fn test_concurrent_writers_leave_a_whole_value() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dir = temp_dir.path().to_path_buf();

        let writers: Vec<_> = (0..8)
            .map(|writer| {
                let dir = dir.clone();
                std::thread::spawn(move || {
                    let mut storage = FileStorage::open(&dir).unwrap();
                    let value = writer.to_string().repeat(10_000);
                    for _ in 0..20 {
                        storage.set_item("ks_plans_v1", &value).unwrap();
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let storage = FileStorage::open(&dir).unwrap();
        let value = storage.get_item("ks_plans_v1").unwrap().unwrap();
        assert_eq!(value.len(), 10_000);
        assert!(value.chars().all(|c| c == value.chars().next().unwrap()));

        let leftovers: Vec<_> = fs::read_dir(&dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .filter(|name| name.to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
