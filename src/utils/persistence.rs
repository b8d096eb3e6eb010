//! JSON persistence for save data and meta-progression.
//!
//! Each storage key maps to `<key>.json` inside one directory, by default
//! `~/.primal-path/`. Reads never fail: a missing or corrupt file is logged
//! and replaced by `T::default()`.

use crate::core::constants::SAVE_DIR_NAME;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.primal-path/ directory path, creating it if needed.
pub fn default_save_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(SAVE_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Key-value JSON storage rooted at one directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at `~/.primal-path/`.
    pub fn open_default() -> io::Result<Self> {
        Ok(Self::new(default_save_dir()?))
    }

    /// Store in a unique temporary directory.
    #[cfg(test)]
    pub(crate) fn new_for_test() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "primal-path-test-{}-{}",
            std::process::id(),
            test_id
        ));
        Self::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Load `key`, returning `T::default()` if missing or invalid.
    pub fn load_or_default<T: Default + DeserializeOwned>(&self, key: &str) -> T {
        let path = self.path_for(key);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return T::default(),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read stored data, using default");
                return T::default();
            }
        };
        match serde_json::from_str(&json) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "stored data is corrupt, using default");
                T::default()
            }
        }
    }

    /// Save `data` as pretty-printed JSON under `key`.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, data: &T) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.path_for(key), json)?;
        Ok(())
    }

    /// Save and log instead of propagating failures.
    pub fn save_or_log<T: Serialize + ?Sized>(&self, key: &str, data: &T) {
        if let Err(e) = self.save(key, data) {
            tracing::warn!(key, error = %e, "failed to persist data");
        }
    }

    /// Delete the file backing `key`. Missing files are not an error.
    pub fn remove(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_format() {
        let store = JsonStore::new("/tmp/somewhere");
        let path = store.path_for("primal-path-v7");
        assert!(path.to_string_lossy().ends_with("somewhere/primal-path-v7.json"));
    }

    #[test]
    fn test_load_missing_returns_default() {
        let store = JsonStore::new_for_test();
        let val: Vec<String> = store.load_or_default("nonexistent");
        assert!(val.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = JsonStore::new_for_test();
        let data = vec!["hello".to_string(), "world".to_string()];
        store.save("roundtrip", &data).expect("save should succeed");

        let loaded: Vec<String> = store.load_or_default("roundtrip");
        assert_eq!(loaded, data);

        store.remove("roundtrip").expect("remove should succeed");
        let gone: Vec<String> = store.load_or_default("roundtrip");
        assert!(gone.is_empty());
    }

    #[test]
    fn test_corrupt_file_returns_default() {
        let store = JsonStore::new_for_test();
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(store.path_for("broken"), "{not json").unwrap();
        let val: Vec<u32> = store.load_or_default("broken");
        assert!(val.is_empty());
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let store = JsonStore::new_for_test();
        assert!(store.remove("never-written").is_ok());
    }
}
