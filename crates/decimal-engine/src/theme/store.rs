use std::collections::HashMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

/// Errors raised by a [`ThemeStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: std::io::Error },

    #[error("{} is not a valid preference file: {source}", .path.display())]
    Parse { path: PathBuf, source: serde_json::Error },

    #[error("failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key-value persistence for user preferences.
pub trait ThemeStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A JSON object stored in one file.
///
/// A missing file reads as empty. Only string values are visible through
/// [`ThemeStore::get`], but every other entry is carried through writes
/// untouched. A file that cannot be parsed is replaced on the next write.
/// Writes go to a temporary file in the same directory, which is then
/// renamed over the original.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/decimal-clock/preferences.json`, if the platform has a
    /// config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("decimal-clock").join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>, StoreError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => return Err(StoreError::Read { path: self.path.clone(), source }),
        };
        serde_json::from_str(&text).map_err(|source| StoreError::Parse { path: self.path.clone(), source })
    }

    fn write(&self, text: &str) -> std::io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(text.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl ThemeStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(match self.load()?.remove(key) {
            Some(Value::String(value)) => Some(value),
            _ => None,
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = match self.load() {
            Ok(values) => values,
            Err(err @ StoreError::Parse { .. }) => {
                log::warn!("{err}; starting from empty preferences");
                Map::new()
            }
            Err(err) => return Err(err),
        };
        values.insert(key.to_string(), Value::String(value.to_string()));
        let text = serde_json::to_string_pretty(&values)?;

        self.write(&text).map_err(|source| StoreError::Write { path: self.path.clone(), source })?;

        log::debug!("stored {key}={value} in {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("none.json"));
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn set_creates_parents_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut store = JsonFileStore::new(&path);
        store.set("decimal-clock-theme", "ocean").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("decimal-clock-theme").unwrap().as_deref(), Some("ocean"));
    }

    #[test]
    fn unrelated_keys_survive_a_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"other": "kept"}"#).unwrap();

        let mut store = JsonFileStore::new(&path);
        store.set("decimal-clock-theme", "light").unwrap();
        assert_eq!(store.get("other").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let err = JsonFileStore::new(&path).get("decimal-clock-theme").unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn set_recovers_from_truncated_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"decimal-clock-theme": "da"#).unwrap();

        let mut store = JsonFileStore::new(&path);
        store.set("decimal-clock-theme", "sunset").unwrap();
        assert_eq!(store.get("decimal-clock-theme").unwrap().as_deref(), Some("sunset"));

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(serde_json::from_str::<Value>(&text).is_ok());
    }

    #[test]
    fn set_keeps_non_string_siblings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"decimal-clock-theme": "dark", "volume": 3}"#).unwrap();

        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.get("decimal-clock-theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.get("volume").unwrap(), None);

        store.set("decimal-clock-theme", "ocean").unwrap();
        store.set("decimal-clock-theme", "light").unwrap();

        let saved: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["volume"], Value::from(3));
        assert_eq!(saved["decimal-clock-theme"], Value::from("light"));
    }

    #[test]
    fn write_leaves_no_temporary_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = JsonFileStore::new(&path);
        store.set("decimal-clock-theme", "dark").unwrap();
        store.set("decimal-clock-theme", "light").unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("prefs.json")]);
    }
}
