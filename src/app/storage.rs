use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use super::error::Result;

/// Slot holding the serialized resume document.
pub const DOCUMENT_SLOT: &str = "resume-app-data-v1";
/// Slot holding the active theme key as a raw string.
pub const THEME_SLOT: &str = "resume-app-theme-v1";
/// Slot holding the autosave preference as a JSON boolean.
pub const AUTOSAVE_SLOT: &str = "resume-app-autosave-v1";

/// Durable key-value substrate with independently addressed slots.
///
/// Each operation touches exactly one key; a failure on one slot must not
/// affect reads or writes of the others. No atomicity is assumed across
/// slots.
pub trait StorageBackend {
    /// Read a slot. `None` means absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a slot.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-per-slot storage under a root directory.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage rooted at the platform data directory (cross-platform).
    pub fn in_default_location() -> Self {
        Self::new(Self::default_root())
    }

    pub fn default_root() -> PathBuf {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("resumepad");
        path
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory storage, mainly for tests and embedders that manage their own
/// durability.
#[derive(Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage_get_set() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get(THEME_SLOT), None);
        storage.set(THEME_SLOT, "sunset").unwrap();
        assert_eq!(storage.get(THEME_SLOT).as_deref(), Some("sunset"));
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path());
        assert_eq!(storage.get(DOCUMENT_SLOT), None);

        storage.set(DOCUMENT_SLOT, "{}").unwrap();
        assert_eq!(storage.get(DOCUMENT_SLOT).as_deref(), Some("{}"));

        // slots live in separate files
        assert!(dir.path().join(format!("{DOCUMENT_SLOT}.json")).exists());
        assert!(!dir.path().join(format!("{THEME_SLOT}.json")).exists());
    }

    #[test]
    fn test_file_storage_creates_root_on_first_write() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("store");
        let mut storage = FileStorage::new(&root);
        storage.set(AUTOSAVE_SLOT, "true").unwrap();
        assert_eq!(storage.get(AUTOSAVE_SLOT).as_deref(), Some("true"));
        assert!(root.is_dir());
    }

    #[test]
    fn test_file_storage_slot_faults_are_isolated() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path());

        // A garbage document slot does not affect the theme slot.
        fs::write(dir.path().join(format!("{DOCUMENT_SLOT}.json")), b"not json").unwrap();
        storage.set(THEME_SLOT, "mono").unwrap();
        assert_eq!(storage.get(THEME_SLOT).as_deref(), Some("mono"));
        assert_eq!(storage.get(DOCUMENT_SLOT).as_deref(), Some("not json"));
    }
}
