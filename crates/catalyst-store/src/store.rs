use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use catalyst_core::{CatalystResult, Collection, RecordStore};

/// Record store over a data directory: one pretty-printed JSON file per
/// collection, rewritten in full on every save.
///
/// Writes go straight to the target file (no temp file, no rename, no
/// lock). Two processes saving the same collection race and the last
/// writer wins.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: &Path) -> CatalystResult<Self> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Raw file contents, `None` when the file is absent or unreadable.
    fn read(&self, collection: Collection) -> Option<String> {
        let path = self.path_of(collection);
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!("could not read {}: {e}, starting fresh", path.display());
                None
            }
        }
    }

    fn write(&self, collection: Collection, json: String) -> CatalystResult<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.path_of(collection);
        fs::write(&path, json)?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}

impl RecordStore for JsonStore {
    fn path_of(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.file_name())
    }

    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T> {
        let Some(content) = self.read(collection) else {
            return Vec::new();
        };
        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                warn!("malformed {collection} collection: {e}, starting fresh");
                Vec::new()
            }
        }
    }

    fn save<T: Serialize>(&self, collection: Collection, records: &[T]) -> CatalystResult<()> {
        let json = serde_json::to_string_pretty(records)?;
        self.write(collection, json)
    }

    fn load_one<T: DeserializeOwned>(&self, collection: Collection) -> Option<T> {
        let content = self.read(collection)?;
        match serde_json::from_str(&content) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("malformed {collection} record: {e}, ignoring");
                None
            }
        }
    }

    fn save_one<T: Serialize>(&self, collection: Collection, record: &T) -> CatalystResult<()> {
        let json = serde_json::to_string_pretty(record)?;
        self.write(collection, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalyst_core::{Application, ApplicationStatus, Budget};
    use tempfile::TempDir;

    fn test_store() -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        (dir, store)
    }

    fn make_app(id: u32, company: &str) -> Application {
        Application {
            id,
            company: company.into(),
            role: "SWE".into(),
            status: ApplicationStatus::Applied,
            notes: String::new(),
            applied_date: "2026-10-19".into(),
            last_updated: "2026-10-19 09:30".into(),
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_dir, store) = test_store();
        let apps: Vec<Application> = store.load(Collection::Applications);
        assert!(apps.is_empty());
        let budget: Option<Budget> = store.load_one(Collection::Budget);
        assert!(budget.is_none());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let (_dir, store) = test_store();
        let apps = vec![make_app(1, "Google"), make_app(2, "Stripe")];
        store.save(Collection::Applications, &apps).unwrap();

        let loaded: Vec<Application> = store.load(Collection::Applications);
        assert_eq!(loaded, apps);

        // Re-saving untouched records reproduces the file byte for byte.
        let before = fs::read_to_string(store.path_of(Collection::Applications)).unwrap();
        store.save(Collection::Applications, &loaded).unwrap();
        let after = fs::read_to_string(store.path_of(Collection::Applications)).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_malformed_file_loads_empty_then_recovers() {
        let (_dir, store) = test_store();
        let path = store.path_of(Collection::Applications);
        fs::write(&path, "{ not json").unwrap();

        let apps: Vec<Application> = store.load(Collection::Applications);
        assert!(apps.is_empty());

        store
            .save(Collection::Applications, &[make_app(1, "Acme")])
            .unwrap();
        let apps: Vec<Application> = store.load(Collection::Applications);
        assert_eq!(apps.len(), 1);
    }

    #[test]
    fn test_files_are_pretty_printed() {
        let (_dir, store) = test_store();
        store
            .save(Collection::Applications, &[make_app(1, "Acme")])
            .unwrap();
        let raw = fs::read_to_string(store.path_of(Collection::Applications)).unwrap();
        assert!(raw.starts_with("[\n  {\n    \"id\": 1,"));
    }

    #[test]
    fn test_collection_file_names() {
        let (dir, store) = test_store();
        assert_eq!(
            store.path_of(Collection::Tasks),
            dir.path().join("todos.json")
        );
        assert_eq!(
            store.path_of(Collection::Mood),
            dir.path().join("mood_log.json")
        );
    }

    #[test]
    fn test_data_dir_recreated_on_save() {
        let (dir, _) = test_store();
        let nested = dir.path().join("nested").join("data");
        let store = JsonStore::new(&nested).unwrap();
        fs::remove_dir_all(&nested).unwrap();
        store
            .save(Collection::Applications, &[make_app(1, "Acme")])
            .unwrap();
        assert!(store.path_of(Collection::Applications).exists());
    }
}
