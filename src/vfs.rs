use crate::persist::KeyValueStorage;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const SESSION_FILES_KEY: &str = "vim-session-files";
pub const DEFAULT_EXTENSION: &str = "txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    File,
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    #[serde(default)]
    pub size: usize,
    #[serde(default)]
    pub extension: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl FileRecord {
    /// A text file whose size is the UTF-8 byte length of `content`.
    pub fn text(name: &str, content: &str) -> Self {
        FileRecord {
            name: name.into(),
            kind: FileKind::File,
            size: content.len(),
            extension: extension_of(name),
            content: Some(content.into()),
            download_url: None,
        }
    }

    /// A downloadable asset with no inline content.
    pub fn asset(name: &str, size: usize, url: &str) -> Self {
        FileRecord {
            name: name.into(),
            kind: FileKind::File,
            size,
            extension: extension_of(name),
            content: None,
            download_url: Some(url.into()),
        }
    }
}

/// Text after the last `.`; `txt` when there is none or it is empty.
pub fn extension_of(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.into(),
        _ => DEFAULT_EXTENSION.into(),
    }
}

/// User-created files for this browser profile. Every mutation is written
/// through to the backing storage as one JSON object keyed by file name.
pub struct SessionStore<S: KeyValueStorage> {
    files: HashMap<String, FileRecord>,
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, SESSION_FILES_KEY)
    }

    pub fn load_with_key(storage: S, key: &str) -> Self {
        let mut store = SessionStore {
            files: HashMap::new(),
            storage,
            key: key.into(),
        };
        store.files = store.read_table();
        store
    }

    pub fn save(&mut self, name: &str, content: &str) -> FileRecord {
        let record = FileRecord::text(name, content);
        self.files.insert(name.into(), record.clone());
        self.write_table();
        record
    }

    pub fn get(&self, name: &str) -> Option<&FileRecord> {
        self.files.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    /// Returns whether a record was removed. Persists either way.
    pub fn delete(&mut self, name: &str) -> bool {
        let removed = self.files.remove(name).is_some();
        self.write_table();
        removed
    }

    pub fn list(&self) -> Vec<&FileRecord> {
        self.files.values().collect()
    }

    /// Same as `list` but sorted by name, for stable rendering.
    pub fn list_sorted(&self) -> Vec<&FileRecord> {
        let mut files = self.list();
        files.sort_by(|a, b| a.name.cmp(&b.name));
        files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn total_size(&self) -> usize {
        self.files.values().map(|f| f.size).sum()
    }

    pub fn clear_all(&mut self) {
        self.files.clear();
        self.remove_table();
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub(crate) fn storage_key(&self) -> &str {
        &self.key
    }

    pub(crate) fn parts_mut(&mut self) -> (&HashMap<String, FileRecord>, &mut S) {
        (&self.files, &mut self.storage)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::persist::{MemoryStorage, StorageError};

    /// Storage that fails every call.
    #[derive(Default)]
    pub struct FailingStorage {
        pub writes: usize,
    }

    impl KeyValueStorage for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read("quota".into()))
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            self.writes += 1;
            Err(StorageError::Write("quota".into()))
        }
        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("quota".into()))
        }
    }

    fn store() -> SessionStore<MemoryStorage> {
        SessionStore::load(MemoryStorage::new())
    }

    #[test]
    fn extension_rules() {
        assert_eq!(extension_of("notes.txt"), "txt");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of("README"), "txt");
        assert_eq!(extension_of("trailing."), "txt");
        assert_eq!(extension_of("my notes.md"), "md");
    }

    #[test]
    fn save_then_get_round_trips_content_and_byte_size() {
        let mut s = store();
        let content = "olá, mundo";
        let saved = s.save("hello.txt", content);
        assert_eq!(saved.size, content.len());
        assert_eq!(saved.size, 11);

        let got = s.get("hello.txt").unwrap();
        assert_eq!(got.content.as_deref(), Some(content));
        assert_eq!(got.size, content.as_bytes().len());
        assert_eq!(got.kind, FileKind::File);
    }

    #[test]
    fn save_is_an_upsert() {
        let mut s = store();
        s.save("a.txt", "one");
        s.save("a.txt", "three");
        assert_eq!(s.len(), 1);
        assert_eq!(s.get("a.txt").unwrap().content.as_deref(), Some("three"));
    }

    #[test]
    fn get_is_case_sensitive() {
        let mut s = store();
        s.save("Notes.txt", "x");
        assert!(s.get("notes.txt").is_none());
        assert!(s.get("Notes.txt").is_some());
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut s = store();
        assert!(!s.delete("ghost.txt"));
        assert!(s.is_empty());
    }

    #[test]
    fn list_contains_every_record() {
        let mut s = store();
        s.save("b.txt", "b");
        s.save("a.txt", "a");
        let mut names: Vec<_> = s.list().iter().map(|f| f.name.clone()).collect();
        names.sort();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(s.list_sorted()[0].name, "a.txt");
    }

    #[test]
    fn mutations_write_through_and_reload() {
        let mut s = store();
        s.save("a.txt", "hello");
        s.save("b.txt", "1234567");
        s.delete("a.txt");

        let raw = s.storage().raw(SESSION_FILES_KEY).unwrap().to_string();
        let reloaded = SessionStore::load(MemoryStorage::with_item(SESSION_FILES_KEY, &raw));
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get("b.txt").unwrap().size, 7);
        assert_eq!(reloaded.total_size(), 7);
    }

    #[test]
    fn persisted_layout_uses_record_field_names() {
        let mut s = store();
        s.save("a.md", "# hi");
        let raw = s.storage().raw(SESSION_FILES_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(raw).unwrap();
        let rec = &value["a.md"];
        assert_eq!(rec["name"], "a.md");
        assert_eq!(rec["type"], "file");
        assert_eq!(rec["size"], 4);
        assert_eq!(rec["extension"], "md");
        assert_eq!(rec["content"], "# hi");
        assert!(rec.get("downloadUrl").is_none());
    }

    #[test]
    fn clear_all_removes_persisted_key() {
        let mut s = store();
        s.save("a.txt", "x");
        assert!(s.storage().contains(SESSION_FILES_KEY));
        s.clear_all();
        assert!(s.is_empty());
        assert!(!s.storage().contains(SESSION_FILES_KEY));
    }

    #[test]
    fn malformed_storage_loads_empty() {
        let s = SessionStore::load(MemoryStorage::with_item(SESSION_FILES_KEY, "{not json"));
        assert!(s.is_empty());
        let s = SessionStore::load(MemoryStorage::with_item(SESSION_FILES_KEY, "[1,2,3]"));
        assert!(s.is_empty());
    }

    #[test]
    fn failing_storage_keeps_in_memory_state() {
        let mut s = SessionStore::load(FailingStorage::default());
        assert!(s.is_empty());
        s.save("a.txt", "abc");
        s.save("b.txt", "de");
        assert_eq!(s.len(), 2);
        assert_eq!(s.total_size(), 5);
        assert_eq!(s.storage().writes, 2);
        s.clear_all();
        assert!(s.is_empty());
    }
}
