//! File-backed document store
//!
//! Stands in for the editor shell's persistence: one directory holding an
//! `index.json` that maps document ids to titles, plus one `<id>.html` file
//! per document with its markup. Ids are millisecond timestamps, matching
//! the keys documents were historically saved under.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// One stored document, fully loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Index {
    titles: BTreeMap<String, String>,
}

/// Directory-backed store for editor documents.
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn open(root: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(DocumentStore { root })
    }

    fn index_path(&self) -> PathBuf {
        self.root.join("index.json")
    }

    fn content_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.html"))
    }

    fn load_index(&self) -> io::Result<Index> {
        let path = self.index_path();
        if !path.exists() {
            return Ok(Index::default());
        }
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn save_index(&self, index: &Index) -> io::Result<()> {
        let raw = serde_json::to_string_pretty(index)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.index_path(), raw)
    }

    fn next_id(&self, index: &Index) -> String {
        let mut millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        // Imports in the same millisecond bump forward instead of clobbering.
        while index.titles.contains_key(&millis.to_string()) {
            millis += 1;
        }
        millis.to_string()
    }

    /// Store a new document, returning its generated id.
    pub fn insert(&self, title: &str, content: &str) -> io::Result<String> {
        let mut index = self.load_index()?;
        let id = self.next_id(&index);
        fs::write(self.content_path(&id), content)?;
        index.titles.insert(id.clone(), title.to_string());
        self.save_index(&index)?;
        Ok(id)
    }

    /// Load a document by id.
    pub fn get(&self, id: &str) -> io::Result<StoredDocument> {
        let index = self.load_index()?;
        let title = index.titles.get(id).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no document with id {id}"))
        })?;
        let content = fs::read_to_string(self.content_path(id))?;
        Ok(StoredDocument { title, content })
    }

    /// All documents as (id, title), oldest first.
    pub fn list(&self) -> io::Result<Vec<(String, String)>> {
        let index = self.load_index()?;
        Ok(index.titles.into_iter().collect())
    }
}
