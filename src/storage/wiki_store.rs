//! Wiki document storage
//!
//! A flat directory of `{name}.md` files. Writes overwrite.

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::wiki::PAGE_EXTENSION;
use crate::types::Result;

/// Output location for wiki documents
pub trait WikiStore: Send + Sync {
    fn exists(&self) -> bool;

    /// Create the output location; idempotent
    fn create(&self) -> Result<()>;

    /// Write (or overwrite) document `name`
    fn write(&self, name: &str, text: &str) -> Result<()>;

    /// Names of all stored documents, sorted, extension removed
    fn list(&self) -> Result<Vec<String>>;

    fn read(&self, name: &str) -> Result<String>;
}

/// Wiki documents stored as Markdown files in one directory
#[derive(Debug, Clone)]
pub struct FsWikiStore {
    root: PathBuf,
}

impl FsWikiStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path of document `name`
    pub fn document_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, PAGE_EXTENSION))
    }
}

impl WikiStore for FsWikiStore {
    fn exists(&self) -> bool {
        self.root.is_dir()
    }

    fn create(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    fn write(&self, name: &str, text: &str) -> Result<()> {
        fs::write(self.document_path(name), text)?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(PAGE_EXTENSION)
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn read(&self, name: &str) -> Result<String> {
        Ok(fs::read_to_string(self.document_path(name))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = FsWikiStore::new(temp.path().join("wiki"));

        assert!(!store.exists());
        store.create().unwrap();
        store.create().unwrap();
        assert!(store.exists());
    }

    #[test]
    fn test_write_overwrites() {
        let temp = TempDir::new().unwrap();
        let store = FsWikiStore::new(temp.path());

        store.write("a", "first").unwrap();
        store.write("a", "second").unwrap();

        assert_eq!(store.read("a").unwrap(), "second");
        assert!(temp.path().join("a.md").exists());
    }

    #[test]
    fn test_list_sorted_markdown_only() {
        let temp = TempDir::new().unwrap();
        let store = FsWikiStore::new(temp.path());

        store.write("zeta", "z").unwrap();
        store.write("alpha", "a").unwrap();
        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(temp.path().join("dir.md")).unwrap();

        assert_eq!(store.list().unwrap(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_list_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = FsWikiStore::new(temp.path().join("absent"));

        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_read_missing_document_fails() {
        let temp = TempDir::new().unwrap();
        let store = FsWikiStore::new(temp.path());

        assert!(store.read("nope").is_err());
    }
}
