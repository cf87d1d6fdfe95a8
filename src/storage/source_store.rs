//! Source file access

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::types::{Result, SourceUnit};

/// Read access to the source files being documented
pub trait SourceStore: Send + Sync {
    /// Load the unit named `id`.
    ///
    /// `Ok(None)` when the file does not exist; any other read failure is an
    /// error.
    fn load(&self, id: &str) -> Result<Option<SourceUnit>>;
}

/// Source files under a repository root
#[derive(Debug, Clone)]
pub struct FsSourceStore {
    root: PathBuf,
}

impl FsSourceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceStore for FsSourceStore {
    fn load(&self, id: &str) -> Result<Option<SourceUnit>> {
        let path = self.root.join(id);

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(SourceUnit::new(id, content))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Source file not found: {}", path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_existing_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("hello.py"), "print('hi')\n").unwrap();

        let store = FsSourceStore::new(temp.path());
        let unit = store.load("hello.py").unwrap().unwrap();

        assert_eq!(unit.name, "hello.py");
        assert_eq!(unit.content, "print('hi')\n");
    }

    #[test]
    fn test_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let store = FsSourceStore::new(temp.path());

        assert!(store.load("absent.py").unwrap().is_none());
    }

    #[test]
    fn test_nested_identifier() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("pkg")).unwrap();
        fs::write(temp.path().join("pkg/mod.py"), "x = 1\n").unwrap();

        let store = FsSourceStore::new(temp.path());
        let unit = store.load("pkg/mod.py").unwrap().unwrap();
        assert_eq!(unit.page_name(), "mod");
    }

    #[test]
    fn test_non_utf8_is_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bin.py"), [0xff, 0xfe, 0x00]).unwrap();

        let store = FsSourceStore::new(temp.path());
        assert!(store.load("bin.py").is_err());
    }
}
