//! Pages and the units they are generated from.

use std::collections::BTreeMap;
use std::path::Path;

use crate::constants::wiki::RESERVED_PAGES;

/// One module to document: a logical file name and its full text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub name: String,
    pub content: String,
}

impl SourceUnit {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Page name for this unit: the file stem (`pkg/data_processor.py` → `data_processor`)
    pub fn page_name(&self) -> String {
        page_name_for(&self.name)
    }
}

/// Derive the wiki page name from a source file name by dropping
/// directories and the extension.
pub fn page_name_for(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
        .to_string()
}

/// One generated Markdown document tied to a single [`SourceUnit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub name: String,
    pub body: String,
}

impl Page {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

/// Pages in the order their units were processed.
///
/// Insertion order drives the combined home page and must be preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocSet {
    pages: Vec<Page>,
}

impl DocSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, page: Page) {
        self.pages.push(page);
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pages.iter().any(|p| p.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl IntoIterator for DocSet {
    type Item = Page;
    type IntoIter = std::vec::IntoIter<Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.into_iter()
    }
}

impl<'a> IntoIterator for &'a DocSet {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

/// Whether `name` is one of the reserved wiki documents (`Home`, `_Sidebar`)
pub fn is_reserved_page(name: &str) -> bool {
    RESERVED_PAGES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

/// The persisted wiki: module pages plus the reserved documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WikiSite {
    /// Module pages keyed by name; never contains a reserved name
    pub pages: BTreeMap<String, String>,
    /// Home document body; empty until one is written
    pub home: String,
    pub sidebar: Option<String>,
}

impl WikiSite {
    /// Insert a module page. Reserved names are refused and reported as `false`.
    pub fn insert_page(&mut self, name: impl Into<String>, body: impl Into<String>) -> bool {
        let name = name.into();
        if is_reserved_page(&name) {
            return false;
        }
        self.pages.insert(name, body.into());
        true
    }

    pub fn page_names(&self) -> Vec<&str> {
        self.pages.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_name_strips_extension_and_dirs() {
        assert_eq!(page_name_for("a.py"), "a");
        assert_eq!(page_name_for("pkg/data_processor.py"), "data_processor");
        assert_eq!(page_name_for("README"), "README");
        assert_eq!(SourceUnit::new("hello.py", "").page_name(), "hello");
    }

    #[test]
    fn test_reserved_names() {
        assert!(is_reserved_page("Home"));
        assert!(is_reserved_page("home"));
        assert!(is_reserved_page("_Sidebar"));
        assert!(is_reserved_page("sidebar"));
        assert!(!is_reserved_page("homepage"));
        assert!(!is_reserved_page("data_processor"));
    }

    #[test]
    fn test_docset_preserves_insertion_order() {
        let mut docs = DocSet::new();
        docs.push(Page::new("zeta", "z"));
        docs.push(Page::new("alpha", "a"));
        docs.push(Page::new("mid", "m"));

        assert_eq!(docs.names(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(docs.len(), 3);
    }

    #[test]
    fn test_wiki_site_refuses_reserved_pages() {
        let mut site = WikiSite::default();
        assert!(site.insert_page("x", "body"));
        assert!(!site.insert_page("Home", "old home"));
        assert!(!site.insert_page("_Sidebar", "old sidebar"));
        assert_eq!(site.page_names(), vec!["x"]);
    }
}
