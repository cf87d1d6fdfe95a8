//! Wiki Assembler
//!
//! Writes every page of a doc set and a combined home page: the banner
//! followed by every page body, joined by a horizontal-rule delimiter.

use tracing::info;

use crate::config::ExtractorKind;
use crate::constants::wiki::{HOME_PAGE, PAGE_DELIMITER};
use crate::storage::WikiStore;
use crate::types::{DocSet, Result, WikiError, WikiSite, is_reserved_page};

/// What an assembly run wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    /// Module pages in doc set order
    pub pages_written: Vec<String>,
    /// Name of the combined home document
    pub home: String,
    /// Everything written, as it now stands in the store
    pub site: WikiSite,
}

pub struct WikiAssembler<'a> {
    store: &'a dyn WikiStore,
    banner: &'static str,
}

impl<'a> WikiAssembler<'a> {
    /// Assembler using the home banner for `kind`
    pub fn new(store: &'a dyn WikiStore, kind: ExtractorKind) -> Self {
        Self {
            store,
            banner: kind.banner(),
        }
    }

    /// Write every page and the combined home. A page named after a reserved
    /// document is rejected before anything is written.
    pub fn assemble(&self, docs: &DocSet) -> Result<AssemblyReport> {
        if let Some(page) = docs.pages().iter().find(|p| is_reserved_page(&p.name)) {
            return Err(WikiError::PageName {
                unit: page.name.clone(),
                page: page.name.clone(),
                reason: "reserved for the wiki home and sidebar".to_string(),
            });
        }

        if !self.store.exists() {
            self.store.create()?;
        }

        let mut report = AssemblyReport::default();
        for page in docs {
            self.store.write(&page.name, &page.body)?;
            info!("Wrote page: {}", page.name);
            report.pages_written.push(page.name.clone());
            report.site.insert_page(page.name.clone(), page.body.clone());
        }

        let home = combined_home(self.banner, docs);
        self.store.write(HOME_PAGE, &home)?;
        info!("Wrote combined home with {} pages", docs.len());
        report.home = HOME_PAGE.to_string();
        report.site.home = home;

        Ok(report)
    }
}

/// `banner`, then every page body in order, joined by the page delimiter
pub fn combined_home(banner: &str, docs: &DocSet) -> String {
    std::iter::once(banner)
        .chain(docs.pages().iter().map(|p| p.body.as_str()))
        .collect::<Vec<_>>()
        .join(PAGE_DELIMITER)
}
