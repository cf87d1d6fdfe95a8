//! Wiki Organizer
//!
//! Second pass over an already written wiki. Reads every module page, then
//! asks the generative backend for an overview home page and a grouped
//! sidebar. The two requests are independent: a failed one leaves its
//! previous document in place and does not stop the other.
//!
//! ```text
//! Idle → ReadingPages → HomeGenerating → SidebarGenerating → Done
//!              ↓
//!        (no pages: no-op)
//! ```

use std::fmt;

use tracing::{debug, info, warn};

use crate::ai::{PromptTemplates, SharedProvider};
use crate::constants::wiki::{HOME_PAGE, SIDEBAR_PAGE};
use crate::storage::WikiStore;
use crate::types::{Result, WikiSite, is_reserved_page};

/// Phase of an organizer run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganizerState {
    Idle,
    ReadingPages,
    HomeGenerating,
    SidebarGenerating,
    Done,
}

impl fmt::Display for OrganizerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::ReadingPages => "reading pages",
            Self::HomeGenerating => "generating home",
            Self::SidebarGenerating => "generating sidebar",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Result of generating one reserved document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentStatus {
    Written,
    /// Generation or write failed; the previous document is untouched
    Failed(String),
}

impl DocumentStatus {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrganizeOutcome {
    /// Nothing to organize; no document was written
    NoPages,
    Organized {
        /// Module pages used as context, with the home and sidebar written
        /// by this run
        site: WikiSite,
        home: DocumentStatus,
        sidebar: DocumentStatus,
    },
}

pub struct WikiOrganizer<'a> {
    store: &'a dyn WikiStore,
    provider: SharedProvider,
}

impl<'a> WikiOrganizer<'a> {
    pub fn new(store: &'a dyn WikiStore, provider: SharedProvider) -> Self {
        Self { store, provider }
    }

    pub async fn organize(&self) -> Result<OrganizeOutcome> {
        let mut state = OrganizerState::Idle;
        debug!("Organizer: {}", state);

        state = OrganizerState::ReadingPages;
        debug!("Organizer: {}", state);
        let mut site = self.read_site()?;
        if site.pages.is_empty() {
            info!("No module pages found to organize");
            return Ok(OrganizeOutcome::NoPages);
        }
        info!("Found {} pages: {}", site.pages.len(), site.page_names().join(", "));

        state = OrganizerState::HomeGenerating;
        debug!("Organizer: {}", state);
        let home_prompt =
            PromptTemplates::home_page(site.pages.iter().map(|(n, b)| (n.as_str(), b.as_str())));
        let home = match self.generate_document(HOME_PAGE, &home_prompt).await {
            Ok(text) => {
                site.home = text;
                DocumentStatus::Written
            }
            Err(reason) => DocumentStatus::Failed(reason),
        };

        state = OrganizerState::SidebarGenerating;
        debug!("Organizer: {}", state);
        let sidebar_prompt = PromptTemplates::sidebar(site.page_names());
        let sidebar = match self.generate_document(SIDEBAR_PAGE, &sidebar_prompt).await {
            Ok(text) => {
                site.sidebar = Some(text);
                DocumentStatus::Written
            }
            Err(reason) => DocumentStatus::Failed(reason),
        };

        state = OrganizerState::Done;
        debug!("Organizer: {}", state);

        Ok(OrganizeOutcome::Organized {
            site,
            home,
            sidebar,
        })
    }

    /// Module pages currently in the store; reserved documents are skipped
    fn read_site(&self) -> Result<WikiSite> {
        let mut site = WikiSite::default();
        if !self.store.exists() {
            debug!("Output location does not exist yet");
            return Ok(site);
        }

        for name in self.store.list()? {
            if is_reserved_page(&name) {
                debug!("Skipping reserved document {}", name);
                continue;
            }
            let body = self.store.read(&name)?;
            site.insert_page(name, body);
        }
        Ok(site)
    }

    /// Generate and write one reserved document, returning the text written
    async fn generate_document(
        &self,
        name: &str,
        prompt: &str,
    ) -> std::result::Result<String, String> {
        info!("Generating {} with {}...", name, self.provider.model());

        let text = match self.provider.generate(prompt).await {
            Ok(response) => response.text,
            Err(e) => {
                warn!("Failed to generate {}: {}", name, e);
                return Err(e.to_string());
            }
        };

        match self.store.write(name, text.as_str()) {
            Ok(()) => {
                info!("Wrote {}", name);
                Ok(text.into_inner())
            }
            Err(e) => {
                warn!("Failed to write {}: {}", name, e);
                Err(e.to_string())
            }
        }
    }
}
