//! Module Doc Set Builder
//!
//! Runs one extractor over an ordered list of source identifiers. A unit
//! that cannot be read or extracted is logged and skipped; the rest of the
//! batch still runs. Page names are unique within a doc set and never use a
//! reserved document name.

use tracing::{debug, info, warn};

use super::extractor::PageExtractor;
use crate::storage::SourceStore;
use crate::types::{DocSet, ErrorCategory, WikiError, is_reserved_page, page_name_for};

/// One unit that produced no page
#[derive(Debug)]
pub struct UnitFailure {
    pub unit: String,
    pub error: WikiError,
}

impl UnitFailure {
    pub fn category(&self) -> Option<ErrorCategory> {
        self.error.category()
    }
}

/// Outcome of a batch: the pages plus what was left out
#[derive(Debug, Default)]
pub struct DocSetReport {
    /// Successful pages in identifier order
    pub docs: DocSet,
    pub failures: Vec<UnitFailure>,
    /// Identifiers with no file behind them
    pub missing: Vec<String>,
}

impl DocSetReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.missing.is_empty()
    }
}

pub struct DocSetBuilder<'a> {
    extractor: &'a dyn PageExtractor,
}

impl<'a> DocSetBuilder<'a> {
    pub fn new(extractor: &'a dyn PageExtractor) -> Self {
        Self { extractor }
    }

    /// Extract every identifier in order, one at a time.
    pub async fn build<I, S>(&self, identifiers: I, sources: &dyn SourceStore) -> DocSetReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = DocSetReport::default();

        for id in identifiers {
            let id = id.as_ref();

            if let Some(error) = name_conflict(id, &report.docs) {
                warn!("Skipping {}: {}", id, error);
                report.failures.push(UnitFailure {
                    unit: id.to_string(),
                    error,
                });
                continue;
            }

            let unit = match sources.load(id) {
                Ok(Some(unit)) => unit,
                Ok(None) => {
                    debug!("Skipping {}: file not found", id);
                    report.missing.push(id.to_string());
                    continue;
                }
                Err(error) => {
                    warn!("Skipping {}: {}", id, error);
                    report.failures.push(UnitFailure {
                        unit: id.to_string(),
                        error,
                    });
                    continue;
                }
            };

            info!("Processing {}...", id);
            match self.extractor.extract(&unit).await {
                Ok(page) => report.docs.push(page),
                Err(error) => {
                    match error.category() {
                        Some(category) => {
                            warn!("Failed to document {} [{}]: {}", id, category, error)
                        }
                        None => warn!("Failed to document {}: {}", id, error),
                    }
                    report.failures.push(UnitFailure {
                        unit: id.to_string(),
                        error,
                    });
                }
            }
        }

        report
    }
}

/// Error for a unit whose page would shadow a reserved document or a page
/// already in `docs`
fn name_conflict(id: &str, docs: &DocSet) -> Option<WikiError> {
    let page = page_name_for(id);
    let reason = if is_reserved_page(&page) {
        "reserved for the wiki home and sidebar"
    } else if docs.contains(&page) {
        "already used by an earlier module"
    } else {
        return None;
    };

    Some(WikiError::PageName {
        unit: id.to_string(),
        page,
        reason: reason.to_string(),
    })
}
