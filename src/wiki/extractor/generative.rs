//! Backend-written page extraction

use async_trait::async_trait;
use tracing::debug;

use super::PageExtractor;
use crate::ai::{PromptTemplates, SharedProvider};
use crate::config::ExtractorKind;
use crate::types::{Page, Result, SourceUnit};

/// Asks the generative backend to document one module.
///
/// The returned text becomes the page body unchanged.
pub struct GenerativeExtractor {
    provider: SharedProvider,
}

impl GenerativeExtractor {
    pub fn new(provider: SharedProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl PageExtractor for GenerativeExtractor {
    async fn extract(&self, unit: &SourceUnit) -> Result<Page> {
        let prompt = PromptTemplates::module_documentation(&unit.name, &unit.content);

        debug!(
            "Requesting documentation for {} from {} ({} prompt chars)",
            unit.name,
            self.provider.name(),
            prompt.len()
        );
        let response = self.provider.generate(&prompt).await?;
        debug!(
            "Received {} chars for {} ({} tokens, {}ms)",
            response.text.as_str().len(),
            unit.name,
            response.usage.total(),
            response.timing.total_ms
        );

        Ok(Page::new(unit.page_name(), response.text.into_inner()))
    }

    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Generative
    }
}
