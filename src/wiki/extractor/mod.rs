//! Page Extraction Strategies
//!
//! One [`SourceUnit`] in, one Markdown [`Page`] out. Two strategies exist:
//! [`StaticExtractor`] reads docstrings from the syntax tree,
//! [`GenerativeExtractor`] asks the generative backend to write the page.

mod generative;
mod static_extractor;

pub use generative::GenerativeExtractor;
pub use static_extractor::StaticExtractor;

use async_trait::async_trait;

use crate::ai::SharedProvider;
use crate::config::ExtractorKind;
use crate::types::{Page, Result, SourceUnit};

/// Turns one source unit into one wiki page
#[async_trait]
pub trait PageExtractor: Send + Sync {
    /// Produce the page for `unit`. Failure affects this unit only.
    async fn extract(&self, unit: &SourceUnit) -> Result<Page>;

    fn kind(&self) -> ExtractorKind;
}

/// Build the extractor for `kind`. The generative strategy needs a provider.
pub fn create_extractor(
    kind: ExtractorKind,
    provider: Option<SharedProvider>,
) -> Result<Box<dyn PageExtractor>> {
    match (kind, provider) {
        (ExtractorKind::Static, _) => Ok(Box::new(StaticExtractor::new()?)),
        (ExtractorKind::Generative, Some(provider)) => {
            Ok(Box::new(GenerativeExtractor::new(provider)))
        }
        (ExtractorKind::Generative, None) => Err(crate::types::WikiError::Config(
            "The generative extractor requires an LLM provider".to_string(),
        )),
    }
}
