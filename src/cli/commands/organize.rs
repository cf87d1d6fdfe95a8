//! Organize Command
//!
//! Rewrites `Home` and `_Sidebar` from the pages already in the output
//! directory.

use std::path::PathBuf;

use tokio::runtime::Runtime;

use crate::ai::create_provider;
use crate::cli::ui::Output;
use crate::cli::util::{CommandContext, ProviderOverrides};
use crate::constants::wiki::{HOME_PAGE, PAGE_EXTENSION, SIDEBAR_PAGE};
use crate::storage::{FsWikiStore, WikiStore};
use crate::types::Result;
use crate::wiki::{DocumentStatus, OrganizeOutcome, WikiOrganizer};

/// Options for `wikiloom organize`
#[derive(Debug, Clone, Default)]
pub struct OrganizeOptions {
    pub output: Option<PathBuf>,
    pub provider: ProviderOverrides,
}

pub fn run(ctx: &CommandContext, options: OrganizeOptions) -> Result<()> {
    let out = Output::new();

    let provider_config = options.provider.organizer_config(&ctx.config.llm);
    let provider = create_provider(&provider_config)?;

    let output_dir = ctx.output_dir(options.output);
    let store = FsWikiStore::new(&output_dir);
    if !store.exists() {
        out.warning(&format!(
            "{} does not exist. Run 'wikiloom generate' first.",
            output_dir.display()
        ));
        return Ok(());
    }

    out.header(&format!(
        "Organizing wiki with {} ({})",
        provider.name(),
        provider.model()
    ));

    let rt = Runtime::new()?;
    let outcome = rt.block_on(WikiOrganizer::new(&store, provider).organize())?;

    match outcome {
        OrganizeOutcome::NoPages => {
            out.info("No module documentation found to organize.");
        }
        OrganizeOutcome::Organized {
            site,
            home,
            sidebar,
        } => {
            out.detail("Pages", site.page_names().join(", "));
            report_document(&out, HOME_PAGE, &home);
            report_document(&out, SIDEBAR_PAGE, &sidebar);
        }
    }

    Ok(())
}

fn report_document(out: &Output, name: &str, status: &DocumentStatus) {
    match status {
        DocumentStatus::Written => {
            out.success(&format!("Wrote {}.{}", name, PAGE_EXTENSION));
        }
        DocumentStatus::Failed(reason) => {
            out.error(&format!(
                "Error generating {}.{}: {}",
                name, PAGE_EXTENSION, reason
            ));
        }
    }
}
