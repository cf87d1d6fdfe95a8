//! Generate Command
//!
//! sync → extract every configured module → write pages and combined home.
//!
//! The provider is created before anything else runs, so a missing
//! credential stops the command before the repository or the wiki is touched.

use std::path::{Path, PathBuf};

use tokio::runtime::Runtime;
use tracing::{info, warn};

use crate::ai::create_provider;
use crate::cli::ui::Output;
use crate::cli::util::{CommandContext, ProviderOverrides};
use crate::config::ExtractorKind;
use crate::storage::{FsSourceStore, FsWikiStore, SourceStore, WikiStore};
use crate::types::Result;
use crate::vcs::{GitSync, NoSync, RepoSync};
use crate::wiki::{
    AssemblyReport, DocSetBuilder, DocSetReport, PageExtractor, WikiAssembler, create_extractor,
};

/// Options for `wikiloom generate`
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Output directory override
    pub output: Option<PathBuf>,
    /// Extractor override
    pub extractor: Option<ExtractorKind>,
    pub provider: ProviderOverrides,
    /// Skip `git pull`
    pub no_sync: bool,
    /// Source files to document instead of the configured list
    pub files: Vec<String>,
}

/// Everything one generate run produced
#[derive(Debug)]
pub struct GenerateSummary {
    pub docs: DocSetReport,
    pub assembly: AssemblyReport,
}

pub fn run(ctx: &CommandContext, options: GenerateOptions) -> Result<()> {
    let out = Output::new();
    let config = &ctx.config;

    let kind = options.extractor.unwrap_or(config.wiki.extractor);
    let provider = if kind.requires_provider() {
        let provider_config = options.provider.page_config(&config.llm);
        Some(create_provider(&provider_config)?)
    } else {
        None
    };
    if let Some(provider) = &provider {
        info!(
            "Using provider {} (model: {})",
            provider.name(),
            provider.model()
        );
    }
    let extractor = create_extractor(kind, provider)?;

    let files = if options.files.is_empty() {
        config.sources.files.clone()
    } else {
        options.files
    };

    let output_dir = ctx.output_dir(options.output);
    let sources = FsSourceStore::new(ctx.sources_root());
    let wiki = FsWikiStore::new(&output_dir);
    let sync: Box<dyn RepoSync> = if config.sync.enabled && !options.no_sync {
        Box::new(GitSync::new(&ctx.project_root))
    } else {
        Box::new(NoSync)
    };

    out.header(&format!("Generating {} wiki", kind));

    let rt = Runtime::new()?;
    let summary = rt.block_on(generate_wiki(
        sync.as_ref(),
        extractor.as_ref(),
        &sources,
        &wiki,
        &files,
    ))?;

    print_summary(&out, &summary, &output_dir);
    Ok(())
}

/// Run the generate pipeline against the given collaborators
pub async fn generate_wiki(
    sync: &dyn RepoSync,
    extractor: &dyn PageExtractor,
    sources: &dyn SourceStore,
    wiki: &dyn WikiStore,
    files: &[String],
) -> Result<GenerateSummary> {
    info!("Pulling latest changes...");
    if let Err(e) = sync.sync().await {
        warn!("Repository sync failed, continuing with local files: {}", e);
    }

    let docs = DocSetBuilder::new(extractor).build(files, sources).await;
    let assembly = WikiAssembler::new(wiki, extractor.kind()).assemble(&docs.docs)?;

    Ok(GenerateSummary { docs, assembly })
}

fn print_summary(out: &Output, summary: &GenerateSummary, output_dir: &Path) {
    out.section("Summary");
    out.detail("Pages written", summary.assembly.pages_written.len());
    for name in &summary.assembly.pages_written {
        println!("    {}", name);
    }

    if !summary.docs.missing.is_empty() {
        out.detail("Not found", summary.docs.missing.join(", "));
    }
    for failure in &summary.docs.failures {
        out.warning(&format!("{}: {}", failure.unit, failure.error));
    }

    println!();
    out.success(&format!("Documentation generated in {}/", output_dir.display()));
    out.info("To publish, push the output directory to the wiki repository (git add, commit, push).");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::wiki::{PAGE_DELIMITER, STATIC_BANNER};
    use crate::types::WikiError;
    use crate::wiki::StaticExtractor;
    use async_trait::async_trait;
    use std::fs;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tempfile::TempDir;

    struct FailingSync {
        called: AtomicBool,
    }

    #[async_trait]
    impl RepoSync for FailingSync {
        async fn sync(&self) -> Result<()> {
            self.called.store(true, Ordering::SeqCst);
            Err(WikiError::Sync("fatal: not a git repository".to_string()))
        }
    }

    #[tokio::test]
    async fn test_sync_failure_does_not_stop_generation() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("hello.py"),
            "\"\"\"Says hello.\"\"\"\n\ndef main():\n    \"\"\"Entry point.\"\"\"\n    print('hi')\n",
        )
        .unwrap();

        let sync = FailingSync {
            called: AtomicBool::new(false),
        };
        let extractor = StaticExtractor::new().unwrap();
        let sources = FsSourceStore::new(temp.path());
        let wiki = FsWikiStore::new(temp.path().join("wiki_content"));
        let files = vec!["hello.py".to_string(), "data_processor.py".to_string()];

        let summary = generate_wiki(&sync, &extractor, &sources, &wiki, &files)
            .await
            .unwrap();

        assert!(sync.called.load(Ordering::SeqCst));
        assert_eq!(summary.assembly.pages_written, vec!["hello"]);
        assert_eq!(summary.docs.missing, vec!["data_processor.py"]);

        let page = wiki.read("hello").unwrap();
        assert!(page.contains("# Module: hello"));
        assert!(page.contains("Says hello."));
        assert!(page.contains("## Function: `main`"));

        let home = wiki.read("Home").unwrap();
        assert_eq!(home, format!("{}{}{}", STATIC_BANNER, PAGE_DELIMITER, page));
    }

    #[tokio::test]
    async fn test_malformed_module_is_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.py"), "def ok():\n    pass\n").unwrap();
        fs::write(temp.path().join("b.py"), "def broken(:\n").unwrap();

        let extractor = StaticExtractor::new().unwrap();
        let sources = FsSourceStore::new(temp.path());
        let wiki = FsWikiStore::new(temp.path().join("out"));
        let files = vec!["a.py".to_string(), "b.py".to_string()];

        let summary = generate_wiki(&NoSync, &extractor, &sources, &wiki, &files)
            .await
            .unwrap();

        assert_eq!(summary.docs.docs.len(), 1);
        assert_eq!(summary.docs.failures.len(), 1);
        assert_eq!(wiki.list().unwrap(), vec!["Home", "a"]);
    }

    #[test]
    fn test_missing_credential_stops_before_any_work() {
        figment::Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("hello.py", "def greet():\n    pass\n")?;

            let ctx = CommandContext {
                config: crate::config::Config::default(),
                project_root: jail.directory().to_path_buf(),
            };
            let options = GenerateOptions {
                extractor: Some(ExtractorKind::Generative),
                files: vec!["hello.py".to_string()],
                ..Default::default()
            };

            let err = run(&ctx, options).unwrap_err();
            assert!(matches!(err, WikiError::MissingCredential { .. }));
            assert!(!jail.directory().join("wiki_content").exists());
            Ok(())
        });
    }
}
