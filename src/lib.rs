//! wikiloom - Wiki Documentation Generator for Small Codebases
//!
//! Builds a GitHub-style wiki for a handful of source modules: one page per
//! module, a combined home page, and (in a separate pass) an overview home
//! page plus a grouped sidebar written by a generative backend.
//!
//! ## Core Features
//!
//! - **Two extraction strategies**: docstrings read with tree-sitter, or
//!   prose written by an LLM
//! - **Partial failure tolerance**: one broken module never stops the batch
//! - **Organizer pass**: overview `Home` and grouped `_Sidebar`
//! - **Provider choice**: Gemini, OpenAI, Ollama, Claude Code CLI
//!
//! ## Quick Start
//!
//! ```ignore
//! use wikiloom::{DocSetBuilder, FsSourceStore, FsWikiStore, StaticExtractor, WikiAssembler};
//!
//! let extractor = StaticExtractor::new()?;
//! let sources = FsSourceStore::new(".");
//! let wiki = FsWikiStore::new("wiki_content");
//!
//! let report = DocSetBuilder::new(&extractor)
//!     .build(["hello.py", "data_processor.py"], &sources)
//!     .await;
//! WikiAssembler::new(&wiki, extractor.kind()).assemble(&report.docs)?;
//! ```
//!
//! ## Modules
//!
//! - [`ai`]: LLM provider abstraction and prompts
//! - [`analyzer`]: Python outline extraction with tree-sitter
//! - [`storage`]: source and wiki file access
//! - [`vcs`]: best-effort repository sync
//! - [`config`]: layered configuration
//! - [`wiki`]: extraction, assembly and organizer pipelines

pub mod ai;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod storage;
pub mod types;
pub mod vcs;
pub mod wiki;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, ExtractorKind};

// Error Types
pub use types::error::{ErrorCategory, Result, WikiError};

// Domain Types
pub use types::{DocSet, GeneratedText, Page, SourceUnit, WikiSite};

// Storage
pub use storage::{FsSourceStore, FsWikiStore, SourceStore, WikiStore};

// Repository Sync
pub use vcs::{GitSync, RepoSync};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use wiki::{
    DocSetBuilder, DocSetReport, DocumentStatus, GenerativeExtractor, OrganizeOutcome,
    PageExtractor, StaticExtractor, WikiAssembler, WikiOrganizer,
};

// =============================================================================
// AI Re-exports
// =============================================================================

pub use ai::{LlmProvider, LlmResponse, ProviderConfig, SharedProvider, create_provider};
