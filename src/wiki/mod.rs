//! Wiki Generation
//!
//! ## Pipeline
//!
//! ```text
//! generate:  RepoSync → PageExtractor (per unit) → DocSet → WikiAssembler
//! organize:  WikiStore pages → WikiOrganizer → Home + _Sidebar
//! ```

pub mod assembler;
pub mod docset;
pub mod extractor;
pub mod organizer;

// ============================================================================
// Pipeline Exports
// ============================================================================

pub use assembler::{AssemblyReport, WikiAssembler, combined_home};
pub use docset::{DocSetBuilder, DocSetReport, UnitFailure};
pub use extractor::{GenerativeExtractor, PageExtractor, StaticExtractor, create_extractor};
pub use organizer::{DocumentStatus, OrganizeOutcome, OrganizerState, WikiOrganizer};
