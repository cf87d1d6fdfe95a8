//! Storage Layer
//!
//! Filesystem access for the two ends of the pipeline: source files going in
//! and wiki documents coming out.

pub mod source_store;
pub mod wiki_store;

pub use source_store::{FsSourceStore, SourceStore};
pub use wiki_store::{FsWikiStore, WikiStore};
