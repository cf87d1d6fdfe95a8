//! Global Constants
//!
//! Centralized constants for wiki layout and defaults.
//! All magic strings should be defined here with documentation.

/// Wiki document layout
pub mod wiki {
    /// File extension of every persisted document
    pub const PAGE_EXTENSION: &str = "md";

    /// Document name of the home page (GitHub wiki convention)
    pub const HOME_PAGE: &str = "Home";

    /// Document name of the navigation sidebar (GitHub wiki convention)
    pub const SIDEBAR_PAGE: &str = "_Sidebar";

    /// Names never treated as module pages, compared case-insensitively.
    ///
    /// Covers the GitHub wiki file names as well as the bare logical names.
    pub const RESERVED_PAGES: &[&str] = &["home", "_sidebar", "sidebar"];

    /// Delimiter between successive sections of the combined home page
    pub const PAGE_DELIMITER: &str = "\n---\n";

    /// Text used when a module or function has no docstring
    pub const MISSING_DESCRIPTION: &str = "No description provided.";

    /// Banner heading the combined home page built from static extraction
    pub const STATIC_BANNER: &str =
        "# Project Documentation\n\nWelcome to the automatically generated documentation.\n";

    /// Banner heading the combined home page built from generated prose
    pub const GENERATIVE_BANNER: &str =
        "# Project Documentation (AI Generated)\n\nWelcome to the AI-generated documentation.\n";
}

/// Defaults for configuration values
pub mod defaults {
    /// Output root for generated pages
    pub const OUTPUT_DIR: &str = "wiki_content";

    /// Modules documented when none are configured
    pub const SOURCE_FILES: &[&str] = &["hello.py", "data_processor.py"];

    /// Default generative provider
    pub const PROVIDER: &str = "gemini";

    /// Model used for per-module documentation
    pub const MODEL: &str = "gemini-1.5-flash";

    /// Model used for the organizer pass
    pub const ORGANIZER_MODEL: &str = "gemini-2.5-flash";

    /// Backend request timeout
    pub const TIMEOUT_SECS: u64 = 300;

    /// Sampling temperature for prose generation
    pub const TEMPERATURE: f32 = 0.2;

    /// Maximum output tokens requested from the backend
    pub const MAX_TOKENS: usize = 8192;
}

/// Network constants
pub mod network {
    /// Connection establishment timeout
    pub const CONNECTION_TIMEOUT_SECS: u64 = 30;
}
