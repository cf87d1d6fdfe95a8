//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/wikiloom/) and project (.wikiloom/) level configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ai::ProviderConfig;
use crate::constants::{defaults, wiki};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Project-specific settings
    pub project: ProjectConfig,

    /// Which source files to document
    pub sources: SourcesConfig,

    /// Wiki output settings
    pub wiki: WikiConfig,

    /// LLM provider settings
    pub llm: LlmConfig,

    /// Repository refresh before generation
    pub sync: SyncConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            project: ProjectConfig::default(),
            sources: SourcesConfig::default(),
            wiki: WikiConfig::default(),
            llm: LlmConfig::default(),
            sync: SyncConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `WikiError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        // LLM temperature validation
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(crate::types::WikiError::Config(format!(
                "LLM temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }

        // Timeout validation
        if self.llm.timeout_secs == 0 {
            return Err(crate::types::WikiError::Config(
                "LLM timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.wiki.output_dir.as_os_str().is_empty() {
            return Err(crate::types::WikiError::Config(
                "wiki.output_dir must not be empty".to_string(),
            ));
        }

        if let Some(file) = self.sources.files.iter().find(|f| f.trim().is_empty()) {
            return Err(crate::types::WikiError::Config(format!(
                "sources.files contains an empty entry: {:?}",
                file
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Project Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project name (defaults to directory name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// =============================================================================
// Sources Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Repository root the file identifiers are relative to
    pub root: PathBuf,

    /// Ordered source file identifiers; output order follows this list
    pub files: Vec<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            files: defaults::SOURCE_FILES
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }
}

// =============================================================================
// Wiki Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiConfig {
    /// Output root for generated pages
    pub output_dir: PathBuf,

    /// Page extractor used by `generate`
    pub extractor: ExtractorKind,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
            extractor: ExtractorKind::default(),
        }
    }
}

/// How module pages are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorKind {
    /// Docstrings read straight from the syntax tree
    Static,
    /// Pages written by the generative backend
    #[default]
    Generative,
}

impl ExtractorKind {
    /// Welcome banner opening the home page for this kind of wiki
    pub fn banner(&self) -> &'static str {
        match self {
            ExtractorKind::Static => wiki::STATIC_BANNER,
            ExtractorKind::Generative => wiki::GENERATIVE_BANNER,
        }
    }

    pub fn requires_provider(&self) -> bool {
        matches!(self, ExtractorKind::Generative)
    }
}

impl std::fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractorKind::Static => write!(f, "static"),
            ExtractorKind::Generative => write!(f, "generative"),
        }
    }
}

impl std::str::FromStr for ExtractorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "static" => Ok(ExtractorKind::Static),
            "generative" | "ai" => Ok(ExtractorKind::Generative),
            _ => Err(format!(
                "Unknown extractor: {}. Valid values: static, generative",
                s
            )),
        }
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name
    pub provider: String,

    /// Model for module pages; provider default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Model for the organizer pass; falls back to `model`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer_model: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Temperature for LLM generation
    pub temperature: f32,

    /// Custom API endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    /// Maximum tokens to generate per request
    pub max_tokens: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: defaults::PROVIDER.to_string(),
            model: None,
            organizer_model: None,
            timeout_secs: defaults::TIMEOUT_SECS,
            temperature: defaults::TEMPERATURE,
            api_base: None,
            max_tokens: defaults::MAX_TOKENS,
        }
    }
}

impl LlmConfig {
    /// Provider settings for module page generation
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            provider: self.provider.clone(),
            model: self.model.clone(),
            timeout_secs: self.timeout_secs,
            temperature: self.temperature,
            api_key: None,
            api_base: self.api_base.clone(),
            max_tokens: self.max_tokens,
        }
    }

    /// Provider settings for the organizer pass.
    ///
    /// Model resolution: `organizer_model`, then `model`, then the stronger
    /// default organizer model when the provider is gemini.
    pub fn organizer_provider_config(&self) -> ProviderConfig {
        let model = self
            .organizer_model
            .clone()
            .or_else(|| self.model.clone())
            .or_else(|| {
                (self.provider == defaults::PROVIDER)
                    .then(|| defaults::ORGANIZER_MODEL.to_string())
            });

        ProviderConfig {
            model,
            ..self.provider_config()
        }
    }
}

// =============================================================================
// Sync Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Pull the latest changes before generating
    pub enabled: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.llm.provider, "gemini");
        assert_eq!(config.sources.files, vec!["hello.py", "data_processor.py"]);
        assert_eq!(config.wiki.output_dir, PathBuf::from("wiki_content"));
        assert!(config.sync.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_extractor_kind() {
        assert_eq!(ExtractorKind::Static.to_string(), "static");
        assert_eq!(ExtractorKind::Generative.to_string(), "generative");

        assert_eq!(
            "static".parse::<ExtractorKind>().unwrap(),
            ExtractorKind::Static
        );
        assert_eq!(
            "AI".parse::<ExtractorKind>().unwrap(),
            ExtractorKind::Generative
        );
        assert!("regex".parse::<ExtractorKind>().is_err());

        assert!(ExtractorKind::Static.banner().contains("automatically generated"));
        assert!(ExtractorKind::Generative.banner().contains("(AI Generated)"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.llm.temperature = 3.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.llm.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.sources.files.push("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_organizer_model_resolution() {
        let mut llm = LlmConfig::default();
        assert_eq!(llm.provider_config().model, None);
        assert_eq!(
            llm.organizer_provider_config().model.as_deref(),
            Some(defaults::ORGANIZER_MODEL)
        );

        llm.model = Some("gemini-pro".to_string());
        assert_eq!(
            llm.organizer_provider_config().model.as_deref(),
            Some("gemini-pro")
        );

        llm.organizer_model = Some("gemini-ultra".to_string());
        assert_eq!(
            llm.organizer_provider_config().model.as_deref(),
            Some("gemini-ultra")
        );

        let ollama = LlmConfig {
            provider: "ollama".to_string(),
            ..Default::default()
        };
        assert_eq!(ollama.organizer_provider_config().model, None);
    }

    #[test]
    fn test_toml_roundtrip_keeps_sections() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(text.contains("[wiki]"));
        assert!(text.contains("extractor = \"generative\""));

        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.wiki.extractor, ExtractorKind::Generative);
    }
}
