//! CLI Common Utilities
//!
//! Shared initialization and context management for CLI commands.

use std::path::{Path, PathBuf};

use crate::ai::ProviderConfig;
use crate::config::{Config, ConfigLoader, LlmConfig};
use crate::types::{Result, WikiError};

/// Command execution context
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// Working directory the command runs in
    pub project_root: PathBuf,
}

impl CommandContext {
    /// Load configuration, with `config_file` replacing the project config
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let config = ConfigLoader::load_with(config_file)?;
        let project_root = std::env::current_dir().map_err(WikiError::Io)?;

        Ok(Self {
            config,
            project_root,
        })
    }

    /// Wiki output directory, honoring a command-line override
    pub fn output_dir(&self, output: Option<PathBuf>) -> PathBuf {
        self.resolve(output.unwrap_or_else(|| self.config.wiki.output_dir.clone()))
    }

    /// Root the configured source identifiers are relative to
    pub fn sources_root(&self) -> PathBuf {
        self.resolve(self.config.sources.root.clone())
    }

    fn resolve(&self, path: PathBuf) -> PathBuf {
        if path.is_absolute() {
            path
        } else {
            self.project_root.join(path)
        }
    }
}

/// Command-line overrides for the provider section of the config
#[derive(Debug, Clone, Default)]
pub struct ProviderOverrides {
    pub provider: Option<String>,
    pub model: Option<String>,
}

impl ProviderOverrides {
    fn apply(&self, llm: &LlmConfig) -> LlmConfig {
        let mut llm = llm.clone();
        if let Some(provider) = &self.provider
            && *provider != llm.provider
        {
            // Models configured for another provider do not carry over
            llm.provider = provider.clone();
            llm.model = None;
            llm.organizer_model = None;
        }
        if let Some(model) = &self.model {
            llm.model = Some(model.clone());
            llm.organizer_model = Some(model.clone());
        }
        llm
    }

    /// Provider settings for module page generation
    pub fn page_config(&self, llm: &LlmConfig) -> ProviderConfig {
        self.apply(llm).provider_config()
    }

    /// Provider settings for the organizer pass
    pub fn organizer_config(&self, llm: &LlmConfig) -> ProviderConfig {
        self.apply(llm).organizer_provider_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::defaults;

    fn context(root: &str) -> CommandContext {
        CommandContext {
            config: Config::default(),
            project_root: PathBuf::from(root),
        }
    }

    #[test]
    fn test_output_dir_resolution() {
        let ctx = context("/work");

        assert_eq!(ctx.output_dir(None), PathBuf::from("/work/wiki_content"));
        assert_eq!(
            ctx.output_dir(Some(PathBuf::from("docs"))),
            PathBuf::from("/work/docs")
        );
        assert_eq!(
            ctx.output_dir(Some(PathBuf::from("/tmp/out"))),
            PathBuf::from("/tmp/out")
        );
        assert_eq!(ctx.sources_root(), PathBuf::from("/work/."));
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let llm = LlmConfig {
            model: Some("gemini-pro".to_string()),
            ..Default::default()
        };
        let overrides = ProviderOverrides::default();

        assert_eq!(
            overrides.page_config(&llm).model.as_deref(),
            Some("gemini-pro")
        );
        assert_eq!(overrides.page_config(&llm).provider, defaults::PROVIDER);
    }

    #[test]
    fn test_model_override_applies_to_both_passes() {
        let overrides = ProviderOverrides {
            provider: None,
            model: Some("custom".to_string()),
        };
        let llm = LlmConfig::default();

        assert_eq!(overrides.page_config(&llm).model.as_deref(), Some("custom"));
        assert_eq!(
            overrides.organizer_config(&llm).model.as_deref(),
            Some("custom")
        );
    }

    #[test]
    fn test_provider_override_drops_configured_models() {
        let llm = LlmConfig {
            model: Some("gemini-pro".to_string()),
            organizer_model: Some("gemini-ultra".to_string()),
            ..Default::default()
        };
        let overrides = ProviderOverrides {
            provider: Some("ollama".to_string()),
            model: None,
        };

        let config = overrides.organizer_config(&llm);
        assert_eq!(config.provider, "ollama");
        assert_eq!(config.model, None);
    }
}
