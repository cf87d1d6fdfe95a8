//! AI Integration Layer
//!
//! Generative-backend providers and the prompts sent to them.

pub mod prompt;
pub mod provider;

pub use prompt::{PromptBuilder, PromptSection, PromptTemplates, display_name};
pub use provider::{
    ClaudeCodeProvider, GeminiProvider, LlmProvider, LlmResponse, OllamaProvider, OpenAiProvider,
    ProviderConfig, ResponseMetadata, ResponseTiming, SharedProvider, TokenUsage, create_provider,
};
