//! Claude Code CLI Provider
//!
//! Runs prompts through a locally installed Claude Code CLI.
//! Single-shot execution; failures are reported, never retried.

use async_trait::async_trait;
use serde_json::Value;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info};

use super::{
    LlmProvider, LlmResponse, ProviderConfig, ResponseMetadata, ResponseTiming, TokenUsage,
};
use crate::types::{ErrorClassifier, GeneratedText, Result, WikiError};

const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Claude Code CLI Provider
pub struct ClaudeCodeProvider {
    model: String,
    timeout_secs: u64,
}

impl ClaudeCodeProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            model: config.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout_secs: config.timeout_secs,
        }
    }

    async fn execute(&self, prompt: &str) -> Result<LlmResponse> {
        let start_time = Instant::now();

        debug!("Executing Claude Code CLI (model={})", self.model);

        let mut cmd = Command::new("claude");
        cmd.arg("-p")
            .arg(prompt)
            .arg("--output-format")
            .arg("json")
            .arg("--model")
            .arg(&self.model)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd.spawn().map_err(|e| {
            WikiError::LlmApi(format!(
                "Failed to spawn Claude Code CLI: {}. Is it installed?",
                e
            ))
        })?;

        let limit = Duration::from_secs(self.timeout_secs);
        let output = timeout(limit, child.wait_with_output())
            .await
            .map_err(|_| WikiError::timeout("Claude Code CLI", limit))?
            .map_err(|e| WikiError::LlmApi(format!("Claude Code execution failed: {}", e)))?;

        let elapsed = start_time.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = parse_error_result(&stdout).unwrap_or_else(|| {
                if stderr.trim().is_empty() {
                    "Process exited with non-zero status".to_string()
                } else {
                    stderr.trim().to_string()
                }
            });
            return Err(ErrorClassifier::classify(
                &format!("Claude Code failed: {}", message),
                "claude-code",
            )
            .into());
        }

        let response: Value = serde_json::from_str(&stdout).map_err(|e| {
            WikiError::LlmApi(format!("Failed to parse Claude Code output: {}", e))
        })?;

        let text = extract_result(&response)?;

        Ok(LlmResponse::with_metrics(
            GeneratedText::new(text),
            extract_usage(&response),
            ResponseTiming::from_duration(elapsed),
            ResponseMetadata {
                model: self.model.clone(),
                provider: "claude-code".to_string(),
            },
        ))
    }
}

/// Text of the `result` field
fn extract_result(response: &Value) -> Result<String> {
    response
        .get("result")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| WikiError::LlmApi("No result in Claude Code response".to_string()))
}

/// API error message reported on stdout (`is_error: true`)
fn parse_error_result(stdout: &str) -> Option<String> {
    let response: Value = serde_json::from_str(stdout).ok()?;
    if !response.get("is_error").and_then(|v| v.as_bool())? {
        return None;
    }
    response
        .get("result")
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

fn extract_usage(response: &Value) -> TokenUsage {
    let usage = response.get("usage");
    let count = |key: &str| {
        usage
            .and_then(|u| u.get(key))
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32
    };
    TokenUsage::new(count("input_tokens"), count("output_tokens"))
}

#[async_trait]
impl LlmProvider for ClaudeCodeProvider {
    async fn generate(&self, prompt: &str) -> Result<LlmResponse> {
        info!("Generating with Claude Code CLI (model: {})", self.model);
        self.execute(prompt).await
    }

    fn name(&self) -> &str {
        "claude-code"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
