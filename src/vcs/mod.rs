//! Repository Synchronization
//!
//! Best-effort refresh of the working tree before extraction. Callers log a
//! failed sync and carry on with whatever is on disk.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

use crate::types::{Result, WikiError};

/// Refresh the local copy of the repository being documented
#[async_trait]
pub trait RepoSync: Send + Sync {
    async fn sync(&self) -> Result<()>;
}

/// `git pull` in a working directory
#[derive(Debug, Clone)]
pub struct GitSync {
    repo_dir: PathBuf,
}

impl GitSync {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }

    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }
}

#[async_trait]
impl RepoSync for GitSync {
    async fn sync(&self) -> Result<()> {
        debug!("Running git pull in {}", self.repo_dir.display());

        let output = Command::new("git")
            .arg("pull")
            .current_dir(&self.repo_dir)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| WikiError::Sync(format!("Failed to run git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = if stderr.trim().is_empty() {
                format!("git pull exited with {}", output.status)
            } else {
                stderr.trim().to_string()
            };
            return Err(WikiError::Sync(reason));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        info!("Repository updated: {}", stdout.trim());
        Ok(())
    }
}

/// Sync that does nothing, used when syncing is switched off
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSync;

#[async_trait]
impl RepoSync for NoSync {
    async fn sync(&self) -> Result<()> {
        debug!("Repository sync disabled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_pull_outside_repository_fails() {
        let temp = TempDir::new().unwrap();
        let sync = GitSync::new(temp.path());

        let err = sync.sync().await.unwrap_err();
        assert!(matches!(err, WikiError::Sync(_)));
    }

    #[tokio::test]
    async fn test_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let sync = GitSync::new(temp.path().join("absent"));

        assert!(sync.sync().await.is_err());
    }

    #[tokio::test]
    async fn test_no_sync() {
        assert!(NoSync.sync().await.is_ok());
    }
}
