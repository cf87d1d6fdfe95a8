//! Config Command
//!
//! Manage wikiloom configuration.
//!
//! Usage:
//!   wikiloom config show [-g] [-f json]
//!   wikiloom config path
//!   wikiloom config init [-g] [--force]

use std::path::Path;

use crate::config::ConfigLoader;
use crate::types::Result;

/// Show configuration
pub fn show(config_file: Option<&Path>, global: bool, format: &str) -> Result<()> {
    if global {
        if let Some(global_path) = ConfigLoader::global_config_path() {
            if global_path.exists() {
                let content = std::fs::read_to_string(&global_path)?;
                println!("# Global Config: {}\n", global_path.display());
                println!("{}", content);
            } else {
                println!("No global config found.");
                println!("Run 'wikiloom config init --global' to create one.");
            }
        } else {
            println!("Cannot determine global config directory.");
        }
    } else {
        // Show merged effective config
        let config = ConfigLoader::load_with(config_file)?;
        println!("{}", ConfigLoader::render(&config, format)?);
    }
    Ok(())
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

/// Initialize global configuration
pub fn init_global(force: bool) -> Result<()> {
    let config_path = ConfigLoader::init_global(force)?;
    println!("✓ Initialized global configuration");
    println!("  Config: {}", config_path.display());
    Ok(())
}

/// Initialize project configuration
pub fn init_project(force: bool) -> Result<()> {
    let root = std::env::current_dir()?;
    let project_name = root
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("project");

    let config_path = ConfigLoader::init_project(&root, Some(project_name), force)?;
    println!("✓ Initialized project configuration");
    println!("  Config: {}", config_path.display());
    Ok(())
}
