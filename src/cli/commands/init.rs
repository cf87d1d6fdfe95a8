//! Init Command
//!
//! Initialize wikiloom in the current directory.

use crate::config::ConfigLoader;
use crate::types::{Result, WikiError};

pub fn run(force: bool) -> Result<()> {
    let root = std::env::current_dir()?;
    let config_path = root.join(ConfigLoader::project_config_path());

    if config_path.exists() && !force {
        return Err(WikiError::Config(
            "Already initialized. Use --force to overwrite.".to_string(),
        ));
    }

    // Get project name from directory
    let project_name = root
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("project")
        .to_string();

    let config_path = ConfigLoader::init_project(&root, Some(&project_name), force)?;

    // Initialize global config if not exists (don't force overwrite)
    if let Err(e) = ConfigLoader::init_global(false) {
        tracing::debug!("Global config init skipped: {}", e);
    }

    println!("✓ Initialized wikiloom in .wikiloom/");
    println!("  Project: {}", project_name);
    println!("  Config:  {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. List the modules to document under [sources] in the config");
    println!("  2. Export GOOGLE_API_KEY (or choose another provider under [llm])");
    println!("  3. Run 'wikiloom generate', then 'wikiloom organize'");

    Ok(())
}
