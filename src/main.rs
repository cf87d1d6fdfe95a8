use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wikiloom::cli::CommandContext;
use wikiloom::cli::commands::generate::GenerateOptions;
use wikiloom::cli::commands::organize::OrganizeOptions;
use wikiloom::cli::util::ProviderOverrides;
use wikiloom::config::ExtractorKind;

/// Parse extractor kind from string
fn parse_extractor_kind(s: &str) -> Result<ExtractorKind, String> {
    s.parse()
}

#[derive(Parser)]
#[command(name = "wikiloom")]
#[command(
    version,
    about = "Wiki documentation generator for small codebases"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, global = true, help = "Config file (replaces .wikiloom/config.toml)")]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize wikiloom in the current directory
    Init {
        #[arg(long, short, help = "Overwrite existing initialization")]
        force: bool,
    },

    /// Generate a page per module plus a combined home page
    Generate {
        #[arg(long, short, help = "Output directory for wiki")]
        output: Option<PathBuf>,
        #[arg(long, value_parser = parse_extractor_kind, help = "Page extractor: static, generative")]
        extractor: Option<ExtractorKind>,
        #[arg(long, help = "LLM provider (gemini, openai, ollama, claude-code)")]
        provider: Option<String>,
        #[arg(long, help = "Model to use")]
        model: Option<String>,
        #[arg(long, help = "Skip pulling the latest changes")]
        no_sync: bool,
        #[arg(help = "Source files to document (default: [sources] files)")]
        files: Vec<String>,
    },

    /// Rewrite Home and _Sidebar from the generated pages
    Organize {
        #[arg(long, short, help = "Wiki directory to organize")]
        output: Option<PathBuf>,
        #[arg(long, help = "LLM provider (gemini, openai, ollama, claude-code)")]
        provider: Option<String>,
        #[arg(long, help = "Model to use")]
        model: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(short = 'g', long, help = "Show global config file only")]
        global: bool,
        #[arg(
            short = 'f',
            long,
            default_value = "toml",
            help = "Output format: toml, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        // Extract panic message
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mwikiloom encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    // Install panic handler first
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_file = cli.config.as_deref();

    match cli.command {
        Commands::Init { force } => {
            wikiloom::cli::commands::init::run(force)?;
        }
        Commands::Generate {
            output,
            extractor,
            provider,
            model,
            no_sync,
            files,
        } => {
            let ctx = CommandContext::load(config_file)?;
            wikiloom::cli::commands::generate::run(
                &ctx,
                GenerateOptions {
                    output,
                    extractor,
                    provider: ProviderOverrides { provider, model },
                    no_sync,
                    files,
                },
            )?;
        }
        Commands::Organize {
            output,
            provider,
            model,
        } => {
            let ctx = CommandContext::load(config_file)?;
            wikiloom::cli::commands::organize::run(
                &ctx,
                OrganizeOptions {
                    output,
                    provider: ProviderOverrides { provider, model },
                },
            )?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { global, format } => {
                wikiloom::cli::commands::config::show(config_file, global, &format)?;
            }
            ConfigAction::Path => {
                wikiloom::cli::commands::config::path()?;
            }
            ConfigAction::Init { global, force } => {
                if global {
                    wikiloom::cli::commands::config::init_global(force)?;
                } else {
                    wikiloom::cli::commands::config::init_project(force)?;
                }
            }
        },
    }

    Ok(())
}
