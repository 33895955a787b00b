//! Command-line interface.

pub mod check;
pub mod completions;
pub mod get;
pub mod output;
pub mod resolve;
pub mod signing;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::config::Config;
use crate::error::{ConfigError, Error, ResolveError, Result, SigningError};

/// buildcfg - Resolve manifest placeholders and signing for Android builds.
#[derive(Parser)]
#[command(
    name = "buildcfg",
    about = "Resolve manifest placeholders and signing for Android builds",
    version
)]
pub struct Cli {
    /// Project root (the Android directory)
    #[arg(
        short = 'C',
        long,
        global = true,
        env = "BUILDCFG_DIR",
        default_value = "."
    )]
    pub dir: PathBuf,

    /// Configuration file (defaults to .buildcfg.toml in the project root)
    #[arg(long, global = true, env = "BUILDCFG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Require the production secrets file
    #[arg(long, global = true, env = "BUILDCFG_PRODUCTION")]
    pub production: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve the full build configuration
    Resolve {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Print passwords instead of masking them
        #[arg(long)]
        show_secrets: bool,
    },

    /// Resolve a single required value and print it
    Get {
        /// Variable name (e.g., AUTH0_DOMAIN)
        key: String,
    },

    /// Show which signing identity the build will use
    Signing {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Print passwords instead of masking them
        #[arg(long)]
        show_secrets: bool,
    },

    /// Check that the build configuration resolves
    Check,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Output formats for `resolve`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
    Properties,
}

/// Supported shells for completions.
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl Cli {
    /// Load the project configuration named by the global flags.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(&self.dir, self.config.as_deref())?.with_production(self.production))
    }
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    // Completions must work outside a project, before any config is read.
    if let Command::Completions { shell } = &cli.command {
        return completions::execute(shell.clone());
    }

    let config = cli.load_config()?;

    match cli.command {
        Command::Resolve {
            format,
            show_secrets,
        } => resolve::execute(&config, format, show_secrets),
        Command::Get { key } => get::execute(&config, &key),
        Command::Signing { json, show_secrets } => signing::execute(&config, json, show_secrets),
        Command::Check => check::execute(&config),
        Command::Completions { .. } => Ok(()),
    }
}

/// Suggested next step for an error, if there is an obvious one.
pub fn hint(err: &Error) -> Option<String> {
    match err {
        Error::Resolve(ResolveError::MissingFile { path }) => Some(format!(
            "create {} or set the variables in the environment",
            path.display()
        )),
        Error::Resolve(ResolveError::MissingKey { key, path }) => Some(format!(
            "add {}=... to {} or export {}",
            key,
            path.display(),
            key
        )),
        Error::Resolve(ResolveError::EmptyValue { key, .. }) => {
            Some(format!("give {} a non-empty value", key))
        }
        Error::Config(ConfigError::Parse(_) | ConfigError::InvalidValue { .. }) => {
            Some("check .buildcfg.toml".to_string())
        }
        Error::Signing(SigningError::Read { path, .. }) => {
            Some(format!("check permissions on {}", path.display()))
        }
        _ => None,
    }
}
