//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `upload [LANG]` / `download [LANG]`: sync a single language
//! - `upload-all` / `download-all`: sync every input language, then generate
//! - `generate`: regenerate the typed modules only
//! - `targets`: list the jobs available for the current configuration
//! - `init`: create a `.tolgeerc.json`

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every command.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Config file to use instead of searching for .tolgeerc.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Tolgee server URL (overrides config file)
    #[arg(long, env = "TOLGEE_HOST", global = true)]
    pub host: Option<String>,

    /// Tolgee project API key (overrides config file)
    #[arg(long, env = "TOLGEE_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Args)]
pub struct LanguageArgs {
    /// Language code (default: the default language)
    pub language: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Upload one language's source file to Tolgee
    Upload(LanguageArgs),
    /// Download one language from Tolgee into its source file
    Download(LanguageArgs),
    /// Upload every input language, then regenerate the typed modules
    UploadAll,
    /// Download every input language, then regenerate the typed modules
    DownloadAll,
    /// Generate the typed modules from the source files
    Generate,
    /// List the available jobs
    Targets,
    /// Initialize a new .tolgeerc.json configuration file
    Init,
}
