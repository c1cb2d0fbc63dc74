//! CLI command definitions

use clap::{Parser, ValueEnum};
use router_domain::KeywordProfile;
use std::path::PathBuf;

/// Output format for presentation events
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable output
    Text,
    /// One JSON object per event
    Json,
}

impl From<OutputFormat> for router_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => router_domain::OutputFormat::Text,
            OutputFormat::Json => router_domain::OutputFormat::Json,
        }
    }
}

/// Keyword table used to detect image requests
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProfileArg {
    /// All fifteen image keywords
    Extended,
    /// The original nine image keywords
    Classic,
}

impl From<ProfileArg> for KeywordProfile {
    fn from(profile: ProfileArg) -> Self {
        match profile {
            ProfileArg::Extended => KeywordProfile::Extended,
            ProfileArg::Classic => KeywordProfile::Classic,
        }
    }
}

/// CLI arguments for query-router
#[derive(Parser, Debug)]
#[command(name = "query-router")]
#[command(author, version, about = "Generate an image, search the web, or both - depending on what you ask")]
#[command(long_about = r#"
Query Router decides, for a single request, whether to generate an image,
search the web, or do both.

Requests mentioning an image keyword (draw, picture, photo, image, painting,
art, render, generate, illustration, create, make, sketch, design, visual,
graphic) generate an image and then run a related web search. Everything
else runs a web search only.

Configuration files are loaded from (in priority order):
1. QUERY_ROUTER_* environment variables
2. --config <path>     Explicit config file
3. ./router.toml       Project-level config
4. ~/.config/query-router/config.toml   Global config

Example:
  query-router "draw a cat in a garden"
  query-router "what is the weather today"
  query-router --output json "generate a sunset painting"
  query-router --interactive
"#)]
pub struct Cli {
    /// The request to run (not required in interactive mode)
    pub query: Option<String>,

    /// Start interactive mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Directory generated images are written to
    #[arg(long, value_name = "DIR")]
    pub image_dir: Option<PathBuf>,

    /// Image keyword table
    #[arg(long, value_enum)]
    pub profile: Option<ProfileArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
