//! CLI entrypoint for Query Router
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use router_application::{PresentationSink, RoutingConfig, RunQueryUseCase};
use router_domain::{KeywordProfile, OutputFormat};
use router_infrastructure::{ConfigLoader, DuckDuckGoSearch, FileConfig, HuggingFaceImageGenerator};
use router_presentation::{
    Cli, ConsoleRenderer, ImageStore, InteractiveRepl, JsonRenderer, progress_for_terminal,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    info!("Starting Query Router");

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    // CLI flags override config files
    let profile: KeywordProfile = cli
        .profile
        .map(Into::into)
        .unwrap_or(config.routing.keyword_profile);
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    let image_dir = cli
        .image_dir
        .clone()
        .or_else(|| config.output.image_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("generated-images"));
    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let use_case = build_use_case(&config, profile)?;
    let sink: Box<dyn PresentationSink> = match format {
        OutputFormat::Text => Box::new(ConsoleRenderer::new(ImageStore::new(image_dir))),
        OutputFormat::Json => Box::new(JsonRenderer),
    };
    let show_progress = !cli.quiet && format == OutputFormat::Text;

    // Interactive mode
    if cli.interactive {
        let repl = InteractiveRepl::new(use_case, sink).with_progress(show_progress);
        repl.run().await?;
        return Ok(());
    }

    // Single query mode - query is required
    let Some(query) = cli.query else {
        bail!("Query is required. Use --interactive for interactive mode.");
    };

    let events = if show_progress {
        let progress = progress_for_terminal();
        use_case
            .execute_with_progress(&query, progress.as_ref())
            .await
    } else {
        use_case.execute(&query).await
    };

    sink.render_all(&events);

    Ok(())
}

/// Build the long-lived capability adapters and the use case around them
fn build_use_case(config: &FileConfig, profile: KeywordProfile) -> Result<RunQueryUseCase> {
    let image_generator = HuggingFaceImageGenerator::from_config(&config.image)
        .context("Failed to create image generation client")?;
    if config.image.token().is_none() {
        warn!(
            "No API token in ${}; image generation requests are sent anonymously",
            config.image.token_env
        );
    }
    info!("Image model: {}", image_generator.model());

    let web_search = DuckDuckGoSearch::from_config(&config.search)
        .context("Failed to create web search client")?;

    Ok(
        RunQueryUseCase::new(Arc::new(image_generator), Arc::new(web_search))
            .with_routing(RoutingConfig::new(profile)),
    )
}
