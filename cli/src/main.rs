//! CLI entrypoint for agent-frontend-config
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use frontend_config_application::{
    NoOverrides, OverrideSourcePort, ResolveConfigUseCase, ResolvedConfig,
};
use frontend_config_domain::AppConfig;
use frontend_config_infrastructure::ConfigLoader;
use frontend_config_presentation::{Cli, ConsoleFormatter, OutputFormatter};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
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

    info!("Starting agent-frontend-config");

    let loader = match &cli.config {
        _ if cli.no_config => ConfigLoader::defaults_only(),
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };

    if cli.show_config {
        loader.print_config_sources();
        return Ok(());
    }

    // === Dependency Injection ===
    // Defaults are built once here and only lent to the use case
    let defaults = AppConfig::default();
    let resolved = if cli.no_config {
        resolve(&defaults, NoOverrides)
    } else {
        resolve(&defaults, loader)
    }?;

    if cli.check {
        // Warnings were already logged while resolving
        if resolved.issues.is_empty() {
            println!("Configuration OK");
        } else {
            println!("Configuration OK with {} warning(s)", resolved.issues.len());
        }
        return Ok(());
    }

    println!("{}", ConsoleFormatter.render(&resolved.config, cli.output.into()));

    Ok(())
}

fn resolve<S: OverrideSourcePort>(
    defaults: &AppConfig,
    source: S,
) -> Result<ResolvedConfig> {
    ResolveConfigUseCase::new(defaults, source)
        .execute()
        .context("Refusing to start with an invalid front-end configuration")
}
