//! QuoteFeed CLI and Server Binary
//!
//! Entry point for the synthetic market-data producer. Provides commands
//! for initializing and validating configuration and for starting the
//! quote server.

use anyhow::{Context, Result};
use cli::{Cli, Commands};
use config::{generate_default_config, load_config, save_config, validate_config};
use observability::{init_logging, LogFormat};
use quotes::{quote_routes, PriceCatalog, QuoteApiState, QuoteService};
use server::{
    health_routes, validate_ports_available, HealthState, HttpServer, ServerConfig, ServerExt,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let format = LogFormat::parse(&cli.log_format)
        .ok_or_else(|| anyhow::anyhow!("unknown log format: {}", cli.log_format))?;
    init_logging("quotefeed", format)?;

    debug!(?cli, "CLI arguments parsed");

    match cli.command {
        Commands::Start { config, http } => {
            info!("Executing 'start' command");
            start_producer(config, http).await
        }
        Commands::Validate { config } => {
            info!("Executing 'validate' command");
            validate_command(config).await
        }
        Commands::Init { output } => {
            info!("Executing 'init' command");
            init_command(output).await
        }
    }
}

async fn start_producer<P: AsRef<Path>>(config_path: P, http_override: Option<u16>) -> Result<()> {
    let config = load_config(config_path.as_ref())?;
    let report = validate_config(&config);

    // Log warnings
    if !report.warnings.is_empty() {
        warn!("Configuration warnings:");
        for warning in &report.warnings {
            warn!(field = %warning.field, message = %warning.message);
        }
    }

    // Check validation errors
    if !report.is_valid() {
        error!(
            error_count = report.errors.len(),
            "Configuration validation failed"
        );
        for err in &report.errors {
            error!("{}", err);
        }
        anyhow::bail!("Cannot start producer due to configuration errors");
    }

    let http_port = http_override.unwrap_or(config.server.http_port);
    if http_override.is_some() {
        debug!(port = http_port, "Using HTTP port override from CLI");
    }

    // Metrics exporter is optional
    if let Some(metrics_port) = config.server.metrics_port {
        observability::init_metrics(metrics_port)?;
    }

    let catalog = Arc::new(PriceCatalog::from_config(&config.catalog));
    info!(
        service = %config.service.name,
        instruments = catalog.len(),
        http_port,
        "Starting quote producer"
    );

    let api_state = Arc::new(QuoteApiState::new(QuoteService::new(catalog)));
    let health_state = Arc::new(HealthState::new(config.service.name.clone()));

    let router = quote_routes(api_state).merge(health_routes(health_state));

    let server_config = ServerConfig::new(config.server.host.clone(), http_port);

    // Validate ports before starting
    validate_ports_available(&server_config).await?;

    let http_server = HttpServer::new(server_config, router);
    http_server.run_with_ctrl_c().await?;

    Ok(())
}

async fn validate_command<P: AsRef<Path>>(config_path: P) -> Result<()> {
    info!(path = ?config_path.as_ref(), "Validating configuration");

    let config = match load_config(&config_path) {
        Ok(c) => c,
        Err(e) => {
            error!(%e, "Failed to load configuration");
            anyhow::bail!(e);
        }
    };

    let report = validate_config(&config);

    // Print summary
    println!("\n=== Configuration Validation Report ===\n");

    if !report.defaults_applied.is_empty() {
        println!("Defaults Applied ({}):", report.defaults_applied.len());
        for default in &report.defaults_applied {
            println!("  [info] {} = {}", default.field, default.value);
        }
        println!();
    }

    if !report.warnings.is_empty() {
        println!("Warnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            println!("  [warn] [{}] {}", warning.field, warning.message);
        }
        println!();
    }

    if !report.errors.is_empty() {
        println!("Errors ({}):", report.errors.len());
        for err in &report.errors {
            println!("  [error] {}", err);
        }
        println!();
        anyhow::bail!("Configuration validation failed");
    }

    println!("[ok] Configuration is valid!");
    println!();
    println!("Service: {}", config.service.name);
    println!("Version: {}", config.service.version);
    println!("Instruments: {}", config.catalog.instruments.len());
    println!("Default base price: {}", config.catalog.default_base_price);
    println!(
        "HTTP: {}:{}",
        config.server.host, config.server.http_port
    );

    Ok(())
}

async fn init_command<P: AsRef<Path>>(output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    info!(?output_path, "Initializing new configuration file");

    let config = generate_default_config();

    // Ensure parent directory exists
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
    }

    save_config(&config, output_path)?;

    println!("[ok] Configuration file created successfully!");
    println!();
    println!("Location: {:?}", output_path);
    println!();
    println!("This configuration includes:");
    println!(
        "  - Service metadata (name, description, version)"
    );
    println!(
        "  - {} built-in instruments with reference prices",
        config.catalog.instruments.len()
    );
    println!("  - HTTP binding on {}:{}", config.server.host, config.server.http_port);
    println!();
    println!("Next steps:");
    println!("  1. Edit the configuration file to customize the catalog");
    println!(
        "  2. Run 'quotefeed validate --config {:?}' to check configuration",
        output_path
    );
    println!(
        "  3. Run 'quotefeed start --config {:?}' to start the producer",
        output_path
    );

    Ok(())
}
