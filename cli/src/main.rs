//! CLI entrypoint for conductor
//!
//! Wires the infrastructure adapters into the orchestrator and runs one
//! request end to end.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use conductor_application::Orchestrator;
use conductor_infrastructure::{
    ConfigLoader, OpenAiGateway, ToolRegistry, TraceExporter, default_catalog,
};
use std::sync::Arc;
use tracing::info;
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
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    info!("backend: {} | model: {}", config.base_url, config.model);

    // === Dependency injection ===
    let gateway = Arc::new(OpenAiGateway::from_config(&config)?);
    let tools = Arc::new(ToolRegistry::from_config(&config)?);
    let catalog = Arc::new(default_catalog());

    let orchestrator = Orchestrator::new(gateway, tools, catalog)
        .with_max_tool_iterations(config.max_tool_iterations);

    if !cli.quiet {
        println!();
        println!("{} {}", "Request:".bold(), cli.query);
        println!();
    }

    let outcome = orchestrator.orchestrate(&cli.query).await?;

    if !cli.quiet {
        for step in &outcome.trace.steps {
            println!(
                "{} {}",
                format!("[{}]", step.agent).cyan().bold(),
                step.output
            );
        }
        for warning in &outcome.trace.warnings {
            println!("{} {}", "warning:".yellow().bold(), warning);
        }
        if !outcome.trace.steps.is_empty() {
            println!();
        }
        println!("{}", "Answer".green().bold());
    }

    println!("{}", outcome.final_answer);

    if !cli.no_trace {
        let exporter = TraceExporter::new(&config.trace_dir);
        if let Some(files) = exporter.export(&outcome.trace)
            && !cli.quiet
        {
            println!();
            println!(
                "{} {}",
                "Trace:".dimmed(),
                files.trace.display().to_string().dimmed()
            );
        }
    }

    Ok(())
}
