mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use pii_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let config = Config::load()?;

    match cli.command {
        cli::Commands::Mask {
            text,
            file,
            spans,
            mode,
            kind,
            model,
            format,
        } => commands::mask::handle(&config, text, file, spans, mode, kind, model, format).await,
        cli::Commands::Detect { text, file, model } => {
            commands::detect::handle(&config, text, file, model).await
        }
        cli::Commands::Unmask { file, audit } => commands::unmask::handle(file, audit),
        cli::Commands::Serve { host, port } => commands::serve::handle(&config, host, port).await,
        cli::Commands::Config => commands::show_config(&config),
    }
}
