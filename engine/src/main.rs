// Sitewright Website Builder
// Main entry point for the sitewright binary

use clap::Parser;
use sitewright_engine::cli::{Cli, Command, ConfigAction};
use sitewright_engine::config::Config;
use sitewright_engine::handlers::{
    handle_build, handle_config_init, handle_config_show, handle_list, handle_serve, handle_show,
    OutputFormat,
};
use sitewright_engine::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // `config init` must work even when the current file is broken
    if let Command::Config {
        action: ConfigAction::Init,
    } = &cli.command
    {
        return handle_config_init(cli.config.clone());
    }

    let config = if let Some(config_path) = &cli.config {
        Config::load_from_path(config_path)?
    } else {
        Config::load_or_create()?
    };

    // The CLI flag wins over the config file
    let log_level = cli.log.as_deref().unwrap_or(&config.core.log_level);
    telemetry::init(log_level);

    tracing::info!("Sitewright Engine v{}", env!("CARGO_PKG_VERSION"));

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match cli.command {
        Command::Serve => handle_serve(&config).await,
        Command::Build { requirements } => handle_build(requirements, &config, format).await,
        Command::List => handle_list(&config, format),
        Command::Show { id } => handle_show(id, &config),
        Command::Config { action } => match action {
            ConfigAction::Show => handle_config_show(&config, format),
            ConfigAction::Init => unreachable!("handled before config load"),
        },
    }
}
