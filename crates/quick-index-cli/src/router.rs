//! Command routing logic for CLI

use crate::args::{Cli, Commands, ConfigAction};
use crate::commands::{self, CommandContext};
use crate::logging;
use anyhow::Context;
use quick_index_core::{ConfigSource, load_config};

/// Load configuration, install logging and dispatch the subcommand.
/// Returns the process exit code.
pub async fn route(cli: Cli) -> anyhow::Result<i32> {
    let config_path = cli.config_path().to_path_buf();
    let source = match &cli.config_file {
        Some(path) => ConfigSource::Explicit(path),
        None => ConfigSource::Conventional(&config_path),
    };
    let config = load_config(source, &cli.overrides()).with_context(|| {
        format!("Failed to load configuration from {}", config_path.display())
    })?;

    logging::init(&config.logging, cli.verbose);
    tracing::debug!(base_url = %config.client.base_url, "Configuration loaded");

    let ctx = CommandContext::new(config, cli.verbose);

    match cli.command {
        Commands::Search { value, tolerance } => {
            commands::search::run(&ctx, &value, tolerance).await
        }
        Commands::Interactive => commands::interactive::run(&ctx).await,
        Commands::History { clear } => commands::history::run(&ctx, clear).map(|()| 0),
        Commands::Theme { theme } => commands::theme::run(&ctx, theme.map(Into::into)).map(|()| 0),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::show(&ctx, &config_path);
                Ok(0)
            }
        },
    }
}
