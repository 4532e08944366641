//! Configuration management commands

use super::CommandContext;
use crate::render;
use colored::*;
use std::path::Path;

/// Show the effective configuration after every layer is applied.
pub fn show(ctx: &CommandContext, config_file: &Path) {
    ctx.console.print_header("Configuration");

    if config_file.exists() {
        ctx.console
            .success(&format!("Loaded configuration from: {}", config_file.display()));
    } else {
        ctx.console.warn(&format!(
            "Configuration file not found: {}",
            config_file.display()
        ));
        ctx.console.info("Using defaults with environment and flag overrides");
    }

    for (key, value) in render::config_rows(&ctx.config) {
        println!("  {:<18} {}", format!("{key}:").bold(), value);
    }
}
