//! Theme preference command

use super::CommandContext;
use quick_index_core::Theme;

/// Show the stored theme, or store a new one.
pub fn run(ctx: &CommandContext, theme: Option<Theme>) -> anyhow::Result<()> {
    let preference = ctx.theme();

    match theme {
        Some(theme) => {
            preference.set(theme)?;
            ctx.console.success(&format!("Theme set to {theme}"));
        }
        None => {
            let current = preference.get();
            let shown = current.unwrap_or_default();
            match current {
                Some(_) => println!("{shown}"),
                None => println!("{shown} (default)"),
            }
        }
    }
    Ok(())
}
