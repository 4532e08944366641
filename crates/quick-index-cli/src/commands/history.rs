//! Search history command

use super::CommandContext;
use crate::render;

pub fn run(ctx: &CommandContext, clear: bool) -> anyhow::Result<()> {
    let history = ctx.history();

    if clear {
        history.clear()?;
        ctx.console.success("Search history cleared");
        return Ok(());
    }

    print(ctx);
    Ok(())
}

/// Print recent searches, most recent first.
pub fn print(ctx: &CommandContext) {
    let entries = ctx.history().entries();
    if entries.is_empty() {
        ctx.console.warn("No recent searches");
        return;
    }

    ctx.console.print_header("Recent searches");
    for (position, value) in entries.iter().enumerate() {
        println!("{}", render::history_line(position, *value));
    }
}
