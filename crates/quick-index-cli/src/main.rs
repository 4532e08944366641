//! Quick Index CLI
//!
//! Search a remote sorted-number index for an exact or closest value.
//!
//! ```bash
//! quick-index search 500
//! quick-index search 4400 --tolerance 20
//! quick-index interactive
//! quick-index history
//! ```

mod args;
mod commands;
mod console;
mod logging;
mod render;
mod router;

use args::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let code = router::route(cli).await?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
