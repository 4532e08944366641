//! CLI console utilities

use crate::render;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use quick_index_core::{SearchState, Theme};
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
    theme: Theme,
}

impl CliConsole {
    pub const fn new(verbose: bool, theme: Theme) -> Self {
        Self { verbose, theme }
    }

    /// Print an info message (verbose only)
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", self.accent(title).underline());
        println!("{}", "=".repeat(title.len()).dimmed());
    }

    /// Print the settled outcome of a search.
    pub fn print_state(&self, state: &SearchState) {
        if let Some(result) = state.result() {
            let badge = format!("[{}]", result.match_kind.label());
            let badge = if result.is_exact() {
                badge.green().bold()
            } else {
                badge.yellow().bold()
            };
            println!("{} {}", badge, self.accent(&render::result_summary(result)));
            println!("  {}", result.message.dimmed());
        } else if let Some(error) = state.error() {
            eprintln!(
                "{} {}",
                "✗".red().bold(),
                render::error_heading(error).red().bold()
            );
            eprintln!("  {}", error.message);
        }
    }

    /// Prompt for one line of input. Returns `None` at end of input.
    pub fn prompt(&self, label: &str) -> io::Result<Option<String>> {
        print!("{} ", self.accent(label));
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Show a spinner whenever the observed search is loading.
    pub fn loading_indicator(&self, states: watch::Receiver<SearchState>) -> LoadingIndicator {
        LoadingIndicator::spawn(states, self.spinner_template())
    }

    fn accent(&self, text: &str) -> ColoredString {
        match self.theme {
            Theme::Light => text.blue().bold(),
            Theme::Dark | Theme::System => text.cyan().bold(),
        }
    }

    fn spinner_template(&self) -> &'static str {
        match self.theme {
            Theme::Light => "{spinner:.blue} {msg}",
            Theme::Dark | Theme::System => "{spinner:.cyan} {msg}",
        }
    }
}

/// Background task driving the spinner from state updates.
pub struct LoadingIndicator {
    stop: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl LoadingIndicator {
    fn spawn(mut states: watch::Receiver<SearchState>, template: &'static str) -> Self {
        let (stop, mut stopped) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let mut spinner: Option<ProgressBar> = None;
            loop {
                let loading = states.borrow_and_update().is_loading();
                if loading && spinner.is_none() {
                    spinner = Some(new_spinner(template));
                } else if !loading {
                    if let Some(pb) = spinner.take() {
                        pb.finish_and_clear();
                    }
                }

                tokio::select! {
                    _ = &mut stopped => break,
                    changed = states.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            }
            if let Some(pb) = spinner.take() {
                pb.finish_and_clear();
            }
        });

        Self {
            stop: Some(stop),
            handle,
        }
    }

    /// Stop the task and clear any spinner still on screen.
    pub async fn finish(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Err(e) = (&mut self.handle).await {
            tracing::debug!(error = %e, "Spinner task ended abnormally");
        }
    }
}

fn new_spinner(template: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message("Searching...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
