//! One-shot search command

use super::CommandContext;
use quick_index_core::{SearchCoordinator, SearchState, SubmitOutcome, validate};
use tracing::warn;

/// Run a single search and return the process exit code.
pub async fn run(ctx: &CommandContext, value: &str, tolerance: Option<f64>) -> anyhow::Result<i32> {
    let coordinator = ctx.coordinator()?;
    let state = search_once(ctx, &coordinator, value, tolerance).await;
    Ok(if state.is_success() { 0 } else { 1 })
}

/// Submit `raw`, render the settled state and record successful searches.
pub async fn search_once(
    ctx: &CommandContext,
    coordinator: &SearchCoordinator,
    raw: &str,
    tolerance: Option<f64>,
) -> SearchState {
    let indicator = ctx.console.loading_indicator(coordinator.subscribe());
    let outcome = match tolerance {
        Some(tolerance) => coordinator.submit_with_tolerance(raw, tolerance).await,
        None => coordinator.submit(raw).await,
    };
    indicator.finish().await;

    let state = match outcome {
        SubmitOutcome::Completed(state) => state,
        SubmitOutcome::Ignored | SubmitOutcome::Superseded => coordinator.state(),
    };
    ctx.console.print_state(&state);

    if state.is_success() {
        record(ctx, raw);
    }
    state
}

fn record(ctx: &CommandContext, raw: &str) {
    let Ok(query) = validate(raw) else {
        return;
    };
    if let Err(e) = ctx.history().add(query.value()) {
        warn!(error = %e, "Failed to record search history");
    }
}
