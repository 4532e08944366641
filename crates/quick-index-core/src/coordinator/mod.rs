//! Search coordinator
//!
//! Runs validation, query building, transport and classification for one
//! search at a time and owns the resulting [`SearchState`]. Presentation
//! code reads the state through [`SearchCoordinator::state`] or a
//! [`SearchCoordinator::subscribe`] receiver; the coordinator is its only
//! writer.
//!
//! A submit while a search is loading is ignored. Each search carries a
//! generation number and `reset` advances it, so a response that arrives
//! after a reset is dropped instead of overwriting the newer state.

mod state;
#[cfg(test)]
mod tests;

pub use state::{SearchPhase, SearchState};

use crate::config::ClientConfig;
use crate::error::{FailureInput, QuickIndexResult, classify};
use crate::query::{QueryBuilder, ValidatedQuery};
use crate::response::interpret;
use crate::transport::{HttpTransport, Transport};
use crate::validation::validate;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// What became of a submit call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The search ran to a terminal state, returned here
    Completed(SearchState),
    /// Another search was loading; nothing happened
    Ignored,
    /// A reset happened while this search was in flight; its response was dropped
    Superseded,
}

struct Inner {
    state: SearchState,
    generation: u64,
}

pub struct SearchCoordinator {
    builder: QueryBuilder,
    transport: Arc<dyn Transport>,
    default_tolerance: Option<f64>,
    inner: Mutex<Inner>,
    state_tx: watch::Sender<SearchState>,
}

impl SearchCoordinator {
    /// Create an idle coordinator
    pub fn new(builder: QueryBuilder, transport: Arc<dyn Transport>) -> Self {
        let (state_tx, _) = watch::channel(SearchState::idle());
        Self {
            builder,
            transport,
            default_tolerance: None,
            inner: Mutex::new(Inner {
                state: SearchState::idle(),
                generation: 0,
            }),
            state_tx,
        }
    }

    /// Create a coordinator talking HTTP to `config.base_url`
    pub fn from_config(config: &ClientConfig) -> QuickIndexResult<Self> {
        let transport = HttpTransport::new(&config.network)?;
        Ok(Self::new(QueryBuilder::new(&config.base_url), Arc::new(transport))
            .with_default_tolerance(config.default_tolerance))
    }

    /// Tolerance applied by [`submit`](Self::submit) when none is given
    pub fn with_default_tolerance(mut self, tolerance: Option<f64>) -> Self {
        self.default_tolerance = tolerance;
        self
    }

    /// Current state snapshot
    pub fn state(&self) -> SearchState {
        self.inner.lock().state.clone()
    }

    /// Receiver notified on every state transition
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state_tx.subscribe()
    }

    /// Search for the value in `raw`.
    pub async fn submit(&self, raw: &str) -> SubmitOutcome {
        self.run(raw, self.default_tolerance).await
    }

    /// Search for the value in `raw` with an explicit tolerance.
    pub async fn submit_with_tolerance(&self, raw: &str, tolerance: f64) -> SubmitOutcome {
        self.run(raw, Some(tolerance)).await
    }

    /// Return to `Idle` from any state, discarding any in-flight response.
    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.generation += 1;
        debug!(generation = inner.generation, "Search state reset");
        self.publish(&mut inner, SearchState::idle());
    }

    #[instrument(skip(self, raw), fields(generation = tracing::field::Empty), level = "debug")]
    async fn run(&self, raw: &str, tolerance: Option<f64>) -> SubmitOutcome {
        let (generation, query) = {
            let mut inner = self.inner.lock();
            if inner.state.is_loading() {
                debug!("Search already in flight; ignoring submit");
                return SubmitOutcome::Ignored;
            }

            let query = match prepare(raw, tolerance) {
                Ok(query) => query,
                Err(failed) => {
                    debug!(error = ?failed.error(), "Input rejected");
                    self.publish(&mut inner, failed.clone());
                    return SubmitOutcome::Completed(failed);
                }
            };

            inner.generation += 1;
            self.publish(&mut inner, SearchState::loading());
            (inner.generation, query)
        };
        tracing::Span::current().record("generation", generation);

        let mut in_flight = InFlight {
            coordinator: self,
            generation,
            settled: false,
        };

        let descriptor = self.builder.build(&query);
        info!(value = query.value(), tolerance = ?query.tolerance(), "Searching");

        let next = match self.transport.send(&descriptor).await {
            Ok(response) if response.is_success() => match interpret(&response) {
                Ok(result) => SearchState::succeeded(result),
                Err(input) => SearchState::failed(classify(input)),
            },
            Ok(response) => SearchState::failed(classify(FailureInput::Response(response))),
            Err(failure) => SearchState::failed(classify(FailureInput::Transport(failure))),
        };
        in_flight.settled = true;

        let mut inner = self.inner.lock();
        if inner.generation != generation {
            debug!(current = inner.generation, "Dropping superseded response");
            return SubmitOutcome::Superseded;
        }

        match (next.result(), next.error()) {
            (Some(result), _) => info!(
                value = result.value,
                index = result.index,
                match_kind = ?result.match_kind,
                "Search succeeded"
            ),
            (_, Some(error)) => info!(kind = %error.kind, status = ?error.status, "Search failed"),
            _ => {}
        }

        self.publish(&mut inner, next.clone());
        SubmitOutcome::Completed(next)
    }

    fn publish(&self, inner: &mut Inner, state: SearchState) {
        inner.state = state.clone();
        self.state_tx.send_replace(state);
    }
}

fn prepare(raw: &str, tolerance: Option<f64>) -> Result<ValidatedQuery, SearchState> {
    let query = validate(raw).map_err(|f| SearchState::failed(f.into()))?;
    match tolerance {
        Some(t) => query
            .with_tolerance(t)
            .map_err(|f| SearchState::failed(f.into())),
        None => Ok(query),
    }
}

/// Returns the coordinator to `Idle` if a search future is dropped mid-flight.
struct InFlight<'a> {
    coordinator: &'a SearchCoordinator,
    generation: u64,
    settled: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut inner = self.coordinator.inner.lock();
        if inner.generation == self.generation && inner.state.is_loading() {
            warn!(generation = self.generation, "Search dropped before completion");
            inner.generation += 1;
            self.coordinator.publish(&mut inner, SearchState::idle());
        }
    }
}
