//! Tests for the search coordinator state machine

#[cfg(test)]
mod tests {
    use crate::coordinator::{SearchCoordinator, SearchPhase, SearchState, SubmitOutcome};
    use crate::error::{AppError, ErrorKind, NETWORK_ERROR_MESSAGE, UNEXPECTED_ERROR_MESSAGE};
    use crate::query::{QueryBuilder, RequestDescriptor};
    use crate::response::MatchKind;
    use crate::transport::{MockTransport, RawResponse, Transport, TransportFailure};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Notify;

    const BASE_URL: &str = "http://search.test/api/v1";

    fn coordinator_with(mock: MockTransport) -> SearchCoordinator {
        SearchCoordinator::new(QueryBuilder::new(BASE_URL), Arc::new(mock))
    }

    fn exact_response() -> RawResponse {
        RawResponse::new(
            200,
            "OK",
            r#"{"value":500,"index":4,"message":"Exact match found"}"#,
        )
    }

    fn completed(outcome: SubmitOutcome) -> SearchState {
        match outcome {
            SubmitOutcome::Completed(state) => state,
            other => panic!("Expected completed search, got {:?}", other),
        }
    }

    /// Transport that holds every request until released
    struct GatedTransport {
        gate: Notify,
        calls: AtomicUsize,
        response: RawResponse,
    }

    impl GatedTransport {
        fn new(response: RawResponse) -> Self {
            Self {
                gate: Notify::new(),
                calls: AtomicUsize::new(0),
                response,
            }
        }

        fn release(&self) {
            self.gate.notify_one();
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for GatedTransport {
        async fn send(
            &self,
            _descriptor: &RequestDescriptor,
        ) -> Result<RawResponse, TransportFailure> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok(self.response.clone())
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let coordinator = coordinator_with(MockTransport::new());
        assert_eq!(coordinator.state(), SearchState::idle());
        assert_eq!(coordinator.subscribe().borrow().phase(), SearchPhase::Idle);
    }

    #[tokio::test]
    async fn test_exact_match_round_trip() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|d| d.url() == "http://search.test/api/v1/search/500")
            .times(1)
            .returning(|_| Ok(exact_response()));
        let coordinator = coordinator_with(mock);

        let state = completed(coordinator.submit("500").await);

        assert_eq!(state.phase(), SearchPhase::Success);
        let result = state.result().expect("result should be set");
        assert_eq!(result.value, 500);
        assert_eq!(result.index, 4);
        assert_eq!(result.match_kind, MatchKind::Exact);
        assert!(state.error().is_none());
        assert_eq!(coordinator.state(), state);
    }

    #[tokio::test]
    async fn test_server_error_round_trip() {
        let mut mock = MockTransport::new();
        mock.expect_send().times(1).returning(|_| {
            Ok(RawResponse::new(
                404,
                "Not Found",
                r#"{"detail":{"error":"Value not found","message":"No suitable match found for value 9999"}}"#,
            ))
        });
        let coordinator = coordinator_with(mock);

        let state = completed(coordinator.submit("9999").await);

        assert_eq!(state.phase(), SearchPhase::Error);
        assert_eq!(
            state.error(),
            Some(&AppError::server("No suitable match found for value 9999", 404))
        );
        assert!(state.result().is_none());
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Err(TransportFailure::Connect("connection refused".to_string())));
        let coordinator = coordinator_with(mock);

        let state = completed(coordinator.submit("500").await);

        assert_eq!(state.error(), Some(&AppError::network(NETWORK_ERROR_MESSAGE)));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_unexpected() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Ok(RawResponse::new(200, "OK", "not json")));
        let coordinator = coordinator_with(mock);

        let state = completed(coordinator.submit("500").await);

        assert_eq!(
            state.error(),
            Some(&AppError::network(UNEXPECTED_ERROR_MESSAGE))
        );
    }

    #[tokio::test]
    async fn test_validation_failures_never_reach_transport() {
        let mut mock = MockTransport::new();
        mock.expect_send().never();
        let coordinator = coordinator_with(mock);

        let cases = [
            ("", "Please enter a value to search for"),
            ("abc", "Please enter a valid number"),
            ("-5", "Value must be between 0 and 1,000,000"),
            ("1000001", "Value must be between 0 and 1,000,000"),
        ];

        for (raw, message) in cases {
            let state = completed(coordinator.submit(raw).await);
            assert_eq!(state.phase(), SearchPhase::Error);
            let error = state.error().expect("error should be set");
            assert_eq!(error.kind, ErrorKind::Validation);
            assert_eq!(error.message, message);
        }
    }

    #[tokio::test]
    async fn test_invalid_tolerance_is_validation_error() {
        let mut mock = MockTransport::new();
        mock.expect_send().never();
        let coordinator = coordinator_with(mock);

        let state = completed(coordinator.submit_with_tolerance("10", -3.0).await);

        assert_eq!(
            state.error(),
            Some(&AppError::validation("Tolerance must be a non-negative number"))
        );
    }

    #[tokio::test]
    async fn test_tolerance_reaches_request() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|d| {
                d.url() == "http://search.test/api/v1/search/500?tolerance=5"
                    && d.tolerance() == Some(5.0)
            })
            .times(1)
            .returning(|_| Ok(exact_response()));
        let coordinator = coordinator_with(mock);

        let state = completed(coordinator.submit_with_tolerance("500", 5.0).await);
        assert!(state.is_success());
    }

    #[tokio::test]
    async fn test_default_tolerance_applies_to_submit() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|d| d.tolerance() == Some(0.5))
            .times(1)
            .returning(|_| Ok(exact_response()));
        let coordinator = coordinator_with(mock).with_default_tolerance(Some(0.5));

        assert!(completed(coordinator.submit("500").await).is_success());
    }

    #[tokio::test]
    async fn test_new_search_replaces_previous_outcome() {
        let mut mock = MockTransport::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(TransportFailure::Timeout("elapsed".to_string())));
        mock.expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(exact_response()));
        let coordinator = coordinator_with(mock);

        assert!(completed(coordinator.submit("500").await).is_error());
        let state = completed(coordinator.submit("500").await);
        assert!(state.is_success());
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn test_reset_is_idempotent() {
        let mut mock = MockTransport::new();
        mock.expect_send().times(1).returning(|_| Ok(exact_response()));
        let coordinator = coordinator_with(mock);

        coordinator.submit("500").await;
        coordinator.reset();
        assert_eq!(coordinator.state(), SearchState::idle());
        coordinator.reset();
        assert_eq!(coordinator.state(), SearchState::idle());
    }

    #[tokio::test]
    async fn test_submit_while_loading_is_ignored() {
        let transport = Arc::new(GatedTransport::new(exact_response()));
        let coordinator = Arc::new(SearchCoordinator::new(
            QueryBuilder::new(BASE_URL),
            transport.clone(),
        ));

        let first = {
            let coordinator = Arc::clone(&coordinator);
            tokio::spawn(async move { coordinator.submit("500").await })
        };

        let mut rx = coordinator.subscribe();
        rx.wait_for(|s| s.is_loading()).await.unwrap();

        assert_eq!(coordinator.submit("600").await, SubmitOutcome::Ignored);
        assert_eq!(coordinator.submit("").await, SubmitOutcome::Ignored);
        assert!(coordinator.state().is_loading());

        transport.release();
        let state = completed(first.await.unwrap());

        assert!(state.is_success());
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_reset_discards_in_flight_response() {
        let transport = Arc::new(GatedTransport::new(exact_response()));
        let coordinator = Arc::new(SearchCoordinator::new(
            QueryBuilder::new(BASE_URL),
            transport.clone(),
        ));

        let first = {
            let coordinator = Arc::clone(&coordinator);
            tokio::spawn(async move { coordinator.submit("500").await })
        };

        let mut rx = coordinator.subscribe();
        rx.wait_for(|s| s.is_loading()).await.unwrap();

        coordinator.reset();
        transport.release();

        assert_eq!(first.await.unwrap(), SubmitOutcome::Superseded);
        assert_eq!(coordinator.state(), SearchState::idle());
    }

    #[tokio::test]
    async fn test_dropped_search_returns_to_idle() {
        let transport = Arc::new(GatedTransport::new(exact_response()));
        let coordinator = SearchCoordinator::new(QueryBuilder::new(BASE_URL), transport.clone());

        let timed_out =
            tokio::time::timeout(Duration::from_millis(20), coordinator.submit("500")).await;

        assert!(timed_out.is_err());
        assert_eq!(transport.calls(), 1);
        assert_eq!(coordinator.state(), SearchState::idle());
    }

    #[tokio::test]
    async fn test_subscribers_see_transitions() {
        let transport = Arc::new(GatedTransport::new(exact_response()));
        let coordinator = Arc::new(SearchCoordinator::new(
            QueryBuilder::new(BASE_URL),
            transport.clone(),
        ));
        let mut rx = coordinator.subscribe();

        let search = {
            let coordinator = Arc::clone(&coordinator);
            tokio::spawn(async move { coordinator.submit("500").await })
        };

        rx.wait_for(|s| s.is_loading()).await.unwrap();
        transport.release();
        let state = rx.wait_for(|s| s.is_success()).await.unwrap().clone();

        assert_eq!(state.result().map(|r| r.index), Some(4));
        search.await.unwrap();
    }
}
