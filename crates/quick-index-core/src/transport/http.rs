//! reqwest-backed transport

use super::{RawResponse, Transport, TransportFailure};
use crate::config::NetworkConfig;
use crate::error::{QuickIndexError, QuickIndexResult};
use crate::query::RequestDescriptor;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

/// HTTP transport for the remote search service.
///
/// Timeouts are left at reqwest's defaults unless the [`NetworkConfig`]
/// overrides them.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport with its own HTTP client.
    pub fn new(network: &NetworkConfig) -> QuickIndexResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = network.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = network.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build().map_err(|e| {
            QuickIndexError::http(format!("Failed to create HTTP client: {}", e))
        })?;

        debug!(
            connect_timeout_secs = ?network.connect_timeout_secs,
            request_timeout_secs = ?network.request_timeout_secs,
            "Created HTTP transport"
        );

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, descriptor), fields(url = %descriptor.url()), level = "debug")]
    async fn send(&self, descriptor: &RequestDescriptor) -> Result<RawResponse, TransportFailure> {
        let response = self.client.get(descriptor.url()).send().await?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.text().await?;

        debug!(status = status.as_u16(), body_len = body.len(), "Search response received");

        Ok(RawResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}
