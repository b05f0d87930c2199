/// Base HTTP client for upstream API calls
use reqwest::Client;
use std::time::Duration;

/// HTTP client wrapper that owns the per-request timeout
///
/// Every request through this client is bounded; an expired timeout surfaces
/// as a reqwest timeout error and is treated like any other fetch failure.
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(timeout_secs: u64) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
