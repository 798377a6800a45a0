//! Contact submission transport
//!
//! The contact form hands its payload to a [`SubmissionTransport`] and only
//! interprets the result. Two implementations exist:
//! - [`SimulatedTransport`] waits a fixed delay and acknowledges (default)
//! - [`HttpTransport`] POSTs the payload as JSON to a mail-dispatch endpoint

use std::time::Duration;

use qtech_core::prelude::*;
use serde::Serialize;
use url::Url;

use crate::config::{parse_endpoint, ContactSettings, TransportKind};

/// JSON body sent to the mail-dispatch endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub name: String,
    pub client_email: String,
    pub message: String,
}

/// Successful delivery ("message queued")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionAck {
    /// HTTP status of the response; `None` when nothing was sent
    pub status: Option<u16>,
}

/// Delivers a contact payload to a backend
#[trait_variant::make(SubmissionTransport: Send)]
pub trait LocalSubmissionTransport {
    async fn submit(&self, payload: &ContactPayload) -> Result<SubmissionAck>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Simulated
// ─────────────────────────────────────────────────────────────────────────────

/// Stand-in for the backend: sleeps, then acknowledges
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl SubmissionTransport for SimulatedTransport {
    async fn submit(&self, payload: &ContactPayload) -> Result<SubmissionAck> {
        debug!(
            "Simulating submission for {:?} ({}ms)",
            payload.client_email,
            self.delay.as_millis()
        );
        tokio::time::sleep(self.delay).await;
        Ok(SubmissionAck { status: None })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HTTP
// ─────────────────────────────────────────────────────────────────────────────

/// Posts the payload as `application/json`; any 2xx response is success
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl SubmissionTransport for HttpTransport {
    async fn submit(&self, payload: &ContactPayload) -> Result<SubmissionAck> {
        debug!("POST {}", self.endpoint);
        let body = serde_json::to_vec(payload)?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::TransportTimeout {
                        timeout_ms: self.timeout.as_millis() as u64,
                    }
                } else {
                    Error::transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::TransportStatus {
                status: status.as_u16(),
            });
        }

        Ok(SubmissionAck {
            status: Some(status.as_u16()),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configured transport
// ─────────────────────────────────────────────────────────────────────────────

/// The transport selected by settings
#[derive(Debug, Clone)]
pub enum Transport {
    Simulated(SimulatedTransport),
    Http(HttpTransport),
}

impl Transport {
    pub fn from_settings(settings: &ContactSettings) -> Result<Self> {
        match settings.transport {
            TransportKind::Simulated => Ok(Transport::Simulated(SimulatedTransport::new(
                Duration::from_millis(settings.simulated_delay_ms),
            ))),
            TransportKind::Http => {
                let endpoint = settings.endpoint.as_deref().ok_or_else(|| {
                    Error::config_invalid("contact.transport = \"http\" requires contact.endpoint")
                })?;
                let endpoint = parse_endpoint(endpoint)?;
                let timeout = Duration::from_millis(settings.request_timeout_ms);
                Ok(Transport::Http(HttpTransport::new(endpoint, timeout)?))
            }
        }
    }

    pub fn kind(&self) -> TransportKind {
        match self {
            Transport::Simulated(_) => TransportKind::Simulated,
            Transport::Http(_) => TransportKind::Http,
        }
    }
}

impl Default for Transport {
    fn default() -> Self {
        Transport::Simulated(SimulatedTransport::new(Duration::from_millis(
            crate::config::DEFAULT_SIMULATED_DELAY_MS,
        )))
    }
}

impl SubmissionTransport for Transport {
    async fn submit(&self, payload: &ContactPayload) -> Result<SubmissionAck> {
        match self {
            Transport::Simulated(inner) => SubmissionTransport::submit(inner, payload).await,
            Transport::Http(inner) => SubmissionTransport::submit(inner, payload).await,
        }
    }
}
