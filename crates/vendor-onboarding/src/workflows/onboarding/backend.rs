//! Outbound seam to the submission backend. The trait keeps the service
//! testable in isolation; the HTTP implementation talks to the bridge that
//! owns authentication against the downstream business API.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Successful acknowledgement from the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendReceipt {
    pub message: Option<String>,
    pub data: Option<Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend rejected submission ({code}): {message}")]
    Rejected { code: String, message: String },
    #[error("failed to reach submission backend: {0}")]
    Network(#[from] reqwest::Error),
}

impl BackendError {
    pub fn code(&self) -> &str {
        match self {
            BackendError::Rejected { code, .. } => code,
            BackendError::Network(_) => "NETWORK_ERROR",
        }
    }

    pub fn message(&self) -> String {
        match self {
            BackendError::Rejected { message, .. } => message.clone(),
            BackendError::Network(err) => err.to_string(),
        }
    }
}

#[async_trait]
pub trait SubmissionBackend: Send + Sync {
    /// Post the array-of-one serialized record.
    async fn create_customer(&self, payload: &[Value]) -> Result<BackendReceipt, BackendError>;

    /// Whether the backend answers its health probe.
    async fn health(&self) -> bool;
}

/// Response envelope the backend bridge wraps every call in.
#[derive(Debug, Deserialize)]
struct BackendEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HealthEnvelope {
    #[serde(default)]
    status: String,
}

/// HTTP implementation posting to the configured backend bridge.
pub struct HttpSubmissionBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSubmissionBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SubmissionBackend for HttpSubmissionBackend {
    async fn create_customer(&self, payload: &[Value]) -> Result<BackendReceipt, BackendError> {
        let envelope: BackendEnvelope = self
            .client
            .post(self.endpoint("/api/create-customer"))
            .json(payload)
            .send()
            .await?
            .json()
            .await?;

        if envelope.success {
            Ok(BackendReceipt {
                message: envelope.message,
                data: envelope.data,
            })
        } else {
            Err(BackendError::Rejected {
                code: envelope.error.unwrap_or_else(|| "API_ERROR".to_string()),
                message: envelope
                    .message
                    .unwrap_or_else(|| "Unknown error".to_string()),
            })
        }
    }

    async fn health(&self) -> bool {
        let response = self.client.get(self.endpoint("/api/health")).send().await;
        match response {
            Ok(response) => response
                .json::<HealthEnvelope>()
                .await
                .map(|envelope| envelope.status == "ok")
                .unwrap_or(false),
            Err(_) => false,
        }
    }
}
