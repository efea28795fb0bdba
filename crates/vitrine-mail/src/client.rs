//! EmailJS-compatible send client.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

/// Default send API endpoint.
const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com";

/// Per-submission request timeout.
const SEND_TIMEOUT: Duration = Duration::from_secs(20);

/// Service identifiers for the send API, supplied at process start.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MailConfig {
    /// EmailJS service id
    pub service_id: String,

    /// EmailJS template id
    pub template_id: String,

    /// EmailJS public user id
    pub user_id: String,

    /// Endpoint override, mainly for tests
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// One contact form submission.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
}

/// Errors that can occur when sending a submission.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Send rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Client for the transactional send API.
///
/// One structured call per form submission; success or failure is the only
/// observable contract.
#[derive(Debug, Clone)]
pub struct MailClient {
    http: reqwest::Client,
    endpoint: String,
    config: MailConfig,
}

impl MailClient {
    /// Create a client from service identifiers.
    pub fn new(config: MailConfig) -> Self {
        let endpoint = config
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            config,
        }
    }

    /// Forward one submission to the send API.
    pub async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        let url = format!("{}/api/v1.0/email/send", self.endpoint);

        let payload = json!({
            "service_id": self.config.service_id,
            "template_id": self.config.template_id,
            "user_id": self.config.user_id,
            "template_params": {
                "from_name": message.from_name,
                "reply_to": message.reply_to,
                "message": message.message,
            },
        });

        tracing::debug!(reply_to = %message.reply_to, "Forwarding contact submission");

        let response = self
            .http
            .post(&url)
            .timeout(SEND_TIMEOUT)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
