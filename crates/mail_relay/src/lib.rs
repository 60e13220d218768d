use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use shared::protocol::ContactFields;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

pub mod config;
mod submission;

pub use config::RelaySettings;
pub use submission::ContactSubmission;

pub const EMAILJS_SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Identifiers the relay needs to route a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayCredentials {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }

    /// First identifier that is blank, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay credential `{0}` is not configured")]
    MissingCredential(&'static str),
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait MailRelay: Send + Sync {
    /// Sends one message. Success carries no payload.
    async fn send(
        &self,
        credentials: &RelayCredentials,
        fields: &ContactFields,
    ) -> Result<(), RelayError>;
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    title: &'a str,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// EmailJS REST client.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    http: Client,
    endpoint: Url,
}

impl EmailJsRelay {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl MailRelay for EmailJsRelay {
    async fn send(
        &self,
        credentials: &RelayCredentials,
        fields: &ContactFields,
    ) -> Result<(), RelayError> {
        if let Some(field) = credentials.missing_field() {
            warn!(field, "relay credentials incomplete");
            return Err(RelayError::MissingCredential(field));
        }

        let request = SendRequest {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: TemplateParams {
                name: &fields.name,
                email: &fields.email,
                title: &fields.title,
                message: &fields.message,
            },
        };

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(endpoint = %self.endpoint, "relay accepted message");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
