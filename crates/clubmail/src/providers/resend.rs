//! Resend transactional email provider implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::traits::{EmailMessage, EmailProvider, EmailTag, SentEmail};
use crate::errors::EmailError;

/// Resend provider implementation
pub struct ResendProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ResendProvider {
    const BASE_URL: &'static str = "https://api.resend.com";
    const SEND_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a new Resend provider with the given API key
    pub fn new(api_key: impl Into<String>) -> Result<Self, EmailError> {
        let client = Client::builder()
            .timeout(Self::SEND_TIMEOUT)
            .build()
            .map_err(EmailError::Http)?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: Self::BASE_URL.to_string(),
        })
    }

    /// Point the provider at a different API endpoint (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// Resend API request/response types
#[derive(Debug, Serialize)]
struct ResendSendRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
    tags: &'a [EmailTag],
}

#[derive(Debug, Deserialize)]
struct ResendSendResponse {
    id: String,
}

#[async_trait]
impl EmailProvider for ResendProvider {
    async fn send(&self, message: &EmailMessage) -> Result<SentEmail, EmailError> {
        debug!("Sending email via Resend to: {:?}", message.to);

        let request = ResendSendRequest {
            from: &message.from,
            to: &message.to,
            subject: &message.subject,
            html: &message.html,
            text: &message.text,
            tags: &message.tags,
        };

        let response = self
            .client
            .post(self.api_url("/emails"))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            // Keep the provider payload intact; callers relay it verbatim
            let details = serde_json::from_str(&body)
                .unwrap_or_else(|_| serde_json::Value::String(body.clone()));
            error!("Failed to send email via Resend ({}): {}", status, body);
            return Err(EmailError::Upstream {
                status: status.as_u16(),
                details,
            });
        }

        let send_response: ResendSendResponse = response
            .json()
            .await
            .map_err(|e| EmailError::Provider(format!("Failed to parse send response: {}", e)))?;

        debug!("Email sent successfully, message_id: {}", send_response.id);

        Ok(SentEmail {
            message_id: send_response.id,
        })
    }

    fn provider_name(&self) -> &'static str {
        "resend"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_request_serialization() {
        let to = vec!["user@example.com".to_string()];
        let tags = vec![EmailTag::new("category", "verification")];
        let request = ResendSendRequest {
            from: "ClubJoin <noreply@clubjoin.io>",
            to: &to,
            subject: "Confirm your email",
            html: "<p>hi</p>",
            text: "hi",
            tags: &tags,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["from"], "ClubJoin <noreply@clubjoin.io>");
        assert_eq!(json["to"][0], "user@example.com");
        assert_eq!(json["tags"][0]["name"], "category");
        assert_eq!(json["tags"][0]["value"], "verification");
    }

    #[test]
    fn test_api_url() {
        let provider = ResendProvider::new("re_test").unwrap();
        assert_eq!(provider.api_url("/emails"), "https://api.resend.com/emails");

        let provider = provider.with_base_url("http://127.0.0.1:9999");
        assert_eq!(provider.api_url("/emails"), "http://127.0.0.1:9999/emails");
    }
}
