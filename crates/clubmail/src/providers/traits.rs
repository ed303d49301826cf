//! Email provider trait definitions

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::EmailError;

/// A name/value tag attached to an outgoing email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailTag {
    pub name: String,
    pub value: String,
}

impl EmailTag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A fully rendered email, ready to hand to a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Sender identity, e.g. `ClubJoin <noreply@clubjoin.io>`
    pub from: String,
    /// Recipient email addresses
    pub to: Vec<String>,
    /// Email subject
    pub subject: String,
    /// HTML body content
    pub html: String,
    /// Plain text body content
    pub text: String,
    /// Provider-side tags for categorizing sends
    pub tags: Vec<EmailTag>,
}

/// Response from sending an email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentEmail {
    /// Provider's message ID
    pub message_id: String,
}

/// Email provider trait for abstracting the transactional email service
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Send a single email, returning the provider's message ID
    async fn send(&self, message: &EmailMessage) -> Result<SentEmail, EmailError>;

    /// Human-readable provider name, used in logs
    fn provider_name(&self) -> &'static str;
}
