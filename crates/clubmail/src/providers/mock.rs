//! Mock email provider for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::EmailError;
use crate::providers::{EmailMessage, EmailProvider, SentEmail};

/// Mock email provider for testing
#[derive(Debug, Clone)]
pub struct MockEmailProvider {
    /// Counter for tracking calls
    pub send_count: Arc<AtomicUsize>,
    /// Messages handed to [`EmailProvider::send`], in order
    pub sent_messages: Arc<Mutex<Vec<EmailMessage>>>,

    /// Configurable responses
    pub message_id: String,
    pub failure: Option<serde_json::Value>,
}

impl Default for MockEmailProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEmailProvider {
    pub fn new() -> Self {
        Self {
            send_count: Arc::new(AtomicUsize::new(0)),
            sent_messages: Arc::new(Mutex::new(Vec::new())),
            message_id: format!("mock-message-{}", uuid::Uuid::new_v4()),
            failure: None,
        }
    }

    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    pub fn with_send_failure(mut self, details: serde_json::Value) -> Self {
        self.failure = Some(details);
        self
    }

    pub fn send_call_count(&self) -> usize {
        self.send_count.load(Ordering::SeqCst)
    }

    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent_messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailProvider for MockEmailProvider {
    async fn send(&self, message: &EmailMessage) -> Result<SentEmail, EmailError> {
        self.send_count.fetch_add(1, Ordering::SeqCst);
        self.sent_messages.lock().unwrap().push(message.clone());

        if let Some(details) = &self.failure {
            return Err(EmailError::Upstream {
                status: 422,
                details: details.clone(),
            });
        }

        Ok(SentEmail {
            message_id: self.message_id.clone(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::EmailTag;

    fn test_message() -> EmailMessage {
        EmailMessage {
            from: "ClubJoin <noreply@clubjoin.io>".to_string(),
            to: vec!["recipient@example.com".to_string()],
            subject: "Test".to_string(),
            html: "<p>Test</p>".to_string(),
            text: "Test".to_string(),
            tags: vec![EmailTag::new("category", "verification")],
        }
    }

    #[tokio::test]
    async fn test_mock_provider_send() {
        let provider = MockEmailProvider::new().with_message_id("abc123");

        let response = provider.send(&test_message()).await.unwrap();

        assert_eq!(response.message_id, "abc123");
        assert_eq!(provider.send_call_count(), 1);
        assert_eq!(provider.sent_messages()[0].to, vec!["recipient@example.com"]);
    }

    #[tokio::test]
    async fn test_mock_provider_send_failure() {
        let details = serde_json::json!({ "message": "mock failure" });
        let provider = MockEmailProvider::new().with_send_failure(details.clone());

        let result = provider.send(&test_message()).await;

        match result {
            Err(EmailError::Upstream { details: d, .. }) => assert_eq!(d, details),
            other => panic!("expected upstream error, got {other:?}"),
        }
        assert_eq!(provider.send_call_count(), 1);
    }
}
