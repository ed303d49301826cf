//! Handler types for the verification email service

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::Settings;
use crate::errors::EmailError;
use crate::providers::{EmailProvider, ResendProvider};

/// Application state shared by all handlers.
///
/// The provider is `None` exactly when no Resend credential is configured;
/// the dispatch handler turns that into a configuration error without
/// contacting any external service.
pub struct AppState {
    pub settings: Settings,
    pub provider: Option<Arc<dyn EmailProvider>>,
}

impl AppState {
    pub fn new(settings: Settings, provider: Option<Arc<dyn EmailProvider>>) -> Self {
        Self { settings, provider }
    }

    /// Build the state from settings, constructing a Resend provider when
    /// a credential is present
    pub fn from_settings(settings: Settings) -> Result<Self, EmailError> {
        let provider = match &settings.resend_api_key {
            Some(api_key) => {
                Some(Arc::new(ResendProvider::new(api_key.clone())?) as Arc<dyn EmailProvider>)
            }
            None => None,
        };

        Ok(Self { settings, provider })
    }
}

/// Inbound request body.
///
/// Both fields are modeled as options so that missing and empty values go
/// through the same validation path instead of being rejected by serde.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendVerificationRequest {
    /// Recipient email address
    #[serde(default)]
    #[schema(example = "user@example.com")]
    pub email: Option<String>,
    /// Opaque verification token issued elsewhere
    #[serde(default)]
    pub verification_token: Option<String>,
}

/// Successful dispatch response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendVerificationResponse {
    pub success: bool,
    /// Message ID returned by the provider
    #[schema(example = "abc123")]
    pub message_id: String,
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
