//! Verification email dispatch handler

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use tracing::{debug, error};

use super::types::{AppState, SendVerificationRequest, SendVerificationResponse};
use crate::errors::ApiError;
use crate::providers::{EmailMessage, EmailTag};
use crate::templates;

/// Sender identity for all verification emails
const EMAIL_FROM: &str = "ClubJoin <noreply@clubjoin.io>";

/// Subject line for all verification emails
const EMAIL_SUBJECT: &str = "ClubJoin Early Access - Confirm your email";

/// Configure verification routes.
///
/// The route accepts any method: OPTIONS is answered directly, everything
/// else goes through the same parse-validate-dispatch flow.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/send-verification-email", any(send_verification_email))
}

/// Send a verification email
#[utoipa::path(
    tag = "Verification",
    post,
    path = "/send-verification-email",
    request_body = SendVerificationRequest,
    responses(
        (status = 200, description = "Verification email sent", body = SendVerificationResponse),
        (status = 400, description = "Missing email or verification token"),
        (status = 500, description = "Service not configured, provider rejection, or internal error")
    )
)]
pub async fn send_verification_email(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Result<Response, ApiError> {
    // CORS preflight short-circuit
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    let request: SendVerificationRequest = serde_json::from_slice(&body).map_err(|e| {
        error!("Failed to parse request body: {}", e);
        ApiError::Internal(e.to_string())
    })?;

    let email = request
        .email
        .filter(|email| !email.is_empty())
        .ok_or(ApiError::InvalidInput)?;
    let token = request
        .verification_token
        .filter(|token| !token.is_empty())
        .ok_or(ApiError::InvalidInput)?;

    debug!("Sending verification email to: {}", email);

    let provider = state.provider.as_ref().ok_or_else(|| {
        error!("RESEND_API_KEY not configured");
        ApiError::NotConfigured
    })?;

    let verification_url = templates::verification_url(&state.settings.site_url, &token);

    let message = EmailMessage {
        from: EMAIL_FROM.to_string(),
        to: vec![email],
        subject: EMAIL_SUBJECT.to_string(),
        html: templates::render_html(&verification_url),
        text: templates::render_text(&verification_url),
        tags: vec![
            EmailTag::new("category", "verification"),
            EmailTag::new("environment", state.settings.environment.clone()),
        ],
    };

    let sent = provider.send(&message).await.map_err(|e| {
        error!("Failed to send email: {}", e);
        ApiError::from(e)
    })?;

    debug!("Email sent successfully: {}", sent.message_id);

    let response = SendVerificationResponse {
        success: true,
        message_id: sent.message_id,
        message: "Verification email sent successfully".to_string(),
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}
