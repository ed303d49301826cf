//! Verification email service for ClubJoin
//!
//! This crate accepts a signup verification request, renders the
//! verification email (HTML + plain text) and sends it through the
//! Resend transactional email API.
//!
//! Features:
//! - Single dispatch endpoint with permissive CORS
//! - Provider abstraction with a Resend implementation
//! - Environment-derived configuration with development defaults

pub mod config;
pub mod errors;
pub mod handlers;
pub mod providers;
pub mod templates;

// Re-export main types
pub use config::Settings;
pub use errors::{ApiError, EmailError};
pub use handlers::{router, AppState};
pub use providers::{EmailMessage, EmailProvider, EmailTag, ResendProvider, SentEmail};
