//! Environment-derived service configuration

/// Default site URL used when `SITE_URL` is not set
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Default deployment label used when `ENVIRONMENT` is not set
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Settings resolved from the environment at startup.
///
/// The Resend credential is optional here on purpose: the server starts
/// without it and every send request fails with a configuration error,
/// so a misconfigured deployment is visible to callers instead of
/// crash-looping.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Resend API key (`RESEND_API_KEY`)
    pub resend_api_key: Option<String>,
    /// Base URL embedded in verification links (`SITE_URL`)
    pub site_url: String,
    /// Deployment label attached to outgoing emails as a tag (`ENVIRONMENT`)
    pub environment: String,
}

impl Settings {
    /// Read settings from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through a lookup function
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            resend_api_key: lookup("RESEND_API_KEY").filter(|key| !key.is_empty()),
            site_url: lookup("SITE_URL")
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
            environment: lookup("ENVIRONMENT")
                .filter(|env| !env.is_empty())
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let settings = Settings::from_lookup(|_| None);

        assert!(settings.resend_api_key.is_none());
        assert_eq!(settings.site_url, DEFAULT_SITE_URL);
        assert_eq!(settings.environment, DEFAULT_ENVIRONMENT);
    }

    #[test]
    fn test_values_from_lookup() {
        let settings = Settings::from_lookup(|key| match key {
            "RESEND_API_KEY" => Some("re_test_123".to_string()),
            "SITE_URL" => Some("https://clubjoin.io".to_string()),
            "ENVIRONMENT" => Some("production".to_string()),
            _ => None,
        });

        assert_eq!(settings.resend_api_key.as_deref(), Some("re_test_123"));
        assert_eq!(settings.site_url, "https://clubjoin.io");
        assert_eq!(settings.environment, "production");
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let settings = Settings::from_lookup(|_| Some(String::new()));

        assert!(settings.resend_api_key.is_none());
        assert_eq!(settings.site_url, DEFAULT_SITE_URL);
        assert_eq!(settings.environment, DEFAULT_ENVIRONMENT);
    }
}
