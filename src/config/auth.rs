//! Authentication configuration

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Authentication configuration (bearer tokens and the bootstrap account)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthConfig {
    /// Lifetime of issued tokens in seconds; tokens never expire when unset
    #[serde(default)]
    pub token_ttl_secs: Option<u64>,

    /// Email of the account created at startup when none exists
    #[serde(default)]
    pub bootstrap_email: Option<String>,

    /// Password of the bootstrap account
    #[serde(default)]
    pub bootstrap_password: Option<SecretString>,
}

impl AuthConfig {
    /// Get token TTL as Duration
    pub fn token_ttl(&self) -> Option<Duration> {
        self.token_ttl_secs.map(Duration::from_secs)
    }

    /// Bootstrap credentials, when both halves are configured
    pub fn bootstrap_credentials(&self) -> Option<(&str, &SecretString)> {
        match (&self.bootstrap_email, &self.bootstrap_password) {
            (Some(email), Some(password)) => Some((email.as_str(), password)),
            _ => None,
        }
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.token_ttl_secs == Some(0) {
            return Err(ValidationError::InvalidTokenTtl);
        }
        if self.bootstrap_email.is_some() != self.bootstrap_password.is_some() {
            return Err(ValidationError::IncompleteBootstrapUser);
        }
        if matches!(&self.bootstrap_email, Some(email) if email.trim().is_empty()) {
            return Err(ValidationError::MissingRequired("AUTH__BOOTSTRAP_EMAIL"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert!(config.token_ttl().is_none());
        assert!(config.bootstrap_credentials().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_token_ttl_duration() {
        let config = AuthConfig {
            token_ttl_secs: Some(3600),
            ..Default::default()
        };
        assert_eq!(config.token_ttl(), Some(Duration::from_secs(3600)));
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let config = AuthConfig {
            token_ttl_secs: Some(0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidTokenTtl)));
    }

    #[test]
    fn test_bootstrap_requires_both_halves() {
        let config = AuthConfig {
            bootstrap_email: Some("admin@example.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::IncompleteBootstrapUser)
        ));
        assert!(config.bootstrap_credentials().is_none());
    }

    #[test]
    fn test_bootstrap_credentials_when_complete() {
        let config = AuthConfig {
            bootstrap_email: Some("admin@example.com".to_string()),
            bootstrap_password: Some(SecretString::new("s3cret".to_string())),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        let (email, _) = config.bootstrap_credentials().unwrap();
        assert_eq!(email, "admin@example.com");
    }
}
