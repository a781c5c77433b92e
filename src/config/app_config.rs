use std::{fmt, time::Duration};

use thiserror::Error;

use crate::authorizer::domain::model::enums::claim_validation_policy::ClaimValidationPolicy;

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("missing required environment variable {0}")]
    MissingVariable(&'static str),

    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

#[derive(Clone)]
pub struct AppConfig {
    pub port: u16,
    pub identity_app_id: String,
    pub identity_app_secret: String,
    pub identity_private_signing_key: String,
    pub identity_verification_endpoint: String,
    pub identity_verification_timeout: Duration,
    pub allowed_origin: String,
    pub claim_validation_policy: ClaimValidationPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(AppConfigError::MissingVariable(name))
        };

        let port = match optional("PORT") {
            Some(value) => value.parse().map_err(|_| AppConfigError::InvalidValue {
                name: "PORT",
                reason: format!("'{value}' is not a valid port"),
            })?,
            None => 8081,
        };

        let timeout_ms: u64 = match optional("IDENTITY_VERIFICATION_TIMEOUT_MS") {
            Some(value) => value.parse().map_err(|_| AppConfigError::InvalidValue {
                name: "IDENTITY_VERIFICATION_TIMEOUT_MS",
                reason: format!("'{value}' is not a number of milliseconds"),
            })?,
            None => 5000,
        };

        if timeout_ms == 0 {
            return Err(AppConfigError::InvalidValue {
                name: "IDENTITY_VERIFICATION_TIMEOUT_MS",
                reason: "timeout must be greater than zero".to_string(),
            });
        }

        let claim_validation_policy = match optional("CLAIM_VALIDATION_POLICY") {
            Some(value) => value
                .parse::<ClaimValidationPolicy>()
                .map_err(|reason| AppConfigError::InvalidValue {
                    name: "CLAIM_VALIDATION_POLICY",
                    reason,
                })?,
            None => ClaimValidationPolicy::default(),
        };

        Ok(Self {
            port,
            identity_app_id: required("IDENTITY_APP_ID")?,
            identity_app_secret: required("IDENTITY_APP_SECRET")?,
            identity_private_signing_key: required("IDENTITY_PRIVATE_SIGNING_KEY")?,
            identity_verification_endpoint: optional("IDENTITY_VERIFICATION_ENDPOINT")
                .unwrap_or_else(|| "http://127.0.0.1:50051".to_string()),
            identity_verification_timeout: Duration::from_millis(timeout_ms),
            allowed_origin: optional("ALLOWED_ORIGIN")
                .unwrap_or_else(|| "http://localhost:8080".to_string()),
            claim_validation_policy,
        })
    }
}

// Secrets stay out of logs even when the whole config is printed.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("identity_app_id", &self.identity_app_id)
            .field("identity_app_secret", &"<redacted>")
            .field("identity_private_signing_key", &"<redacted>")
            .field(
                "identity_verification_endpoint",
                &self.identity_verification_endpoint,
            )
            .field(
                "identity_verification_timeout",
                &self.identity_verification_timeout,
            )
            .field("allowed_origin", &self.allowed_origin)
            .field("claim_validation_policy", &self.claim_validation_policy.as_str())
            .finish()
    }
}
