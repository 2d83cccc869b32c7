//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: CatalogConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use url::Url;

use crate::config::schema::CatalogConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The store URL does not parse or cannot serve as a base.
    StoreUrl { url: String, reason: String },
    /// No API key configured.
    MissingApiKey,
    /// A zero timeout would hang requests forever.
    ZeroTimeout,
    /// The metrics bind address does not parse.
    MetricsAddress { address: String, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::StoreUrl { url, reason } => {
                write!(f, "store URL '{}' is invalid: {}", url, reason)
            }
            ValidationError::MissingApiKey => write!(f, "store API key is not set"),
            ValidationError::ZeroTimeout => write!(f, "store timeout must be greater than zero"),
            ValidationError::MetricsAddress { address, reason } => {
                write!(f, "metrics address '{}' is invalid: {}", address, reason)
            }
        }
    }
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &CatalogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.store.url) {
        Ok(url) if url.cannot_be_a_base() => errors.push(ValidationError::StoreUrl {
            url: config.store.url.clone(),
            reason: "not a base URL".to_string(),
        }),
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::StoreUrl {
            url: config.store.url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.store.api_key.is_empty() {
        errors.push(ValidationError::MissingApiKey);
    }

    if config.store.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.observability.metrics_enabled {
        if let Err(e) = config.observability.metrics_address.parse::<SocketAddr>() {
            errors.push(ValidationError::MetricsAddress {
                address: config.observability.metrics_address.clone(),
                reason: e.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> CatalogConfig {
        let mut config = CatalogConfig::default();
        config.store.api_key = "secret".to_string();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_all_errors_reported() {
        let mut config = valid_config();
        config.store.url = "::nope::".to_string();
        config.store.api_key = String::new();
        config.store.timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::MissingApiKey));
        assert!(errors.contains(&ValidationError::ZeroTimeout));
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = valid_config();
        config.observability.metrics_address = "nonsense".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::MetricsAddress { .. }]
        ));
    }
}
