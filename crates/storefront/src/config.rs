//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional, with the defaults shown:
//!
//! - `VITRINE_LOW_STOCK_THRESHOLD` - stock at or below this shows the
//!   "last units" badge (default: 5)
//! - `VITRINE_FEATURED_COUNT` - products per home section (default: 3)
//! - `VITRINE_MAX_VISIBLE_TOASTS` - toast stack bound; pushing beyond it
//!   evicts the oldest (default: 3)
//! - `VITRINE_TOAST_TTL_MS` - toast lifetime in milliseconds (default: 3000)
//! - `VITRINE_CHECKOUT_REDIRECT_DELAY_MS` - pause before the
//!   order-confirmation redirect (default: 2000)
//! - `VITRINE_LOGIN_REDIRECT_DELAY_MS` - pause before the login redirect
//!   (default: 1500)

use std::time::Duration;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Stock at or below this counts as "low".
    pub low_stock_threshold: u32,
    /// Products per home section (featured / for-you).
    pub featured_count: usize,
    /// Upper bound on simultaneously visible toasts.
    pub max_visible_toasts: usize,
    /// How long a toast stays visible.
    pub toast_ttl: Duration,
    /// UX pause before redirecting to the order confirmation.
    pub checkout_redirect_delay: Duration,
    /// UX pause before redirecting to the login page.
    pub login_redirect_delay: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: 5,
            featured_count: 3,
            max_visible_toasts: 3,
            toast_ttl: Duration::from_millis(3000),
            checkout_redirect_delay: Duration::from_millis(2000),
            login_redirect_delay: Duration::from_millis(1500),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a set variable fails to
    /// parse. Unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a present variable fails to
    /// parse.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            low_stock_threshold: parse_or(
                &lookup,
                "VITRINE_LOW_STOCK_THRESHOLD",
                defaults.low_stock_threshold,
            )?,
            featured_count: parse_or(&lookup, "VITRINE_FEATURED_COUNT", defaults.featured_count)?,
            max_visible_toasts: parse_or(
                &lookup,
                "VITRINE_MAX_VISIBLE_TOASTS",
                defaults.max_visible_toasts,
            )?,
            toast_ttl: millis_or(&lookup, "VITRINE_TOAST_TTL_MS", defaults.toast_ttl)?,
            checkout_redirect_delay: millis_or(
                &lookup,
                "VITRINE_CHECKOUT_REDIRECT_DELAY_MS",
                defaults.checkout_redirect_delay,
            )?,
            login_redirect_delay: millis_or(
                &lookup,
                "VITRINE_LOGIN_REDIRECT_DELAY_MS",
                defaults.login_redirect_delay,
            )?,
        })
    }
}

/// Parse a variable if present, falling back to `default`.
fn parse_or<T: std::str::FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    lookup(name).map_or(Ok(default), |raw| {
        raw.parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(name.to_owned(), e.to_string()))
    })
}

/// Parse a millisecond variable into a `Duration`.
fn millis_or(
    lookup: impl Fn(&str) -> Option<String>,
    name: &str,
    default: Duration,
) -> Result<Duration, ConfigError> {
    let default_ms = u64::try_from(default.as_millis()).unwrap_or(u64::MAX);
    let ms = parse_or(lookup, name, default_ms)?;
    Ok(Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(|_| None).expect("defaults");
        assert_eq!(config.low_stock_threshold, 5);
        assert_eq!(config.featured_count, 3);
        assert_eq!(config.max_visible_toasts, 3);
        assert_eq!(config.toast_ttl, Duration::from_millis(3000));
        assert_eq!(config.checkout_redirect_delay, Duration::from_millis(2000));
        assert_eq!(config.login_redirect_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_overrides_parse() {
        let config = StorefrontConfig::from_lookup(|name| match name {
            "VITRINE_LOW_STOCK_THRESHOLD" => Some("2".to_owned()),
            "VITRINE_TOAST_TTL_MS" => Some("500".to_owned()),
            _ => None,
        })
        .expect("valid overrides");
        assert_eq!(config.low_stock_threshold, 2);
        assert_eq!(config.toast_ttl, Duration::from_millis(500));
        assert_eq!(config.featured_count, 3);
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let err = StorefrontConfig::from_lookup(|name| {
            (name == "VITRINE_FEATURED_COUNT").then(|| "lots".to_owned())
        })
        .expect_err("not a number");
        assert!(matches!(err, ConfigError::InvalidEnvVar(name, _) if name == "VITRINE_FEATURED_COUNT"));
    }
}
