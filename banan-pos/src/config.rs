//! POS configuration
//!
//! Loaded from environment variables (a `.env` file is honored by the binary
//! through dotenvy); CLI flags override individual fields.

use std::path::PathBuf;
use std::time::Duration;

use banan_client::ClientConfig;
use banan_client::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

use crate::error::{PosError, PosResult};
use crate::notifications::DEFAULT_FLASH_DURATION;
use crate::payment::QrMerchant;

/// Behavior switches of the table controller
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    /// Receiving account embedded in transfer QR codes
    pub merchant: QrMerchant,
    /// Lifetime of success notices
    pub flash_duration: Duration,
    /// When set, a cancelled order item can no longer be toggled
    pub cancelled_is_terminal: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            merchant: QrMerchant::default(),
            flash_duration: DEFAULT_FLASH_DURATION,
            cancelled_is_terminal: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PosConfig {
    /// Backend base URL, API prefix included (env: BANAN_API_URL)
    pub api_url: String,
    /// Request timeout in seconds (env: BANAN_TIMEOUT_SECS)
    pub timeout_secs: u64,
    /// Bearer token from a previous login (env: BANAN_TOKEN)
    pub token: Option<String>,
    /// tracing filter directive (env: BANAN_LOG)
    pub log_level: Option<String>,
    /// Daily log files go here when set (env: BANAN_LOG_DIR)
    pub log_dir: Option<PathBuf>,
    pub controller: ControllerOptions,
}

impl Default for PosConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            token: None,
            log_level: None,
            log_dir: None,
            controller: ControllerOptions::default(),
        }
    }
}

fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: std::str::FromStr>(name: &str) -> PosResult<Option<T>> {
    match var(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| PosError::Config(format!("{name} has an invalid value: {raw}"))),
        None => Ok(None),
    }
}

fn parse_bool(name: &str) -> PosResult<Option<bool>> {
    match var(name).as_deref().map(str::trim) {
        Some("1" | "true" | "yes" | "on") => Ok(Some(true)),
        Some("0" | "false" | "no" | "off") => Ok(Some(false)),
        Some(other) => Err(PosError::Config(format!("{name} must be a boolean, got {other}"))),
        None => Ok(None),
    }
}

impl PosConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> PosResult<Self> {
        let defaults = Self::default();
        let merchant_defaults = QrMerchant::default();

        let flash_duration = parse_var::<u64>("BANAN_FLASH_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.controller.flash_duration);

        Ok(Self {
            api_url: var("BANAN_API_URL").unwrap_or(defaults.api_url),
            timeout_secs: parse_var("BANAN_TIMEOUT_SECS")?.unwrap_or(defaults.timeout_secs),
            token: var("BANAN_TOKEN"),
            log_level: var("BANAN_LOG"),
            log_dir: var("BANAN_LOG_DIR").map(PathBuf::from),
            controller: ControllerOptions {
                merchant: QrMerchant {
                    bank: var("BANAN_QR_BANK").unwrap_or(merchant_defaults.bank),
                    account_number: var("BANAN_QR_ACCOUNT")
                        .unwrap_or(merchant_defaults.account_number),
                    account_name: var("BANAN_QR_ACCOUNT_NAME")
                        .unwrap_or(merchant_defaults.account_name),
                    template: var("BANAN_QR_TEMPLATE").unwrap_or(merchant_defaults.template),
                },
                flash_duration,
                cancelled_is_terminal: parse_bool("BANAN_CANCELLED_IS_TERMINAL")?
                    .unwrap_or(defaults.controller.cancelled_is_terminal),
            },
        })
    }

    pub fn validate(&self) -> PosResult<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(PosError::Config(format!(
                "BANAN_API_URL must be an http(s) URL, got {}",
                self.api_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(PosError::Config("BANAN_TIMEOUT_SECS must be positive".into()));
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api_url.clone()).with_timeout(self.timeout_secs);
        match &self.token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = PosConfig::default();
        assert_eq!(config.api_url, "http://localhost:8081/restaurant/api");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.controller.flash_duration, Duration::from_secs(3));
        assert!(!config.controller.cancelled_is_terminal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_http_url() {
        let config = PosConfig {
            api_url: "localhost:8081".into(),
            ..PosConfig::default()
        };
        assert!(matches!(config.validate(), Err(PosError::Config(_))));
    }

    #[test]
    fn client_config_carries_token() {
        let config = PosConfig {
            token: Some("abc".into()),
            timeout_secs: 5,
            ..PosConfig::default()
        };
        let client = config.client_config();
        assert_eq!(client.token.as_deref(), Some("abc"));
        assert_eq!(client.timeout, 5);
    }
}
