//! Wallet configuration.

use serde::Deserialize;

/// Configuration for the [`crate::Wallet`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WalletConfig {
    /// Emit the assembled payload and its digest at debug level.
    pub log_payloads: bool,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            log_payloads: true,
        }
    }
}

impl WalletConfig {
    /// Load from a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
