//! Client configuration.

use std::num::NonZeroU64;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::TransportMode;

/// Default swap server address.
pub const DEFAULT_SWAP_SERVER_ADDRESS: &str = "swap.lightning.today:11010";

/// Default upper bound for a single call, in milliseconds.
pub const DEFAULT_CALL_TIMEOUT_MS: NonZeroU64 = NonZeroU64::MIN.saturating_add(29_999);

/// Swap server client configuration (TOML-serializable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapClientConfig {
    /// Server address as `host:port`, or a full URI.
    pub address: String,

    /// Disable transport security. Local and test deployments only.
    pub insecure: bool,

    /// PEM certificate to pin instead of using the system trust store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_path: Option<PathBuf>,

    /// Upper bound for a single call, in milliseconds. Zero is rejected on load.
    pub call_timeout_ms: NonZeroU64,

    /// Defer dialing until the first call.
    pub lazy_connect: bool,
}

impl Default for SwapClientConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_SWAP_SERVER_ADDRESS.to_string(),
            insecure: false,
            tls_path: None,
            call_timeout_ms: DEFAULT_CALL_TIMEOUT_MS,
            lazy_connect: false,
        }
    }
}

impl SwapClientConfig {
    /// Set the server address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Enable or disable plaintext transport.
    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// Pin a certificate.
    pub fn with_tls_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tls_path = Some(path.into());
        self
    }

    /// Set the per-call timeout.
    ///
    /// Rounded up to whole milliseconds, so any non-zero duration stays
    /// non-zero. A zero duration becomes one millisecond.
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.set_call_timeout(timeout);
        self
    }

    /// In-place form of [`with_call_timeout`](Self::with_call_timeout).
    pub fn set_call_timeout(&mut self, timeout: Duration) {
        let millis = u64::try_from(timeout.as_nanos().div_ceil(1_000_000)).unwrap_or(u64::MAX);
        self.call_timeout_ms = NonZeroU64::new(millis).unwrap_or(NonZeroU64::MIN);
    }

    /// Defer dialing until the first call.
    pub fn with_lazy_connect(mut self, lazy: bool) -> Self {
        self.lazy_connect = lazy;
        self
    }

    /// Upper bound for a single call.
    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms.get())
    }

    /// Transport security mode selected by this configuration.
    pub fn transport_mode(&self) -> TransportMode {
        TransportMode::select(self.insecure, self.tls_path.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SwapClientConfig::default();
        assert_eq!(config.address, DEFAULT_SWAP_SERVER_ADDRESS);
        assert_eq!(config.call_timeout(), Duration::from_secs(30));
        assert_eq!(config.transport_mode(), TransportMode::SystemRoots);
        assert!(!config.lazy_connect);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SwapClientConfig = toml::from_str(
            r#"
address = "localhost:11009"
insecure = true
"#,
        )
        .unwrap();

        assert_eq!(config.address, "localhost:11009");
        assert_eq!(config.transport_mode(), TransportMode::Insecure);
        assert_eq!(config.call_timeout_ms, DEFAULT_CALL_TIMEOUT_MS);
    }

    #[test]
    fn test_sub_second_timeout_kept() {
        let config = SwapClientConfig::default().with_call_timeout(Duration::from_millis(500));
        assert_eq!(config.call_timeout(), Duration::from_millis(500));

        let config = SwapClientConfig::default().with_call_timeout(Duration::from_micros(1_500));
        assert_eq!(config.call_timeout(), Duration::from_millis(2));

        let config = SwapClientConfig::default().with_call_timeout(Duration::MAX);
        assert_eq!(config.call_timeout(), Duration::from_millis(u64::MAX));
    }

    #[test]
    fn test_zero_timeout_never_configured() {
        let config = SwapClientConfig::default().with_call_timeout(Duration::ZERO);
        assert!(!config.call_timeout().is_zero());

        assert!(toml::from_str::<SwapClientConfig>("call_timeout_ms = 0").is_err());
        let config: SwapClientConfig = toml::from_str("call_timeout_ms = 250").unwrap();
        assert_eq!(config.call_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = SwapClientConfig::default()
            .with_tls_path("/etc/loop/tls.cert")
            .with_call_timeout(Duration::from_secs(5));
        let encoded = toml::to_string(&config).unwrap();
        let decoded: SwapClientConfig = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded, config);
    }
}
