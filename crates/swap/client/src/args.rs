//! Swap server CLI arguments.

use std::num::NonZeroU64;
use std::path::PathBuf;
use std::time::Duration;

use clap::Args;

use crate::SwapClientConfig;

/// Swap server connection arguments.
///
/// Every flag is optional so that unset flags leave values loaded from the
/// config file or environment untouched.
#[derive(Debug, Args, Clone, Default)]
#[command(next_help_heading = "Swap server")]
pub struct SwapServerArgs {
    /// Swap server address (host:port).
    #[arg(long = "server.address", value_name = "ADDR")]
    pub address: Option<String>,

    /// Connect without TLS. Local and test deployments only.
    #[arg(long = "server.insecure")]
    pub insecure: bool,

    /// Pin the swap server's self-signed TLS certificate.
    #[arg(long = "server.tls-path", value_name = "PATH")]
    pub tls_path: Option<PathBuf>,

    /// Per-call timeout in seconds.
    #[arg(long = "server.timeout", value_name = "SECS")]
    pub timeout: Option<NonZeroU64>,

    /// Defer dialing the server until the first call.
    #[arg(long = "server.lazy")]
    pub lazy: bool,

    /// Credential attached to every call.
    #[arg(long = "server.token", value_name = "TOKEN", env = "LOOP_SERVER_TOKEN")]
    pub token: Option<String>,
}

impl SwapServerArgs {
    /// Apply the flags that were given on top of `config`.
    pub fn apply(&self, config: &mut SwapClientConfig) {
        if let Some(address) = &self.address {
            config.address = address.clone();
        }
        if self.insecure {
            config.insecure = true;
        }
        if let Some(path) = &self.tls_path {
            config.tls_path = Some(path.clone());
        }
        if let Some(timeout) = self.timeout {
            config.set_call_timeout(Duration::from_secs(timeout.get()));
        }
        if self.lazy {
            config.lazy_connect = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        server: SwapServerArgs,
    }

    #[test]
    fn test_unset_flags_keep_config() {
        let cli = TestCli::parse_from(["loopctl"]);
        let mut config = SwapClientConfig::default().with_address("from-file:1234");
        cli.server.apply(&mut config);
        assert_eq!(config, SwapClientConfig::default().with_address("from-file:1234"));
    }

    #[test]
    fn test_flags_override_config() {
        let cli = TestCli::parse_from([
            "loopctl",
            "--server.address",
            "localhost:11009",
            "--server.insecure",
            "--server.timeout",
            "5",
            "--server.lazy",
        ]);
        let mut config = SwapClientConfig::default();
        cli.server.apply(&mut config);

        assert_eq!(config.address, "localhost:11009");
        assert!(config.insecure);
        assert_eq!(config.call_timeout(), Duration::from_secs(5));
        assert!(config.lazy_connect);
    }

    #[test]
    fn test_zero_timeout_flag_rejected() {
        assert!(TestCli::try_parse_from(["loopctl", "--server.timeout", "0"]).is_err());
    }
}
