//! Figment-based configuration loading.
//!
//! Configuration priority (highest wins):
//! 1. CLI arguments (applied after Figment load)
//! 2. Config file (TOML)
//! 3. Environment variables (`LOOP_` prefix, `__` between sections)
//! 4. Defaults

use std::path::Path;

use eyre::{Result, WrapErr};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use loop_swap_client::SwapClientConfig;
use serde::{Deserialize, Serialize};

/// Complete loopctl configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct LoopctlConfig {
    /// Swap server connection.
    pub(crate) server: SwapClientConfig,
}

impl LoopctlConfig {
    /// Load configuration from defaults, environment, and config file.
    /// CLI overrides should be applied separately after loading.
    pub(crate) fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::figment(config_path)
            .extract()
            .wrap_err("Failed to load configuration")
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(LoopctlConfig::default()))
            .merge(Env::prefixed("LOOP_").split("__"));

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loop_swap_client::DEFAULT_SWAP_SERVER_ADDRESS;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        figment::Jail::expect_with(|_| {
            let config = LoopctlConfig::load(None).unwrap();
            assert_eq!(config.server.address, DEFAULT_SWAP_SERVER_ADDRESS);
            assert!(!config.server.insecure);
            Ok(())
        });
    }

    #[test]
    fn test_load_from_file() {
        figment::Jail::expect_with(|_| {
            let temp_dir = TempDir::new().unwrap();
            let config_path = temp_dir.path().join("loopctl.toml");
            fs::write(
                &config_path,
                r#"
[server]
address = "localhost:11009"
insecure = true
call_timeout_ms = 5000
"#,
            )
            .unwrap();

            let config = LoopctlConfig::load(Some(&config_path)).unwrap();
            assert_eq!(config.server.address, "localhost:11009");
            assert!(config.server.insecure);
            assert_eq!(config.server.call_timeout(), std::time::Duration::from_secs(5));
            assert!(!config.server.lazy_connect);
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_is_ignored() {
        figment::Jail::expect_with(|_| {
            let config = LoopctlConfig::load(Some(Path::new("does-not-exist.toml"))).unwrap();
            assert_eq!(config, LoopctlConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LOOP_SERVER__ADDRESS", "regtest:11010");
            jail.set_env("LOOP_SERVER__LAZY_CONNECT", "true");

            let config = LoopctlConfig::load(None).unwrap();
            assert_eq!(config.server.address, "regtest:11010");
            assert!(config.server.lazy_connect);
            Ok(())
        });
    }

    #[test]
    fn test_file_overrides_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LOOP_SERVER__ADDRESS", "from-env:1");
            jail.create_file("loopctl.toml", "[server]\naddress = \"from-file:2\"\n")?;

            let config = LoopctlConfig::load(Some(Path::new("loopctl.toml"))).unwrap();
            assert_eq!(config.server.address, "from-file:2");
            Ok(())
        });
    }
}
