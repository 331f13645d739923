//! Logging setup.

use clap::Args;
use eyre::Result;
use tracing_subscriber::EnvFilter;

/// Logging configuration.
#[derive(Debug, Args, Clone, Default)]
#[command(next_help_heading = "Logging")]
pub(crate) struct LogArgs {
    /// Silence all output except errors.
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,

    /// Verbose mode (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub(crate) verbosity: u8,

    /// Log filter directive (e.g., "loop_swap_client=trace,h2=info").
    #[arg(long = "log.filter", value_name = "DIRECTIVE", global = true)]
    pub(crate) filter: Option<String>,

    /// Use JSON format for log output.
    #[arg(long = "log.json", global = true)]
    pub(crate) json: bool,
}

impl LogArgs {
    /// Build the filter with the following precedence:
    /// 1. If `--quiet` is set, only errors are shown
    /// 2. Otherwise, start with `RUST_LOG` if set, or the level given by `-v`
    /// 3. Apply any custom filter from `--log.filter`
    pub(crate) fn env_filter(&self) -> EnvFilter {
        if self.quiet {
            return EnvFilter::new("error");
        }

        let base_level = match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let mut filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(base_level));

        if let Some(custom_filter) = &self.filter {
            for directive in custom_filter.split(',') {
                if let Ok(d) = directive.parse() {
                    filter = filter.add_directive(d);
                }
            }
        }

        filter
    }
}

/// Initialize the global subscriber. Logs go to stderr so command output stays clean.
pub(crate) fn init_logging(args: &LogArgs) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(args.env_filter())
        .with_writer(std::io::stderr);

    let result = if args.json {
        builder.json().try_init()
    } else {
        builder.without_time().try_init()
    };

    result.map_err(|e| eyre::eyre!(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_wins() {
        let args = LogArgs {
            quiet: true,
            verbosity: 3,
            filter: Some("loop_swap_client=trace".to_string()),
            json: false,
        };
        assert_eq!(args.env_filter().to_string(), "error");
    }

    #[test]
    fn test_custom_directives_added() {
        let args = LogArgs {
            filter: Some("loop_swap_client=trace,not a directive".to_string()),
            ..Default::default()
        };
        assert!(args.env_filter().to_string().contains("loop_swap_client=trace"));
    }
}
