//! Command-line interface and command execution.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use loop_swap_client::primitives::Amount;
use loop_swap_client::{
    Authenticator, CallContext, NoAuthenticator, SwapNegotiator, SwapServerArgs,
    SwapServerClient, TokenAuthenticator,
};
use tracing::{info, warn};

use crate::config::LoopctlConfig;
use crate::logging::LogArgs;

/// Query a Loop swap server for terms and quotes.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Logging configuration.
    #[command(flatten)]
    pub(crate) logs: LogArgs,

    /// Swap server connection overrides.
    #[command(flatten)]
    pub(crate) server: SwapServerArgs,

    /// Path to a TOML configuration file.
    #[arg(long, short = 'c', value_name = "PATH", env = "LOOP_CONFIG")]
    pub(crate) config: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub(crate) command: Commands,
}

/// loopctl commands.
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Show loop out and loop in amount bounds.
    Terms,

    /// Quote a loop out (off-chain to on-chain).
    OutQuote {
        /// Swap amount in satoshis.
        #[arg(long)]
        amt: Amount,

        /// Latest HTLC publication time, as unix seconds. Defaults to now.
        #[arg(long, value_name = "UNIX")]
        deadline: Option<u64>,
    },

    /// Quote a loop in (on-chain to off-chain).
    InQuote {
        /// Swap amount in satoshis.
        #[arg(long)]
        amt: Amount,
    },
}

impl Commands {
    /// Run the command against `client`, writing the result to `out`.
    pub(crate) async fn execute<N: SwapNegotiator>(
        &self,
        client: &N,
        ctx: &CallContext,
        out: &mut impl Write,
    ) -> Result<()> {
        match self {
            Self::Terms => {
                let loop_out = client.loop_out_terms(ctx).await?;
                let loop_in = client.loop_in_terms(ctx).await?;
                writeln!(
                    out,
                    "loop out: min {}, max {}",
                    loop_out.min_swap_amount, loop_out.max_swap_amount
                )?;
                writeln!(
                    out,
                    "loop in:  min {}, max {}",
                    loop_in.min_swap_amount, loop_in.max_swap_amount
                )?;
            }
            Self::OutQuote { amt, deadline } => {
                let deadline = deadline
                    .map(|secs| UNIX_EPOCH + Duration::from_secs(secs))
                    .unwrap_or_else(SystemTime::now);
                let quote = client.loop_out_quote(ctx, *amt, deadline).await?;
                writeln!(out, "swap fee:     {}", quote.swap_fee)?;
                writeln!(out, "prepay:       {}", quote.prepay_amount)?;
                writeln!(out, "cltv delta:   {}", quote.cltv_delta)?;
                writeln!(out, "payment dest: {}", quote.swap_payment_dest)?;
            }
            Self::InQuote { amt } => {
                let quote = client.loop_in_quote(ctx, *amt).await?;
                writeln!(out, "swap fee:   {}", quote.swap_fee)?;
                writeln!(out, "cltv delta: {}", quote.cltv_delta)?;
            }
        }
        Ok(())
    }
}

impl Cli {
    /// Load configuration, connect and run the selected command.
    ///
    /// Ctrl-C cancels the in-flight call.
    pub(crate) async fn run(self) -> Result<()> {
        let mut config = LoopctlConfig::load(self.config.as_deref())?;
        self.server.apply(&mut config.server);

        let authenticator: Arc<dyn Authenticator> = match &self.server.token {
            Some(token) => {
                Arc::new(TokenAuthenticator::new(token).wrap_err("Invalid swap server token")?)
            }
            None => Arc::new(NoAuthenticator),
        };

        info!(address = %config.server.address, mode = %config.server.transport_mode(), "connecting");
        let client = SwapServerClient::connect(&config.server, authenticator)
            .await
            .wrap_err("Failed to connect to swap server")?;

        let (ctx, canceller) = CallContext::background().with_cancel();
        let interrupt = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupted, cancelling call");
                canceller.cancel();
            }
        });

        let result = self
            .command
            .execute(&client, &ctx, &mut std::io::stdout())
            .await;

        interrupt.abort();
        client.close();
        result
    }
}
