//! Client side of the Loop swap server protocol.
//!
//! The client negotiates swap parameters with a remote swap server over gRPC:
//! it looks up terms and quotes for both swap directions and performs the
//! creation handshake for loop out and loop in swaps.
//!
//! Every call goes through the same path:
//!
//! 1. An [`Authenticator`] attaches a credential to the request metadata.
//! 2. The call is bounded by the stricter of the caller's [`CallContext`]
//!    deadline and the configured call timeout, and aborts promptly on
//!    cancellation or [`SwapNegotiator::close`].
//! 3. The response is decoded into [`loop_swap_primitives`] values. Server
//!    keys in creation responses are validated against secp256k1 before they
//!    are handed to the caller.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use loop_swap_client::{CallContext, NoAuthenticator, SwapClientConfig, SwapNegotiator, SwapServerClient};
//!
//! let config = SwapClientConfig::default().with_address("localhost:11009").with_insecure(true);
//! let client = SwapServerClient::connect(&config, Arc::new(NoAuthenticator)).await?;
//! let terms = client.loop_out_terms(&CallContext::background()).await?;
//! client.close();
//! ```

mod auth;
mod call;
mod client;
mod codec;
mod config;
mod context;
mod error;
pub mod proto;
mod rpc;
mod transport;

#[cfg(feature = "cli")]
mod args;

pub use auth::{Authenticator, DEFAULT_TOKEN_SCHEME, NoAuthenticator, TokenAuthenticator};
pub use client::{SwapNegotiator, SwapServerClient};
pub use config::{DEFAULT_CALL_TIMEOUT_MS, DEFAULT_SWAP_SERVER_ADDRESS, SwapClientConfig};
pub use context::{CallContext, Canceller};
pub use error::{SwapClientError, SwapClientResult};
pub use rpc::{GrpcSwapServer, SERVICE_NAME, SwapServerRpc, method};
pub use transport::{TransportMode, connect_channel};

#[cfg(feature = "cli")]
pub use args::SwapServerArgs;

pub use loop_swap_primitives as primitives;
