//! Swap negotiation client.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use loop_swap_primitives::{
    Amount, LoopInQuote, LoopOutQuote, NewLoopInResponse, NewLoopOutResponse, PubKeyBytes,
    SwapHash, SwapTerms,
};
use tracing::{debug, info};

use crate::call::CallWrapper;
use crate::codec::unix_timestamp;
use crate::proto::{
    ServerLoopInQuoteRequest, ServerLoopInRequest, ServerLoopInTermsRequest,
    ServerLoopOutQuoteRequest, ServerLoopOutRequest, ServerLoopOutTermsRequest,
};
use crate::{
    Authenticator, CallContext, GrpcSwapServer, SwapClientConfig, SwapClientError,
    SwapClientResult, SwapServerRpc, connect_channel, method,
};

/// Negotiation surface of a swap server, as seen by the swap execution engine.
///
/// Every operation is an independent request/response exchange bounded by
/// the caller's [`CallContext`]. Nothing is retried internally; use
/// [`SwapClientError::is_retryable`] to decide whether to try again.
#[async_trait]
#[auto_impl::auto_impl(&, Arc, Box)]
pub trait SwapNegotiator: Send + Sync {
    /// Current loop out amount bounds.
    async fn loop_out_terms(&self, ctx: &CallContext) -> SwapClientResult<SwapTerms>;

    /// Quote a loop out of `amount` whose on-chain HTLC may be published as
    /// late as `swap_publication_deadline`.
    async fn loop_out_quote(
        &self,
        ctx: &CallContext,
        amount: Amount,
        swap_publication_deadline: SystemTime,
    ) -> SwapClientResult<LoopOutQuote>;

    /// Current loop in amount bounds.
    async fn loop_in_terms(&self, ctx: &CallContext) -> SwapClientResult<SwapTerms>;

    /// Quote a loop in of `amount`.
    async fn loop_in_quote(&self, ctx: &CallContext, amount: Amount)
    -> SwapClientResult<LoopInQuote>;

    /// Register a loop out with the server.
    ///
    /// `receiver_key` is the caller's own key and is sent as-is. The server's
    /// sender key must be a valid compressed secp256k1 key, otherwise the call
    /// fails with [`SwapClientError::InvalidServerKey`].
    async fn new_loop_out_swap(
        &self,
        ctx: &CallContext,
        swap_hash: SwapHash,
        amount: Amount,
        receiver_key: PubKeyBytes,
        swap_publication_deadline: SystemTime,
    ) -> SwapClientResult<NewLoopOutResponse>;

    /// Register a loop in with the server.
    ///
    /// `swap_invoice` is forwarded unmodified. The server's receiver key is
    /// validated like the loop out sender key.
    async fn new_loop_in_swap(
        &self,
        ctx: &CallContext,
        swap_hash: SwapHash,
        amount: Amount,
        sender_key: PubKeyBytes,
        swap_invoice: &str,
    ) -> SwapClientResult<NewLoopInResponse>;

    /// Release the connection. Idempotent; in-flight calls fail with
    /// [`SwapClientError::ClientClosed`].
    fn close(&self);
}

/// [`SwapNegotiator`] backed by a [`SwapServerRpc`] stub, a gRPC channel by default.
pub struct SwapServerClient<R = GrpcSwapServer> {
    rpc: R,
    calls: CallWrapper,
}

impl SwapServerClient {
    /// Set up the channel described by `config` and wrap it in a client.
    pub async fn connect(
        config: &SwapClientConfig,
        authenticator: Arc<dyn Authenticator>,
    ) -> SwapClientResult<Self> {
        let channel = connect_channel(config).await?;
        Ok(Self::new(
            GrpcSwapServer::new(channel),
            authenticator,
            config.call_timeout(),
        ))
    }
}

impl<R: SwapServerRpc> SwapServerClient<R> {
    /// Wrap an existing stub.
    pub fn new(rpc: R, authenticator: Arc<dyn Authenticator>, call_timeout: Duration) -> Self {
        Self {
            rpc,
            calls: CallWrapper::new(authenticator, call_timeout),
        }
    }

    /// The underlying stub.
    pub fn rpc(&self) -> &R {
        &self.rpc
    }

    /// Upper bound applied to every call.
    pub fn call_timeout(&self) -> Duration {
        self.calls.call_timeout()
    }

    /// Whether [`close`](SwapNegotiator::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.calls.is_closed()
    }
}

impl<R> fmt::Debug for SwapServerClient<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwapServerClient")
            .field("call_timeout", &self.calls.call_timeout())
            .field("closed", &self.calls.is_closed())
            .finish_non_exhaustive()
    }
}

fn ensure_positive(method: &'static str, amount: Amount) -> SwapClientResult<()> {
    if amount.is_zero() {
        return Err(SwapClientError::InvalidAmount { method });
    }
    Ok(())
}

#[async_trait]
impl<R: SwapServerRpc> SwapNegotiator for SwapServerClient<R> {
    async fn loop_out_terms(&self, ctx: &CallContext) -> SwapClientResult<SwapTerms> {
        let terms = self
            .calls
            .call(
                ctx,
                method::LOOP_OUT_TERMS,
                ServerLoopOutTermsRequest {},
                |request| self.rpc.loop_out_terms(request),
            )
            .await?;

        Ok(terms.into())
    }

    async fn loop_out_quote(
        &self,
        ctx: &CallContext,
        amount: Amount,
        swap_publication_deadline: SystemTime,
    ) -> SwapClientResult<LoopOutQuote> {
        ensure_positive(method::LOOP_OUT_QUOTE, amount)?;

        let request = ServerLoopOutQuoteRequest {
            amt: amount.to_sat(),
            swap_publication_deadline: unix_timestamp(swap_publication_deadline),
        };
        let quote = self
            .calls
            .call(ctx, method::LOOP_OUT_QUOTE, request, |request| {
                self.rpc.loop_out_quote(request)
            })
            .await?;

        quote.try_into()
    }

    async fn loop_in_terms(&self, ctx: &CallContext) -> SwapClientResult<SwapTerms> {
        let terms = self
            .calls
            .call(
                ctx,
                method::LOOP_IN_TERMS,
                ServerLoopInTermsRequest {},
                |request| self.rpc.loop_in_terms(request),
            )
            .await?;

        Ok(terms.into())
    }

    async fn loop_in_quote(
        &self,
        ctx: &CallContext,
        amount: Amount,
    ) -> SwapClientResult<LoopInQuote> {
        ensure_positive(method::LOOP_IN_QUOTE, amount)?;

        let request = ServerLoopInQuoteRequest {
            amt: amount.to_sat(),
        };
        let quote = self
            .calls
            .call(ctx, method::LOOP_IN_QUOTE, request, |request| {
                self.rpc.loop_in_quote(request)
            })
            .await?;

        Ok(quote.into())
    }

    async fn new_loop_out_swap(
        &self,
        ctx: &CallContext,
        swap_hash: SwapHash,
        amount: Amount,
        receiver_key: PubKeyBytes,
        swap_publication_deadline: SystemTime,
    ) -> SwapClientResult<NewLoopOutResponse> {
        ensure_positive(method::NEW_LOOP_OUT_SWAP, amount)?;

        debug!(%swap_hash, %amount, "requesting loop out swap");
        let request = ServerLoopOutRequest {
            receiver_key: receiver_key.to_vec(),
            swap_hash: swap_hash.to_vec(),
            amt: amount.to_sat(),
            swap_publication_deadline: unix_timestamp(swap_publication_deadline),
        };
        let response = self
            .calls
            .call(ctx, method::NEW_LOOP_OUT_SWAP, request, |request| {
                self.rpc.new_loop_out_swap(request)
            })
            .await?;

        response.try_into()
    }

    async fn new_loop_in_swap(
        &self,
        ctx: &CallContext,
        swap_hash: SwapHash,
        amount: Amount,
        sender_key: PubKeyBytes,
        swap_invoice: &str,
    ) -> SwapClientResult<NewLoopInResponse> {
        ensure_positive(method::NEW_LOOP_IN_SWAP, amount)?;

        debug!(%swap_hash, %amount, "requesting loop in swap");
        let request = ServerLoopInRequest {
            sender_key: sender_key.to_vec(),
            swap_hash: swap_hash.to_vec(),
            amt: amount.to_sat(),
            swap_invoice: swap_invoice.to_owned(),
        };
        let response = self
            .calls
            .call(ctx, method::NEW_LOOP_IN_SWAP, request, |request| {
                self.rpc.new_loop_in_swap(request)
            })
            .await?;

        response.try_into()
    }

    fn close(&self) {
        if self.calls.close() {
            info!("closing swap server client");
            self.rpc.close();
        }
    }
}
