//! RPC stub for the `looprpc.SwapServer` service.
//!
//! [`SwapServerRpc`] is the seam between the negotiation client and the
//! transport: one method per unary RPC, in tonic's request/response types.
//! [`GrpcSwapServer`] is the production implementation over a tonic
//! [`Channel`].

use async_trait::async_trait;
use parking_lot::RwLock;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;
use tonic::{GrpcMethod, Request, Response, Status};

use crate::proto::{
    ServerLoopInQuoteRequest, ServerLoopInQuoteResponse, ServerLoopInRequest,
    ServerLoopInResponse, ServerLoopInTerms, ServerLoopInTermsRequest, ServerLoopOutQuote,
    ServerLoopOutQuoteRequest, ServerLoopOutRequest, ServerLoopOutResponse, ServerLoopOutTerms,
    ServerLoopOutTermsRequest,
};

/// Fully qualified gRPC service name.
pub const SERVICE_NAME: &str = "looprpc.SwapServer";

/// Method names of the swap server service.
pub mod method {
    pub const LOOP_OUT_TERMS: &str = "LoopOutTerms";
    pub const LOOP_OUT_QUOTE: &str = "LoopOutQuote";
    pub const LOOP_IN_TERMS: &str = "LoopInTerms";
    pub const LOOP_IN_QUOTE: &str = "LoopInQuote";
    pub const NEW_LOOP_OUT_SWAP: &str = "NewLoopOutSwap";
    pub const NEW_LOOP_IN_SWAP: &str = "NewLoopInSwap";
}

/// Unary RPCs exposed by a swap server.
///
/// Implementations must be safe to call concurrently.
#[async_trait]
#[auto_impl::auto_impl(&, Arc, Box)]
pub trait SwapServerRpc: Send + Sync {
    async fn loop_out_terms(
        &self,
        request: Request<ServerLoopOutTermsRequest>,
    ) -> Result<Response<ServerLoopOutTerms>, Status>;

    async fn loop_out_quote(
        &self,
        request: Request<ServerLoopOutQuoteRequest>,
    ) -> Result<Response<ServerLoopOutQuote>, Status>;

    async fn loop_in_terms(
        &self,
        request: Request<ServerLoopInTermsRequest>,
    ) -> Result<Response<ServerLoopInTerms>, Status>;

    async fn loop_in_quote(
        &self,
        request: Request<ServerLoopInQuoteRequest>,
    ) -> Result<Response<ServerLoopInQuoteResponse>, Status>;

    async fn new_loop_out_swap(
        &self,
        request: Request<ServerLoopOutRequest>,
    ) -> Result<Response<ServerLoopOutResponse>, Status>;

    async fn new_loop_in_swap(
        &self,
        request: Request<ServerLoopInRequest>,
    ) -> Result<Response<ServerLoopInResponse>, Status>;

    /// Release the underlying transport. Must be idempotent.
    fn close(&self) {}
}

/// [`SwapServerRpc`] over a tonic channel.
#[derive(Debug)]
pub struct GrpcSwapServer {
    inner: RwLock<Option<Grpc<Channel>>>,
}

impl GrpcSwapServer {
    /// Create a stub over an established channel.
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: RwLock::new(Some(Grpc::new(channel))),
        }
    }

    /// Whether [`close`](SwapServerRpc::close) has released the channel.
    pub fn is_closed(&self) -> bool {
        self.inner.read().is_none()
    }

    async fn unary<Req, Resp>(
        &self,
        mut request: Request<Req>,
        path: &'static str,
        method: &'static str,
    ) -> Result<Response<Resp>, Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        // Channel clones share the connection, so the lock is only held for the clone.
        let mut grpc = self
            .inner
            .read()
            .clone()
            .ok_or_else(|| Status::unavailable("swap server connection closed"))?;

        grpc.ready()
            .await
            .map_err(|e| Status::unknown(format!("service was not ready: {e}")))?;

        request
            .extensions_mut()
            .insert(GrpcMethod::new(SERVICE_NAME, method));

        grpc.unary(
            request,
            PathAndQuery::from_static(path),
            ProstCodec::default(),
        )
        .await
    }
}

#[async_trait]
impl SwapServerRpc for GrpcSwapServer {
    async fn loop_out_terms(
        &self,
        request: Request<ServerLoopOutTermsRequest>,
    ) -> Result<Response<ServerLoopOutTerms>, Status> {
        self.unary(
            request,
            "/looprpc.SwapServer/LoopOutTerms",
            method::LOOP_OUT_TERMS,
        )
        .await
    }

    async fn loop_out_quote(
        &self,
        request: Request<ServerLoopOutQuoteRequest>,
    ) -> Result<Response<ServerLoopOutQuote>, Status> {
        self.unary(
            request,
            "/looprpc.SwapServer/LoopOutQuote",
            method::LOOP_OUT_QUOTE,
        )
        .await
    }

    async fn loop_in_terms(
        &self,
        request: Request<ServerLoopInTermsRequest>,
    ) -> Result<Response<ServerLoopInTerms>, Status> {
        self.unary(
            request,
            "/looprpc.SwapServer/LoopInTerms",
            method::LOOP_IN_TERMS,
        )
        .await
    }

    async fn loop_in_quote(
        &self,
        request: Request<ServerLoopInQuoteRequest>,
    ) -> Result<Response<ServerLoopInQuoteResponse>, Status> {
        self.unary(
            request,
            "/looprpc.SwapServer/LoopInQuote",
            method::LOOP_IN_QUOTE,
        )
        .await
    }

    async fn new_loop_out_swap(
        &self,
        request: Request<ServerLoopOutRequest>,
    ) -> Result<Response<ServerLoopOutResponse>, Status> {
        self.unary(
            request,
            "/looprpc.SwapServer/NewLoopOutSwap",
            method::NEW_LOOP_OUT_SWAP,
        )
        .await
    }

    async fn new_loop_in_swap(
        &self,
        request: Request<ServerLoopInRequest>,
    ) -> Result<Response<ServerLoopInResponse>, Status> {
        self.unary(
            request,
            "/looprpc.SwapServer/NewLoopInSwap",
            method::NEW_LOOP_IN_SWAP,
        )
        .await
    }

    fn close(&self) {
        self.inner.write().take();
    }
}
