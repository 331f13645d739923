//! Per-call authentication hook.

use std::fmt;

use async_trait::async_trait;
use tonic::Status;
use tonic::metadata::errors::InvalidMetadataValue;
use tonic::metadata::{AsciiMetadataValue, MetadataMap};

/// Scheme used by [`TokenAuthenticator`] unless another one is given.
pub const DEFAULT_TOKEN_SCHEME: &str = "LSAT";

/// Attaches a credential to every outbound call.
///
/// Called once per call, before the request is sent and inside the call's
/// deadline. Implementations may do their own network I/O, for example to
/// acquire or refresh a token, and must be safe to call concurrently.
#[async_trait]
#[auto_impl::auto_impl(&, Arc, Box)]
pub trait Authenticator: Send + Sync {
    /// Add or refresh credentials in `metadata` for a call to `method`.
    ///
    /// An error aborts the call before anything is sent.
    async fn authenticate(
        &self,
        method: &'static str,
        metadata: &mut MetadataMap,
    ) -> Result<(), Status>;
}

/// Attaches nothing. For servers that do not require authentication.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthenticator;

#[async_trait]
impl Authenticator for NoAuthenticator {
    async fn authenticate(
        &self,
        _method: &'static str,
        _metadata: &mut MetadataMap,
    ) -> Result<(), Status> {
        Ok(())
    }
}

/// Attaches a fixed `authorization: <scheme> <token>` header.
#[derive(Clone)]
pub struct TokenAuthenticator {
    header: AsciiMetadataValue,
}

impl TokenAuthenticator {
    /// Metadata key the credential is stored under.
    pub const HEADER: &'static str = "authorization";

    /// Token sent with the [`DEFAULT_TOKEN_SCHEME`].
    pub fn new(token: &str) -> Result<Self, InvalidMetadataValue> {
        Self::with_scheme(DEFAULT_TOKEN_SCHEME, token)
    }

    /// Token sent with a custom scheme, e.g. `Bearer`.
    pub fn with_scheme(scheme: &str, token: &str) -> Result<Self, InvalidMetadataValue> {
        let mut header: AsciiMetadataValue = format!("{scheme} {token}").parse()?;
        header.set_sensitive(true);
        Ok(Self { header })
    }
}

impl fmt::Debug for TokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenAuthenticator").finish_non_exhaustive()
    }
}

#[async_trait]
impl Authenticator for TokenAuthenticator {
    async fn authenticate(
        &self,
        _method: &'static str,
        metadata: &mut MetadataMap,
    ) -> Result<(), Status> {
        metadata.insert(Self::HEADER, self.header.clone());
        Ok(())
    }
}
