//! Error types for swap server client operations.
//!
//! Every failure is reported to the caller; nothing is retried or defaulted
//! here. Variants carry typed data so callers can tell a timeout from a
//! server rejection from a malformed payload without string matching.

use std::io;
use std::path::PathBuf;

use loop_swap_primitives::KeyError;
use tonic::{Code, Status};

/// Error type for swap server client operations.
#[derive(Debug, thiserror::Error)]
pub enum SwapClientError {
    /// The channel to the swap server could not be set up.
    #[error("unable to connect to swap server at {address}: {source}")]
    ChannelEstablishment {
        /// Address that was dialed.
        address: String,
        /// Transport failure.
        #[source]
        source: tonic::transport::Error,
    },

    /// The pinned TLS certificate could not be read or parsed.
    #[error("unable to load TLS certificate {}: {source}", .path.display())]
    CertificateLoad {
        /// Path of the certificate file.
        path: PathBuf,
        /// Read or parse failure.
        #[source]
        source: io::Error,
    },

    /// The call ran past its deadline.
    #[error("{method} call exceeded its deadline")]
    DeadlineExceeded {
        /// RPC method name.
        method: &'static str,
    },

    /// The caller cancelled the call.
    #[error("{method} call canceled")]
    Canceled {
        /// RPC method name.
        method: &'static str,
    },

    /// The client was closed before or during the call.
    #[error("swap server client is closed")]
    ClientClosed,

    /// The authenticator refused to produce a credential.
    #[error("authentication for {method} failed: {status}")]
    Authentication {
        /// RPC method name.
        method: &'static str,
        /// Status returned by the authenticator.
        status: Status,
    },

    /// Transport or server-side application error, surfaced unmodified.
    #[error("{method} call failed: {status}")]
    RemoteCall {
        /// RPC method name.
        method: &'static str,
        /// Status returned by the server or transport.
        status: Status,
    },

    /// A byte field from the server was not valid hex.
    #[error("unable to decode {field}: {source}")]
    Decode {
        /// Wire field name.
        field: &'static str,
        /// Hex decoding failure.
        #[source]
        source: hex::FromHexError,
    },

    /// The quoted payment destination is not 33 bytes.
    #[error("invalid payment dest: expected 33 bytes, got {length}")]
    InvalidPaymentDestination {
        /// Decoded length.
        length: usize,
    },

    /// A key returned by the server is not a valid compressed secp256k1 key.
    #[error("invalid {field}: {source}")]
    InvalidServerKey {
        /// Wire field name.
        field: &'static str,
        /// Why the key was rejected.
        #[source]
        source: KeyError,
    },

    /// A swap amount of zero was requested.
    #[error("{method} requires a positive amount")]
    InvalidAmount {
        /// RPC method name.
        method: &'static str,
    },
}

impl SwapClientError {
    /// Map a status returned by the call to its error category.
    ///
    /// Deadline and cancellation statuses are reported the same way as their
    /// locally detected counterparts.
    pub(crate) fn from_status(method: &'static str, status: Status) -> Self {
        match status.code() {
            Code::DeadlineExceeded => Self::DeadlineExceeded { method },
            Code::Cancelled => Self::Canceled { method },
            _ => Self::RemoteCall { method, status },
        }
    }

    /// Whether retrying the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::DeadlineExceeded { .. } | Self::Canceled { .. } => true,
            Self::RemoteCall { status, .. } => matches!(
                status.code(),
                Code::Unavailable | Code::ResourceExhausted | Code::Aborted
            ),
            _ => false,
        }
    }

    /// The gRPC status, for errors that carry one.
    pub fn status(&self) -> Option<&Status> {
        match self {
            Self::RemoteCall { status, .. } | Self::Authentication { status, .. } => Some(status),
            _ => None,
        }
    }

    /// Short label for metrics.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::ChannelEstablishment { .. } => "channel",
            Self::CertificateLoad { .. } => "certificate",
            Self::DeadlineExceeded { .. } => "deadline_exceeded",
            Self::Canceled { .. } => "canceled",
            Self::ClientClosed => "closed",
            Self::Authentication { .. } => "authentication",
            Self::RemoteCall { .. } => "remote",
            Self::Decode { .. } => "decode",
            Self::InvalidPaymentDestination { .. } => "invalid_payment_dest",
            Self::InvalidServerKey { .. } => "invalid_server_key",
            Self::InvalidAmount { .. } => "invalid_amount",
        }
    }
}

/// Result type for swap server client operations.
pub type SwapClientResult<T> = Result<T, SwapClientError>;
