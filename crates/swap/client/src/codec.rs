//! Conversions between wire messages and domain values.
//!
//! Decoding rejects malformed payloads: a successful RPC whose body fails
//! these checks is reported as an error, never defaulted.

use std::time::{SystemTime, UNIX_EPOCH};

use loop_swap_primitives::{
    Amount, LoopInQuote, LoopOutQuote, NewLoopInResponse, NewLoopOutResponse, PubKeyBytes,
    ServerKey, SwapTerms,
};
use tracing::warn;

use crate::proto::{
    ServerLoopInQuoteResponse, ServerLoopInResponse, ServerLoopInTerms, ServerLoopOutQuote,
    ServerLoopOutResponse, ServerLoopOutTerms,
};
use crate::{SwapClientError, SwapClientResult};

impl From<ServerLoopOutTerms> for SwapTerms {
    fn from(terms: ServerLoopOutTerms) -> Self {
        Self {
            min_swap_amount: Amount::from_sat(terms.min_swap_amount),
            max_swap_amount: Amount::from_sat(terms.max_swap_amount),
        }
    }
}

impl From<ServerLoopInTerms> for SwapTerms {
    fn from(terms: ServerLoopInTerms) -> Self {
        Self {
            min_swap_amount: Amount::from_sat(terms.min_swap_amount),
            max_swap_amount: Amount::from_sat(terms.max_swap_amount),
        }
    }
}

impl TryFrom<ServerLoopOutQuote> for LoopOutQuote {
    type Error = SwapClientError;

    fn try_from(quote: ServerLoopOutQuote) -> Result<Self, Self::Error> {
        Ok(Self {
            prepay_amount: Amount::from_sat(quote.prepay_amt),
            swap_fee: Amount::from_sat(quote.swap_fee),
            cltv_delta: quote.cltv_delta,
            swap_payment_dest: decode_payment_dest(&quote.swap_payment_dest)?,
        })
    }
}

impl From<ServerLoopInQuoteResponse> for LoopInQuote {
    fn from(quote: ServerLoopInQuoteResponse) -> Self {
        Self {
            swap_fee: Amount::from_sat(quote.swap_fee),
            cltv_delta: quote.cltv_delta,
        }
    }
}

impl TryFrom<ServerLoopOutResponse> for NewLoopOutResponse {
    type Error = SwapClientError;

    fn try_from(response: ServerLoopOutResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            sender_key: decode_server_key("sender_key", &response.sender_key)?,
            swap_invoice: response.swap_invoice,
            prepay_invoice: response.prepay_invoice,
            expiry: response.expiry,
        })
    }
}

impl TryFrom<ServerLoopInResponse> for NewLoopInResponse {
    type Error = SwapClientError;

    fn try_from(response: ServerLoopInResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            receiver_key: decode_server_key("receiver_key", &response.receiver_key)?,
            expiry: response.expiry,
        })
    }
}

/// Decode the hex payment destination of a loop out quote.
///
/// Only the length is checked; quotes are non-binding and the destination is
/// not validated as a curve point.
pub(crate) fn decode_payment_dest(dest: &str) -> SwapClientResult<PubKeyBytes> {
    let bytes = hex::decode(dest).map_err(|source| SwapClientError::Decode {
        field: "swap_payment_dest",
        source,
    })?;

    PubKeyBytes::try_from(bytes.as_slice()).map_err(|e| {
        warn!(length = e.actual, "server quoted invalid payment dest");
        SwapClientError::InvalidPaymentDestination { length: e.actual }
    })
}

/// Validate a key returned in a swap creation response.
pub(crate) fn decode_server_key(field: &'static str, bytes: &[u8]) -> SwapClientResult<ServerKey> {
    ServerKey::from_slice(bytes).map_err(|source| {
        warn!(field, length = bytes.len(), error = %source, "server returned invalid key");
        SwapClientError::InvalidServerKey { field, source }
    })
}

/// Unix seconds of `time`, rounded towards negative infinity.
pub(crate) fn unix_timestamp(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX),
        Err(before) => {
            let before = before.duration();
            let secs = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
            if before.subsec_nanos() > 0 {
                -secs - 1
            } else {
                -secs
            }
        }
    }
}
