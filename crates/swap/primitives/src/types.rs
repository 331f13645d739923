//! Negotiation results returned by the swap server.

use crate::{Amount, PubKeyBytes, ServerKey};

/// Amount bounds the server currently accepts for one swap direction.
///
/// The server is trusted to report `min_swap_amount <= max_swap_amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapTerms {
    /// Smallest swap the server accepts.
    pub min_swap_amount: Amount,
    /// Largest swap the server accepts.
    pub max_swap_amount: Amount,
}

/// Non-binding cost estimate for a loop out of a given amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOutQuote {
    /// Amount paid up front to the server.
    pub prepay_amount: Amount,
    /// Server fee for the swap.
    pub swap_fee: Amount,
    /// Timelock delta the server will use for the swap payment.
    pub cltv_delta: i32,
    /// Node key the swap payment is routed to. Not checked against the curve.
    pub swap_payment_dest: PubKeyBytes,
}

/// Non-binding cost estimate for a loop in of a given amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopInQuote {
    /// Server fee for the swap.
    pub swap_fee: Amount,
    /// Timelock delta for the on-chain HTLC.
    pub cltv_delta: i32,
}

/// Server side of a freshly created loop out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLoopOutResponse {
    /// Invoice paying the swap amount.
    pub swap_invoice: String,
    /// Invoice paying the prepayment.
    pub prepay_invoice: String,
    /// Key the server signs the HTLC with.
    pub sender_key: ServerKey,
    /// Block height at which the HTLC expires.
    pub expiry: i32,
}

/// Server side of a freshly created loop in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLoopInResponse {
    /// Key the server claims the HTLC with.
    pub receiver_key: ServerKey,
    /// Block height at which the HTLC expires.
    pub expiry: i32,
}
