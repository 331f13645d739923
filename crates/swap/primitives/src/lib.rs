//! Value types shared by the swap server client and the swap execution engine.
//!
//! Everything here is a plain value object: amounts, fixed-size hashes and
//! keys, and the terms / quotes / creation responses negotiated with a swap
//! server. Fixed-size byte contracts are enforced when a value is constructed,
//! so holding a [`SwapHash`] or [`PubKeyBytes`] means the length is already
//! correct.

mod amount;
mod error;
mod hash;
mod keys;
mod types;

pub use amount::Amount;
pub use error::{KeyError, LengthError, ParseHexError};
pub use hash::{SWAP_HASH_LEN, SwapHash};
pub use keys::{PUBKEY_LEN, PubKeyBytes, ServerKey};
pub use types::{LoopInQuote, LoopOutQuote, NewLoopInResponse, NewLoopOutResponse, SwapTerms};
