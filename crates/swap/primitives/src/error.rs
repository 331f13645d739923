//! Errors raised while constructing primitive values.

/// A byte string did not have the length its type requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid length: expected {expected} bytes, got {actual}")]
pub struct LengthError {
    /// Required length in bytes.
    pub expected: usize,
    /// Length that was supplied.
    pub actual: usize,
}

/// Error type for parsing a fixed-size byte value from hex.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseHexError {
    /// Input is not valid hex.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Input decodes to the wrong number of bytes.
    #[error(transparent)]
    Length(#[from] LengthError),
}

/// Error type for key parsing and validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KeyError {
    /// Input is not valid hex.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Input has the wrong number of bytes.
    #[error(transparent)]
    Length(#[from] LengthError),

    /// Input is 33 bytes but not a point on secp256k1.
    #[error("not a valid secp256k1 public key: {0}")]
    InvalidPoint(#[from] secp256k1::Error),
}
