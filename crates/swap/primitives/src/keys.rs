//! Compressed secp256k1 public keys.
//!
//! Two representations exist on purpose. [`PubKeyBytes`] only guarantees the
//! 33-byte length and is used for keys that are forwarded or stored without
//! being checked against the curve (the caller's own keys, quote payment
//! destinations). [`ServerKey`] can only be built from bytes that decode to a
//! valid curve point, and is what swap creation responses carry.

use core::fmt;
use core::str::FromStr;

use secp256k1::PublicKey;

use crate::{KeyError, LengthError};

/// Length of a compressed public key in bytes.
pub const PUBKEY_LEN: usize = 33;

/// 33 bytes shaped like a compressed public key, not validated against the curve.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PubKeyBytes([u8; PUBKEY_LEN]);

impl PubKeyBytes {
    /// Wrap 33 raw bytes.
    #[inline]
    pub const fn new(bytes: [u8; PUBKEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Decode from a hex string. The decoded value must be exactly 33 bytes.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s)?;
        Ok(Self::try_from(bytes.as_slice())?)
    }

    /// Borrow the raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; PUBKEY_LEN] {
        &self.0
    }

    /// Copy the raw bytes into a vector, as sent on the wire.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Check the bytes against the curve.
    pub fn validate(&self) -> Result<ServerKey, KeyError> {
        ServerKey::from_slice(&self.0)
    }
}

impl From<[u8; PUBKEY_LEN]> for PubKeyBytes {
    fn from(bytes: [u8; PUBKEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<PublicKey> for PubKeyBytes {
    fn from(key: PublicKey) -> Self {
        Self(key.serialize())
    }
}

impl TryFrom<&[u8]> for PubKeyBytes {
    type Error = LengthError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; PUBKEY_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| LengthError {
                expected: PUBKEY_LEN,
                actual: bytes.len(),
            })
    }
}

impl FromStr for PubKeyBytes {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for PubKeyBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for PubKeyBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for PubKeyBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PubKeyBytes({self})")
    }
}

/// A compressed public key returned by the swap server, known to be on the curve.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServerKey {
    key: PublicKey,
}

impl ServerKey {
    /// Parse and validate a compressed key.
    ///
    /// Anything other than 33 bytes is rejected before touching the curve,
    /// so uncompressed 65-byte encodings are refused as well.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != PUBKEY_LEN {
            return Err(LengthError {
                expected: PUBKEY_LEN,
                actual: bytes.len(),
            }
            .into());
        }
        let key = PublicKey::from_slice(bytes)?;
        Ok(Self { key })
    }

    /// The validated curve point.
    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.key
    }

    /// Compressed 33-byte serialization.
    #[inline]
    pub fn serialize(&self) -> [u8; PUBKEY_LEN] {
        self.key.serialize()
    }
}

impl From<PublicKey> for ServerKey {
    fn from(key: PublicKey) -> Self {
        Self { key }
    }
}

impl From<ServerKey> for PublicKey {
    fn from(key: ServerKey) -> Self {
        key.key
    }
}

impl fmt::Display for ServerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.serialize()))
    }
}

impl fmt::Debug for ServerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServerKey({self})")
    }
}
