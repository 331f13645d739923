use core::fmt;
use core::str::FromStr;

use crate::{LengthError, ParseHexError};

/// Length of a swap hash in bytes.
pub const SWAP_HASH_LEN: usize = 32;

/// SHA-256 payment hash identifying a swap.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SwapHash([u8; SWAP_HASH_LEN]);

impl SwapHash {
    /// Wrap a 32-byte hash.
    #[inline]
    pub const fn new(bytes: [u8; SWAP_HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; SWAP_HASH_LEN] {
        &self.0
    }

    /// Copy the raw bytes into a vector, as sent on the wire.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl From<[u8; SWAP_HASH_LEN]> for SwapHash {
    fn from(bytes: [u8; SWAP_HASH_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for SwapHash {
    type Error = LengthError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; SWAP_HASH_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| LengthError {
                expected: SWAP_HASH_LEN,
                actual: bytes.len(),
            })
    }
}

impl FromStr for SwapHash {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        Ok(Self::try_from(bytes.as_slice())?)
    }
}

impl AsRef<[u8]> for SwapHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for SwapHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for SwapHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SwapHash({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_length() {
        assert!(SwapHash::try_from([7u8; 32].as_slice()).is_ok());

        let err = SwapHash::try_from([7u8; 31].as_slice()).unwrap_err();
        assert_eq!(
            err,
            LengthError {
                expected: 32,
                actual: 31
            }
        );
    }

    #[test]
    fn test_hex_display_and_parse() {
        let hash = SwapHash::new([0xab; 32]);
        let encoded = hash.to_string();
        assert_eq!(encoded.len(), 64);
        assert_eq!(encoded.parse::<SwapHash>().unwrap(), hash);
        assert!(matches!("zz".parse::<SwapHash>(), Err(ParseHexError::Hex(_))));
        assert!(matches!("abcd".parse::<SwapHash>(), Err(ParseHexError::Length(_))));
    }
}
