use core::fmt;
use core::str::FromStr;

/// An amount of bitcoin in satoshis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

impl Amount {
    /// Zero satoshis.
    pub const ZERO: Self = Self(0);

    /// Create an amount from a number of satoshis.
    #[inline]
    pub const fn from_sat(sat: u64) -> Self {
        Self(sat)
    }

    /// Number of satoshis.
    #[inline]
    pub const fn to_sat(self) -> u64 {
        self.0
    }

    /// Whether the amount is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for Amount {
    fn from(sat: u64) -> Self {
        Self(sat)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sat", self.0)
    }
}

impl FromStr for Amount {
    type Err = core::num::ParseIntError;

    /// Parses a plain satoshi count, with or without a trailing `sat`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_end_matches("sat").trim_end();
        digits.parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Amount::from_sat(100_000).to_string(), "100000 sat");
    }

    #[test]
    fn test_parse() {
        assert_eq!("250000".parse::<Amount>().unwrap(), Amount::from_sat(250_000));
        assert_eq!("42 sat".parse::<Amount>().unwrap(), Amount::from_sat(42));
        assert!("-1".parse::<Amount>().is_err());
        assert!("one".parse::<Amount>().is_err());
    }

    #[test]
    fn test_zero() {
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::from_sat(1).is_zero());
        assert_eq!(Amount::default(), Amount::ZERO);
    }
}
