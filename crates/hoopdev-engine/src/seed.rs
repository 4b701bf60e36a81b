use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for deterministic rating development.
///
/// A 128-bit seed that initializes the random number generator driving
/// development runs. The same seed reproduces the same sequence of
/// baseline changes, growth events and per-rating scale factors, which
/// enables:
///
/// - Reproducible calibration runs
/// - Regression tests over whole careers
/// - Re-running one suspicious career in isolation
///
/// Serialized as a 32-character hex string.
///
/// # Example
///
/// ```
/// use hoopdev_engine::{DevelopmentSeed, LeagueContext, DevelopmentEngine, RatingProfile};
/// use rand::Rng as _;
///
/// let seed: DevelopmentSeed = rand::rng().random();
/// let engine = DevelopmentEngine::new(LeagueContext::default());
///
/// let mut a = RatingProfile::uniform(50);
/// let mut b = RatingProfile::uniform(50);
/// engine.develop_season(&mut a, 25, None, &mut seed.rng());
/// engine.develop_season(&mut b, 25, None, &mut seed.rng());
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DevelopmentSeed([u8; 16]);

impl DevelopmentSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Expands a 64-bit number into a full seed.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        Pcg32::seed_from_u64(value).random()
    }

    /// Creates the generator for this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg32 {
        Pcg32::from_seed(self.0)
    }
}

impl fmt::Display for DevelopmentSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl Serialize for DevelopmentSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DevelopmentSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    #[display("invalid hex: expected 32 characters, got {len}")]
    InvalidLength { len: usize },
    #[display("invalid hex: {input}")]
    InvalidDigit { input: String },
}

impl FromStr for DevelopmentSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseSeedError::InvalidDigit {
                input: s.to_owned(),
            });
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseSeedError::InvalidDigit {
            input: s.to_owned(),
        })?;
        Ok(Self(num.to_be_bytes()))
    }
}

/// Allows generating random seeds with `rng.random()`.
impl Distribution<DevelopmentSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DevelopmentSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        DevelopmentSeed(seed)
    }
}

#[cfg(test)]
mod tests {
    use rand::RngCore as _;

    use super::*;

    #[test]
    fn test_roundtrip_random_seed() {
        let seed: DevelopmentSeed = rand::rng().random();
        let serialized = serde_json::to_string(&seed).unwrap();
        let deserialized: DevelopmentSeed = serde_json::from_str(&serialized).unwrap();
        assert_eq!(seed, deserialized);
    }

    #[test]
    fn test_known_value_sequential_bytes() {
        let seed = DevelopmentSeed::from_bytes([
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
            0x32, 0x10,
        ]);
        let serialized = serde_json::to_string(&seed).unwrap();
        assert_eq!(serialized, "\"0123456789abcdeffedcba9876543210\"");
    }

    #[test]
    fn test_serializes_as_padded_display_string() {
        let mut bytes = [0; 16];
        bytes[15] = 0x07;
        let seed = DevelopmentSeed::from_bytes(bytes);
        let value = serde_json::to_value(seed).unwrap();
        assert_eq!(value, "00000000000000000000000000000007");
        assert_eq!(value, serde_json::Value::String(seed.to_string()));
    }

    #[test]
    fn test_rejects_wrong_length() {
        let result: Result<DevelopmentSeed, _> = serde_json::from_str("\"0123\"");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("expected 32 characters"));
    }

    #[test]
    fn test_rejects_non_hex() {
        let result: Result<DevelopmentSeed, _> =
            serde_json::from_str("\"zz23456789abcdeffedcba9876543210\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_matches_display() {
        let seed = DevelopmentSeed::from_u64(7);
        assert_eq!(seed.to_string().parse::<DevelopmentSeed>(), Ok(seed));
        assert_eq!(
            "abc".parse::<DevelopmentSeed>(),
            Err(ParseSeedError::InvalidLength { len: 3 })
        );
    }

    #[test]
    fn test_same_seed_same_stream() {
        let seed = DevelopmentSeed::from_u64(42);
        assert_eq!(seed, DevelopmentSeed::from_u64(42));
        assert_ne!(seed, DevelopmentSeed::from_u64(43));
        assert_eq!(seed.rng().next_u64(), seed.rng().next_u64());
    }
}
