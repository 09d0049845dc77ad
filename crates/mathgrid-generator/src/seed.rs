use std::{
    fmt::{self, Display},
    str::FromStr,
};

use mathgrid_core::DifficultyParams;
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that makes generation and carving reproducible.
///
/// Seeds are displayed and parsed as 64 hexadecimal digits.
///
/// # Examples
///
/// ```
/// use mathgrid_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()
///     .unwrap();
/// assert_eq!(seed.to_string().parse::<PuzzleSeed>(), Ok(seed));
/// assert!("xyz".parse::<PuzzleSeed>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Returns the raw bytes of the seed.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives an independent random stream for one purpose and parameter set.
    ///
    /// The same seed feeds both generation and carving; mixing a purpose tag
    /// and the parameters through SHA-256 keeps those streams unrelated.
    pub(crate) fn rng(&self, purpose: &str, params: &DifficultyParams) -> Pcg64 {
        let mut hasher = Sha256::new();
        hasher.update(b"mathgrid/");
        hasher.update(purpose.as_bytes());
        hasher.update(b"/");
        hasher.update(params_key(params));
        hasher.update(self.0);
        Pcg64::from_seed(hasher.finalize().into())
    }
}

/// Encodes the parameters as fixed-width little-endian fields.
///
/// The layout is part of the seed format: changing it changes every puzzle.
fn params_key(params: &DifficultyParams) -> Vec<u8> {
    let mut key = Vec::with_capacity(64);
    key.extend((params.operand_count as u64).to_le_bytes());
    key.extend((params.operators.len() as u64).to_le_bytes());
    for op in &params.operators {
        key.extend(u32::from(op.symbol()).to_le_bytes());
    }
    key.extend(params.operand_range.start().to_le_bytes());
    key.extend(params.operand_range.end().to_le_bytes());
    key.extend(params.max_result.to_le_bytes());
    key.push(u8::from(params.totals));
    key.extend(params.hole_ratio.to_bits().to_le_bytes());
    key
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when a seed string is not 64 hexadecimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string does not have 64 characters.
    #[display("seed must have 64 hex digits, got {len}")]
    InvalidLength {
        /// Length of the rejected input.
        len: usize,
    },
    /// A character is not a hexadecimal digit.
    #[display("invalid hex digit {ch:?} in seed")]
    InvalidDigit {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { len });
        }
        let mut bytes = [0; 32];
        let mut digits = s.chars().map(|ch| {
            ch.to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(ParseSeedError::InvalidDigit { ch })
        });
        for byte in &mut bytes {
            // Length was checked above, so both digits are present.
            let (Some(hi), Some(lo)) = (digits.next(), digits.next()) else {
                return Err(ParseSeedError::InvalidLength { len });
            };
            *byte = (hi? << 4) | lo?;
        }
        Ok(Self(bytes))
    }
}

impl From<[u8; 32]> for PuzzleSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}
