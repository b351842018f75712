//! Conversions between `U256` and byte or word arrays
//!
//! Arrays of bytes and words are ordered most significant first unless
//! the method name says otherwise. These conversions support
//! serialization and interoperability with APIs that carry 256-bit
//! values as raw bytes.

use crate::primitives::U256;

impl U256 {
    /// Encodes the value as 32 big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];

        out[..16].copy_from_slice(&self.upper.to_be_bytes());
        out[16..].copy_from_slice(&self.lower.to_be_bytes());

        out
    }

    /// Encodes the value as 32 little-endian bytes.
    pub fn to_le_bytes(&self) -> [u8; 32] {
        let mut out = self.to_be_bytes();
        out.reverse();
        out
    }

    /// Decodes 32 big-endian bytes.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut upper = [0u8; 16];
        let mut lower = [0u8; 16];

        upper.copy_from_slice(&bytes[..16]);
        lower.copy_from_slice(&bytes[16..]);

        U256::from_limbs(u128::from_be_bytes(upper), u128::from_be_bytes(lower))
    }

    /// Decodes 32 little-endian bytes.
    pub fn from_le_bytes(mut bytes: [u8; 32]) -> Self {
        bytes.reverse();
        U256::from_be_bytes(bytes)
    }
}

/// Converts a `U256` into 32 big-endian bytes.
impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.to_be_bytes()
    }
}

/// Interprets 32 bytes as a big-endian 256-bit value.
impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        U256::from_be_bytes(value)
    }
}

/// Splits a `U256` into four 64-bit words, most significant first.
impl From<U256> for [u64; 4] {
    fn from(value: U256) -> Self {
        [
            (value.upper >> 64) as u64,
            value.upper as u64,
            (value.lower >> 64) as u64,
            value.lower as u64,
        ]
    }
}

/// Builds a `U256` from four 64-bit words, most significant first.
impl From<[u64; 4]> for U256 {
    fn from(value: [u64; 4]) -> Self {
        U256::from_quarters(value[0], value[1], value[2], value[3])
    }
}

/// Splits a `U256` into `[upper, lower]`.
impl From<U256> for [u128; 2] {
    fn from(value: U256) -> Self {
        [value.upper, value.lower]
    }
}

/// Builds a `U256` from `[upper, lower]`.
impl From<[u128; 2]> for U256 {
    fn from(value: [u128; 2]) -> Self {
        U256::from_limbs(value[0], value[1])
    }
}
