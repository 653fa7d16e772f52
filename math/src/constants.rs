//! Well-known moduli for the prime fields used across the workspace.

/// The Mersenne prime 2^61 - 1.
pub const MERSENNE_61: u64 = (1 << 61) - 1;

/// 2^255 - 19 is written as `2^CURVE25519_EXPONENT - CURVE25519_EXCESS`.
pub const CURVE25519_EXPONENT: u32 = 255;
pub const CURVE25519_EXCESS: u32 = 19;
