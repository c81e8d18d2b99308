//! Wraparound primitives on 256-bit words
//!
//! Everything here is modulo 2^256: multiplication truncates like any
//! fixed-width unsigned type (this is not reduction by a prime), and the
//! rotation is a bijective swap of the two 128-bit halves. These must be
//! bit-exact; any deviation forks the proof-of-work against other
//! implementations.

use primitive_types::U256;


/// Rotation amount of the diffusion step, half the word width
pub const HALF_WIDTH: usize = 128;


/// Interprets 32 seed bytes as an unsigned integer,
/// least-significant byte first
pub fn from_le_slice(bytes: &[u8]) -> U256 {
    U256::from_little_endian(bytes)
}

/// (5 * x) mod 2^256
pub fn mul5(x: U256) -> U256 {
    x.overflowing_mul(U256::from(5u64)).0
}

/// Swaps the high and low 128-bit halves; no bits are lost and applying
/// it twice restores the original word
pub fn rotate_half(x: U256) -> U256 {
    (x >> HALF_WIDTH) | (x << HALF_WIDTH)
}

/// Number of set bits across all four limbs
pub fn popcount(x: &U256) -> u32 {
    x.0.iter().map(|limb| limb.count_ones()).sum()
}
