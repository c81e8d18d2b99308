//! FiveSwap score evaluation
//!
//! A seed hash is diffused through a chain of 10000 unsigned 256-bit
//! values, each derived from its predecessor alone, then the chain is
//! folded front-against-back and the set bits of the folded values are
//! counted. The count is the mining score.
//!
//! The constants below are protocol parameters; changing any of them
//! changes every score and forks the proof-of-work.

mod u256;

use primitive_types::U256;

use hash::HASH_LEN;


/// Width of a chain element in bits
pub const WIDTH: usize = 256;

/// Number of elements in the diffusion chain
pub const CHAIN_LEN: usize = 10_000;

/// Number of folded pairs counted for the score
pub const FOLD_LEN: usize = CHAIN_LEN / 2;

/// Highest score reachable; every bit of every folded value set
pub const MAX_SCORE: Score = (FOLD_LEN * WIDTH) as Score;


/// The mining score; compared against a difficulty target by the caller
pub type Score = u32;


/// A malformed seed is rejected, never truncated or padded; a score for
/// bytes the block hash never contained would validate against nothing
#[derive(Debug, PartialEq, Eq)]
pub enum EvalError {
    InvalidInputLength,
}


/// Evaluates FiveSwap scores of block hashes
///
/// Owns the working vector of the diffusion chain, so repeated calls
/// (one per nonce in a mining loop) reuse the allocation. The vector is
/// fully overwritten on every call; no state leaks between seeds.
///
/// One `Evaluator` per thread; a single evaluation is synchronous,
/// straight-line work with no I/O.
pub struct Evaluator {
    x: Vec<U256>,
}

impl Evaluator {

    pub fn new() -> Evaluator {
        Evaluator {
            x: vec![U256::zero(); CHAIN_LEN],
        }
    }

    /// Computes the score of a 32-byte block hash, consumed
    /// least-significant-byte-first
    pub fn evaluate(&mut self, seed: &[u8]) -> Result<Score, EvalError> {

        if seed.len() != HASH_LEN {
            return Err(EvalError::InvalidInputLength);
        }

        self.x[0] = u256::from_le_slice(seed);

        for i in 1..CHAIN_LEN {
            self.x[i] = u256::rotate_half(u256::mul5(self.x[i - 1]));
        }

        let mut score: Score = 0;
        for idx in 0..FOLD_LEN {
            let y = self.x[idx]
                .overflowing_add(self.x[CHAIN_LEN - 1 - idx])
                .0;
            score += u256::popcount(&y);
        }

        trace!("seed evaluated; score {} of {}", score, MAX_SCORE);
        Ok(score)
    }
}


/// One-shot evaluation over a freshly allocated working vector
pub fn evaluate(seed: &[u8]) -> Result<Score, EvalError> {
    Evaluator::new().evaluate(seed)
}
