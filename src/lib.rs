//!
//! FiveSwap proof-of-work evaluation kernel
//!
//! Turns a 256-bit block hash into an integer mining score:
//!
//! * the hash seeds the first element of a 10000-element vector of
//!   unsigned 256-bit integers
//! * every further element is its predecessor multiplied by 5 (mod 2^256)
//!   and rotated by half the word width
//! * the two halves of the vector are folded pairwise by wraparound
//!   addition and the set bits of the folded values are counted
//!
//! The score is compared against a difficulty target by the caller; this
//! crate deliberately contains no miner loop, block templates, difficulty
//! logic or I/O.
//!
//! Seed bytes are consumed least-significant-first, the order the
//! reference kernel imports hashes with. All arithmetic on vector elements
//! is modulo 2^256; overflow is silent wraparound, never an error.
//!
//! See [Evaluator](struct.Evaluator.html) for the reusable entry point.


#[macro_use]
extern crate log;
extern crate primitive_types;

#[cfg(test)]
extern crate rand;


mod hash;
mod pow;

pub use hash::{Hash, HASH_LEN, hash_from_slice, hash_from_hex, from_hex, to_hex};

pub use pow::{evaluate, Evaluator, EvalError, Score};
pub use pow::{WIDTH, CHAIN_LEN, MAX_SCORE};
