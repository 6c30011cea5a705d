//! Deterministic derivation of word quadruples from numeric seeds.
//!
//! This crate provides the building blocks for reproducible word selection:
//! - MT19937 reference PRNG with the 31-bit output convention
//! - Rejection-sampling selection of four distinct, non-blacklisted words
//! - Daily seed derivation from a fixed calendar epoch
//!
//! For a fixed seed, word bank, and blacklist the output is bit-for-bit
//! reproducible across runs and platforms, which makes the derived words
//! usable as shareable identifiers and daily puzzle answers.

pub mod daily;
pub mod mt19937;
pub mod sequence;

mod error;
pub use error::WordseedError;

pub use mt19937::{Int31Source, Mt19937};
pub use sequence::{generate_words, SequenceConfig, WordSequence};
