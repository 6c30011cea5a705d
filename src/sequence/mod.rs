//! Word-quadruple selection by rejection sampling.
//!
//! Draws four indices from a seeded PRNG, maps each onto the word bank
//! by modulo, and accepts the quadruple only if all four words are
//! pairwise distinct and none is blacklisted. Rejected quadruples are
//! discarded wholesale; none of their draws is reused. The selection is
//! bit-compatible with the JavaScript daily word generator this crate
//! reimplements, including its fixed four-draw warm-up after seeding.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mt19937::{Int31Source, Mt19937};
use crate::WordseedError;

/// Number of words in every generated sequence.
pub const SEQUENCE_LENGTH: usize = 4;

/// Number of draws discarded immediately after seeding.
///
/// The reference generator burns four values before the first real
/// draw. Every seed's output depends on this offset, so it is part of
/// the reproducibility contract rather than a tunable.
pub const WARMUP_DRAWS: usize = 4;

/// Default rejection-loop cap before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 10_000;

/// Configuration for the rejection-sampling loop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Maximum loop iterations before failing with
    /// [`WordseedError::ExhaustedAttempts`].
    ///
    /// `None` removes the cap and restores the historical behavior:
    /// the call never returns if the bank and blacklist leave fewer
    /// than four eligible distinct words.
    pub max_attempts: Option<u64>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        SequenceConfig {
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

/// An ordered quadruple of distinct, non-blacklisted words.
///
/// Words appear in the order their positions were drawn. Serializes as
/// a plain four-element array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSequence([String; SEQUENCE_LENGTH]);

impl WordSequence {
    /// Borrow the words in draw order.
    pub fn words(&self) -> &[String; SEQUENCE_LENGTH] {
        &self.0
    }

    /// Consume the sequence, yielding the words in draw order.
    pub fn into_words(self) -> [String; SEQUENCE_LENGTH] {
        self.0
    }
}

impl fmt::Display for WordSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// Derive four distinct, non-blacklisted words from `seed`.
///
/// Seeds a fresh, call-local [`Mt19937`], discards [`WARMUP_DRAWS`]
/// values, then rejection-samples quadruples until one satisfies the
/// constraints. The output is fully determined by the inputs and stable
/// across runs and platforms.
///
/// Uses the default [`SequenceConfig`], which caps the loop at
/// [`DEFAULT_MAX_ATTEMPTS`] iterations.
///
/// # Arguments
/// * `seed` - 32-bit seed for the PRNG.
/// * `word_bank` - Candidate words, indexed by draw modulo length.
///   Duplicate entries are permitted and weight selection toward the
///   duplicated word; they are never deduplicated here.
/// * `blacklist` - Words that must not appear in the output.
///
/// # Returns
/// `Ok(WordSequence)` on success, [`WordseedError::EmptyWordBank`] for
/// an empty bank, or [`WordseedError::ExhaustedAttempts`] when the cap
/// is exceeded.
pub fn generate_words(
    seed: u32,
    word_bank: &[String],
    blacklist: &HashSet<String>,
) -> Result<WordSequence, WordseedError> {
    generate_words_with_config(seed, word_bank, blacklist, SequenceConfig::default())
}

/// Derive four words from `seed` with an explicit [`SequenceConfig`].
///
/// Identical to [`generate_words`] apart from the attempt cap.
///
/// # Arguments
/// * `seed` - 32-bit seed for the PRNG.
/// * `word_bank` - Candidate words, indexed by draw modulo length.
/// * `blacklist` - Words that must not appear in the output.
/// * `config` - Rejection-loop settings.
///
/// # Returns
/// `Ok(WordSequence)` on success, or an error as for [`generate_words`].
pub fn generate_words_with_config(
    seed: u32,
    word_bank: &[String],
    blacklist: &HashSet<String>,
    config: SequenceConfig,
) -> Result<WordSequence, WordseedError> {
    let mut rng = Mt19937::new(seed);
    generate_words_with_source(&mut rng, word_bank, blacklist, config)
}

/// Run the selection loop against a caller-supplied generator.
///
/// The warm-up discard happens here, so a freshly seeded source behaves
/// identically through every entry point. Substituting a source other
/// than [`Mt19937`] changes the words derived from every existing seed.
///
/// # Arguments
/// * `rng` - Freshly seeded 31-bit integer source.
/// * `word_bank` - Candidate words, indexed by draw modulo length.
/// * `blacklist` - Words that must not appear in the output.
/// * `config` - Rejection-loop settings.
///
/// # Returns
/// `Ok(WordSequence)` on success, or an error as for [`generate_words`].
pub fn generate_words_with_source<R: Int31Source>(
    rng: &mut R,
    word_bank: &[String],
    blacklist: &HashSet<String>,
    config: SequenceConfig,
) -> Result<WordSequence, WordseedError> {
    if word_bank.is_empty() {
        return Err(WordseedError::EmptyWordBank);
    }

    for _ in 0..WARMUP_DRAWS {
        rng.next_int31();
    }

    let mut attempts: u64 = 0;
    loop {
        if let Some(cap) = config.max_attempts {
            if attempts >= cap {
                return Err(WordseedError::ExhaustedAttempts { attempts });
            }
        }
        attempts += 1;

        let pick: [&String; SEQUENCE_LENGTH] =
            std::array::from_fn(|_| &word_bank[rng.next_int31() as usize % word_bank.len()]);

        if is_accepted(&pick, blacklist) {
            return Ok(WordSequence(pick.map(|word| word.clone())));
        }
    }
}

/// Accept a candidate quadruple only if all four words are pairwise
/// distinct and none is blacklisted.
fn is_accepted(pick: &[&String; SEQUENCE_LENGTH], blacklist: &HashSet<String>) -> bool {
    for i in 0..SEQUENCE_LENGTH {
        if blacklist.contains(pick[i]) {
            return false;
        }
        for j in (i + 1)..SEQUENCE_LENGTH {
            if pick[i] == pick[j] {
                return false;
            }
        }
    }
    true
}
