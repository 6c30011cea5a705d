//! Daily seed derivation from a fixed calendar epoch.
//!
//! The daily puzzle numbers its days from 2022-01-24; the seed for a
//! given date is the number of whole days elapsed since that epoch, so
//! every player derives the same words on the same day without any
//! coordination.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::sequence::{generate_words, WordSequence};
use crate::WordseedError;

/// Epoch date from which daily seeds are counted.
pub fn puzzle_epoch() -> NaiveDate {
    // 2022-01-24 is always a representable date.
    NaiveDate::from_ymd_opt(2022, 1, 24).expect("valid epoch date")
}

/// Seed for the puzzle dated `date`.
///
/// Counts whole days since [`puzzle_epoch`]. Dates before the epoch
/// produce a negative day count, which wraps through two's complement
/// into the 32-bit seed space (the same coercion the original
/// JavaScript applies with `>>> 0`).
///
/// # Arguments
/// * `date` - Calendar date of the puzzle.
///
/// # Returns
/// The 32-bit seed for that date.
pub fn seed_for_date(date: NaiveDate) -> u32 {
    let days = date.signed_duration_since(puzzle_epoch()).num_days();
    days as u32
}

/// Derive the word quadruple for the puzzle dated `date`.
///
/// Convenience wrapper over [`seed_for_date`] and [`generate_words`].
///
/// # Arguments
/// * `date` - Calendar date of the puzzle.
/// * `word_bank` - Candidate words.
/// * `blacklist` - Words that must not appear in the output.
///
/// # Returns
/// The date's `WordSequence`, or an error as for [`generate_words`].
pub fn words_for_date(
    date: NaiveDate,
    word_bank: &[String],
    blacklist: &HashSet<String>,
) -> Result<WordSequence, WordseedError> {
    generate_words(seed_for_date(date), word_bank, blacklist)
}
