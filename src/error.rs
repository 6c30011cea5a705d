/// Unified error type for word-sequence derivation.
///
/// Covers the two failure modes of the selection loop: an unusable
/// word bank, and a bank/blacklist combination that cannot produce a
/// valid quadruple within the configured attempt budget.
#[derive(Debug, thiserror::Error)]
pub enum WordseedError {
    #[error("word bank is empty")]
    EmptyWordBank,

    #[error("no valid word sequence found after {attempts} attempts")]
    ExhaustedAttempts { attempts: u64 },
}
