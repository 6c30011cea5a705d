use std::collections::HashSet;

use proptest::prelude::*;

use wordseed::sequence::{generate_words, SEQUENCE_LENGTH};
use wordseed::WordseedError;

/// Banks of 8 to 40 distinct lowercase words.
///
/// Distinctness keeps acceptance probability high enough that the
/// default attempt cap is never a factor for the empty-blacklist cases.
fn bank_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::hash_set("[a-z]{3,8}", 8..40)
        .prop_map(|words| words.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_words_satisfy_invariants(seed in any::<u32>(), bank in bank_strategy()) {
        let seq = generate_words(seed, &bank, &HashSet::new()).unwrap();
        let words = seq.words();
        prop_assert_eq!(words.len(), SEQUENCE_LENGTH);
        for (i, word) in words.iter().enumerate() {
            prop_assert!(bank.contains(word));
            for other in &words[i + 1..] {
                prop_assert_ne!(word, other);
            }
        }
    }

    #[test]
    fn generation_is_deterministic(seed in any::<u32>(), bank in bank_strategy()) {
        let first = generate_words(seed, &bank, &HashSet::new()).unwrap();
        let second = generate_words(seed, &bank, &HashSet::new()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn blacklisted_words_never_appear(seed in any::<u32>(), bank in bank_strategy()) {
        // Ban half the bank; at least four distinct words stay eligible.
        let blacklist: HashSet<String> = bank.iter().take(bank.len() / 2).cloned().collect();
        let seq = generate_words(seed, &bank, &blacklist).unwrap();
        for word in seq.words() {
            prop_assert!(!blacklist.contains(word));
        }
    }

    #[test]
    fn empty_bank_always_fails(seed in any::<u32>()) {
        let err = generate_words(seed, &[], &HashSet::new()).unwrap_err();
        prop_assert!(matches!(err, WordseedError::EmptyWordBank));
    }
}
