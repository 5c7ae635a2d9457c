//! Tests for word counting, unique counting and weighted word lists

#[cfg(test)]
mod tests {
    use textcloud::statistics::frequency::{
        WeightedWord, unique_word_count, weighted_words, word_count,
    };
    use textcloud::text::filter::ExclusionFilter;
    use textcloud::text::tokenizer::{CaseMode, tokenize};

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| (*word).to_string()).collect()
    }

    // Tests the cat/mat sentence counts six words and five unique ones
    // Verified by counting repeated tokens as unique
    #[test]
    fn test_counts_for_repeated_word() {
        let tokens: Vec<String> = tokenize("The cat sat on the mat", CaseMode::Insensitive).collect();
        let filter = ExclusionFilter::empty();

        assert_eq!(word_count(&tokens, &filter), 6);
        assert_eq!(unique_word_count(&tokens, &filter), 5);
    }

    // Tests word count equals length for an empty filter and shrinks with exclusions
    // Verified by ignoring the filter in word_count
    #[test]
    fn test_word_count_bounds() {
        let sequences = [
            tokens(&[]),
            tokens(&["a"]),
            tokens(&["a", "b", "a", "c", "a"]),
            tokens(&["x", "x", "x"]),
        ];
        let filter = ExclusionFilter::new(["a"]);

        for sequence in &sequences {
            assert_eq!(word_count(sequence, &ExclusionFilter::empty()), sequence.len());
            assert!(word_count(sequence, &filter) <= sequence.len());
        }
        assert_eq!(word_count(&tokens(&["a", "b", "a", "c", "a"]), &filter), 2);
    }

    // Tests unique count never exceeds word count, with equality iff nothing repeats
    // Verified by counting every token as unique
    #[test]
    fn test_unique_count_bounds() {
        let filter = ExclusionFilter::new(["skip"]);
        let cases = [
            (tokens(&["a", "b", "c"]), true),
            (tokens(&["a", "b", "a"]), false),
            (tokens(&["a", "skip", "skip", "b"]), true),
            (tokens(&[]), true),
        ];

        for (sequence, all_distinct) in &cases {
            let total = word_count(sequence, &filter);
            let unique = unique_word_count(sequence, &filter);
            assert!(unique <= total);
            assert_eq!(unique == total, *all_distinct, "sequence {sequence:?}");
        }
    }

    // Tests filtered words are left out of unique counts
    // Verified by filtering only in word_count
    #[test]
    fn test_unique_count_respects_filter() {
        let sequence = tokens(&["the", "cat", "the", "dog"]);
        let filter = ExclusionFilter::new(["the"]);
        assert_eq!(unique_word_count(&sequence, &filter), 2);
    }

    // Tests filter entries match normalized tokens verbatim
    // Verified by folding case during filter lookups
    #[test]
    fn test_filter_matches_normalized_tokens_only() {
        let folded: Vec<String> = tokenize("The THE the", CaseMode::Insensitive).collect();
        let capitalized = ExclusionFilter::new(["The"]);
        let lowercase = ExclusionFilter::new(["the"]);

        assert_eq!(word_count(&folded, &capitalized), 3);
        assert_eq!(word_count(&folded, &lowercase), 0);
    }

    // Tests counting works on borrowed string slices too
    // Verified by restricting the functions to String tokens
    #[test]
    fn test_counts_accept_str_slices() {
        let sequence = ["a", "b", "a"];
        let filter = ExclusionFilter::empty();
        assert_eq!(word_count(&sequence, &filter), 3);
        assert_eq!(unique_word_count(&sequence, &filter), 2);
    }

    // Tests weighted words are ordered by weight, then alphabetically
    // Verified by sorting on weight alone with an unstable sort
    #[test]
    fn test_weighted_words_order() {
        let sequence = tokens(&["b", "a", "c", "a", "b", "a", "d"]);
        let weighted = weighted_words(&sequence, &ExclusionFilter::new(["d"]));

        assert_eq!(
            weighted,
            vec![
                WeightedWord::new("a", 3),
                WeightedWord::new("b", 2),
                WeightedWord::new("c", 1),
            ]
        );
    }

    // Tests weighted words of an empty or fully filtered sequence are empty
    // Verified by emitting zero-weight entries for filtered words
    #[test]
    fn test_weighted_words_empty() {
        let sequence = tokens(&["the", "the"]);
        assert!(weighted_words(&sequence, &ExclusionFilter::new(["the"])).is_empty());
        assert!(weighted_words(&tokens(&[]), &ExclusionFilter::empty()).is_empty());
    }
}
