//! Property-based tests for the DNA/RNA transforms

use biotools::core::{
    complement_base, is_valid_dna, is_valid_rna, reverse_complement, reverse_transcribe,
    transcribe,
};
use proptest::prelude::*;

/// Generate a random DNA sequence using standard bases
fn dna_sequence_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['A', 'T', 'G', 'C']), 0..100)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generate a random DNA sequence with mixed case
fn dna_mixed_case_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['A', 'T', 'G', 'C', 'a', 't', 'g', 'c']),
        0..100,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Generate a random RNA sequence with mixed case
fn rna_mixed_case_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['A', 'U', 'G', 'C', 'a', 'u', 'g', 'c']),
        0..100,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    /// For any DNA sequence, applying reverse complement twice returns the
    /// original sequence: reverse_complement(reverse_complement(seq)) == seq
    #[test]
    fn prop_revcomp_involution(seq in dna_sequence_strategy()) {
        let result = reverse_complement(&reverse_complement(&seq));
        prop_assert_eq!(result, seq, "reverse complement should be an involution");
    }

    /// Reverse complement preserves the case pattern of the input
    #[test]
    fn prop_revcomp_involution_mixed_case(seq in dna_mixed_case_strategy()) {
        let result = reverse_complement(&reverse_complement(&seq));
        prop_assert_eq!(result, seq, "reverse complement should preserve case");
    }

    /// Reverse complement preserves length
    #[test]
    fn prop_revcomp_preserves_length(seq in dna_mixed_case_strategy()) {
        let result = reverse_complement(&seq);
        prop_assert_eq!(result.len(), seq.len(), "reverse complement should preserve length");
    }

    /// Reverse complement of valid DNA is still valid DNA
    #[test]
    fn prop_revcomp_preserves_validity(seq in dna_mixed_case_strategy()) {
        let result = reverse_complement(&seq);
        prop_assert!(is_valid_dna(&result), "reverse complement should produce valid DNA");
    }

    /// Complement of complement is identity for the standard bases
    #[test]
    fn prop_complement_involution(base in prop::sample::select(vec![
        'A', 'T', 'G', 'C', 'a', 't', 'g', 'c'
    ])) {
        let result = complement_base(complement_base(base));
        prop_assert_eq!(result, base, "complement should be an involution");
    }

    /// Transcription followed by reverse transcription is the identity,
    /// case and content preserved
    #[test]
    fn prop_transcribe_round_trip(seq in dna_mixed_case_strategy()) {
        let result = reverse_transcribe(&transcribe(&seq));
        prop_assert_eq!(result, seq, "reverse transcription should invert transcription");
    }

    /// Transcription of valid DNA yields valid RNA
    #[test]
    fn prop_transcribe_changes_alphabet(seq in dna_mixed_case_strategy()) {
        let rna = transcribe(&seq);
        prop_assert!(is_valid_rna(&rna), "transcription should produce valid RNA");
    }

    /// Reverse transcription of valid RNA yields valid DNA
    #[test]
    fn prop_reverse_transcribe_changes_alphabet(seq in rna_mixed_case_strategy()) {
        let dna = reverse_transcribe(&seq);
        prop_assert!(is_valid_dna(&dna), "reverse transcription should produce valid DNA");
    }

    /// Validators tolerate embedded whitespace
    #[test]
    fn prop_validators_ignore_whitespace(seq in dna_mixed_case_strategy(), split in 0usize..100) {
        // The strategy is all-ASCII, so any split index is char-aligned
        let pos = split.min(seq.len());
        let spaced = format!("{}\n {}", &seq[..pos], &seq[pos..]);
        prop_assert!(is_valid_dna(&spaced), "whitespace should not invalidate DNA");
    }

    /// Generated DNA is valid DNA; the same text is valid RNA only without T
    #[test]
    fn prop_generated_dna_is_valid(seq in dna_mixed_case_strategy()) {
        prop_assert!(is_valid_dna(&seq));
        let has_t = seq.chars().any(|c| c == 'T' || c == 't');
        prop_assert_eq!(is_valid_rna(&seq), !has_t);
    }

    /// Empty sequence reverse complement is empty
    #[test]
    fn prop_revcomp_empty(_dummy in Just(())) {
        prop_assert_eq!(reverse_complement(""), "", "revcomp of empty should be empty");
    }
}

/// Additional edge case tests (not property-based)
#[cfg(test)]
mod edge_cases {
    use super::*;

    #[test]
    fn test_revcomp_known_sequences() {
        assert_eq!(reverse_complement("ATG"), "CAT");
        assert_eq!(reverse_complement("GAATTC"), "GAATTC"); // EcoRI site (palindrome)
        assert_eq!(reverse_complement("atgc"), "gcat");
    }

    #[test]
    fn test_revcomp_passthrough_characters() {
        // Characters outside the complement table survive, reversed
        assert_eq!(reverse_complement("AN-G"), "C-NT");
    }

    #[test]
    fn test_transcribe_known_sequences() {
        assert_eq!(transcribe("TTAGGC"), "UUAGGC");
        assert_eq!(reverse_transcribe("UUAGGC"), "TTAGGC");
    }
}
