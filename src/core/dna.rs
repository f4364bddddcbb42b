//! DNA sequence utilities
//!
//! Provides functions for DNA sequence manipulation including
//! reverse complement, transcription, and validation.

/// Complement a single DNA base
///
/// Supports the standard bases (A, T, G, C) in both cases. Any other
/// character is returned unchanged, so gaps and ambiguity codes pass
/// through a reverse complement untouched.
#[inline]
pub fn complement_base(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        'a' => 't',
        't' => 'a',
        'g' => 'c',
        'c' => 'g',
        _ => base,
    }
}

/// Compute the reverse complement of a DNA sequence
///
/// Reverses the character order and substitutes each base with its
/// Watson-Crick pair, preserving case per character.
///
/// # Examples
/// ```
/// use biotools::core::dna::reverse_complement;
///
/// assert_eq!(reverse_complement("ATGC"), "GCAT");
/// assert_eq!(reverse_complement("atgc"), "gcat");
/// assert_eq!(reverse_complement(""), "");
/// ```
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement_base).collect()
}

/// Transcribe DNA to RNA
///
/// Replaces every `T` with `U` (and `t` with `u`); all other characters
/// are unchanged and order is preserved.
///
/// # Examples
/// ```
/// use biotools::core::dna::transcribe;
///
/// assert_eq!(transcribe("ATGC"), "AUGC");
/// assert_eq!(transcribe("atgc"), "augc");
/// ```
pub fn transcribe(seq: &str) -> String {
    seq.chars()
        .map(|c| match c {
            'T' => 'U',
            't' => 'u',
            other => other,
        })
        .collect()
}

/// Check if a string is a valid DNA sequence
///
/// After removing whitespace, every character must be one of `ATCGatcg`.
/// Ambiguity codes are rejected; the empty string is valid.
///
/// # Examples
/// ```
/// use biotools::core::dna::is_valid_dna;
///
/// assert!(is_valid_dna("ATGC"));
/// assert!(is_valid_dna("at\ngc"));
/// assert!(!is_valid_dna("ATGCN"));
/// assert!(is_valid_dna(""));
/// ```
pub fn is_valid_dna(seq: &str) -> bool {
    seq.chars()
        .filter(|c| !c.is_whitespace())
        .all(|c| matches!(c, 'A' | 'T' | 'C' | 'G' | 'a' | 't' | 'c' | 'g'))
}
