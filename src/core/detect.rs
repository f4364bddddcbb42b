//! Sequence type detection
//!
//! Classifies a raw string as DNA, RNA, protein, or unknown. Detection is a
//! pure function of the uppercased, whitespace-stripped content: case and
//! embedded whitespace never change the declared type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::text::remove_whitespace;

/// Amino acids that cannot appear in a nucleotide sequence.
///
/// Some of these letters (H, K, M, ...) double as IUPAC ambiguity codes for
/// nucleic acids; any occurrence still forces a protein classification.
const PROTEIN_ONLY: &[char] = &[
    'E', 'F', 'H', 'I', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'V', 'W', 'Y',
];

/// The detected alphabet of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceType {
    Dna,
    Rna,
    Protein,
    Unknown,
}

impl SequenceType {
    /// Lowercase identifier, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            SequenceType::Dna => "dna",
            SequenceType::Rna => "rna",
            SequenceType::Protein => "protein",
            SequenceType::Unknown => "unknown",
        }
    }

    /// True for DNA and RNA
    pub fn is_nucleic(&self) -> bool {
        matches!(self, SequenceType::Dna | SequenceType::Rna)
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the type of a sequence
///
/// Checks run in a fixed precedence order on the uppercased,
/// whitespace-removed copy of the input:
///
/// 1. empty -> unknown
/// 2. any protein-only amino acid -> protein
/// 3. contains U without T -> RNA
/// 4. contains T without U -> DNA
/// 5. only A/C/G/T -> DNA
/// 6. otherwise unknown
///
/// # Examples
/// ```
/// use biotools::core::detect::{detect_sequence_type, SequenceType};
///
/// assert_eq!(detect_sequence_type("ACGT"), SequenceType::Dna);
/// assert_eq!(detect_sequence_type("ACGU"), SequenceType::Rna);
/// assert_eq!(detect_sequence_type("EFGH"), SequenceType::Protein);
/// assert_eq!(detect_sequence_type(""), SequenceType::Unknown);
/// ```
pub fn detect_sequence_type(sequence: &str) -> SequenceType {
    let clean = remove_whitespace(sequence).to_uppercase();

    if clean.is_empty() {
        return SequenceType::Unknown;
    }

    if clean.chars().any(|c| PROTEIN_ONLY.contains(&c)) {
        return SequenceType::Protein;
    }

    let has_t = clean.contains('T');
    let has_u = clean.contains('U');

    if has_u && !has_t {
        return SequenceType::Rna;
    }

    if has_t && !has_u {
        return SequenceType::Dna;
    }

    // No T or U at all: plain A/C/G strings default to DNA
    if clean.chars().all(|c| matches!(c, 'A' | 'C' | 'G' | 'T')) {
        return SequenceType::Dna;
    }

    SequenceType::Unknown
}
