//! Sequence statistics
//!
//! Composition histogram, GC content, and a molecular-weight estimate,
//! composed from the sequence-type detector.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::detect::{detect_sequence_type, SequenceType};
use crate::core::text::remove_whitespace;

/// Average weight per residue in Daltons, by alphabet
const DNA_BASE_WEIGHT: u64 = 650;
const RNA_BASE_WEIGHT: u64 = 340;
const PROTEIN_RESIDUE_WEIGHT: u64 = 110;

/// Descriptive statistics for a sequence
///
/// `composition` preserves first-seen character order. `gc_content` is a
/// percentage with one decimal place and is present only for DNA/RNA with
/// at least one counted base; `molecular_weight` is present for DNA, RNA,
/// and protein.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceStats {
    pub length: usize,
    pub composition: IndexMap<char, usize>,
    pub sequence_type: SequenceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gc_content: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub molecular_weight: Option<u64>,
}

/// Compute statistics for a sequence
///
/// The sequence is whitespace-stripped and uppercased before counting;
/// `length` refers to the cleaned string. GC content counts only
/// A/T/U/G/C toward its denominator, so ambiguity codes and gaps do not
/// dilute the percentage.
///
/// # Examples
/// ```
/// use biotools::core::stats::compute_stats;
///
/// let stats = compute_stats("ATGC");
/// assert_eq!(stats.length, 4);
/// assert_eq!(stats.gc_content, Some(50.0));
/// assert_eq!(stats.molecular_weight, Some(2600));
/// ```
pub fn compute_stats(sequence: &str) -> SequenceStats {
    let clean = remove_whitespace(sequence).to_uppercase();

    let mut composition: IndexMap<char, usize> = IndexMap::new();
    for c in clean.chars() {
        *composition.entry(c).or_insert(0) += 1;
    }

    let sequence_type = detect_sequence_type(sequence);

    let gc_content = if sequence_type.is_nucleic() {
        let count = |c: char| composition.get(&c).copied().unwrap_or(0);
        let gc = count('G') + count('C');
        let total_bases = count('A') + count('T') + count('U') + gc;
        if total_bases > 0 {
            Some((gc as f64 / total_bases as f64 * 1000.0).round() / 10.0)
        } else {
            None
        }
    } else {
        None
    };

    let length = composition.values().sum::<usize>();
    let molecular_weight = match sequence_type {
        SequenceType::Dna => Some(length as u64 * DNA_BASE_WEIGHT),
        SequenceType::Rna => Some(length as u64 * RNA_BASE_WEIGHT),
        SequenceType::Protein => Some(length as u64 * PROTEIN_RESIDUE_WEIGHT),
        SequenceType::Unknown => None,
    };

    SequenceStats {
        length,
        composition,
        sequence_type,
        gc_content,
        molecular_weight,
    }
}
