//! Operation dispatch
//!
//! Maps an operation identifier to its validator and transform, shaping
//! every result into a uniform record. The operation set is a closed enum:
//! adding an operation is a compile-checked change, and any identifier
//! outside the set (including advanced operations a shell may forward to
//! the remote service) is rejected with an unsupported-operation error.

pub mod remote;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{
    compute_stats, detect_sequence_type, is_valid_dna, is_valid_rna, lowercase, remove_newlines,
    reverse_complement, reverse_transcribe, transcribe, translate, uppercase, Result,
    SequenceError, SequenceStats, SequenceType,
};

/// Result record produced by transform operations
///
/// Carries the untouched original input alongside the transformed result
/// and the sequence type used or detected for the operation. The remote
/// service returns the same JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    pub result: String,
    pub original_sequence: String,
    pub sequence_type: SequenceType,
}

/// Output of a dispatched operation: a transform record or a stats record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OperationOutput {
    Transform(OperationResult),
    Stats(SequenceStats),
}

/// The fixed set of local operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ReverseComplement,
    Transcribe,
    ReverseTranscribe,
    Translate,
    Uppercase,
    Lowercase,
    RemoveNewlines,
    Stats,
}

impl Operation {
    /// Every operation, in identifier order
    pub const ALL: [Operation; 8] = [
        Operation::ReverseComplement,
        Operation::Transcribe,
        Operation::ReverseTranscribe,
        Operation::Translate,
        Operation::Uppercase,
        Operation::Lowercase,
        Operation::RemoveNewlines,
        Operation::Stats,
    ];

    /// Look up an operation by its identifier
    pub fn from_id(id: &str) -> Option<Operation> {
        match id {
            "reverse-complement" => Some(Operation::ReverseComplement),
            "transcribe" => Some(Operation::Transcribe),
            "reverse-transcribe" => Some(Operation::ReverseTranscribe),
            "translate" => Some(Operation::Translate),
            "uppercase" => Some(Operation::Uppercase),
            "lowercase" => Some(Operation::Lowercase),
            "remove-newlines" => Some(Operation::RemoveNewlines),
            "stats" => Some(Operation::Stats),
            _ => None,
        }
    }

    /// The operation's identifier
    pub fn id(&self) -> &'static str {
        match self {
            Operation::ReverseComplement => "reverse-complement",
            Operation::Transcribe => "transcribe",
            Operation::ReverseTranscribe => "reverse-transcribe",
            Operation::Translate => "translate",
            Operation::Uppercase => "uppercase",
            Operation::Lowercase => "lowercase",
            Operation::RemoveNewlines => "remove-newlines",
            Operation::Stats => "stats",
        }
    }

    /// Run this operation on a sequence
    ///
    /// Validator preconditions are checked before any transform runs; on
    /// failure the operation returns a validation error and produces no
    /// partial output.
    pub fn apply(&self, sequence: &str) -> Result<OperationOutput> {
        match self {
            Operation::ReverseComplement => {
                require_dna(sequence)?;
                Ok(transform_output(
                    reverse_complement(sequence),
                    sequence,
                    SequenceType::Dna,
                ))
            }
            Operation::Transcribe => {
                require_dna(sequence)?;
                Ok(transform_output(
                    transcribe(sequence),
                    sequence,
                    SequenceType::Dna,
                ))
            }
            Operation::ReverseTranscribe => {
                require_rna(sequence)?;
                Ok(transform_output(
                    reverse_transcribe(sequence),
                    sequence,
                    SequenceType::Rna,
                ))
            }
            Operation::Translate => {
                let sequence_type = detect_sequence_type(sequence);
                if !sequence_type.is_nucleic() {
                    return Err(SequenceError::validation(
                        "input is not a valid DNA or RNA sequence",
                    ));
                }
                Ok(transform_output(translate(sequence), sequence, sequence_type))
            }
            Operation::Uppercase => Ok(transform_output(
                uppercase(sequence),
                sequence,
                detect_sequence_type(sequence),
            )),
            Operation::Lowercase => Ok(transform_output(
                lowercase(sequence),
                sequence,
                detect_sequence_type(sequence),
            )),
            Operation::RemoveNewlines => Ok(transform_output(
                remove_newlines(sequence),
                sequence,
                detect_sequence_type(sequence),
            )),
            Operation::Stats => Ok(OperationOutput::Stats(compute_stats(sequence))),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

fn require_dna(sequence: &str) -> Result<()> {
    if is_valid_dna(sequence) {
        Ok(())
    } else {
        Err(SequenceError::validation("input is not a valid DNA sequence"))
    }
}

fn require_rna(sequence: &str) -> Result<()> {
    if is_valid_rna(sequence) {
        Ok(())
    } else {
        Err(SequenceError::validation("input is not a valid RNA sequence"))
    }
}

fn transform_output(result: String, original: &str, sequence_type: SequenceType) -> OperationOutput {
    OperationOutput::Transform(OperationResult {
        result,
        original_sequence: original.to_string(),
        sequence_type,
    })
}

/// Dispatch an operation by identifier
///
/// Unknown identifiers fail with [`SequenceError::UnsupportedOperation`];
/// validation errors from the underlying operation propagate unchanged.
///
/// # Examples
/// ```
/// use biotools::ops::{dispatch, OperationOutput};
///
/// let output = dispatch("reverse-complement", "atgc").unwrap();
/// match output {
///     OperationOutput::Transform(r) => assert_eq!(r.result, "gcat"),
///     _ => unreachable!(),
/// }
/// assert!(dispatch("bogus-op", "ATGC").is_err());
/// ```
pub fn dispatch(operation_id: &str, sequence: &str) -> Result<OperationOutput> {
    let operation =
        Operation::from_id(operation_id).ok_or_else(|| SequenceError::unsupported(operation_id))?;
    operation.apply(sequence)
}
