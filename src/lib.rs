//! Biotools - sequence analysis toolkit
//!
//! A Rust reimplementation of the Biotools sequence utilities: type
//! detection, reversible transforms, codon translation, and descriptive
//! statistics over DNA/RNA/protein strings.
//!
//! The library is a pure, synchronous, stateless function set over a
//! single string input. Every call takes an immutable sequence and returns
//! a freshly constructed result; the codon table and character sets are
//! process-wide constants, so concurrent calls need no coordination.
//!
//! # Example
//!
//! ```
//! use biotools::{detect_sequence_type, dispatch, OperationOutput, SequenceType};
//!
//! assert_eq!(detect_sequence_type("ATGC"), SequenceType::Dna);
//!
//! match dispatch("translate", "ATGTAA")? {
//!     OperationOutput::Transform(r) => assert_eq!(r.result, "M*"),
//!     OperationOutput::Stats(_) => unreachable!(),
//! }
//! # Ok::<(), biotools::SequenceError>(())
//! ```

pub mod core;
pub mod ops;

// Re-export commonly used types
pub use crate::core::{
    compute_stats, detect_sequence_type, is_valid_dna, is_valid_rna, reverse_complement,
    reverse_transcribe, transcribe, translate, Result, SequenceError, SequenceStats, SequenceType,
};
pub use crate::ops::{dispatch, Operation, OperationOutput, OperationResult};
