//! Core sequence analysis
//!
//! This module contains the sequence-type detector, alphabet validators,
//! transform functions, codon translation, and the statistics engine.

pub mod codon;
pub mod detect;
pub mod dna;
mod error;
pub mod rna;
pub mod stats;
pub mod text;

pub use codon::{translate, translate_codon, STOP_SYMBOL, UNKNOWN_AMINO_ACID};
pub use detect::{detect_sequence_type, SequenceType};
pub use dna::{complement_base, is_valid_dna, reverse_complement, transcribe};
pub use error::{Result, SequenceError};
pub use rna::{is_valid_rna, reverse_transcribe};
pub use stats::{compute_stats, SequenceStats};
pub use text::{lowercase, remove_newlines, remove_whitespace, uppercase};
