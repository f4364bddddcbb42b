//! Biotools CLI entry point
//!
//! Command-line shell over the sequence-analysis library: one subcommand
//! per operation, sequence input from an argument, a file, or stdin.

use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use biotools::core::{detect_sequence_type, remove_whitespace, SequenceStats};
use biotools::ops::{dispatch, Operation, OperationOutput};

#[derive(Parser)]
#[command(name = "biotools")]
#[command(about = "Sequence toolkit for DNA/RNA/protein strings")]
#[command(version)]
#[command(author = "Biotools Contributors")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where the sequence text comes from: positional argument, file, or stdin
#[derive(Args)]
struct SeqInput {
    /// Sequence text (reads --input or stdin if omitted)
    sequence: Option<String>,

    /// Read the sequence from a file
    #[arg(short, long)]
    input: Option<PathBuf>,
}

impl SeqInput {
    fn resolve(self) -> anyhow::Result<String> {
        if let Some(sequence) = self.sequence {
            return Ok(sequence);
        }
        if let Some(path) = self.input {
            return Ok(std::fs::read_to_string(&path)
                .map_err(|e| anyhow::anyhow!("Failed to read {:?}: {}", path, e))?);
        }
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        Ok(buffer)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Reverse-complement a DNA sequence
    ReverseComplement {
        #[command(flatten)]
        seq: SeqInput,
    },
    /// Transcribe DNA to RNA (T -> U)
    Transcribe {
        #[command(flatten)]
        seq: SeqInput,
    },
    /// Reverse-transcribe RNA to DNA (U -> T)
    ReverseTranscribe {
        #[command(flatten)]
        seq: SeqInput,
    },
    /// Translate a DNA/RNA sequence to protein
    Translate {
        #[command(flatten)]
        seq: SeqInput,
    },
    /// Uppercase a sequence
    Uppercase {
        #[command(flatten)]
        seq: SeqInput,
    },
    /// Lowercase a sequence
    Lowercase {
        #[command(flatten)]
        seq: SeqInput,
    },
    /// Remove newline characters from a sequence
    RemoveNewlines {
        #[command(flatten)]
        seq: SeqInput,
    },
    /// Compute sequence statistics (length, composition, GC content, weight)
    Stats {
        #[command(flatten)]
        seq: SeqInput,
    },
    /// Detect the sequence type
    Detect {
        #[command(flatten)]
        seq: SeqInput,
    },
}

impl Commands {
    fn into_parts(self) -> (Option<Operation>, SeqInput) {
        match self {
            Commands::ReverseComplement { seq } => (Some(Operation::ReverseComplement), seq),
            Commands::Transcribe { seq } => (Some(Operation::Transcribe), seq),
            Commands::ReverseTranscribe { seq } => (Some(Operation::ReverseTranscribe), seq),
            Commands::Translate { seq } => (Some(Operation::Translate), seq),
            Commands::Uppercase { seq } => (Some(Operation::Uppercase), seq),
            Commands::Lowercase { seq } => (Some(Operation::Lowercase), seq),
            Commands::RemoveNewlines { seq } => (Some(Operation::RemoveNewlines), seq),
            Commands::Stats { seq } => (Some(Operation::Stats), seq),
            Commands::Detect { seq } => (None, seq),
        }
    }
}

fn print_stats(stats: &SequenceStats) {
    println!("=== Sequence Statistics ===");
    println!("Type:             {}", stats.sequence_type);
    println!("Length:           {}", stats.length);
    if let Some(gc) = stats.gc_content {
        println!("GC content:       {:.1}%", gc);
    }
    if let Some(weight) = stats.molecular_weight {
        println!("Molecular weight: ~{} Da", weight);
    }
    if !stats.composition.is_empty() {
        println!("Composition:");
        for (residue, count) in &stats.composition {
            let percent = *count as f64 / stats.length as f64 * 100.0;
            println!("  {}  {:>8}  {:>5.1}%", residue, count, percent);
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let (operation, seq) = cli.command.into_parts();
    let sequence = seq.resolve()?;

    let Some(operation) = operation else {
        // detect: type plus cleaned length
        let sequence_type = detect_sequence_type(&sequence);
        let length = remove_whitespace(&sequence).chars().count();
        if cli.json {
            let value = serde_json::json!({
                "sequence_type": sequence_type,
                "length": length,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("Detected {} sequence, length: {}", sequence_type, length);
        }
        return Ok(());
    };

    let output = dispatch(operation.id(), &sequence)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match output {
        OperationOutput::Transform(r) => println!("{}", r.result),
        OperationOutput::Stats(stats) => print_stats(&stats),
    }

    Ok(())
}
