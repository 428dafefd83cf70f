//! Error types for FastUpd
//!
//! Defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for FastUpd operations
#[derive(Debug, Error)]
pub enum UpdError {
    /// VCF header parsing errors
    #[error("Header parse error: {0}")]
    Header(#[from] HeaderParseError),

    /// VCF data line parsing errors
    #[error("Record parse error: {0}")]
    Record(#[from] RecordParseError),

    /// A requested sample ID is not in the VCF header
    #[error("Sample '{sample}' does not exist in the VCF header")]
    MissingSample { sample: String },

    /// VEP-based frequency lookup requested but no CSQ header present
    #[error("CSQ header field missing. The VCF needs to be annotated with VEP")]
    MissingCsqHeader,

    /// The requested AF tag is not declared where it was looked up
    #[error("The field '{tag}' does not exist in the {looked_in}")]
    MissingAfTag {
        tag: String,
        looked_in: &'static str,
    },

    /// Multi-allelic site encountered; input must be pre-split
    #[error("Multi-allelic site at {chrom}:{pos}: split your variants")]
    MultiAllelic { chrom: String, pos: u64 },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while parsing the VCF header
#[derive(Debug, Error)]
pub enum HeaderParseError {
    /// An ##INFO meta-line does not match the required grammar
    #[error("Malformed INFO header at line {line}: {message}")]
    MalformedInfo { line: usize, message: String },

    /// The #CHROM column header line is missing entirely
    #[error("No #CHROM header line found; not a valid VCF")]
    NoSampleHeader,

    /// The #CHROM line carries no sample columns
    #[error("No individuals in VCF header at line {line}: found {found} columns, need at least 10")]
    NoIndividuals { line: usize, found: usize },

    /// File not found
    #[error("VCF file not found: {0}")]
    FileNotFound(PathBuf),

    /// Unsupported compression format
    #[error("Unsupported compression format: {0}")]
    UnsupportedCompression(String),

    /// I/O error during parsing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while parsing a VCF data line
#[derive(Debug, Error)]
pub enum RecordParseError {
    /// Empty data line
    #[error("Empty line at line {line}")]
    EmptyLine { line: usize },

    /// Too few tab-separated columns
    #[error("Too few fields at line {line}: expected at least {expected}, found {found}")]
    TooFewFields {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Failed to parse a numeric field
    #[error("Invalid number in field {field} at line {line}: '{value}'")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
}

/// Result type alias for FastUpd operations
pub type Result<T> = std::result::Result<T, UpdError>;

/// Result type alias for header parsing operations
pub type HeaderResult<T> = std::result::Result<T, HeaderParseError>;

/// Result type alias for record parsing operations
pub type RecordResult<T> = std::result::Result<T, RecordParseError>;
