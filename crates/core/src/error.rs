//! Error types for the parity-sim system.
//!
//! All operations return structured errors rather than panicking.
//! Every failure is a deterministic input-validity failure, surfaced
//! synchronously to the caller; there is no retry or recovery in the core.
//!
//! Validation runs before any transformation, so a caller never receives
//! partially transformed output alongside an error.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Bitstream: charset/emptiness/length violations of a bitstream value
/// - Cipher: key problems or unknown cipher names
/// - Adapter: file-to-bitstream conversion failures
/// - Simulation: invalid simulation parameters
/// - I/O: file system operations (adapters only)
#[derive(Debug, Error)]
pub enum Error {
    /// A value expected to be a bitstream failed validation
    #[error("bitstream error: {0}")]
    Bitstream(#[from] BitstreamError),

    /// Cipher key or cipher lookup error
    #[error("cipher error: {0}")]
    Cipher(#[from] CipherError),

    /// Byte-source adapter error (e.g., unsupported file type)
    #[error("adapter error: {0}")]
    Adapter(#[from] AdapterError),

    /// Corruption simulation parameter error
    #[error("simulation error: {0}")]
    Simulation(#[from] SimulationError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bitstream validation errors.
#[derive(Debug, Error)]
pub enum BitstreamError {
    /// Empty bitstream where non-empty is required
    #[error("bitstream is empty")]
    EmptyInput,

    /// Character outside the {'0','1'} alphabet
    #[error("invalid character {found:?} at bit position {position} (expected '0' or '1')")]
    Charset { found: char, position: usize },

    /// Bitstream length is not a multiple of the required block size
    #[error("bitstream length {actual} is not a multiple of {block}")]
    Length { actual: usize, block: usize },
}

/// Stream cipher errors.
#[derive(Debug, Error)]
pub enum CipherError {
    /// Empty key where non-empty is required
    #[error("cipher key is empty")]
    EmptyKey,

    /// Caesar key must parse as an integer
    #[error("caesar key {key:?} is not an integer")]
    KeyNotInteger { key: String },

    /// Vigenere key characters must fit in 8 bits
    #[error("vigenere key contains {found:?}, which does not fit in 8 bits")]
    KeyNotLatin1 { found: char },

    /// Cipher name not present in the registration table
    #[error("no cipher registered under {0:?}")]
    UnknownCipher(String),
}

/// Byte-source adapter errors.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// File extension not present in the registration table
    #[error("no parser registered for extension {0:?}")]
    UnknownParser(String),

    /// Input path carries no file extension to dispatch on
    #[error("input path has no file extension")]
    NoExtension,

    /// WAV container could not be parsed
    #[error("invalid WAV file: {0}")]
    InvalidWav(String),

    /// Text input character does not fit in 8 bits
    #[error("character {found:?} does not fit in 8 bits")]
    NonLatin1 { found: char },

    /// Adapter produced zero bits (e.g., empty file)
    #[error("adapter produced an empty bitstream")]
    EmptyParse,
}

/// Corruption simulation errors.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Error rate must lie in the closed interval [0, 1]
    #[error("error rate {rate} outside [0.0, 1.0]")]
    RateOutOfRange { rate: f64 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
