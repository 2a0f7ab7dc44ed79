//! parity-sim-core: Educational bit-level communication pipeline
//!
//! This library provides the core components for a learning-focused system
//! that:
//! - Converts file content into a '0'/'1' bitstream (byte-source adapters)
//! - Protects the bitstream with an (11,7) parity block code (detection only)
//! - Optionally scrambles it with deliberately weak stream ciphers
//! - Simulates random bit-flip corruption to measure detection rates
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `bits`: shared bitstream validation and byte-to-bit expansion
//! - `parity`: (11,7) parity codec (encode, validate, strip)
//! - `cipher`: stream ciphers behind a closed registration table
//! - `corruption`: corruption simulator with injected, seedable randomness
//! - `adapter`: file-to-bitstream conversion (wav/txt/bin)
//! - `metrics`: observable campaign behavior
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and surfaced to the caller
//! - **Fail-fast**: charset/length validation precedes every transformation
//! - **Pure stages**: each operation is a one-shot transformation with no
//!   state held across calls
//! - **Deterministic**: the only randomness is the simulator's, and it is
//!   injected explicitly so runs are reproducible
//!
//! # Pipeline
//!
//! ```text
//! adapter -> parity::encode -> [cipher::encrypt] -> transmit/corrupt
//!         -> [cipher::decrypt] -> parity::validate -> parity::strip_parity
//! ```

pub mod adapter;
pub mod bits;
pub mod cipher;
pub mod corruption;
pub mod error;
pub mod metrics;
pub mod parity;

// Re-export commonly used types
pub use error::{Error, Result};
