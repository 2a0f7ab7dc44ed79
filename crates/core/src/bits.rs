//! Shared bitstream utilities and validation.
//!
//! Every stage of the pipeline operates on "bitstreams": strings restricted
//! to the characters '0' and '1'. This module centralizes the validation
//! every stage performs before transforming anything, plus the byte-to-bit
//! expansion helpers the adapters and ciphers share.
//!
//! # Validation Rules
//! - Charset: any character outside {'0','1'} is an error, never a silent no-op
//! - Emptiness: transformations require non-empty input
//! - Alignment: block-structured operations require a length multiple
//!
//! Bits are expanded MSB-first, so a byte value of 0x41 becomes "01000001".

use crate::error::{BitstreamError, Result};

/// Check that every character of `bits` is '0' or '1'.
///
/// # Errors
/// Returns `BitstreamError::Charset` naming the first offending character
/// and its position.
pub fn ensure_charset(bits: &str) -> Result<()> {
    for (position, found) in bits.chars().enumerate() {
        if found != '0' && found != '1' {
            return Err(BitstreamError::Charset { found, position }.into());
        }
    }
    Ok(())
}

/// Check that `bits` is a non-empty, charset-valid bitstream.
///
/// This is the precondition shared by the parity encoder and both ciphers.
pub fn ensure_bitstream(bits: &str) -> Result<()> {
    if bits.is_empty() {
        return Err(BitstreamError::EmptyInput.into());
    }
    ensure_charset(bits)
}

/// Check that the bitstream length is an exact multiple of `block` bits.
///
/// # Errors
/// Returns `BitstreamError::Length` otherwise.
pub fn ensure_block_aligned(bits: &str, block: usize) -> Result<()> {
    if bits.len() % block != 0 {
        return Err(BitstreamError::Length {
            actual: bits.len(),
            block,
        }
        .into());
    }
    Ok(())
}

/// Convert an ASCII '0'/'1' byte to its numeric bit value.
///
/// Caller must have validated the charset first.
#[inline]
pub(crate) fn bit_value(c: u8) -> u8 {
    c - b'0'
}

/// Convert a numeric bit (0 or 1) to its '0'/'1' character.
#[inline]
pub(crate) fn bit_char(b: u8) -> char {
    if b & 1 == 0 {
        '0'
    } else {
        '1'
    }
}

/// Append the 8 bits of `byte` to `out`, MSB first.
pub fn push_byte_bits(byte: u8, out: &mut String) {
    for shift in (0..8).rev() {
        out.push(bit_char(byte >> shift));
    }
}

/// Append the low 16 bits of `value` to `out`, MSB first.
pub fn push_u16_bits(value: u16, out: &mut String) {
    for shift in (0..16).rev() {
        out.push(bit_char((value >> shift) as u8));
    }
}

/// Expand a byte slice into a bitstream, 8 bits per byte, MSB first.
pub fn bytes_to_bits(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 8);
    for &byte in data {
        push_byte_bits(byte, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BitstreamError, Error};

    #[test]
    fn test_charset_accepts_binary() {
        assert!(ensure_charset("0101100").is_ok());
        assert!(ensure_charset("").is_ok()); // vacuously valid
    }

    #[test]
    fn test_charset_reports_position() {
        let err = ensure_charset("0102").unwrap_err();
        match err {
            Error::Bitstream(BitstreamError::Charset { found, position }) => {
                assert_eq!(found, '2');
                assert_eq!(position, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_ensure_bitstream_rejects_empty() {
        assert!(matches!(
            ensure_bitstream(""),
            Err(Error::Bitstream(BitstreamError::EmptyInput))
        ));
    }

    #[test]
    fn test_block_alignment() {
        assert!(ensure_block_aligned("0".repeat(22).as_str(), 11).is_ok());
        let err = ensure_block_aligned("0000000000", 11).unwrap_err();
        assert!(matches!(
            err,
            Error::Bitstream(BitstreamError::Length {
                actual: 10,
                block: 11
            })
        ));
    }

    #[test]
    fn test_bytes_to_bits_msb_first() {
        assert_eq!(bytes_to_bits(&[0x41]), "01000001");
        assert_eq!(bytes_to_bits(&[0x00, 0xFF]), "0000000011111111");
    }

    #[test]
    fn test_push_u16_bits() {
        let mut out = String::new();
        push_u16_bits(0x8000, &mut out);
        assert_eq!(out, "1000000000000000");
    }
}
