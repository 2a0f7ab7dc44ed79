//! (11,7) parity block code: detection-only protection for bitstreams.
//!
//! Each 7-bit data block is expanded into an 11-bit codeword by interleaving
//! four parity bits at the power-of-two positions, Hamming style. The code is
//! used only to *detect* corruption; no correction is attempted.
//!
//! # Codeword Layout
//!
//! ```text
//! position (1-indexed):  1   2   3   4   5   6   7   8   9  10  11
//! content:              p1  p2  d0  p4  d1  d2  d3  p8  d4  d5  d6
//! ```
//!
//! Parity equations (XOR over data bits, in original order d0..d6):
//!
//! ```text
//! p1 = d0 ^ d1 ^ d3 ^ d4 ^ d6
//! p2 = d0 ^ d2 ^ d3 ^ d5 ^ d6
//! p4 = d1 ^ d2 ^ d3
//! p8 = d4 ^ d5 ^ d6
//! ```
//!
//! # Padding
//!
//! The final data block is right-padded with zeros to 7 bits when the source
//! length is not a multiple of 7, so a protected stream is always a multiple
//! of 11 bits. The codec does not record the pre-padding length; callers that
//! need the exact payload back keep it themselves (see [`strip_parity`]).
//!
//! # Detection Limits
//!
//! A mismatching codeword proves corruption occurred in that block, but the
//! original data cannot be recovered. Every parity equation has odd weight,
//! so the bitwise complement of a valid codeword is again valid; total
//! inversion of a protected stream is NOT detected. Multi-bit detection is
//! characterized empirically in the tests, not assumed.

use crate::bits::{bit_char, bit_value, ensure_block_aligned, ensure_bitstream, ensure_charset};
use crate::error::Result;

/// Data bits per block.
pub const DATA_BITS: usize = 7;

/// Coded bits per block.
pub const CODE_BITS: usize = 11;

/// Compute the four parity bits [p1, p2, p4, p8] for a 7-bit data block.
fn parity_bits(d: &[u8; DATA_BITS]) -> [u8; 4] {
    let p1 = d[0] ^ d[1] ^ d[3] ^ d[4] ^ d[6];
    let p2 = d[0] ^ d[2] ^ d[3] ^ d[5] ^ d[6];
    let p4 = d[1] ^ d[2] ^ d[3];
    let p8 = d[4] ^ d[5] ^ d[6];
    [p1, p2, p4, p8]
}

/// Encode a bitstream into a parity-protected stream.
///
/// Splits `bits` into consecutive 7-bit groups (last group right-padded with
/// zeros) and emits one interleaved 11-bit codeword per group, concatenated
/// in order. Output length is `11 * ceil(len / 7)`.
///
/// # Errors
/// - `BitstreamError::EmptyInput` if `bits` is empty
/// - `BitstreamError::Charset` if any character is not '0' or '1'
pub fn encode(bits: &str) -> Result<String> {
    ensure_bitstream(bits)?;

    let bytes = bits.as_bytes();
    let blocks = bytes.len().div_ceil(DATA_BITS);
    let mut out = String::with_capacity(blocks * CODE_BITS);

    for chunk in bytes.chunks(DATA_BITS) {
        // Unused trailing entries stay zero: right-padding of the last block.
        let mut d = [0u8; DATA_BITS];
        for (i, &c) in chunk.iter().enumerate() {
            d[i] = bit_value(c);
        }

        let [p1, p2, p4, p8] = parity_bits(&d);
        for b in [p1, p2, d[0], p4, d[1], d[2], d[3], p8, d[4], d[5], d[6]] {
            out.push(bit_char(b));
        }
    }

    Ok(out)
}

/// Validate a parity-protected stream.
///
/// Recomputes p1, p2, p4, p8 from the data positions of every 11-bit
/// codeword and compares them to the stored parity bits at positions
/// 1, 2, 4, 8. The stream is valid iff every codeword matches.
///
/// Detection only: `Ok(false)` proves at least one block is corrupt, but
/// says nothing about which bits flipped.
///
/// # Errors
/// - `BitstreamError::Length` if the length is not a multiple of 11
/// - `BitstreamError::Charset` if any character is not '0' or '1'
pub fn validate(protected: &str) -> Result<bool> {
    ensure_block_aligned(protected, CODE_BITS)?;
    ensure_charset(protected)?;

    for chunk in protected.as_bytes().chunks(CODE_BITS) {
        let mut b = [0u8; CODE_BITS];
        for (i, &c) in chunk.iter().enumerate() {
            b[i] = bit_value(c);
        }

        let d = [b[2], b[4], b[5], b[6], b[8], b[9], b[10]];
        let [p1, p2, p4, p8] = parity_bits(&d);

        if b[0] != p1 || b[1] != p2 || b[3] != p4 || b[7] != p8 {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Extract the data bits from a parity-protected stream.
///
/// Inverse of the [`encode`] interleave: returns the 7 data bits of every
/// codeword, concatenated. Padding zeros added by `encode` are included;
/// callers that recorded the original bit length truncate.
///
/// Parity bits are discarded without being checked; run [`validate`] first
/// if integrity matters.
///
/// # Errors
/// Same format requirements as [`validate`].
pub fn strip_parity(protected: &str) -> Result<String> {
    ensure_block_aligned(protected, CODE_BITS)?;
    ensure_charset(protected)?;

    let bytes = protected.as_bytes();
    let mut out = String::with_capacity((bytes.len() / CODE_BITS) * DATA_BITS);

    for chunk in bytes.chunks(CODE_BITS) {
        for &pos in &[2usize, 4, 5, 6, 8, 9, 10] {
            out.push(chunk[pos] as char);
        }
    }

    Ok(out)
}
