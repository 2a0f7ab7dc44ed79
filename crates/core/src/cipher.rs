//! Weak stream ciphers for bitstream scrambling.
//!
//! Two ciphers are built in, both intentionally weak and kept that way:
//!
//! - **vigenere** (xor-stream): the key is expanded into a key-bitstream by
//!   encoding each character as its 8-bit code point, concatenated, then
//!   cycled to the message length. Output bit = message bit XOR key bit.
//!   XOR is its own inverse, so decryption is the identical transform.
//! - **caesar** (bit-shift): the key is parsed as an integer and reduced
//!   modulo 2 to a single shift bit; every output bit is
//!   `(bit + shift) mod 2`. The effective keyspace is one bit. This is
//!   deliberate; do not "fix" it.
//!
//! # Registration
//!
//! The cipher set is a closed enum with a compile-time registration table
//! ([`CipherKind::REGISTRY`]) and exhaustive dispatch at the call site. A new
//! cipher registers by adding a variant, a table row, and its match arms; any
//! added cipher must satisfy `decrypt(encrypt(b, k), k) == b` for all valid
//! bitstreams and keys. Name lookup is case-insensitive and fails with
//! `CipherError::UnknownCipher` for unregistered names.

use crate::bits::{bit_char, bit_value, ensure_bitstream};
use crate::error::{CipherError, Result};

/// The closed set of registered ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherKind {
    /// xor-stream against a cycled 8-bit key expansion
    Vigenere,
    /// single-bit shift, `parseInt(key) mod 2`
    Caesar,
}

impl CipherKind {
    /// Registration table: cipher name -> variant.
    pub const REGISTRY: [(&'static str, CipherKind); 2] = [
        ("vigenere", CipherKind::Vigenere),
        ("caesar", CipherKind::Caesar),
    ];

    /// Look up a cipher by name (case-insensitive).
    ///
    /// # Errors
    /// `CipherError::UnknownCipher` if the name is not in the table.
    pub fn from_name(name: &str) -> Result<Self> {
        let lower = name.to_ascii_lowercase();
        Self::REGISTRY
            .iter()
            .find(|(registered, _)| *registered == lower)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| CipherError::UnknownCipher(name.to_string()).into())
    }

    /// The registered name of this cipher.
    pub fn name(&self) -> &'static str {
        match self {
            CipherKind::Vigenere => "vigenere",
            CipherKind::Caesar => "caesar",
        }
    }
}

/// Encrypt a bitstream with the given cipher and key.
///
/// # Errors
/// - `BitstreamError::EmptyInput` / `BitstreamError::Charset` for the input
/// - `CipherError::EmptyKey` if the key is empty
/// - `CipherError::KeyNotInteger` if the caesar key does not parse
/// - `CipherError::KeyNotLatin1` if a vigenere key character exceeds 8 bits
pub fn encrypt(bits: &str, kind: CipherKind, key: &str) -> Result<String> {
    ensure_bitstream(bits)?;
    if key.is_empty() {
        return Err(CipherError::EmptyKey.into());
    }

    match kind {
        CipherKind::Vigenere => vigenere_apply(bits, key),
        CipherKind::Caesar => caesar_apply(bits, key),
    }
}

/// Decrypt a bitstream with the given cipher and key.
///
/// Both built-in ciphers are involutions: XOR is its own inverse, and
/// subtraction modulo 2 equals addition modulo 2. Decrypt therefore applies
/// the same transform as encrypt, after the same validation.
///
/// # Errors
/// Same conditions as [`encrypt`].
pub fn decrypt(bits: &str, kind: CipherKind, key: &str) -> Result<String> {
    encrypt(bits, kind, key)
}

/// XOR the message against the cycled 8-bit expansion of the key.
fn vigenere_apply(bits: &str, key: &str) -> Result<String> {
    let mut key_bits = Vec::with_capacity(key.len() * 8);
    for c in key.chars() {
        let code_point = c as u32;
        if code_point > 0xFF {
            return Err(CipherError::KeyNotLatin1 { found: c }.into());
        }
        let byte = code_point as u8;
        for shift in (0..8).rev() {
            key_bits.push(byte >> shift & 1);
        }
    }

    let out = bits
        .bytes()
        .enumerate()
        .map(|(i, c)| bit_char(bit_value(c) ^ key_bits[i % key_bits.len()]))
        .collect();
    Ok(out)
}

/// Add the key's shift bit to every message bit, modulo 2.
fn caesar_apply(bits: &str, key: &str) -> Result<String> {
    let value: i64 = key
        .trim()
        .parse()
        .map_err(|_| CipherError::KeyNotInteger {
            key: key.to_string(),
        })?;
    // Euclidean remainder so negative keys behave like mathematical mod.
    let shift = value.rem_euclid(2) as u8;

    let out = bits
        .bytes()
        .map(|c| bit_char((bit_value(c) + shift) % 2))
        .collect();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BitstreamError, Error};

    #[test]
    fn test_registry_lookup() {
        assert_eq!(CipherKind::from_name("vigenere").unwrap(), CipherKind::Vigenere);
        assert_eq!(CipherKind::from_name("Caesar").unwrap(), CipherKind::Caesar);
        assert_eq!(CipherKind::from_name("VIGENERE").unwrap(), CipherKind::Vigenere);
    }

    #[test]
    fn test_unknown_cipher() {
        assert!(matches!(
            CipherKind::from_name("rot13"),
            Err(Error::Cipher(CipherError::UnknownCipher(_)))
        ));
    }

    #[test]
    fn test_vigenere_known_key_expansion() {
        // 'A' = 0x41 = 01000001; XOR against zeros reveals the key stream.
        let out = encrypt("00000000", CipherKind::Vigenere, "A").unwrap();
        assert_eq!(out, "01000001");
    }

    #[test]
    fn test_vigenere_key_cycles() {
        // 12 message bits against an 8-bit key stream: positions 8..12 reuse
        // the first 4 key bits.
        let out = encrypt("000000000000", CipherKind::Vigenere, "A").unwrap();
        assert_eq!(out, "010000010100");
    }

    #[test]
    fn test_vigenere_round_trip() {
        let bits = "1011001110100111010";
        for key in ["k", "secret", "Longer Key 123!"] {
            let enc = encrypt(bits, CipherKind::Vigenere, key).unwrap();
            let dec = decrypt(&enc, CipherKind::Vigenere, key).unwrap();
            assert_eq!(dec, bits, "round trip failed for key {key:?}");
        }
    }

    #[test]
    fn test_vigenere_rejects_wide_key_char() {
        assert!(matches!(
            encrypt("0101", CipherKind::Vigenere, "π"),
            Err(Error::Cipher(CipherError::KeyNotLatin1 { found: 'π' }))
        ));
    }

    #[test]
    fn test_caesar_even_key_is_identity() {
        let bits = "100110";
        for key in ["0", "2", "-4", "100"] {
            assert_eq!(encrypt(bits, CipherKind::Caesar, key).unwrap(), bits);
        }
    }

    #[test]
    fn test_caesar_odd_key_complements() {
        let bits = "100110";
        for key in ["1", "3", "-3", "99"] {
            assert_eq!(encrypt(bits, CipherKind::Caesar, key).unwrap(), "011001");
        }
    }

    #[test]
    fn test_caesar_round_trip() {
        let bits = "1110001";
        let enc = encrypt(bits, CipherKind::Caesar, "7").unwrap();
        assert_eq!(decrypt(&enc, CipherKind::Caesar, "7").unwrap(), bits);
    }

    #[test]
    fn test_caesar_rejects_non_integer_key() {
        assert!(matches!(
            encrypt("0101", CipherKind::Caesar, "abc"),
            Err(Error::Cipher(CipherError::KeyNotInteger { .. }))
        ));
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            encrypt("0101", CipherKind::Vigenere, ""),
            Err(Error::Cipher(CipherError::EmptyKey))
        ));
        assert!(matches!(
            decrypt("0101", CipherKind::Caesar, ""),
            Err(Error::Cipher(CipherError::EmptyKey))
        ));
    }

    #[test]
    fn test_empty_bitstream_rejected() {
        assert!(matches!(
            encrypt("", CipherKind::Vigenere, "k"),
            Err(Error::Bitstream(BitstreamError::EmptyInput))
        ));
    }

    #[test]
    fn test_charset_rejected_before_transform() {
        assert!(matches!(
            encrypt("01021", CipherKind::Caesar, "1"),
            Err(Error::Bitstream(BitstreamError::Charset { .. }))
        ));
    }
}
