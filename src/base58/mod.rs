//! Base58 encoding and decoding with optional checksum support.
//!
//! Provides raw Base58 encode/decode, used for the 45-character address
//! text form (which carries no checksum), and Base58Check encode/decode
//! (with a 4-byte double-SHA-256 checksum), used for WIF secrets.

use crate::hash::sha256d;
use crate::AddressError;

/// Encode a byte slice to a Base58 string.
///
/// Uses the Bitcoin Base58 alphabet. Leading zero bytes are encoded
/// as leading '1' characters.
///
/// # Arguments
/// * `data` - The bytes to encode.
///
/// # Returns
/// A Base58-encoded string.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).with_alphabet(bs58::Alphabet::BITCOIN).into_string()
}

/// Decode a Base58 string to a byte vector.
///
/// Leading '1' characters decode to leading zero bytes.
///
/// # Arguments
/// * `s` - The Base58 string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or an error for characters outside the
/// alphabet.
pub fn decode(s: &str) -> Result<Vec<u8>, AddressError> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| AddressError::InvalidBase58(e.to_string()))
}

/// Encode a byte slice with a 4-byte double-SHA-256 checksum appended (Base58Check).
///
/// The checksum is the first 4 bytes of SHA-256d(data). The result is
/// `encode(data || checksum)`.
///
/// # Arguments
/// * `data` - The bytes to encode (typically version byte + payload).
///
/// # Returns
/// A Base58Check-encoded string.
pub fn check_encode(data: &[u8]) -> String {
    let checksum = sha256d(data);
    let mut payload = data.to_vec();
    payload.extend_from_slice(&checksum[..4]);
    encode(&payload)
}

/// Decode a Base58Check string, verifying the 4-byte checksum.
///
/// Strips and validates the trailing 4-byte double-SHA-256 checksum.
///
/// # Arguments
/// * `s` - The Base58Check string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` of the payload (without checksum) on success, or an
/// error for invalid encoding or checksum mismatch.
pub fn check_decode(s: &str) -> Result<Vec<u8>, AddressError> {
    let decoded = decode(s)?;
    if decoded.len() < 4 {
        return Err(AddressError::InvalidBase58(
            "data too short for checksum".to_string(),
        ));
    }
    let (payload, checksum) = decoded.split_at(decoded.len() - 4);
    let expected = sha256d(payload);
    if checksum != &expected[..4] {
        return Err(AddressError::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}
