//! Ed25519 key derivation.
//!
//! Addresses are public-key-shaped; the only key operation this crate
//! needs is deriving a public key from a 32-byte private seed during
//! WIF import. Signing itself lives elsewhere in the SDK.

use ed25519_dalek::SigningKey;

/// Length of an Ed25519 seed and of the derived public key, in bytes.
pub const KEY_LENGTH: usize = 32;

/// Derive the Ed25519 public key for a 32-byte private seed.
///
/// The signing key built from the seed is wiped on drop.
///
/// # Arguments
/// * `seed` - The 32-byte private seed.
///
/// # Returns
/// The 32-byte compressed public key.
pub fn public_key_from_seed(seed: &[u8; KEY_LENGTH]) -> [u8; KEY_LENGTH] {
    let signing_key = SigningKey::from_bytes(seed);
    signing_key.verifying_key().to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_key_from_seed_vector() {
        // RFC 8032 derivation for the all-0x01 seed.
        let seed = [0x01u8; 32];
        let public = public_key_from_seed(&seed);
        assert_eq!(
            hex::encode(public),
            "8a88e3dd7409f195fd52db2d3cba5d72ca6709bf1d94121bf3748801b40f6f5c"
        );
    }

    #[test]
    fn test_public_key_from_seed_deterministic() {
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&crate::hash::sha256(b"test vector seed"));
        let a = public_key_from_seed(&seed);
        let b = public_key_from_seed(&seed);
        assert_eq!(a, b);
        assert_eq!(
            hex::encode(a),
            "16dded13d903c4c5a3ee0b9fc15814bf29a41de44d2b363d5ae80e5d93d06251"
        );
    }
}
