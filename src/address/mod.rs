//! The 32-byte address type.
//!
//! An address names an account, a protocol-level (system) entity, or a
//! cross-chain (interop) endpoint. There is no external registry: every
//! property of an address is derived from its 32 key bytes. The class
//! markers live in the first key byte (`'!'` for system, `'*'` for
//! interop, the all-zero key is the null address), while the text form
//! prepends a separate one-byte opcode discriminator before Base58
//! encoding.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroizing;

use crate::base58;
use crate::hash::sha256;
use crate::keys;
use crate::util::{ByteReader, ByteWriter};
use crate::AddressError;

/// Length of the canonical text form, in characters.
pub const TEXT_LENGTH: usize = 45;

/// Length of an address public key, in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Maximum length of an interop platform name, in bytes.
pub const MAX_PLATFORM_NAME_LENGTH: usize = 10;

/// Maximum length of an interop payload, in bytes.
pub const MAX_INTEROP_DATA_LENGTH: usize = 27;

/// Text-encoding discriminator for user addresses.
pub const USER_OPCODE: u8 = 75;

/// Text-encoding discriminator for system addresses.
pub const SYSTEM_OPCODE: u8 = 85;

/// Text-encoding discriminator for interop addresses.
pub const INTEROP_OPCODE: u8 = 102;

/// First key byte marking a system address.
const SYSTEM_MARKER: u8 = b'!';

/// First key byte marking an interop address; also the terminator
/// between the platform name and the payload inside the key.
const INTEROP_MARKER: u8 = b'*';

/// Version byte of a decoded WIF payload.
const WIF_VERSION: u8 = 0x80;

/// Trailing compressed-key marker of a decoded WIF payload.
const WIF_COMPRESSED: u8 = 0x01;

/// Decoded WIF payload length: version byte + 32-byte seed + marker.
const WIF_PAYLOAD_LENGTH: usize = 34;

/// A 32-byte address identifying a user account, a system entity, or an
/// interop endpoint.
///
/// The key bytes are the sole identity: equality, ordering, and hashing
/// all compare the key and nothing else. The class opcode is chosen by
/// classification exactly once at construction; the 45-character text
/// form is computed lazily from it and cached. Both are derived state
/// and never drift from the key because the value is immutable.
pub struct Address {
    key: [u8; PUBLIC_KEY_LENGTH],
    opcode: u8,
    text: OnceLock<String>,
}

impl Address {
    /// The null address: all 32 key bytes zero.
    ///
    /// Null is a deliberate value, never an error fallback. It also
    /// classifies as a system address.
    ///
    /// # Returns
    /// The null `Address`.
    pub fn null() -> Self {
        Self::from_raw([0u8; PUBLIC_KEY_LENGTH])
    }

    /// Create an address from a 32-byte public key slice.
    ///
    /// # Arguments
    /// * `key` - A slice that must be exactly 32 bytes.
    ///
    /// # Returns
    /// `Ok(Address)` if the slice is 32 bytes, or `InvalidKeyLength`
    /// otherwise.
    pub fn from_key(key: &[u8]) -> Result<Self, AddressError> {
        let key: [u8; PUBLIC_KEY_LENGTH] =
            key.try_into().map_err(|_| AddressError::InvalidKeyLength {
                expected: PUBLIC_KEY_LENGTH,
                got: key.len(),
            })?;
        Ok(Self::from_raw(key))
    }

    /// Classify the key and fix the opcode. The single construction
    /// path every constructor funnels through.
    fn from_raw(key: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        let is_null = key == [0u8; PUBLIC_KEY_LENGTH];
        let opcode = if is_null || key[0] == SYSTEM_MARKER {
            SYSTEM_OPCODE
        } else if key[0] == INTEROP_MARKER {
            INTEROP_OPCODE
        } else {
            USER_OPCODE
        };
        Address {
            key,
            opcode,
            text: OnceLock::new(),
        }
    }

    /// Access the raw 32-byte public key.
    ///
    /// # Returns
    /// A reference to the key bytes.
    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.key
    }

    /// Return the serialized size of an address in bytes.
    ///
    /// # Returns
    /// Always returns 32.
    pub fn size(&self) -> usize {
        PUBLIC_KEY_LENGTH
    }

    /// Check whether every key byte is zero.
    pub fn is_null(&self) -> bool {
        self.key == [0u8; PUBLIC_KEY_LENGTH]
    }

    /// Check whether this is a system address.
    ///
    /// The null address counts as system.
    pub fn is_system(&self) -> bool {
        self.key[0] == SYSTEM_MARKER || self.is_null()
    }

    /// Check whether this is an interop address.
    pub fn is_interop(&self) -> bool {
        !self.is_null() && self.key[0] == INTEROP_MARKER
    }

    /// Check whether this is an ordinary user address.
    pub fn is_user(&self) -> bool {
        !self.is_system() && !self.is_interop()
    }

    /// Return the canonical 45-character text form.
    ///
    /// Base58-encodes the class opcode followed by the 32 key bytes
    /// (33 bytes total, no checksum). Computed on first call and
    /// cached; concurrent first calls compute the same string and
    /// `OnceLock` publishes exactly one of them.
    ///
    /// # Returns
    /// The text form as a string slice borrowed from the cache.
    pub fn text(&self) -> &str {
        self.text.get_or_init(|| {
            let mut buf = [0u8; PUBLIC_KEY_LENGTH + 1];
            buf[0] = self.opcode;
            buf[1..].copy_from_slice(&self.key);
            base58::encode(&buf)
        })
    }

    /// Parse an address from its 45-character text form.
    ///
    /// # Arguments
    /// * `text` - The candidate text form.
    ///
    /// # Returns
    /// `Ok(Address)` on success. Fails with `InvalidTextLength` when the
    /// input is not 45 characters, `InvalidEncoding` when Base58 decoding
    /// fails or does not yield exactly 33 bytes, and `InvalidOpcode` when
    /// the leading byte is not a known class opcode. The opcode byte is
    /// validated and discarded; only the 32 key bytes are kept.
    pub fn from_text(text: &str) -> Result<Self, AddressError> {
        if text.len() != TEXT_LENGTH {
            return Err(AddressError::InvalidTextLength {
                expected: TEXT_LENGTH,
                got: text.len(),
            });
        }
        let decoded = base58::decode(text).map_err(|_| AddressError::InvalidEncoding)?;
        if decoded.len() != PUBLIC_KEY_LENGTH + 1 {
            return Err(AddressError::InvalidEncoding);
        }
        match decoded[0] {
            USER_OPCODE | SYSTEM_OPCODE | INTEROP_OPCODE => {}
            other => return Err(AddressError::InvalidOpcode(other)),
        }
        Self::from_key(&decoded[1..])
    }

    /// Import an address from a WIF secret.
    ///
    /// Base58Check-decodes the secret, validates the 34-byte payload
    /// shape (`0x80` version byte, 32-byte seed, `0x01` compressed-key
    /// marker), and derives the Ed25519 public key from the seed. The
    /// decoded payload and the seed are held in zeroizing buffers and
    /// wiped on every exit path.
    ///
    /// # Arguments
    /// * `wif` - The WIF secret string.
    ///
    /// # Returns
    /// `Ok(Address)` keyed by the derived public key. Fails with
    /// `EmptyWif` on empty input, `ChecksumMismatch` when the embedded
    /// checksum does not verify, and `InvalidWifFormat` for any other
    /// malformation.
    pub fn from_wif(wif: &str) -> Result<Self, AddressError> {
        if wif.is_empty() {
            return Err(AddressError::EmptyWif);
        }
        let payload = Zeroizing::new(base58::check_decode(wif).map_err(|e| match e {
            AddressError::ChecksumMismatch => AddressError::ChecksumMismatch,
            other => AddressError::InvalidWifFormat(other.to_string()),
        })?);
        if payload.len() != WIF_PAYLOAD_LENGTH
            || payload[0] != WIF_VERSION
            || payload[WIF_PAYLOAD_LENGTH - 1] != WIF_COMPRESSED
        {
            return Err(AddressError::InvalidWifFormat(
                "expected 0x80 + 32-byte seed + 0x01".to_string(),
            ));
        }
        let mut seed = Zeroizing::new([0u8; keys::KEY_LENGTH]);
        seed.copy_from_slice(&payload[1..1 + keys::KEY_LENGTH]);
        let public_key = keys::public_key_from_seed(&seed);
        Ok(Self::from_raw(public_key))
    }

    /// Derive a system address from arbitrary byte content.
    ///
    /// Hashes the content with SHA-256 and overwrites the first digest
    /// byte with the system marker, so the result always classifies as
    /// a system address regardless of the natural hash output.
    ///
    /// # Arguments
    /// * `content` - The bytes to hash.
    ///
    /// # Returns
    /// A system `Address` keyed by the marked digest.
    pub fn from_hash(content: &[u8]) -> Self {
        let mut key = sha256(content);
        key[0] = SYSTEM_MARKER;
        Self::from_raw(key)
    }

    /// Derive a system address from UTF-8 text content.
    ///
    /// # Arguments
    /// * `content` - The text whose UTF-8 bytes are hashed.
    ///
    /// # Returns
    /// A system `Address`, as for [`Address::from_hash`].
    pub fn from_hash_str(content: &str) -> Self {
        Self::from_hash(content.as_bytes())
    }

    /// Derive a system address naming a contract by the hash of its
    /// script bytes.
    ///
    /// Identical derivation to [`Address::from_hash`].
    ///
    /// # Arguments
    /// * `script` - The script bytes.
    ///
    /// # Returns
    /// A system `Address` keyed by the marked script digest.
    pub fn from_script(script: &[u8]) -> Self {
        Self::from_hash(script)
    }

    /// Pack a platform name and payload into an interop address.
    ///
    /// Key layout: `'*'`, the platform name bytes, `'*'`, the payload
    /// bytes, then zero filler up to 32 bytes.
    ///
    /// # Arguments
    /// * `platform_name` - The target platform, 1 to 10 bytes.
    /// * `data` - The opaque payload, at most 27 bytes and small enough
    ///   to fit the key together with the name.
    ///
    /// # Returns
    /// `Ok(Address)` classified interop. Fails with `EmptyPlatformName`,
    /// `PlatformNameTooLong`, or `InteropPayloadTooLarge`.
    pub fn encode_interop(platform_name: &str, data: &[u8]) -> Result<Self, AddressError> {
        let name = platform_name.as_bytes();
        if name.is_empty() {
            return Err(AddressError::EmptyPlatformName);
        }
        if name.len() > MAX_PLATFORM_NAME_LENGTH {
            return Err(AddressError::PlatformNameTooLong {
                max: MAX_PLATFORM_NAME_LENGTH,
                got: name.len(),
            });
        }
        if data.len() > MAX_INTEROP_DATA_LENGTH
            || 2 + name.len() + data.len() > PUBLIC_KEY_LENGTH
        {
            return Err(AddressError::InteropPayloadTooLarge(data.len()));
        }
        let mut key = [0u8; PUBLIC_KEY_LENGTH];
        key[0] = INTEROP_MARKER;
        key[1..1 + name.len()].copy_from_slice(name);
        key[1 + name.len()] = INTEROP_MARKER;
        key[2 + name.len()..2 + name.len() + data.len()].copy_from_slice(data);
        Ok(Self::from_raw(key))
    }

    /// Unpack the platform name and payload from an interop address.
    ///
    /// Scans the key for the `'*'` terminator after the platform name,
    /// then copies up to `expected_data_length` payload bytes bounded by
    /// the 32-byte key. The returned vector's length is the number of
    /// bytes actually available; a shortfall at the key boundary is not
    /// an error.
    ///
    /// # Arguments
    /// * `expected_data_length` - How many payload bytes the caller
    ///   expects, at most 27.
    ///
    /// # Returns
    /// `Ok((platform_name, data))` on success. Fails with `NotInterop`
    /// on a non-interop address, `InvalidInteropDataLength` when more
    /// than 27 bytes are requested, and `MalformedInteropAddress` when
    /// no terminator exists, the name span is empty, or the name bytes
    /// are not valid UTF-8.
    pub fn decode_interop(
        &self,
        expected_data_length: usize,
    ) -> Result<(String, Vec<u8>), AddressError> {
        if !self.is_interop() {
            return Err(AddressError::NotInterop);
        }
        if expected_data_length > MAX_INTEROP_DATA_LENGTH {
            return Err(AddressError::InvalidInteropDataLength {
                max: MAX_INTEROP_DATA_LENGTH,
                got: expected_data_length,
            });
        }

        let mut i = 1;
        loop {
            if i >= PUBLIC_KEY_LENGTH {
                return Err(AddressError::MalformedInteropAddress);
            }
            if self.key[i] == INTEROP_MARKER {
                break;
            }
            i += 1;
        }
        if i == 1 {
            return Err(AddressError::MalformedInteropAddress);
        }
        let platform_name = std::str::from_utf8(&self.key[1..i])
            .map_err(|_| AddressError::MalformedInteropAddress)?
            .to_string();

        let start = i + 1;
        let end = PUBLIC_KEY_LENGTH.min(start + expected_data_length);
        Ok((platform_name, self.key[start..end].to_vec()))
    }

    /// Write the raw 32-byte key to a binary writer.
    ///
    /// Fixed width, no length prefix, no opcode byte.
    ///
    /// # Arguments
    /// * `writer` - The destination writer.
    pub fn write(&self, writer: &mut ByteWriter) {
        writer.write_bytes(&self.key);
    }

    /// Read an address from a binary reader.
    ///
    /// Reads exactly 32 bytes; the returned address has a fresh text
    /// cache. Underrun surfaces as the reader's `UnexpectedEof`.
    ///
    /// # Arguments
    /// * `reader` - The source reader.
    ///
    /// # Returns
    /// `Ok(Address)`, or the reader's error on underrun.
    pub fn read(reader: &mut ByteReader<'_>) -> Result<Self, AddressError> {
        let bytes = reader.read_bytes(PUBLIC_KEY_LENGTH)?;
        Self::from_key(bytes)
    }
}

/// Check whether a string is a well-formed address text form.
///
/// Attempts a full parse and absorbs any failure into `false`. This is
/// the only operation in the crate that swallows errors.
///
/// # Arguments
/// * `text` - The candidate text form.
///
/// # Returns
/// `true` if `text` parses as an address.
pub fn is_valid_address_text(text: &str) -> bool {
    Address::from_text(text).is_ok()
}

impl Default for Address {
    fn default() -> Self {
        Self::null()
    }
}

impl Clone for Address {
    fn clone(&self) -> Self {
        Address {
            key: self.key,
            opcode: self.opcode,
            text: self.text.clone(),
        }
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Address {}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl std::hash::Hash for Address {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

/// Display the text form, or `[Null address]` for the null address.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("[Null address]")
        } else {
            f.write_str(self.text())
        }
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

/// Parse the 45-character text form.
///
/// Equivalent to `Address::from_text`.
impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_text(s)
    }
}

/// Serialize as the canonical text form in JSON.
impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.text())
    }
}

/// Deserialize from the canonical text form in JSON.
impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_text(&s).map_err(serde::de::Error::custom)
    }
}
