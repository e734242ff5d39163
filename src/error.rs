/// Unified error type for all address operations.
///
/// Covers errors from key construction, text encoding, WIF import,
/// interop packing, and binary deserialization.
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    #[error("invalid public key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("invalid address text length: expected {expected}, got {got}")]
    InvalidTextLength { expected: usize, got: usize },

    #[error("invalid address encoding")]
    InvalidEncoding,

    #[error("invalid address opcode: {0}")]
    InvalidOpcode(u8),

    #[error("WIF secret is empty")]
    EmptyWif,

    #[error("invalid WIF format: {0}")]
    InvalidWifFormat(String),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("platform name is empty")]
    EmptyPlatformName,

    #[error("platform name too long: max {max}, got {got}")]
    PlatformNameTooLong { max: usize, got: usize },

    #[error("interop payload of {0} bytes does not fit the key")]
    InteropPayloadTooLarge(usize),

    #[error("not an interop address")]
    NotInterop,

    #[error("invalid interop data length: max {max}, got {got}")]
    InvalidInteropDataLength { max: usize, got: usize },

    #[error("malformed interop address")]
    MalformedInteropAddress,

    #[error("invalid base58: {0}")]
    InvalidBase58(String),

    #[error("unexpected end of data")]
    UnexpectedEof,
}
