//! Umbra Chain SDK - Address and cryptographic primitives.
//!
//! This crate provides the address layer of the Umbra SDK:
//! - The 32-byte `Address` value type with user/system/interop classification
//! - The canonical 45-character Base58 text encoding
//! - WIF secret import with Ed25519 public key derivation
//! - Interop (cross-chain) address packing and unpacking
//! - Hash functions (SHA-256, double SHA-256)
//! - Base58 and Base58Check codecs
//! - Fixed-width binary serialization helpers

pub mod hash;
pub mod base58;
pub mod keys;
pub mod util;
pub mod address;

mod error;
pub use error::AddressError;
