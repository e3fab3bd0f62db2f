//! qr_symbol - QR code symbol model and validation
//!
//! The data layer of a QR encoder: one symbol's metadata fields and module
//! matrix, per-field range validators, the standard code tables mapping
//! modes and error correction levels to their numeric indicators, and a
//! canonical text dump. The bit-stream encoder, Reed-Solomon math and mask
//! selection live upstream of this crate; rendering lives downstream.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Encoding lookup errors
pub mod error;
/// Core data structures (QRCode, ByteMatrix, Mode, ECLevel)
pub mod models;

pub use error::EncodeError;
pub use models::{ByteMatrix, ECLevel, Mode, QRCode};
