//! # wirebytes
//!
//! A Rust library for packing and unpacking fixed-width binary fields.
//!
//!
//! ## Features
//!
//! - Converts boolean, byte, 16-bit and 32-bit values to byte
//!   representations and back, with explicit endianness control
//! - Packs and parses the fixed 7-byte calendar timestamp layout used by
//!   embedded protocols
//! - Transcodes ASCII text into caller-owned frame buffers
//! - Formats byte slices as hexadecimal strings and parses them back
//!
//!
//! ## Examples
//!
//! ### Packing and inspecting a frame
//!
//! ```rust
//! use wirebytes::{field_codec, hex_codec, Endianness};
//!
//! let mut frame = [0u8; 8];
//!
//! field_codec::write_byte(&mut frame, 0, 0x10);
//! field_codec::write_u16(&mut frame, 1, 0x1234, Endianness::LsbFirst);
//! field_codec::write_i32(&mut frame, 3, 0x00C0FFEE, Endianness::MsbFirst);
//! field_codec::write_bool(&mut frame, 7, true);
//!
//! assert_eq!("10-34-12-00-C0-FF-EE-01", hex_codec::hex_from_bytes(&frame, "-"));
//!
//! let parsed = hex_codec::bytes_from_hex("10 34 12 00 C0 FF EE 01").unwrap();
//!
//! assert_eq!(0x1234, field_codec::u16_from_bytes(&parsed, 1, Endianness::LsbFirst));
//! ```

#![warn(missing_docs)]
#![deny(missing_debug_implementations)]

mod error;
pub use error::{Error, Result};

mod endianness;
pub use endianness::Endianness;

pub mod field_codec;

pub mod text_codec;

pub mod hex_codec;

pub mod timestamp_codec;
