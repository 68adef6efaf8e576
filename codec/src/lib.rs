//! cellmap Codec
//!
//! Canonical byte encoding for record fields.
//!
//! - bytes and text are stored verbatim
//! - booleans are a single byte, `0x01` for true
//! - integers and floats are fixed-width big-endian, `isize`/`usize` as 64 bits
//!
//! # Module Structure
//!
//! - `encode` - field value to bytes (write path)
//! - `decode` - bytes to field value (read path), including family-map capture

mod decode;
mod encode;

pub use decode::{decode, decode_as, decode_map, decode_text};
pub use encode::{encode, encode_value};
