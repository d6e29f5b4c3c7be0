//! Protocol Module
//!
//! A minimal RESP (REdis Serialization Protocol) implementation: the tagged
//! [`Frame`] value, streaming decode from any buffered reader, and byte-exact
//! encoding.
//!
//! ## Frame Kinds
//! - `+` simple string
//! - `-` error
//! - `:` integer
//! - `$` bulk string (nil-able, arbitrary bytes)
//! - `*` array (nil-able, recursively nested)
//!
//! Decoding parses directly into the `Frame` tree; raw wire text is rendered
//! on demand via [`Frame::to_bytes`], so a decoded frame can be forwarded
//! byte-identically or taken apart with the decomposition helpers.

mod codec;
mod frame;

pub use codec::{
    encode_command, read_frame, write_command, write_frame, MAX_ARRAY_LEN, MAX_BULK_SIZE,
};
pub use frame::Frame;
