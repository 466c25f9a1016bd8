//! In-memory text and binary data behind [`std::io`] streams.
//!
//! The centerpiece is [`StringStream`]: a read-only, forward-only
//! [`Read`](std::io::Read) implementation that encodes a backing string
//! into bytes lazily, as the consumer reads, through a fixed-size staging
//! buffer, so the whole encoded payload is never materialized. Around it
//! sit eager factory constructors for text and bytes that are already at
//! hand, and [`Tracked`], a decorator counting traffic on a wrapped
//! stream.
//!
//! ```rust
//! use std::io::Read;
//!
//! use textstream::{Encoding, StringStream};
//!
//! let mut stream = StringStream::with_encoding("Ñoño español", Encoding::Utf8);
//! let mut bytes = Vec::new();
//! stream.read_to_end(&mut bytes).unwrap();
//! assert_eq!(bytes, "Ñoño español".as_bytes());
//! ```
//!
//! Encoding engines are pluggable through the [`TextEncoder`] trait; the
//! Unicode transformation formats are built in, and every other output
//! encoding of the Encoding Standard is available via
//! [`Encoding::Legacy`] and the `encoding_rs` crate.

mod encoder;
mod encoding;
mod error;
mod factory;
mod legacy;
mod meta;
mod stream;
mod tracked;

#[cfg(test)]
mod tests;

pub use encoder::{EncodeResult, TextEncoder};
pub use encoding::Encoding;
pub use error::EncodeError;
pub use factory::{
    DataStats, EncodingStats, stream_from_bytes, stream_from_slice, stream_from_slice_with_stats,
    stream_from_str, stream_from_str_copy, stream_from_str_copy_with_stats,
};
pub use meta::StreamMeta;
pub use stream::{DEFAULT_BUFFER_SIZE, StringStream};
pub use tracked::{StreamStats, Tracked};
