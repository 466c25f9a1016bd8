//! Encoding selection.

use crate::{
    encoder::{TextEncoder, Utf8Encoder, Utf16Encoder, Utf32Encoder},
    error::EncodeError,
    legacy::LegacyEncoder,
};

/// A character encoding scheme selecting the engine a stream encodes with.
///
/// The Unicode transformation formats are built in and infallible; every
/// other output encoding of the Encoding Standard is available through
/// [`Encoding::Legacy`] and may reject unmappable characters.
///
/// # Examples
///
/// ```rust
/// use textstream::Encoding;
///
/// let bytes = Encoding::Utf16Le.encode_to_vec("hi").unwrap();
/// assert_eq!(bytes, [b'h', 0, b'i', 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8, the default.
    #[default]
    Utf8,
    /// UTF-16, little-endian code units, no byte order mark.
    Utf16Le,
    /// UTF-16, big-endian code units, no byte order mark.
    Utf16Be,
    /// UTF-32, little-endian code units, no byte order mark.
    Utf32Le,
    /// UTF-32, big-endian code units, no byte order mark.
    Utf32Be,
    /// An Encoding Standard output encoding, e.g.
    /// [`encoding_rs::WINDOWS_1252`] or [`encoding_rs::SHIFT_JIS`].
    Legacy(&'static encoding_rs::Encoding),
}

impl Encoding {
    /// Creates a fresh, stateless-at-start engine for this encoding.
    #[must_use]
    pub fn new_encoder(self) -> Box<dyn TextEncoder> {
        match self {
            Self::Utf8 => Box::new(Utf8Encoder),
            Self::Utf16Le => Box::new(Utf16Encoder { big_endian: false }),
            Self::Utf16Be => Box::new(Utf16Encoder { big_endian: true }),
            Self::Utf32Le => Box::new(Utf32Encoder { big_endian: false }),
            Self::Utf32Be => Box::new(Utf32Encoder { big_endian: true }),
            Self::Legacy(encoding) => Box::new(LegacyEncoder::new(encoding)),
        }
    }

    /// Worst-case encoded size of any single character, in bytes.
    #[must_use]
    pub fn max_bytes_per_char(self) -> usize {
        self.new_encoder().max_bytes_per_char()
    }

    /// The canonical name of the encoding.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
            Self::Utf32Le => "UTF-32LE",
            Self::Utf32Be => "UTF-32BE",
            Self::Legacy(encoding) => encoding.name(),
        }
    }

    /// Encodes `text` in one shot, materializing the full byte payload.
    ///
    /// This is the eager counterpart of [`StringStream`]: the reference
    /// output an incremental stream's concatenated reads must equal.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] when the engine cannot represent the input.
    ///
    /// [`StringStream`]: crate::StringStream
    pub fn encode_to_vec(self, text: &str) -> Result<Vec<u8>, EncodeError> {
        let mut encoder = self.new_encoder();
        let mut out = Vec::with_capacity(text.len());
        let mut staging = vec![0u8; 4096];
        let mut position = 0;
        loop {
            let result = encoder.encode(&text[position..], &mut staging, true)?;
            position += result.consumed;
            out.extend_from_slice(&staging[..result.written]);
            if !result.pending && position >= text.len() {
                break;
            }
            if result.consumed == 0 && result.written == 0 {
                return Err(EncodeError::NoProgress);
            }
        }
        Ok(out)
    }
}
