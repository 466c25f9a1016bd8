use std::io;

use thiserror::Error;

/// Failure reported by a [`TextEncoder`] engine.
///
/// Encoder failures propagate unchanged out of [`StringStream::read`]; the
/// stream performs no recovery and leaves its cursors at their pre-call
/// values, so the caller decides whether retrying makes sense.
///
/// [`TextEncoder`]: crate::TextEncoder
/// [`StringStream::read`]: crate::StringStream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A character has no representation in the target encoding.
    #[error("character {0:?} cannot be represented in the target encoding")]
    Unmappable(char),

    /// The engine consumed no input, produced no output, and still asked to
    /// be called again. Raised instead of spinning on a broken engine.
    #[error("encoder made no progress on a non-empty destination buffer")]
    NoProgress,
}

impl From<EncodeError> for io::Error {
    fn from(err: EncodeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Error value for operations a stream does not support.
///
/// Callers probe capabilities by observing this failure, so unsupported
/// operations must error rather than silently no-op.
pub(crate) fn unsupported(operation: &'static str) -> io::Error {
    io::Error::new(
        io::ErrorKind::Unsupported,
        format!("{operation} is not supported by this stream"),
    )
}
