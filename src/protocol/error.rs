//! Decoding errors for the Oracle date wire format.

use thiserror::Error;

/// Errors that can occur while decoding a DATE/TIMESTAMP wire buffer.
///
/// Decoding is deliberately lax about field contents (the wire side is
/// trusted to send sane bytes), so the only failure mode is a buffer whose
/// length does not match any of the three wire forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Buffer length is not one of the permitted sizes (7, 11 or 13 bytes).
    #[error("abnormal data representation for date: got {len} bytes, expected 7, 11 or 13")]
    MalformedInput { len: usize },
}
