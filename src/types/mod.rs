//! Value types and conversion traits for the Oracle wire format.
//!
//! [`FromOra`]/[`ToOra`] are the seam the row-scanning and parameter-binding
//! layers of a driver consume; the codec itself lives in
//! [`crate::protocol::temporal`].

pub mod temporal;

pub use temporal::{Timestamp, UtcOffset};

use crate::protocol::{DecodeError, decode_date, encode_date};

/// Convert an Oracle wire buffer into a Rust value.
pub trait FromOra: Sized {
    fn from_ora(bytes: &[u8]) -> Result<Self, DecodeError>;
}

/// Convert a Rust value into an Oracle wire buffer.
pub trait ToOra {
    fn to_ora(&self) -> Vec<u8>;
}

impl FromOra for Timestamp {
    fn from_ora(bytes: &[u8]) -> Result<Self, DecodeError> {
        decode_date(bytes)
    }
}

impl ToOra for Timestamp {
    /// Always the 7-byte DATE form; sub-second precision and offsets are
    /// not sent.
    fn to_ora(&self) -> Vec<u8> {
        encode_date(self).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_impls_delegate_to_the_codec() {
        let ts = Timestamp::new(2020, 12, 31, 15, 16, 17);
        let wire = ts.to_ora();
        assert_eq!(wire, encode_date(&ts).to_vec());
        assert_eq!(Timestamp::from_ora(&wire).unwrap(), ts);
    }

    #[test]
    fn from_ora_propagates_malformed_input() {
        assert_eq!(
            Timestamp::from_ora(&[1, 2, 3]),
            Err(DecodeError::MalformedInput { len: 3 })
        );
    }
}
