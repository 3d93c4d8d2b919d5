//! Oracle wire protocol DATE/TIMESTAMP codec.
//!
//! Oracle's network protocol ships DATE and TIMESTAMP column values as a
//! variable-length binary buffer of 7, 11 or 13 bytes. This crate is the
//! codec between that buffer and a plain calendar [`Timestamp`]; connection
//! handling, SQL execution and row scanning belong to the driver layers that
//! call into it.
//!
//! ```
//! # fn main() -> Result<(), orawire::DecodeError> {
//! use orawire::{Timestamp, decode_date, encode_date};
//!
//! let ts = Timestamp::new(2020, 12, 31, 0, 0, 0);
//! assert_eq!(encode_date(&ts), [120, 120, 12, 31, 1, 1, 1]);
//! assert_eq!(decode_date(&encode_date(&ts))?, ts);
//! # Ok(())
//! # }
//! ```

pub mod protocol;
pub mod types;

pub use protocol::{
    DecodeError, OffsetBehavior, decode_date, decode_date_as, encode_date, encode_date_into,
};
pub use types::{FromOra, Timestamp, ToOra, UtcOffset};
