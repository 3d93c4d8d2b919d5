//! Oracle Wire Protocol (pure, sync)
//!
//! No async, no I/O - just bytes ↔ [`Timestamp`](crate::Timestamp)
//! computation.

pub mod error;
pub mod temporal;

pub use error::DecodeError;
pub use temporal::{
    DATE_LEN, OffsetBehavior, TIMESTAMP_LEN, TIMESTAMP_TZ_LEN, decode_date, decode_date_as,
    encode_date, encode_date_into,
};
