//! Schema walkers.
//!
//! [`serialize`] and [`deserialize`] are mirrors: both visit the schema's
//! top-level entries in order, and recurse once per element of each list.
//! Recursion depth is bounded by [`crate::schema::SchemaLimits::max_depth`].

mod deser;
mod ser;

pub use deser::*;
pub use ser::*;

use crate::codec::{BufEncoder, LenEncoder, SliceDecoder};
use crate::error::{Error, Result};
use crate::schema::Schema;
use crate::value::Record;
use tracing::debug;

/// Exact length of `record`'s encoding, computed without writing it.
pub fn encoded_len(schema: &Schema, record: &Record) -> Result<usize> {
    let mut enc = LenEncoder::default();
    serialize(schema, record, &mut enc)?;
    Ok(enc.encoded_len())
}

pub fn to_bytes(schema: &Schema, record: &Record) -> Result<Vec<u8>> {
    let mut enc = BufEncoder::with_capacity(encoded_len(schema, record)?);
    serialize(schema, record, &mut enc)?;
    Ok(enc.into_inner())
}

/// Decodes exactly one record. Leftover bytes are an error.
pub fn from_bytes(schema: &Schema, buf: &[u8]) -> Result<Record> {
    let mut dec = SliceDecoder::new(buf);
    let record = deserialize(schema, &mut dec)?;
    match dec.remaining_len() {
        0 => Ok(record),
        leftover => {
            debug!(leftover, read = dec.position(), "Trailing bytes after record.");
            Err(Error::TrailingBytes(leftover))
        }
    }
}
