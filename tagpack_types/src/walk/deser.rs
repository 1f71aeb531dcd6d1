use crate::codec::{Decoder, WireLen};
use crate::error::{Error, Result};
use crate::schema::{Entry, Schema, SubSchema, Tag};
use crate::value::{Field, Record};
use tracing::trace;

/// Reads a new record shaped by `schema` from `dec`.
///
/// On failure, everything decoded so far is dropped before the error is returned.
pub fn deserialize<D: Decoder + ?Sized>(schema: &Schema, dec: &mut D) -> Result<Record> {
    deser_record(schema.root(), dec)
}

fn deser_record<D: Decoder + ?Sized>(shape: SubSchema<'_>, dec: &mut D) -> Result<Record> {
    let mut record = Record::with_capacity(shape.field_count());

    for (tag_idx, entry) in shape.entries() {
        let field = match entry {
            Entry::Scalar(Tag::Int) => Field::I32(dec.read_int()?),
            Entry::Scalar(Tag::Float) => Field::F32(dec.read_float()?),
            Entry::Scalar(Tag::Bool) => Field::Bool(dec.read_bool()?),
            Entry::Scalar(Tag::String) => Field::Str(dec.read_string()?),
            Entry::List(elem_shape) => Field::List(deser_list(tag_idx, elem_shape, dec)?),
            Entry::Scalar(Tag::ListStart | Tag::ListEnd) => {
                return Err(Error::SchemaMalformed {
                    index: tag_idx,
                    reason: "Stray list delimiter",
                })
            }
        };
        record.push(field);
    }

    Ok(record)
}

fn deser_list<D: Decoder + ?Sized>(
    tag_idx: usize,
    elem_shape: SubSchema<'_>,
    dec: &mut D,
) -> Result<Vec<Record>> {
    /* count */
    let count = WireLen::from(dec.read_int()?).to_usize()?;
    trace!(tag_idx, count, "Decoding list.");

    let max = elem_shape.schema().limits().max_list_len;
    if count > max {
        return Err(Error::ListTooLong { len: count, max });
    }
    if let Some(remaining) = dec.remaining() {
        let needed = count
            .checked_mul(elem_shape.min_encoded_len())
            .ok_or(Error::LengthOverflow(count))?;
        if needed > remaining {
            return Err(Error::Truncated { needed, remaining });
        }
    }

    /* elements */
    let mut elems = Vec::new();
    elems
        .try_reserve_exact(count)
        .map_err(|_| Error::AllocationFailure { requested: count })?;
    for _ in 0..count {
        elems.push(deser_record(elem_shape, dec)?);
    }

    Ok(elems)
}
