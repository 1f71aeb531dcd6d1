use crate::codec::{Encoder, WireLen};
use crate::error::{Error, Result};
use crate::schema::{Entry, Schema, SubSchema, Tag};
use crate::value::{Field, Record};
use tracing::trace;

/// Writes `record` to `enc`, field by field, in the order `schema` dictates.
///
/// Stops at the first failed write; whatever `enc` holds by then is not a
/// usable stream.
pub fn serialize<E: Encoder + ?Sized>(schema: &Schema, record: &Record, enc: &mut E) -> Result<()> {
    ser_record(schema.root(), record, enc)
}

fn ser_record<E: Encoder + ?Sized>(shape: SubSchema<'_>, record: &Record, enc: &mut E) -> Result<()> {
    let mut fields = record.iter();

    for (tag_idx, entry) in shape.entries() {
        let field = fields.next().ok_or_else(|| Error::ShapeMismatch {
            index: tag_idx,
            expected: entry.tag().name(),
            found: "end of record",
        })?;

        match (entry, field) {
            (Entry::Scalar(Tag::Int), Field::I32(i)) => enc.write_int(*i)?,
            (Entry::Scalar(Tag::Float), Field::F32(f)) => enc.write_float(*f)?,
            (Entry::Scalar(Tag::Bool), Field::Bool(b)) => enc.write_bool(*b)?,
            (Entry::Scalar(Tag::String), Field::Str(s)) => enc.write_string(s)?,
            (Entry::List(elem_shape), Field::List(elems)) => {
                /* count */
                let count = WireLen::from_len(elems.len())?;
                trace!(tag_idx, count = *count, "Encoding list.");
                enc.write_int(*count)?;

                /* elements */
                for elem in elems {
                    ser_record(elem_shape, elem, enc)?;
                }
            }
            (entry, field) => {
                return Err(Error::ShapeMismatch {
                    index: tag_idx,
                    expected: entry.tag().name(),
                    found: Tag::from(field).name(),
                })
            }
        }
    }

    if let Some(extra) = fields.next() {
        return Err(Error::ShapeMismatch {
            index: shape.end(),
            expected: "end of record",
            found: Tag::from(extra).name(),
        });
    }

    Ok(())
}
