use anyhow::Result;
use rand::rngs::ThreadRng;
use rand::Rng;
use tagpack_types::codec::{SliceDecoder, SliceEncoder};
use tagpack_types::schema::{Entry, Schema, SubSchema, Tag};
use tagpack_types::value::{Field, Record};
use tagpack_types::walk::{deserialize, encoded_len, from_bytes, serialize, to_bytes};
use tagpack_types::Error;

const MAX_DEPTH: usize = 3;
const MAX_FIELDS: usize = 4;
const MAX_ELEMS: usize = 3;

fn gen_tags(rng: &mut ThreadRng, depth: usize, tags: &mut Vec<Tag>) {
    for _ in 0..rng.gen_range(0..=MAX_FIELDS) {
        match rng.gen_range(0..5) {
            0 => tags.push(Tag::Int),
            1 => tags.push(Tag::Float),
            2 => tags.push(Tag::Bool),
            3 => tags.push(Tag::String),
            _ if depth < MAX_DEPTH => {
                tags.push(Tag::ListStart);
                let elem_start = tags.len();
                gen_tags(rng, depth + 1, tags);
                if tags.len() == elem_start {
                    tags.push(Tag::Bool);
                }
                tags.push(Tag::ListEnd);
            }
            _ => tags.push(Tag::Int),
        }
    }
}

fn gen_record(rng: &mut ThreadRng, shape: SubSchema<'_>) -> Record {
    shape
        .entries()
        .map(|(_, entry)| match entry {
            Entry::Scalar(Tag::Int) => Field::I32(rng.gen()),
            Entry::Scalar(Tag::Float) => Field::F32(rng.gen_range(-1e6..1e6)),
            Entry::Scalar(Tag::Bool) => Field::Bool(rng.gen()),
            Entry::Scalar(_) => {
                let len = rng.gen_range(0..8);
                Field::Str((0..len).map(|_| rng.gen()).collect())
            }
            Entry::List(elem_shape) => {
                let count = rng.gen_range(0..=MAX_ELEMS);
                Field::List((0..count).map(|_| gen_record(rng, elem_shape)).collect())
            }
        })
        .collect()
}

pub fn test_random_records(rounds: usize) -> Result<()> {
    let mut rng = rand::thread_rng();

    for _ in 0..rounds {
        let mut tags = vec![];
        gen_tags(&mut rng, 0, &mut tags);
        let schema = Schema::new(tags)?;
        let record = gen_record(&mut rng, schema.root());

        let serialized = to_bytes(&schema, &record)?;
        assert_eq!(serialized, to_bytes(&schema, &record)?);
        assert_eq!(serialized.len(), encoded_len(&schema, &record)?);
        assert_eq!(from_bytes(&schema, &serialized)?, record, "\n{}\n", schema);

        /* Same stream through the streaming decoder, with a sentinel after it. */
        let mut padded = serialized.clone();
        padded.push(0xaa);
        let mut dec = SliceDecoder::new(&padded);
        assert_eq!(deserialize(&schema, &mut dec)?, record);
        assert_eq!(dec.remaining_len(), 1);

        /* One byte short of the encoded size never fits. */
        if !serialized.is_empty() {
            let mut block = vec![0u8; serialized.len() - 1];
            let mut enc = SliceEncoder::new(&mut block);
            match serialize(&schema, &record, &mut enc) {
                Err(Error::OutOfSpace { .. }) => {}
                other => panic!("{:?}\n{}", other, schema),
            }

            let cut = rng.gen_range(0..serialized.len());
            match from_bytes(&schema, &serialized[..cut]) {
                Err(Error::Truncated { .. }) => {}
                other => panic!("cut {}: {:?}\n{}", cut, other, schema),
            }
        }
    }

    Ok(())
}
