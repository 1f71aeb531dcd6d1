use anyhow::Result;
use std::collections::VecDeque;
use tagpack_types::codec::{BufEncoder, Decoder, Encoder, SliceDecoder};
use tagpack_types::schema::Schema;
use tagpack_types::value::{Field, Record};
use tagpack_types::walk::{deserialize, serialize};
use tagpack_types::{Error, Result as CrateResult};

/// Primitives kept as values rather than bytes.
#[derive(PartialEq, Debug)]
enum Prim {
    Bool(bool),
    Int(i32),
    Float(f32),
    Str(Vec<u8>),
}

#[derive(Default)]
struct Tape {
    prims: VecDeque<Prim>,
}

impl Encoder for Tape {
    fn write_bool(&mut self, it: bool) -> CrateResult<()> {
        self.prims.push_back(Prim::Bool(it));
        Ok(())
    }
    fn write_int(&mut self, it: i32) -> CrateResult<()> {
        self.prims.push_back(Prim::Int(it));
        Ok(())
    }
    fn write_float(&mut self, it: f32) -> CrateResult<()> {
        self.prims.push_back(Prim::Float(it));
        Ok(())
    }
    fn write_string(&mut self, it: &[u8]) -> CrateResult<()> {
        self.prims.push_back(Prim::Str(it.to_vec()));
        Ok(())
    }
}

impl Tape {
    fn pop(&mut self) -> CrateResult<Prim> {
        self.prims.pop_front().ok_or(Error::Truncated {
            needed: 1,
            remaining: 0,
        })
    }
}

fn unexpected(expected: &'static str, found: Prim) -> Error {
    let found = match found {
        Prim::Bool(_) => "Bool",
        Prim::Int(_) => "Int",
        Prim::Float(_) => "Float",
        Prim::Str(_) => "String",
    };
    Error::ShapeMismatch {
        index: 0,
        expected,
        found,
    }
}

impl Decoder for Tape {
    fn read_bool(&mut self) -> CrateResult<bool> {
        match self.pop()? {
            Prim::Bool(b) => Ok(b),
            other => Err(unexpected("Bool", other)),
        }
    }
    fn read_int(&mut self) -> CrateResult<i32> {
        match self.pop()? {
            Prim::Int(i) => Ok(i),
            other => Err(unexpected("Int", other)),
        }
    }
    fn read_float(&mut self) -> CrateResult<f32> {
        match self.pop()? {
            Prim::Float(f) => Ok(f),
            other => Err(unexpected("Float", other)),
        }
    }
    fn read_string(&mut self) -> CrateResult<Vec<u8>> {
        match self.pop()? {
            Prim::Str(s) => Ok(s),
            other => Err(unexpected("String", other)),
        }
    }
}

fn sample() -> Result<(Schema, Record)> {
    let schema: Schema = "b [ s [ f i ] ] i".parse()?;
    let point = |f: f32, i: i32| Record::from(vec![Field::F32(f), Field::I32(i)]);
    let record = Record::from(vec![
        Field::Bool(false),
        Field::List(vec![
            Record::from(vec![
                Field::from("first"),
                Field::List(vec![point(0.5, 1), point(-2.0, 2)]),
            ]),
            Record::from(vec![Field::from("second"), Field::List(vec![])]),
        ]),
        Field::I32(i32::MIN),
    ]);
    Ok((schema, record))
}

pub fn test_tape_transport() -> Result<()> {
    let (schema, record) = sample()?;

    let mut tape = Tape::default();
    serialize(&schema, &record, &mut tape)?;
    assert_eq!(
        tape.prims.iter().take(4).collect::<Vec<_>>(),
        vec![
            &Prim::Bool(false),
            &Prim::Int(2),
            &Prim::Str(b"first".to_vec()),
            &Prim::Int(2)
        ]
    );

    let deserialized = deserialize(&schema, &mut tape)?;
    assert_eq!(deserialized, record);
    assert!(tape.prims.is_empty());

    /* A source that runs dry mid-record. */
    let mut short = Tape::default();
    short.write_bool(true)?;
    short.write_int(1)?;
    assert!(matches!(
        deserialize(&schema, &mut short),
        Err(Error::Truncated { .. })
    ));

    /* Primitives out of order. */
    let mut swapped = Tape::default();
    swapped.write_int(0)?;
    assert_eq!(
        deserialize(&schema, &mut swapped),
        Err(Error::ShapeMismatch {
            index: 0,
            expected: "Bool",
            found: "Int"
        })
    );

    Ok(())
}

pub fn test_schema_then_record_on_one_stream() -> Result<()> {
    let (schema, record) = sample()?;

    let mut enc = BufEncoder::new();
    schema.ser(&mut enc)?;
    serialize(&schema, &record, &mut enc)?;
    let stream = enc.into_inner();

    let mut dec = SliceDecoder::new(&stream);
    let schema_read = Schema::deser(&mut dec)?;
    assert_eq!(schema_read, schema);
    assert_eq!(deserialize(&schema_read, &mut dec)?, record);
    assert_eq!(dec.remaining_len(), 0);

    Ok(())
}
