use anyhow::{anyhow, Result};
use tagpack_types::schema::Schema;
use tagpack_types::value::{Field, Record};

/// `{ r, g, b: f32, text: str, pairs: [(str, str)], a: i32 }`
pub fn example() -> Result<(Schema, Record)> {
    let schema: Schema = "fff s [ss] i".parse()?;
    let color = Record::from(vec![
        Field::F32(12.0),
        Field::F32(18.0),
        Field::F32(24.0),
        Field::from("UwU :3"),
        Field::List(vec![Record::from(vec![
            Field::from("OwO"),
            Field::from("AwA"),
        ])]),
        Field::I32(69),
    ]);
    Ok((schema, color))
}

/// Renders `r g b text first-of-first-pair a`.
pub fn describe(color: &Record) -> Result<String> {
    let field = move |idx: usize| {
        color
            .get(idx)
            .ok_or_else(|| anyhow!("Color has no field {}.", idx))
    };
    let float = |idx: usize| -> Result<f32> {
        field(idx)?
            .as_f32()
            .ok_or_else(|| anyhow!("Field {} is not a Float.", idx))
    };
    let text = |field: &Field| -> String {
        field
            .as_bytes()
            .map(|b| String::from_utf8_lossy(b).into_owned())
            .unwrap_or_default()
    };

    let first = field(4)?
        .as_list()
        .and_then(|pairs| pairs.first())
        .and_then(|pair| pair.first())
        .map(text)
        .unwrap_or_default();
    let a = field(5)?
        .as_i32()
        .ok_or_else(|| anyhow!("Field 5 is not an Int."))?;

    Ok(format!(
        "{} {} {} {} {} {}",
        float(0)?,
        float(1)?,
        float(2)?,
        text(field(3)?),
        first,
        a
    ))
}
