use crate::codec::{Decoder, Encoder};
use crate::error::{Error, Result};
use crate::schema::{Schema, Tag, TagInt};
use std::fmt;
use std::str::FromStr;

/* Text form: one mnemonic per tag. Whitespace and commas are separators. */
impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in self.tags() {
            write!(f, "{}", tag.mnemonic())?;
        }
        Ok(())
    }
}
impl FromStr for Schema {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let mut tags = vec![];
        for c in s.chars() {
            if c.is_whitespace() || c == ',' {
                continue;
            }
            let tag = Tag::from_mnemonic(c).ok_or_else(|| Error::UnknownTag(c.to_string()))?;
            tags.push(tag);
        }
        Schema::new(tags)
    }
}

/* Binary form: Int(tags_count), then one u8 per tag. This is the String layout. */
impl Schema {
    pub fn ser<E: Encoder + ?Sized>(&self, enc: &mut E) -> Result<()> {
        let tag_ints = self
            .tags()
            .iter()
            .map(|tag| *TagInt::from(*tag))
            .collect::<Vec<u8>>();
        enc.write_string(&tag_ints)
    }

    pub fn deser<D: Decoder + ?Sized>(dec: &mut D) -> Result<Self> {
        let tag_ints = dec.read_string()?;
        let tags = tag_ints
            .into_iter()
            .map(|int| Tag::try_from(TagInt::from(int)))
            .collect::<Result<Vec<_>>>()?;
        Schema::new(tags)
    }
}
