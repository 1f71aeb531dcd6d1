use crate::error::{Error, Result};
use derive_more::{Deref, From};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct TagInt(u8);
impl From<Tag> for TagInt {
    fn from(tag: Tag) -> Self {
        Self(tag as u8)
    }
}

/// Discriminants are part of the binary schema form, so they are pinned
/// rather than left to declaration order.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum Tag {
    Int = 1,
    Float = 2,
    Bool = 3,
    String = 4,
    ListStart = 5,
    ListEnd = 6,
}
impl TryFrom<TagInt> for Tag {
    type Error = Error;
    fn try_from(int: TagInt) -> Result<Self> {
        Tag::from_u8(int.0).ok_or_else(|| Error::UnknownTag(int.0.to_string()))
    }
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::Int => "Int",
            Tag::Float => "Float",
            Tag::Bool => "Bool",
            Tag::String => "String",
            Tag::ListStart => "ListStart",
            Tag::ListEnd => "ListEnd",
        }
    }

    pub fn mnemonic(self) -> char {
        match self {
            Tag::Int => 'i',
            Tag::Float => 'f',
            Tag::Bool => 'b',
            Tag::String => 's',
            Tag::ListStart => '[',
            Tag::ListEnd => ']',
        }
    }

    pub fn from_mnemonic(c: char) -> Option<Self> {
        let tag = match c {
            'i' => Tag::Int,
            'f' => Tag::Float,
            'b' => Tag::Bool,
            's' => Tag::String,
            '[' => Tag::ListStart,
            ']' => Tag::ListEnd,
            _ => return None,
        };
        Some(tag)
    }

    /// The fewest bytes a field of this tag occupies on the wire.
    /// Strings and lists count only their Int prefix.
    /// `ListEnd` occupies nothing.
    pub fn min_wire_len(self) -> usize {
        match self {
            Tag::Int | Tag::Float | Tag::String | Tag::ListStart => 4,
            Tag::Bool => 1,
            Tag::ListEnd => 0,
        }
    }
}
