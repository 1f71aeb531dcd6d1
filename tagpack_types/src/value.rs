use crate::schema::Tag;
use derive_more::{Deref, DerefMut, From, Into};

/// One field of a [`Record`].
///
/// Text is kept as raw bytes; the wire format carries any byte value.
#[derive(From, PartialEq, Clone, Debug)]
pub enum Field {
    I32(i32),
    F32(f32),
    Bool(bool),
    Str(Vec<u8>),
    List(Vec<Record>),
}
impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Self::Str(s.as_bytes().to_vec())
    }
}
impl From<String> for Field {
    fn from(s: String) -> Self {
        Self::Str(s.into_bytes())
    }
}
impl From<&Field> for Tag {
    fn from(field: &Field) -> Self {
        match field {
            Field::I32(_) => Tag::Int,
            Field::F32(_) => Tag::Float,
            Field::Bool(_) => Tag::Bool,
            Field::Str(_) => Tag::String,
            Field::List(_) => Tag::ListStart,
        }
    }
}

impl Field {
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::I32(i) => Some(*i),
            _ => None,
        }
    }
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::F32(f) => Some(*f),
            _ => None,
        }
    }
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
    /// `None` if this is not a string field, or if it is not UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }
    pub fn as_list(&self) -> Option<&[Record]> {
        match self {
            Self::List(elems) => Some(elems),
            _ => None,
        }
    }
}

/// A value shaped by a schema: one [`Field`] per top-level scalar tag or
/// list span, in schema order.
///
/// Dropping a record releases its whole tree.
#[derive(From, Into, Deref, DerefMut, PartialEq, Clone, Default, Debug)]
pub struct Record(Vec<Field>);

impl Record {
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }
}
impl FromIterator<Field> for Record {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
