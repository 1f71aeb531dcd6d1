//! Schema-driven binary encoding of nested records.
//!
//! A [`schema::Schema`] is a flat sequence of [`schema::Tag`]s, with lists
//! delimited by `ListStart`/`ListEnd`. [`walk::serialize`] and
//! [`walk::deserialize`] walk a schema and a [`value::Record`] in lockstep,
//! talking to any [`codec::Encoder`] or [`codec::Decoder`].

pub mod codec;
pub mod error;
pub mod schema;
pub mod value;
pub mod walk;

pub use error::{Error, Result};
