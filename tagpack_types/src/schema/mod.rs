//! # Schema
//!
//! A [`Schema`] is an ordered sequence of [`Tag`]s. Scalar tags each describe
//! one field. A `ListStart ... ListEnd` span describes one list field, whose
//! elements are records shaped by the tags strictly between the delimiters.
//! Spans nest like balanced brackets.
//!
//! ```text
//! tags:    Float Float Float String ListStart String String ListEnd Int
//! text:    f     f     f     s      [         s      s      ]       i
//! record:  { f32, f32, f32, str, [ { str, str }, ... ], i32 }
//! ```
//!
//! Bracket balance is validated once, in [`Schema::new`]. The matching
//! `ListEnd` of every `ListStart` is cached at the same time, so walking a
//! nested list is a lookup rather than a rescan.

mod brackets;
mod tag;
mod tag_seq;
mod text;

pub use brackets::*;
pub use tag::*;
pub use tag_seq::*;
