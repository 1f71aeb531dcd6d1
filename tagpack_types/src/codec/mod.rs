//! # Wire format
//!
//! [`Encoder`] and [`Decoder`] are the primitive capabilities the schema
//! walkers talk to. [`BufEncoder`], [`SliceEncoder`] and [`SliceDecoder`] are
//! the reference byte implementations, and define the format below.
//!
//! All multi-byte integers and floats are little endian.
//! Nothing is self-describing; the reader must hold the same schema as the writer.
//!
//! ```text
//! struct Int {
//!     body:       [u8; 4],    // two's complement
//! }
//!
//! struct Float {
//!     body:       [u8; 4],    // IEEE-754 binary32
//! }
//!
//! struct Bool {
//!     body:       u8,         // 0 or 1; anything else is rejected on read
//! }
//!
//! struct String {
//!     len:        Int,
//!     body:       [u8; len],  // raw, unterminated
//! }
//!
//! struct List {
//!     count:      Int,
//!     element_0:  { fields of the nested schema, in order },
//!     ...
//!     element_n:  { ... },    // n == count - 1
//! }
//! ```
//!
//! A record is its fields concatenated in schema order, with no framing.

mod decoder;
mod encoder;
mod lengths;

pub use decoder::*;
pub use encoder::*;
pub use lengths::*;
