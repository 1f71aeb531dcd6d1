use crate::codec::WireLen;
use crate::error::{Error, Result};

/// A source of primitives, read in the order they were written.
pub trait Decoder {
    fn read_bool(&mut self) -> Result<bool>;
    fn read_int(&mut self) -> Result<i32>;
    fn read_float(&mut self) -> Result<f32>;
    fn read_string(&mut self) -> Result<Vec<u8>>;

    /// Bytes left in the underlying stream, if the source knows.
    /// Lets callers reject length prefixes that cannot possibly be satisfied.
    fn remaining(&self) -> Option<usize> {
        None
    }
}

impl<D: Decoder + ?Sized> Decoder for &mut D {
    fn read_bool(&mut self) -> Result<bool> {
        (**self).read_bool()
    }
    fn read_int(&mut self) -> Result<i32> {
        (**self).read_int()
    }
    fn read_float(&mut self) -> Result<f32> {
        (**self).read_float()
    }
    fn read_string(&mut self) -> Result<Vec<u8>> {
        (**self).read_string()
    }
    fn remaining(&self) -> Option<usize> {
        (**self).remaining()
    }
}

/// Decoder over a borrowed block. The cursor does not move on a failed read.
#[derive(Clone, Debug)]
pub struct SliceDecoder<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SliceDecoder<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }
    pub fn position(&self) -> usize {
        self.pos
    }
    pub fn remaining_len(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining_len();
        if len > remaining {
            return Err(Error::Truncated {
                needed: len,
                remaining,
            });
        }
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }
    fn take_array<const LEN: usize>(&mut self) -> Result<[u8; LEN]> {
        let mut arr = [0u8; LEN];
        arr.copy_from_slice(self.take(LEN)?);
        Ok(arr)
    }
}

impl<'a> Decoder for SliceDecoder<'a> {
    fn read_bool(&mut self) -> Result<bool> {
        let [byte] = self.take_array::<1>()?;
        match byte {
            0 => Ok(false),
            1 => Ok(true),
            _ => {
                self.pos -= 1;
                Err(Error::InvalidBool(byte))
            }
        }
    }
    fn read_int(&mut self) -> Result<i32> {
        let buf = self.take_array::<4>()?;
        Ok(i32::from_le_bytes(buf))
    }
    fn read_float(&mut self) -> Result<f32> {
        let buf = self.take_array::<4>()?;
        Ok(f32::from_le_bytes(buf))
    }
    fn read_string(&mut self) -> Result<Vec<u8>> {
        let start = self.pos;
        let res = WireLen::from(self.read_int()?)
            .to_usize()
            .and_then(|len| self.take(len));
        match res {
            Ok(body) => Ok(body.to_vec()),
            Err(e) => {
                self.pos = start;
                Err(e)
            }
        }
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.remaining_len())
    }
}
