use crate::codec::WireLen;
use crate::error::{Error, Result};
use derive_more::{From, Into};

/// A sink of primitives.
///
/// A failed write must leave nothing of the failed primitive behind.
pub trait Encoder {
    fn write_bool(&mut self, it: bool) -> Result<()>;
    fn write_int(&mut self, it: i32) -> Result<()>;
    fn write_float(&mut self, it: f32) -> Result<()>;
    fn write_string(&mut self, it: &[u8]) -> Result<()>;
}

impl<E: Encoder + ?Sized> Encoder for &mut E {
    fn write_bool(&mut self, it: bool) -> Result<()> {
        (**self).write_bool(it)
    }
    fn write_int(&mut self, it: i32) -> Result<()> {
        (**self).write_int(it)
    }
    fn write_float(&mut self, it: f32) -> Result<()> {
        (**self).write_float(it)
    }
    fn write_string(&mut self, it: &[u8]) -> Result<()> {
        (**self).write_string(it)
    }
}

/// Unbounded encoder over a growable buffer.
#[derive(From, Into, Default, Debug)]
pub struct BufEncoder {
    buf: Vec<u8>,
}

impl BufEncoder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
    pub fn len(&self) -> usize {
        self.buf.len()
    }
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

impl Encoder for BufEncoder {
    fn write_bool(&mut self, it: bool) -> Result<()> {
        self.buf.push(u8::from(it));
        Ok(())
    }
    fn write_int(&mut self, it: i32) -> Result<()> {
        self.buf.extend_from_slice(&it.to_le_bytes());
        Ok(())
    }
    fn write_float(&mut self, it: f32) -> Result<()> {
        self.buf.extend_from_slice(&it.to_le_bytes());
        Ok(())
    }
    fn write_string(&mut self, it: &[u8]) -> Result<()> {
        let len = WireLen::from_len(it.len())?;
        self.buf.reserve(4 + it.len());
        self.write_int(*len)?;
        self.buf.extend_from_slice(it);
        Ok(())
    }
}

/// Bounded encoder over a caller-provided block.
pub struct SliceEncoder<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceEncoder<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }
    pub fn position(&self) -> usize {
        self.pos
    }
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    fn check_space(&self, needed: usize) -> Result<()> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(Error::OutOfSpace { needed, remaining });
        }
        Ok(())
    }
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.check_space(bytes.len())?;
        let end = self.pos + bytes.len();
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }
}

impl<'a> Encoder for SliceEncoder<'a> {
    fn write_bool(&mut self, it: bool) -> Result<()> {
        self.put(&[u8::from(it)])
    }
    fn write_int(&mut self, it: i32) -> Result<()> {
        self.put(&it.to_le_bytes())
    }
    fn write_float(&mut self, it: f32) -> Result<()> {
        self.put(&it.to_le_bytes())
    }
    fn write_string(&mut self, it: &[u8]) -> Result<()> {
        let len = WireLen::from_len(it.len())?;
        /* Prefix and body succeed or fail together. */
        self.check_space(4 + it.len())?;
        self.put(&len.to_le_bytes())?;
        self.put(it)
    }
}

/// Counts the bytes a [`BufEncoder`] would produce, without storing them.
#[derive(Default, Debug)]
pub struct LenEncoder {
    len: usize,
}

impl LenEncoder {
    pub fn encoded_len(&self) -> usize {
        self.len
    }
}

impl Encoder for LenEncoder {
    fn write_bool(&mut self, _it: bool) -> Result<()> {
        self.len += 1;
        Ok(())
    }
    fn write_int(&mut self, _it: i32) -> Result<()> {
        self.len += 4;
        Ok(())
    }
    fn write_float(&mut self, _it: f32) -> Result<()> {
        self.len += 4;
        Ok(())
    }
    fn write_string(&mut self, it: &[u8]) -> Result<()> {
        WireLen::from_len(it.len())?;
        self.len += 4 + it.len();
        Ok(())
    }
}
