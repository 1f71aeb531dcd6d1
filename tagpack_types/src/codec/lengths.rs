use crate::error::{Error, Result};
use derive_more::{Deref, From};

/// The Int prefix of a String body or a List's elements.
#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct WireLen(i32);
impl WireLen {
    pub fn from_len(len: usize) -> Result<Self> {
        i32::try_from(len)
            .map(Self)
            .map_err(|_| Error::LengthOverflow(len))
    }
    pub fn to_usize(self) -> Result<usize> {
        usize::try_from(self.0).map_err(|_| Error::InvalidLength(self.0))
    }
}
