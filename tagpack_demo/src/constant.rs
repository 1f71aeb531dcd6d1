use tagpack_types::codec::Decoder;
use tagpack_types::Result;

/// Answers every read with the same value. List counts come out as 10.
pub struct ConstDecoder;

impl Decoder for ConstDecoder {
    fn read_bool(&mut self) -> Result<bool> {
        Ok(false)
    }
    fn read_int(&mut self) -> Result<i32> {
        Ok(10)
    }
    fn read_float(&mut self) -> Result<f32> {
        Ok(10.0)
    }
    fn read_string(&mut self) -> Result<Vec<u8>> {
        Ok(b"UwU".to_vec())
    }
}
