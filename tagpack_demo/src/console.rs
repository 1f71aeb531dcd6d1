use tagpack_types::codec::Encoder;
use tagpack_types::Result;

/// Prints each primitive instead of encoding it.
pub struct ConsoleEncoder;

impl Encoder for ConsoleEncoder {
    fn write_bool(&mut self, it: bool) -> Result<()> {
        println!("writing bool {}", it);
        Ok(())
    }
    fn write_int(&mut self, it: i32) -> Result<()> {
        println!("writing int {}", it);
        Ok(())
    }
    fn write_float(&mut self, it: f32) -> Result<()> {
        println!("writing float {}", it);
        Ok(())
    }
    fn write_string(&mut self, it: &[u8]) -> Result<()> {
        println!("writing string {}", String::from_utf8_lossy(it));
        Ok(())
    }
}
