pub mod serializer;

pub type Byte = u8;
pub type Address = u16;

#[inline]
pub fn read_u16_le(data: &[Byte], addr: Address) -> u16 {
  let addr = addr as usize;
  u16::from_le_bytes([data[addr], data[addr + 1]])
}

#[inline]
pub fn read_u16_be(data: &[Byte], addr: Address) -> u16 {
  let addr = addr as usize;
  u16::from_be_bytes([data[addr], data[addr + 1]])
}
