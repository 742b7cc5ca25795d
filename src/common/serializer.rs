use serde::Serializer;

use crate::common::Byte;

/// Renders raw header bytes as an upper-case hex string, e.g. `00C35001`.
pub(crate) fn hex_ser<S: Serializer>(bytes: &[Byte], serializer: S) -> Result<S::Ok, S::Error> {
  serializer.serialize_str(&to_hex(bytes))
}

pub(crate) fn to_hex(bytes: &[Byte]) -> String {
  let mut out = String::with_capacity(bytes.len() * 2);
  for b in bytes {
    out.push_str(&format!("{:02X}", b));
  }
  out
}
