//! Human-readable answers about a parsed header. Each call is independent;
//! an unsupported code only fails the call that looked it up.

use crate::cartridge::header::RomHeader;
use crate::cartridge::tables;
use crate::error::CartResult;

pub fn cartridge_type_name(header: &RomHeader) -> CartResult<&'static str> {
  tables::cartridge_type(header.cartridge_type)
}

/// Always resolved from the two-byte licensee field; `old_licensee_code` is
/// never consulted.
pub fn licensee_name(header: &RomHeader) -> &'static str {
  tables::licensee(header.licensee_code)
}

pub fn rom_size_kib(header: &RomHeader) -> CartResult<u32> {
  tables::rom_size_kib(header.rom_size)
}

pub fn ram_size_kib(header: &RomHeader) -> CartResult<u32> {
  tables::ram_size_kib(header.ram_size)
}

pub fn destination_name(header: &RomHeader) -> &'static str {
  header.destination().name()
}
