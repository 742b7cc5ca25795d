//! Code-to-description tables for the cartridge header.
//!
//! Every lookup is bounds-checked: a header byte outside a table's domain is
//! reported as a typed error (or "UNKNOWN" for the licensee table) instead of
//! being used as a raw index.

use num_enum::{FromPrimitive, IntoPrimitive};
use serde::Serialize;

use crate::common::Byte;
use crate::error::{CartError, CartResult};

pub const UNKNOWN: &str = "UNKNOWN";

pub static CARTRIDGE_TYPES: [&str; 0x23] = [
  "ROM ONLY",
  "MBC1",
  "MBC1+RAM",
  "MBC1+RAM+BATTERY",
  "0x04 ???",
  "MBC2",
  "MBC2+BATTERY",
  "0x07 ???",
  "ROM+RAM 1",
  "ROM+RAM+BATTERY 1",
  "0x0A ???",
  "MMM01",
  "MMM01+RAM",
  "MMM01+RAM+BATTERY",
  "0x0E ???",
  "MBC3+TIMER+BATTERY",
  "MBC3+TIMER+RAM+BATTERY 2",
  "MBC3",
  "MBC3+RAM 2",
  "MBC3+RAM+BATTERY 2",
  "0x14 ???",
  "0x15 ???",
  "0x16 ???",
  "0x17 ???",
  "0x18 ???",
  "MBC5",
  "MBC5+RAM",
  "MBC5+RAM+BATTERY",
  "MBC5+RUMBLE",
  "MBC5+RUMBLE+RAM",
  "MBC5+RUMBLE+RAM+BATTERY",
  "0x1F ???",
  "MBC6",
  "0x21 ???",
  "MBC7+SENSOR+RUMBLE+RAM+BATTERY",
];

/// One past the highest licensee code with a table entry.
pub const LICENSEE_TABLE_LEN: usize = 0xA5;

const LICENSEES: &[(u16, &str)] = &[
  (0x00, "None"),
  (0x01, "Nintendo R&D1"),
  (0x08, "Capcom"),
  (0x13, "Electronic Arts"),
  (0x18, "Hudson Soft"),
  (0x19, "b-ai"),
  (0x20, "kss"),
  (0x22, "pow"),
  (0x24, "PCM Complete"),
  (0x25, "san-x"),
  (0x28, "Kemco Japan"),
  (0x29, "seta"),
  (0x30, "Viacom"),
  (0x31, "Nintendo"),
  (0x32, "Bandai"),
  (0x33, "Ocean/Acclaim"),
  (0x34, "Konami"),
  (0x35, "Hector"),
  (0x37, "Taito"),
  (0x38, "Hudson"),
  (0x39, "Banpresto"),
  (0x41, "Ubi Soft"),
  (0x42, "Atlus"),
  (0x44, "Malibu"),
  (0x46, "angel"),
  (0x47, "Bullet-Proof"),
  (0x49, "irem"),
  (0x50, "Absolute"),
  (0x51, "Acclaim"),
  (0x52, "Activision"),
  (0x53, "American sammy"),
  (0x54, "Konami"),
  (0x55, "Hi tech entertainment"),
  (0x56, "LJN"),
  (0x57, "Matchbox"),
  (0x58, "Mattel"),
  (0x59, "Milton Bradley"),
  (0x60, "Titus"),
  (0x61, "Virgin"),
  (0x64, "LucasArts"),
  (0x67, "Ocean"),
  (0x69, "Electronic Arts"),
  (0x70, "Infogrames"),
  (0x71, "Interplay"),
  (0x72, "Broderbund"),
  (0x73, "sculptured"),
  (0x75, "sci"),
  (0x78, "THQ"),
  (0x79, "Accolade"),
  (0x80, "misawa"),
  (0x83, "lozc"),
  (0x86, "Tokuma Shoten Intermedia"),
  (0x87, "Tsukuda Original"),
  (0x91, "Chunsoft"),
  (0x92, "Video system"),
  (0x93, "Ocean/Acclaim"),
  (0x95, "Varie"),
  (0x96, "Yonezawa/s’pal"),
  (0x97, "Kaneko"),
  (0x99, "Pack in soft"),
  (0xA4, "Konami (Yu-Gi-Oh!)"),
];

lazy_static! {
  static ref LICENSEE_TABLE: [Option<&'static str>; LICENSEE_TABLE_LEN] = {
    let mut table = [None; LICENSEE_TABLE_LEN];
    for (code, name) in LICENSEES {
      table[*code as usize] = Some(*name);
    }
    table
  };
}

pub const MAX_ROM_SIZE_CODE: Byte = 8;

/// KiB, indexed by the header's RAM size code.
pub static RAM_SIZE_MAP: [u32; 6] = [0, 0, 8, 32, 128, 64];

pub fn cartridge_type(code: Byte) -> CartResult<&'static str> {
  CARTRIDGE_TYPES
    .get(code as usize)
    .copied()
    .ok_or(CartError::UnsupportedCartridgeType(code))
}

pub fn licensee(code: u16) -> &'static str {
  LICENSEE_TABLE
    .get(code as usize)
    .copied()
    .flatten()
    .unwrap_or(UNKNOWN)
}

pub fn rom_size_kib(code: Byte) -> CartResult<u32> {
  if code > MAX_ROM_SIZE_CODE {
    return Err(CartError::UnsupportedRomSize(code));
  }
  Ok(32 * (1 << code))
}

pub fn ram_size_kib(code: Byte) -> CartResult<u32> {
  RAM_SIZE_MAP
    .get(code as usize)
    .copied()
    .ok_or(CartError::UnsupportedRamSize(code))
}

#[derive(Debug, Clone, Copy, IntoPrimitive, FromPrimitive, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum Destination {
  Japanese = 0x00,
  Overseas = 0x01,
  #[num_enum(default)]
  Unknown = 0xFF,
}

impl Destination {
  pub fn name(&self) -> &'static str {
    match self {
      Destination::Japanese => "Japanese",
      Destination::Overseas => "Overseas only",
      Destination::Unknown => UNKNOWN,
    }
  }
}

/// Boot ROM compares this against 0x104..0x134 and locks up on mismatch.
pub static NINTENDO_LOGO: [Byte; 0x30] = [
  0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D,
  0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99,
  0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E,
];
