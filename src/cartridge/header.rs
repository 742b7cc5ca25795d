use std::borrow::Cow;

use serde::Serialize;

use crate::cartridge::tables::Destination;
use crate::common::*;
use crate::error::{CartError, CartResult};

pub const HEADER_END: Address = 0x150;

pub const ENTRY_POINT: Address = 0x100;
pub const LOGO: Address = 0x104;
pub const TITLE: Address = 0x134;
pub const CGB_FLAG: Address = 0x143;
pub const LICENSEE_CODE: Address = 0x144;
pub const SGB_FLAG: Address = 0x146;
pub const CARTRIDGE_TYPE: Address = 0x147;
pub const ROM_SIZE: Address = 0x148;
pub const RAM_SIZE: Address = 0x149;
pub const DESTINATION_CODE: Address = 0x14A;
pub const OLD_LICENSEE_CODE: Address = 0x14B;
pub const MASK_ROM_VERSION: Address = 0x14C;
pub const HEADER_CHECKSUM: Address = 0x14D;
pub const GLOBAL_CHECKSUM: Address = 0x14E;

pub const ENTRY_POINT_LEN: usize = 4;
pub const TITLE_LEN: usize = 16;
pub const LOGO_LEN: usize = 0x30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CgbSupport {
  None,
  Enhanced,
  CgbOnly,
}

/// Read-only view over the header window `0x100..0x150` of a ROM image.
///
/// Raw byte fields borrow from the image; integer fields are decoded with the
/// endianness fixed by the cartridge format rather than the host's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomHeader<'a> {
  pub entry_point: &'a [Byte],
  pub logo: &'a [Byte],
  /// Last byte is always zero, see `title_text`.
  pub title: [Byte; TITLE_LEN],
  pub licensee_code: u16,
  pub sgb_flag: Byte,
  pub cartridge_type: Byte,
  pub rom_size: Byte,
  pub ram_size: Byte,
  pub destination_code: Byte,
  /// Decoded but not consulted by the licensee lookup.
  pub old_licensee_code: Byte,
  pub mask_rom_version_number: Byte,
  pub header_checksum: Byte,
  pub global_checksum: u16,
  cgb_flag: Byte,
}

pub(crate) fn check_len(data: &[Byte]) -> CartResult<()> {
  if data.len() < HEADER_END as usize {
    return Err(CartError::TruncatedImage {
      len: data.len(),
      expected: HEADER_END as usize,
    });
  }
  Ok(())
}

fn slice_at(data: &[Byte], addr: Address, len: usize) -> &[Byte] {
  let start = addr as usize;
  &data[start..start + len]
}

impl<'a> RomHeader<'a> {
  pub fn parse(data: &'a [Byte]) -> CartResult<Self> {
    check_len(data)?;
    Ok(Self::parse_unchecked(data))
  }

  /// Caller guarantees `data.len() >= HEADER_END`.
  pub(crate) fn parse_unchecked(data: &'a [Byte]) -> Self {
    let mut title = [0; TITLE_LEN];
    title.copy_from_slice(slice_at(data, TITLE, TITLE_LEN));
    title[TITLE_LEN - 1] = 0;
    Self {
      entry_point: slice_at(data, ENTRY_POINT, ENTRY_POINT_LEN),
      logo: slice_at(data, LOGO, LOGO_LEN),
      title,
      licensee_code: read_u16_le(data, LICENSEE_CODE),
      sgb_flag: data[SGB_FLAG as usize],
      cartridge_type: data[CARTRIDGE_TYPE as usize],
      rom_size: data[ROM_SIZE as usize],
      ram_size: data[RAM_SIZE as usize],
      destination_code: data[DESTINATION_CODE as usize],
      old_licensee_code: data[OLD_LICENSEE_CODE as usize],
      mask_rom_version_number: data[MASK_ROM_VERSION as usize],
      header_checksum: data[HEADER_CHECKSUM as usize],
      global_checksum: read_u16_be(data, GLOBAL_CHECKSUM),
      cgb_flag: data[CGB_FLAG as usize],
    }
  }

  /// Title bytes up to the first zero.
  pub fn title_bytes(&self) -> &[Byte] {
    let end = self
      .title
      .iter()
      .position(|b| *b == 0)
      .unwrap_or(TITLE_LEN);
    &self.title[..end]
  }

  pub fn title_text(&self) -> Cow<'_, str> {
    String::from_utf8_lossy(self.title_bytes())
  }

  /// Taken from the raw image: the byte shares its slot with the title's
  /// last character, which the view zeroes.
  pub fn cgb_support(&self) -> CgbSupport {
    match self.cgb_flag {
      0x80 => CgbSupport::Enhanced,
      0xC0 => CgbSupport::CgbOnly,
      _ => CgbSupport::None,
    }
  }

  pub fn sgb_support(&self) -> bool {
    self.sgb_flag == 0x03
  }

  pub fn destination(&self) -> Destination {
    Destination::from(self.destination_code)
  }
}
