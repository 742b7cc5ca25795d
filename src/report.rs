//! Diagnostic report for a loaded cartridge, as text lines or JSON.

use std::fmt;

use serde::Serialize;

use crate::cartridge::checksum::{ChecksumResult, GlobalChecksumResult};
use crate::cartridge::decoder;
use crate::cartridge::header::CgbSupport;
use crate::cartridge::tables::Destination;
use crate::cartridge::LoadResult;
use crate::common::serializer::{hex_ser, to_hex};
use crate::common::Byte;
use crate::error::CartResult;

/// A decoded value or the reason it couldn't be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field<T> {
  Value(T),
  Error(String),
}

impl<T> From<CartResult<T>> for Field<T> {
  fn from(r: CartResult<T>) -> Self {
    match r {
      Ok(v) => Field::Value(v),
      Err(e) => Field::Error(e.to_string()),
    }
  }
}

impl<T: fmt::Display> Field<T> {
  fn fmt_with(&self, f: &mut fmt::Formatter, suffix: &str) -> fmt::Result {
    match self {
      Field::Value(v) => write!(f, "{}{}", v, suffix),
      Field::Error(e) => write!(f, "<{}>", e),
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
  pub path: Option<String>,
  pub title: String,
  #[serde(serialize_with = "hex_ser")]
  pub entry_point: Vec<Byte>,
  pub cartridge_type_code: Byte,
  pub cartridge_type: Field<&'static str>,
  pub rom_size_code: Byte,
  pub rom_size_kib: Field<u32>,
  pub ram_size_code: Byte,
  pub ram_size_kib: Field<u32>,
  pub licensee_code: u16,
  pub licensee: &'static str,
  pub old_licensee_code: Byte,
  pub destination: Destination,
  pub sgb_support: bool,
  pub cgb_support: CgbSupport,
  pub mask_rom_version: Byte,
  pub header_valid: bool,
  pub header_checksum: ChecksumResult,
  pub global_checksum: GlobalChecksumResult,
  pub logo_valid: bool,
}

impl From<&LoadResult> for Report {
  fn from(result: &LoadResult) -> Self {
    let header = result.header();
    Self {
      path: result.path.as_ref().map(|p| p.display().to_string()),
      title: header.title_text().into_owned(),
      entry_point: header.entry_point.to_vec(),
      cartridge_type_code: header.cartridge_type,
      cartridge_type: decoder::cartridge_type_name(&header).into(),
      rom_size_code: header.rom_size,
      rom_size_kib: decoder::rom_size_kib(&header).into(),
      ram_size_code: header.ram_size,
      ram_size_kib: decoder::ram_size_kib(&header).into(),
      licensee_code: header.licensee_code,
      licensee: decoder::licensee_name(&header),
      old_licensee_code: header.old_licensee_code,
      destination: header.destination(),
      sgb_support: header.sgb_support(),
      cgb_support: header.cgb_support(),
      mask_rom_version: header.mask_rom_version_number,
      header_valid: result.header_valid(),
      header_checksum: result.checksum,
      global_checksum: result.global_checksum,
      logo_valid: result.logo_valid,
    }
  }
}

fn outcome(passed: bool) -> &'static str {
  if passed {
    "PASSED"
  } else {
    "FAILED"
  }
}

impl fmt::Display for Report {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    if let Some(path) = &self.path {
      writeln!(f, "File : {}", path)?;
    }
    writeln!(f, "Title : {}", self.title)?;
    writeln!(f, "Entry : {}", to_hex(&self.entry_point))?;
    write!(f, "Type : {:02X} (", self.cartridge_type_code)?;
    self.cartridge_type.fmt_with(f, "")?;
    writeln!(f, ")")?;
    write!(f, "ROM Size: ")?;
    self.rom_size_kib.fmt_with(f, " KiB")?;
    writeln!(f)?;
    write!(f, "RAM Size: ")?;
    self.ram_size_kib.fmt_with(f, " KiB")?;
    writeln!(f)?;
    writeln!(f, "Licensee: {:02X} ({})", self.licensee_code, self.licensee)?;
    writeln!(f, "Dest : {}", self.destination.name())?;
    writeln!(f, "SGB : {}", if self.sgb_support { "yes" } else { "no" })?;
    writeln!(f, "CGB : {:?}", self.cgb_support)?;
    writeln!(f, "Rom Vers: {:02X}", self.mask_rom_version)?;
    writeln!(
      f,
      "Checksum: {:x} ({})",
      self.header_checksum.expected,
      outcome(self.header_checksum.passed)
    )?;
    writeln!(
      f,
      "Global : {:04x} ({})",
      self.global_checksum.expected,
      outcome(self.global_checksum.passed)
    )?;
    write!(f, "Logo : {}", outcome(self.logo_valid))
  }
}
