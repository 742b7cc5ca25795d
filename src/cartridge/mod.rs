pub mod checksum;
pub mod decoder;
pub mod header;
pub mod tables;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::cartridge::checksum::{ChecksumResult, GlobalChecksumResult};
use crate::cartridge::header::{check_len, RomHeader};
use crate::common::Byte;
use crate::error::{CartError, CartResult};

/// Raw ROM file contents, known to be long enough to hold a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartridgeImage {
  data: Vec<Byte>,
}

impl CartridgeImage {
  pub fn new(data: Vec<Byte>) -> CartResult<Self> {
    check_len(&data)?;
    Ok(Self { data })
  }

  pub fn header(&self) -> RomHeader<'_> {
    RomHeader::parse_unchecked(&self.data)
  }

  pub fn data(&self) -> &[Byte] {
    &self.data
  }
}

/// Everything a single load produces. Owned by the caller; separate loads
/// share nothing.
#[derive(Debug, Clone)]
pub struct LoadResult {
  pub path: Option<PathBuf>,
  pub image: CartridgeImage,
  pub checksum: ChecksumResult,
  pub global_checksum: GlobalChecksumResult,
  pub logo_valid: bool,
}

impl LoadResult {
  pub fn header(&self) -> RomHeader<'_> {
    self.image.header()
  }

  pub fn header_valid(&self) -> bool {
    self.checksum.passed
  }
}

pub fn load_from_data(data: Vec<Byte>) -> CartResult<LoadResult> {
  let image = CartridgeImage::new(data)?;
  let checksum = checksum::validate(image.data())?;
  let global_checksum = checksum::validate_global(image.data())?;
  let logo_valid = checksum::logo_matches(image.data())?;
  log_header(&image.header());

  if checksum.passed {
    info!("header checksum: OK");
  } else {
    warn!(
      "header checksum mismatch: computed {:#04x}, stored {:#04x}",
      checksum.computed, checksum.expected
    );
  }
  if !global_checksum.passed {
    debug!(
      "global checksum mismatch: computed {:#06x}, stored {:#06x}",
      global_checksum.computed, global_checksum.expected
    );
  }
  if !logo_valid {
    debug!("logo bitmap does not match the boot ROM's");
  }

  Ok(LoadResult {
    path: None,
    image,
    checksum,
    global_checksum,
    logo_valid,
  })
}

pub fn load_cartridge<P: AsRef<Path>>(path: P) -> CartResult<LoadResult> {
  let path = path.as_ref();
  info!("Reading ROM content from {}", path.display());
  let file = File::open(path).map_err(|e| CartError::io(e, path))?;
  let mut data = Vec::new();
  BufReader::new(file)
    .read_to_end(&mut data)
    .map_err(|e| CartError::io(e, path))?;
  debug!("read {} bytes", data.len());

  let mut result = load_from_data(data)?;
  result.path = Some(path.to_path_buf());
  Ok(result)
}

fn log_header(header: &RomHeader) {
  info!("GB ROM INFO:");
  info!("title: {:?}", header.title_text());
  info!("lic code: {:#06x}", header.licensee_code);
  info!("sgb flag: {:#04x}", header.sgb_flag);
  info!("cartridge type: {:#04x}", header.cartridge_type);
  info!("rom size: {:#04x}", header.rom_size);
  info!("ram size: {:#04x}", header.ram_size);
  info!("destination: {:#04x}", header.destination_code);
  info!("old lic code: {:#04x}", header.old_licensee_code);
  info!("mask rom version: {:#04x}", header.mask_rom_version_number);
}
