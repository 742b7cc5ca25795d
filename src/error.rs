use std::path::PathBuf;

use thiserror::Error;

pub type CartResult<T> = std::result::Result<T, CartError>;

#[derive(Error, Debug)]
pub enum CartError {
  #[error("can't read ROM file {path:?}: {source}")]
  Io {
    path: PathBuf,
    source: std::io::Error,
  },

  #[error("ROM image is too small to contain a header (got {len} bytes, expected at least {expected})")]
  TruncatedImage { len: usize, expected: usize },

  #[error("unsupported cartridge type 0x{0:02X}")]
  UnsupportedCartridgeType(u8),

  #[error("unsupported ROM size code 0x{0:02X}")]
  UnsupportedRomSize(u8),

  #[error("unsupported RAM size code 0x{0:02X}")]
  UnsupportedRamSize(u8),
}

impl CartError {
  pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
    Self::Io {
      path: path.into(),
      source,
    }
  }
}
