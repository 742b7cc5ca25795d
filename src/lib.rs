pub mod cartridge;
mod common;
pub mod error;
pub mod logger;
pub mod report;

pub use cartridge::checksum::{ChecksumResult, GlobalChecksumResult};
pub use cartridge::header::RomHeader;
pub use cartridge::{load_cartridge, load_from_data, CartridgeImage, LoadResult};
pub use error::{CartError, CartResult};
pub use report::Report;

#[macro_use]
extern crate lazy_static;
extern crate serde;
