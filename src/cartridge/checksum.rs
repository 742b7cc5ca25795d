use serde::Serialize;

use crate::cartridge::header::*;
use crate::cartridge::tables::NINTENDO_LOGO;
use crate::common::*;
use crate::error::CartResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecksumResult {
  pub computed: Byte,
  pub expected: Byte,
  pub passed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlobalChecksumResult {
  pub computed: u16,
  pub expected: u16,
  pub passed: bool,
}

/// Header checksum over the title through the mask ROM version byte.
pub fn header_checksum(data: &[Byte]) -> CartResult<Byte> {
  check_len(data)?;
  let mut calc_checksum: Byte = 0;
  for addr in TITLE..=MASK_ROM_VERSION {
    calc_checksum = calc_checksum
      .wrapping_sub(data[addr as usize])
      .wrapping_sub(1);
  }
  Ok(calc_checksum)
}

pub fn validate(data: &[Byte]) -> CartResult<ChecksumResult> {
  let computed = header_checksum(data)?;
  let expected = data[HEADER_CHECKSUM as usize];
  Ok(ChecksumResult {
    computed,
    expected,
    passed: computed == expected,
  })
}

/// 16-bit sum of every byte in the image except the global checksum itself.
/// Real hardware never checks it.
pub fn validate_global(data: &[Byte]) -> CartResult<GlobalChecksumResult> {
  check_len(data)?;
  let skip = GLOBAL_CHECKSUM as usize..=GLOBAL_CHECKSUM as usize + 1;
  let computed = data
    .iter()
    .enumerate()
    .filter(|(i, _)| !skip.contains(i))
    .fold(0u16, |sum, (_, b)| sum.wrapping_add(*b as u16));
  let expected = read_u16_be(data, GLOBAL_CHECKSUM);
  Ok(GlobalChecksumResult {
    computed,
    expected,
    passed: computed == expected,
  })
}

pub fn logo_matches(data: &[Byte]) -> CartResult<bool> {
  let header = RomHeader::parse(data)?;
  Ok(header.logo == &NINTENDO_LOGO[..])
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::CartError;

  fn reference_checksum(data: &[u8]) -> u8 {
    let mut acc: i32 = 0;
    for addr in 0x134..=0x14C {
      acc = (acc - data[addr] as i32 - 1).rem_euclid(256);
    }
    acc as u8
  }

  #[test]
  fn zeroed_header_test() {
    // 0x134..=0x14C is 25 bytes: 0 - 25 wraps to 0xE7
    let data = vec![0; 0x150];
    let result = validate(&data).unwrap();
    assert_eq!(result.computed, 0xE7);
    assert_eq!(result.expected, 0);
    assert!(!result.passed);
  }

  #[test]
  fn pass_fail_test() {
    let mut data = vec![0; 0x150];
    data[0x134..0x140].copy_from_slice(b"TETRIS\0\0\0\0\0\0");
    data[0x14C] = 0x01;
    let computed = header_checksum(&data).unwrap();
    data[0x14D] = computed;
    assert!(validate(&data).unwrap().passed);

    data[0x14D] = computed.wrapping_add(1);
    let result = validate(&data).unwrap();
    assert!(!result.passed);
    assert_eq!(result.computed, computed);
  }

  #[test]
  fn matches_reference_arithmetic() {
    let mut data = vec![0; 0x150];
    let mut seed: u32 = 0x1234_5678;
    for round in 0..64 {
      for b in data.iter_mut() {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
        *b = (seed >> 16) as u8;
      }
      if round % 2 == 0 {
        data[0x14D] = reference_checksum(&data);
      }
      let result = validate(&data).unwrap();
      assert_eq!(result.computed, reference_checksum(&data));
      assert_eq!(result.passed, result.computed == data[0x14D]);
    }
  }

  #[test]
  fn bytes_outside_range_are_ignored() {
    let mut data = vec![0xAA; 0x200];
    let before = header_checksum(&data).unwrap();
    data[0x133] = 0;
    data[0x14E] = 0;
    data[0x1FF] = 0;
    assert_eq!(header_checksum(&data).unwrap(), before);
  }

  #[test]
  fn truncated_test() {
    assert!(matches!(
      validate(&[0; 0x14D]),
      Err(CartError::TruncatedImage { .. })
    ));
    assert!(validate_global(&[0; 0x10]).is_err());
  }

  #[test]
  fn global_checksum_test() {
    let mut data = vec![1; 0x200];
    data[0x14E] = 0xFF;
    data[0x14F] = 0xFF;
    let result = validate_global(&data).unwrap();
    assert_eq!(result.computed, 0x200 - 2);
    assert_eq!(result.expected, 0xFFFF);
    assert!(!result.passed);

    data[0x14E] = 0x01;
    data[0x14F] = 0xFE;
    assert!(validate_global(&data).unwrap().passed);
  }

  #[test]
  fn global_checksum_wraps() {
    let data = vec![0xFF; 0x8000];
    let expected = ((0x8000u32 - 2) * 0xFF) as u16;
    assert_eq!(validate_global(&data).unwrap().computed, expected);
  }

  #[test]
  fn logo_test() {
    let mut data = vec![0; 0x150];
    assert!(!logo_matches(&data).unwrap());
    data[0x104..0x134].copy_from_slice(&NINTENDO_LOGO);
    assert!(logo_matches(&data).unwrap());
  }
}
