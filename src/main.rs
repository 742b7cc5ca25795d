use std::process;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use gb_cart_header::{load_cartridge, logger, Report};

#[derive(Parser, Debug)]
#[clap(about, version, author)]
struct Args {
  /// Game Boy ROM image to inspect
  rom_path: String,

  /// Print the report as JSON
  #[clap(long)]
  json: bool,

  /// Exit with status 2 when the header checksum fails
  #[clap(long)]
  strict: bool,

  #[clap(short, long, default_value = "warn")]
  log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
  Text,
  Json,
}

#[derive(Debug, Clone)]
struct RuntimeConfig {
  rom_path: String,
  output: OutputFormat,
  strict: bool,
  log_level: LevelFilter,
}

impl From<Args> for RuntimeConfig {
  fn from(args: Args) -> Self {
    Self {
      rom_path: args.rom_path,
      output: if args.json {
        OutputFormat::Json
      } else {
        OutputFormat::Text
      },
      strict: args.strict,
      log_level: args.log_level,
    }
  }
}

/// Returns whether the header checksum passed.
fn run(config: &RuntimeConfig) -> anyhow::Result<bool> {
  let result = load_cartridge(&config.rom_path)
    .with_context(|| format!("Failed to load rom {}", config.rom_path))?;
  let report = Report::from(&result);
  match config.output {
    OutputFormat::Text => println!("{}", report),
    OutputFormat::Json => println!(
      "{}",
      serde_json::to_string_pretty(&report).context("Failed to serialize report")?
    ),
  }
  Ok(result.header_valid())
}

const EXIT_OK: i32 = 0;
const EXIT_LOAD_ERROR: i32 = 1;
const EXIT_BAD_CHECKSUM: i32 = 2;

fn exit_code(outcome: &anyhow::Result<bool>, strict: bool) -> i32 {
  match outcome {
    Ok(true) => EXIT_OK,
    Ok(false) if strict => EXIT_BAD_CHECKSUM,
    Ok(false) => EXIT_OK,
    Err(_) => EXIT_LOAD_ERROR,
  }
}

fn main() {
  let config = RuntimeConfig::from(Args::parse());
  if logger::init(config.log_level).is_err() {
    return;
  }
  let outcome = run(&config);
  if let Err(e) = &outcome {
    eprintln!("{:#}", e);
  }
  let code = exit_code(&outcome, config.strict);
  if code != EXIT_OK {
    process::exit(code);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn config(rom_path: &str, strict: bool) -> RuntimeConfig {
    RuntimeConfig {
      rom_path: rom_path.to_string(),
      output: OutputFormat::Text,
      strict,
      log_level: LevelFilter::Off,
    }
  }

  fn write_rom(name: &str, valid: bool) -> std::path::PathBuf {
    let mut data = vec![0; 0x150];
    data[0x134..0x13A].copy_from_slice(b"TETRIS");
    let mut sum: u8 = 0;
    for b in &data[0x134..=0x14C] {
      sum = sum.wrapping_sub(*b).wrapping_sub(1);
    }
    data[0x14D] = if valid { sum } else { sum.wrapping_add(1) };
    let path = std::env::temp_dir().join(format!("gb_cart_header_main_{}_{}.gb", name, std::process::id()));
    std::fs::write(&path, &data).unwrap();
    path
  }

  #[test]
  fn exit_code_test() {
    assert_eq!(exit_code(&Ok(true), false), EXIT_OK);
    assert_eq!(exit_code(&Ok(true), true), EXIT_OK);
    assert_eq!(exit_code(&Ok(false), false), EXIT_OK);
    assert_eq!(exit_code(&Ok(false), true), EXIT_BAD_CHECKSUM);
    assert_eq!(exit_code(&Err(anyhow::anyhow!("boom")), false), EXIT_LOAD_ERROR);
    assert_eq!(exit_code(&Err(anyhow::anyhow!("boom")), true), EXIT_LOAD_ERROR);
  }

  #[test]
  fn run_exit_codes() {
    let good = write_rom("good", true);
    let bad = write_rom("bad", false);
    let good_path = good.to_string_lossy().into_owned();
    let bad_path = bad.to_string_lossy().into_owned();

    let c = config(&good_path, true);
    assert_eq!(exit_code(&run(&c), c.strict), EXIT_OK);
    let c = config(&bad_path, false);
    assert_eq!(exit_code(&run(&c), c.strict), EXIT_OK);
    let c = config(&bad_path, true);
    assert_eq!(exit_code(&run(&c), c.strict), EXIT_BAD_CHECKSUM);
    let c = config("/nonexistent/dir/rom.gb", true);
    assert_eq!(exit_code(&run(&c), c.strict), EXIT_LOAD_ERROR);

    std::fs::remove_file(good).unwrap();
    std::fs::remove_file(bad).unwrap();
  }
}
