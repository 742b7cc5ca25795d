use log::{LevelFilter, Metadata, SetLoggerError};

struct SimpleLogger;

impl log::Log for SimpleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }
  fn log(&self, rec: &log::Record) {
    if !self.enabled(rec.metadata()) {
      return;
    }
    let log_str = format!(
      "[{}] {}:{} {}",
      rec.level(),
      rec.file().unwrap_or("unknown file"),
      rec.line().unwrap_or(0),
      rec.args()
    );
    // stdout carries the report
    eprintln!("{}", log_str)
  }
  fn flush(&self) {}
}

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
  log::set_boxed_logger(Box::new(SimpleLogger))?;
  update_level(level);
  Ok(())
}

pub fn update_level(level: LevelFilter) {
  log::set_max_level(level);
}

#[cfg(test)]
mod tests {
  use log::LevelFilter;

  #[test]
  fn init_once_test() {
    if super::init(LevelFilter::Debug).is_err() {
      // another test already installed a logger
      return;
    }
    assert_eq!(log::max_level(), LevelFilter::Debug);
    assert!(super::init(LevelFilter::Info).is_err());
    super::update_level(LevelFilter::Warn);
    assert_eq!(log::max_level(), LevelFilter::Warn);
  }
}
