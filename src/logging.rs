use std::sync::{OnceLock, RwLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

pub fn get_logger() -> &'static StderrLogger {
    LOGGER.get_or_init(|| StderrLogger::new(Level::Warn))
}

/// Installs the logger, showing records at `level` and above.
pub fn init(level: Level) -> Result<(), log::SetLoggerError> {
    let logger = get_logger();
    logger.set_min_level(level);
    log::set_logger(logger)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

/// Maps the `-v` count onto a level, warnings being the default.
pub fn level_from_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    }
}

pub struct StderrLogger {
    min_level: RwLock<Level>,
}

impl StderrLogger {
    fn new(min_level: Level) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> Level {
        // a poisoned lock still holds a valid level
        *self.min_level.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_min_level(&self, level: Level) {
        *self.min_level.write().unwrap_or_else(|e| e.into_inner()) = level;
    }

    fn format(record: &Record) -> String {
        format!(
            "[{:<5} {}] {}",
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", Self::format(record));
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_from_verbosity(0), Level::Warn);
        assert_eq!(level_from_verbosity(2), Level::Debug);
        assert_eq!(level_from_verbosity(9), Level::Trace);
    }

    #[test]
    fn filters_below_min_level() {
        let logger = StderrLogger::new(Level::Info);
        let meta = |level| Metadata::builder().level(level).build();
        assert!(logger.enabled(&meta(Level::Warn)));
        assert!(logger.enabled(&meta(Level::Info)));
        assert!(!logger.enabled(&meta(Level::Debug)));

        logger.set_min_level(Level::Trace);
        assert!(logger.enabled(&meta(Level::Trace)));
    }

    #[test]
    fn second_init_is_an_error() {
        use crate::error::Error;

        let _ = init(Level::Warn);
        let err = Error::from(init(Level::Warn).unwrap_err());
        assert!(matches!(err, Error::Logger(_)));
        assert!(err.to_string().starts_with("Logger error; "));
    }

    #[test]
    fn record_format() {
        assert_eq!(
            StderrLogger::format(
                &Record::builder()
                    .args(format_args!("carved {} cells", 4))
                    .level(Level::Debug)
                    .module_path(Some("mazecore::algorithms"))
                    .build()
            ),
            "[DEBUG mazecore::algorithms] carved 4 cells"
        );
    }
}
