// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

/// Writes log lines to stderr so that stdout only carries the report.
pub struct SimpleLogger {
    level: LevelFilter,
}

impl SimpleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Install as the global logger. Can only succeed once per process.
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(level)))?;
        log::set_max_level(level);
        Ok(())
    }

    fn format(&self, record: &Record) -> String {
        let target = if record.level() >= Level::Debug {
            record.target()
        } else {
            crate::NAME
        };
        format!(
            "{} {:<5} [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            target,
            record.args()
        )
    }
}

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", self.format(record));
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn level_filter() {
        let logger = SimpleLogger::new(LevelFilter::Info);
        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn line_format() {
        let logger = SimpleLogger::new(LevelFilter::Trace);
        let line = logger.format(
            &Record::builder()
                .level(Level::Info)
                .target("perf_report::table")
                .args(format_args!("loaded {} rows", 3))
                .build(),
        );
        assert!(line.ends_with("INFO  [perf-report] loaded 3 rows"));

        let line = logger.format(
            &Record::builder()
                .level(Level::Debug)
                .target("perf_report::table")
                .args(format_args!("detail"))
                .build(),
        );
        assert!(line.ends_with("DEBUG [perf_report::table] detail"));
    }
}
